use std::cmp::Ordering;
use std::fmt::Debug;
use crate::error::{ComparisonError, Result};

/// Anything the engines can sort: partially ordered, cloneable and printable for logs.
pub trait Element: PartialOrd + Clone + Debug {}

impl<T: PartialOrd + Clone + Debug> Element for T {}

/// Ordering direction shared by both engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Returns true if `first` may stay in front of `second`.
    ///
    /// Equal elements always precede each other, so the earlier one is kept in
    /// front. This is the only tie rule in the crate and both engines go through it.
    pub fn precedes<T: PartialOrd + Debug>(&self, first: &T, second: &T) -> Result<bool> {
        let ordering = first.partial_cmp(second).ok_or_else(|| ComparisonError::Incomparable {
            left: format!("{:?}", first),
            right: format!("{:?}", second),
        })?;
        Ok(match self {
            Direction::Ascending => ordering != Ordering::Greater,
            Direction::Descending => ordering != Ordering::Less,
        })
    }

    pub fn from_reverse(reverse: bool) -> Direction {
        if reverse {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// Rejects sequences containing an element that is not comparable with itself.
pub fn check_comparable<T: PartialOrd + Debug>(seq: &[T]) -> Result<()> {
    for (index, element) in seq.iter().enumerate() {
        if element.partial_cmp(element) != Some(Ordering::Equal) {
            return Err(ComparisonError::Unorderable { index, value: format!("{:?}", element) });
        }
    }
    Ok(())
}

/// Checks that every adjacent pair satisfies `direction`.
pub fn is_ordered<T: PartialOrd + Debug>(seq: &[T], direction: Direction) -> Result<bool> {
    for pair in seq.windows(2) {
        if !direction.precedes(&pair[0], &pair[1])? {
            return Ok(false);
        }
    }
    Ok(true)
}
