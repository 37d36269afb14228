use log::{debug, trace};
use crate::error::Result;
use crate::order::{Direction, Element};
use crate::trace::Tracer;

/// Merges two runs that are already ordered for `direction`.
///
/// On ties the head of `left` wins, so elements of `left` stay in front of equal
/// elements of `right` in both directions. Once a run is exhausted the rest of the
/// other run is appended without further comparisons.
pub fn merge<T: Element>(left: &[T], right: &[T], direction: Direction) -> Result<Vec<T>> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if direction.precedes(&left[i], &right[j])? {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    Ok(result)
}

/// Top-down merge sort over a copy of `seq`.
///
/// Splits at `n / 2` so the left half is never the larger one. Recursion depth is
/// `ceil(log2 n)`.
pub fn merge_sort<T, R>(seq: &[T], direction: Direction, tracer: &mut R) -> Result<Vec<T>>
where
    T: Element,
    R: Tracer<T>,
{
    debug!("Input: {:?}", seq);
    let sorted = merge_sort_rec(seq, direction, tracer, 0)?;
    debug!("Output: {:?}", sorted);
    Ok(sorted)
}

fn merge_sort_rec<T, R>(seq: &[T], direction: Direction, tracer: &mut R, depth: usize) -> Result<Vec<T>>
where
    T: Element,
    R: Tracer<T>,
{
    if seq.len() <= 1 {
        trace!("Base case at depth {depth}: {:?}", seq);
        tracer.base_case(depth, seq);
        return Ok(seq.to_vec());
    }

    let (left, right) = seq.split_at(seq.len() / 2);
    tracer.split(depth, left, right);

    let left = merge_sort_rec(left, direction, tracer, depth + 1)?;
    let right = merge_sort_rec(right, direction, tracer, depth + 1)?;
    let merged = merge(&left, &right, direction)?;

    trace!("Merged at depth {depth}: {:?} + {:?} -> {:?}", left, right, merged);
    tracer.merge(depth, &left, &right, &merged);
    Ok(merged)
}
