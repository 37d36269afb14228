use crate::config::{Algorithm, SortOptions};
use crate::order::Direction;
use crate::trace::{SortStats, Trace};

/// Result of a sort call: the new sequence plus whatever instrumentation was requested.
///
/// `stats` stays zeroed for silent calls and `trace` is only present for traced ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SortReport<T> {
    pub sorted: Vec<T>,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub stats: SortStats,
    pub trace: Option<Trace<T>>,
}

impl<T> SortReport<T> {
    pub(crate) fn new(sorted: Vec<T>, options: &SortOptions, stats: SortStats, trace: Option<Trace<T>>) -> Self {
        SortReport {
            sorted,
            algorithm: options.algorithm,
            direction: options.direction,
            stats,
            trace,
        }
    }

    pub fn steps(&self) -> usize {
        self.stats.steps
    }

    pub fn trace(&self) -> Option<&Trace<T>> {
        self.trace.as_ref()
    }

    pub fn into_sorted(self) -> Vec<T> {
        self.sorted
    }
}
