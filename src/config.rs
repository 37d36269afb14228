use crate::order::Direction;

pub const DEFAULT_SEED: u64 = 12345;
pub const RANDOM_MIN: i64 = 1;
pub const RANDOM_MAX: i64 = 100;

pub const EXCHANGE_EXAMPLE: [f64; 7] = [64.0, 34.0, 25.0, 12.0, 22.0, 11.0, 90.0];
pub const MERGE_EXAMPLE: [f64; 8] = [64.0, 34.0, 25.0, 12.0, 22.0, 11.0, 90.0, 5.0];

const _: () = {
    assert!(RANDOM_MIN <= RANDOM_MAX, "RANDOM_MIN must not exceed RANDOM_MAX");
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Adjacent exchanges with early exit, O(n²)
    Exchange,
    /// Top-down merge sort, O(n log n)
    #[default]
    Merge,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Exchange => "exchange sort",
            Algorithm::Merge => "merge sort",
        }
    }

    /// Demo input used when the caller supplies none.
    pub fn example(&self) -> &'static [f64] {
        match self {
            Algorithm::Exchange => &EXCHANGE_EXAMPLE,
            Algorithm::Merge => &MERGE_EXAMPLE,
        }
    }
}

/// How much instrumentation a sort call carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraceMode {
    /// Result only
    #[default]
    Silent,
    /// Result and [`SortStats`](crate::SortStats)
    Counted,
    /// Result, stats and the full trace log
    Traced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOptions {
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub mode: TraceMode,
}

impl SortOptions {
    pub fn new(algorithm: Algorithm) -> Self {
        SortOptions { algorithm, ..Default::default() }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_mode(mut self, mode: TraceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn traced(self) -> Self {
        self.with_mode(TraceMode::Traced)
    }
}
