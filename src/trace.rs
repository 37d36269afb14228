//! Step tracing for the sorting engines.
//!
//! Engines are generic over [`Tracer`] and call its hooks at every atomic action.
//! All hooks default to no-ops, so [`Silent`] compiles down to the bare algorithm.
//! [`StepCounter`] only counts, [`Recorder`] also keeps a [`Trace`] of typed events.

/// Counters gathered while sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Cost metric: adjacent comparisons for exchange sort, element placements for merge sort.
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub passes: usize,
    pub merges: usize,
    pub base_cases: usize,
}

/// One atomic action of an engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind<T> {
    /// Adjacent pair at `(index, index + 1)` was checked; `snapshot` is unchanged by the check.
    Compare { pass: usize, index: usize, left: T, right: T, snapshot: Vec<T> },
    /// Pair at `(index, index + 1)` was exchanged; `first` and `second` are the values before the exchange.
    Swap { pass: usize, index: usize, first: T, second: T, snapshot: Vec<T> },
    /// Pass finished without an exchange, sorting stops here.
    PassSorted { pass: usize },
    Split { depth: usize, left: Vec<T>, right: Vec<T> },
    BaseCase { depth: usize, sequence: Vec<T> },
    Merge { depth: usize, left: Vec<T>, right: Vec<T>, merged: Vec<T> },
}

impl<T> EventKind<T> {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Compare { .. } => "compare",
            EventKind::Swap { .. } => "swap",
            EventKind::PassSorted { .. } => "pass-sorted",
            EventKind::Split { .. } => "split",
            EventKind::BaseCase { .. } => "base-case",
            EventKind::Merge { .. } => "merge",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceEvent<T> {
    /// 1-based, gapless within a trace
    pub step: usize,
    pub kind: EventKind<T>,
}

/// Append-only event log of a single sort call.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<T> {
    events: Vec<TraceEvent<T>>,
}

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Trace { events: Vec::new() }
    }
}

impl<T> Trace<T> {
    fn push(&mut self, kind: EventKind<T>) {
        let step = self.events.len() + 1;
        self.events.push(TraceEvent { step, kind });
    }

    pub fn events(&self) -> &[TraceEvent<T>] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent<T>> {
        self.events.iter()
    }

    /// Number of events whose kind is called `name` (see [`EventKind::name`]).
    pub fn count(&self, name: &str) -> usize {
        self.events.iter().filter(|event| event.kind.name() == name).count()
    }

    pub fn last(&self) -> Option<&TraceEvent<T>> {
        self.events.last()
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a TraceEvent<T>;
    type IntoIter = std::slice::Iter<'a, TraceEvent<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Hooks invoked by the engines. `pass` numbers start at 1, `depth` at 0.
pub trait Tracer<T> {
    fn begin_pass(&mut self, _pass: usize) {}
    /// Called before checking `(index, index + 1)`; `snapshot` is the whole sequence.
    fn compare(&mut self, _pass: usize, _index: usize, _snapshot: &[T]) {}
    /// Called after the exchange; `snapshot` is the whole sequence.
    fn swap(&mut self, _pass: usize, _index: usize, _snapshot: &[T]) {}
    fn pass_sorted(&mut self, _pass: usize) {}
    fn split(&mut self, _depth: usize, _left: &[T], _right: &[T]) {}
    fn base_case(&mut self, _depth: usize, _sequence: &[T]) {}
    fn merge(&mut self, _depth: usize, _left: &[T], _right: &[T], _merged: &[T]) {}
}

/// No instrumentation at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl<T> Tracer<T> for Silent {}

#[derive(Debug, Clone, Copy, Default)]
pub struct StepCounter {
    stats: SortStats,
}

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }
}

impl<T> Tracer<T> for StepCounter {
    fn begin_pass(&mut self, _pass: usize) {
        self.stats.passes += 1;
    }

    fn compare(&mut self, _pass: usize, _index: usize, _snapshot: &[T]) {
        self.stats.comparisons += 1;
        self.stats.steps += 1;
    }

    fn swap(&mut self, _pass: usize, _index: usize, _snapshot: &[T]) {
        self.stats.swaps += 1;
    }

    fn base_case(&mut self, _depth: usize, _sequence: &[T]) {
        self.stats.base_cases += 1;
    }

    fn merge(&mut self, _depth: usize, left: &[T], right: &[T], _merged: &[T]) {
        self.stats.merges += 1;
        self.stats.steps += left.len() + right.len();
    }
}

/// Counts like [`StepCounter`] and records every action as a [`TraceEvent`].
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    counter: StepCounter,
    trace: Trace<T>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Recorder { counter: StepCounter::new(), trace: Trace::default() }
    }
}

impl<T: Clone> Recorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> (SortStats, Trace<T>) {
        (self.counter.stats(), self.trace)
    }
}

impl<T: Clone> Tracer<T> for Recorder<T> {
    fn begin_pass(&mut self, pass: usize) {
        Tracer::<T>::begin_pass(&mut self.counter, pass);
    }

    fn compare(&mut self, pass: usize, index: usize, snapshot: &[T]) {
        self.counter.compare(pass, index, snapshot);
        self.trace.push(EventKind::Compare {
            pass,
            index,
            left: snapshot[index].clone(),
            right: snapshot[index + 1].clone(),
            snapshot: snapshot.to_vec(),
        });
    }

    fn swap(&mut self, pass: usize, index: usize, snapshot: &[T]) {
        self.counter.swap(pass, index, snapshot);
        self.trace.push(EventKind::Swap {
            pass,
            index,
            first: snapshot[index + 1].clone(),
            second: snapshot[index].clone(),
            snapshot: snapshot.to_vec(),
        });
    }

    fn pass_sorted(&mut self, pass: usize) {
        Tracer::<T>::pass_sorted(&mut self.counter, pass);
        self.trace.push(EventKind::PassSorted { pass });
    }

    fn split(&mut self, depth: usize, left: &[T], right: &[T]) {
        self.counter.split(depth, left, right);
        self.trace.push(EventKind::Split { depth, left: left.to_vec(), right: right.to_vec() });
    }

    fn base_case(&mut self, depth: usize, sequence: &[T]) {
        self.counter.base_case(depth, sequence);
        self.trace.push(EventKind::BaseCase { depth, sequence: sequence.to_vec() });
    }

    fn merge(&mut self, depth: usize, left: &[T], right: &[T], merged: &[T]) {
        self.counter.merge(depth, left, right, merged);
        self.trace.push(EventKind::Merge {
            depth,
            left: left.to_vec(),
            right: right.to_vec(),
            merged: merged.to_vec(),
        });
    }
}
