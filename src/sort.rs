use log::{debug, info};
use crate::bubble::bubble_sort;
use crate::config::{Algorithm, SortOptions, TraceMode};
use crate::error::Result;
use crate::merge::merge_sort;
use crate::order::{check_comparable, Direction, Element};
use crate::report::SortReport;
use crate::trace::{Recorder, Silent, SortStats, StepCounter, Tracer};

/// Returns a sorted copy of `seq` (merge sort, no instrumentation).
pub fn sort<T: Element>(seq: &[T], direction: Direction) -> Result<Vec<T>> {
    sort_merge(seq, direction)
}

pub fn sort_merge<T: Element>(seq: &[T], direction: Direction) -> Result<Vec<T>> {
    check_comparable(seq)?;
    merge_sort(seq, direction, &mut Silent)
}

pub fn sort_bubble<T: Element>(seq: &[T], direction: Direction) -> Result<Vec<T>> {
    check_comparable(seq)?;
    bubble_sort(seq, direction, &mut Silent)
}

/// Merge sort with the full trace log and step count attached.
pub fn sort_with_trace<T: Element>(seq: &[T], direction: Direction) -> Result<SortReport<T>> {
    sort_with(seq, &SortOptions::new(Algorithm::Merge).with_direction(direction).traced())
}

pub fn sort_with<T: Element>(seq: &[T], options: &SortOptions) -> Result<SortReport<T>> {
    debug!("Sorting {} elements: {:?}", seq.len(), options);
    check_comparable(seq)?;

    let report = match options.mode {
        TraceMode::Silent => {
            let sorted = run(seq, options, &mut Silent)?;
            SortReport::new(sorted, options, SortStats::default(), None)
        }
        TraceMode::Counted => {
            let mut counter = StepCounter::new();
            let sorted = run(seq, options, &mut counter)?;
            SortReport::new(sorted, options, counter.stats(), None)
        }
        TraceMode::Traced => {
            let mut recorder = Recorder::new();
            let sorted = run(seq, options, &mut recorder)?;
            let (stats, trace) = recorder.finish();
            info!("{}: {} steps, {} events", options.algorithm.name(), stats.steps, trace.len());
            SortReport::new(sorted, options, stats, Some(trace))
        }
    };
    Ok(report)
}

fn run<T: Element, R: Tracer<T>>(seq: &[T], options: &SortOptions, tracer: &mut R) -> Result<Vec<T>> {
    match options.algorithm {
        Algorithm::Exchange => bubble_sort(seq, options.direction, tracer),
        Algorithm::Merge => merge_sort(seq, options.direction, tracer),
    }
}
