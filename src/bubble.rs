use log::{debug, trace};
use crate::error::Result;
use crate::order::{Direction, Element};
use crate::trace::Tracer;

/// Exchange sort over a copy of `seq`.
///
/// Pass `i` scans `[0, n - i - 1)` and swaps every pair that violates `direction`.
/// Equal neighbours are never swapped, which keeps the sort stable. The first pass
/// without a swap ends the sort, so ordered input costs `n - 1` comparisons.
pub fn bubble_sort<T, R>(seq: &[T], direction: Direction, tracer: &mut R) -> Result<Vec<T>>
where
    T: Element,
    R: Tracer<T>,
{
    let mut sorted = seq.to_vec();
    let n = sorted.len();
    if n <= 1 {
        return Ok(sorted);
    }
    debug!("Input: {:?}", sorted);

    for i in 0..n {
        let pass = i + 1;
        tracer.begin_pass(pass);
        let mut dirty = false;

        for j in 0..n - i - 1 {
            tracer.compare(pass, j, &sorted);
            if !direction.precedes(&sorted[j], &sorted[j + 1])? {
                sorted.swap(j, j + 1);
                dirty = true;
                tracer.swap(pass, j, &sorted);
            }
        }
        trace!("After pass {pass}: {:?}", sorted);

        if !dirty {
            debug!("Pass {pass} without exchanges, stopping");
            tracer.pass_sorted(pass);
            break;
        }
    }

    debug!("Output: {:?}", sorted);
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{EventKind, Recorder, Silent, StepCounter};

    #[test]
    fn test_small() {
        let sorted = bubble_sort(&[5, 2, 8, 1, 9], Direction::Ascending, &mut Silent).unwrap();
        assert_eq!(sorted, vec![1, 2, 5, 8, 9]);
        let sorted = bubble_sort(&[5, 2, 8, 1, 9], Direction::Descending, &mut Silent).unwrap();
        assert_eq!(sorted, vec![9, 8, 5, 2, 1]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut recorder = Recorder::new();
        assert!(bubble_sort::<i32, _>(&[], Direction::Ascending, &mut recorder).unwrap().is_empty());
        assert_eq!(bubble_sort(&[7], Direction::Descending, &mut recorder).unwrap(), vec![7]);
        let (stats, trace) = recorder.finish();
        assert_eq!(stats.steps, 0);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_sorted_input_single_pass() {
        let mut recorder = Recorder::new();
        let sorted = bubble_sort(&[1, 2, 3, 4, 5], Direction::Ascending, &mut recorder).unwrap();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        let (stats, trace) = recorder.finish();
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.comparisons, 4);
        assert_eq!(stats.swaps, 0);
        assert_eq!(trace.count("compare"), 4);
        assert_eq!(trace.last().map(|e| &e.kind), Some(&EventKind::PassSorted { pass: 1 }));
    }

    #[test]
    fn test_reverse_sorted_for_direction_is_single_pass() {
        let mut counter = StepCounter::new();
        bubble_sort(&[5, 4, 3, 2, 1], Direction::Descending, &mut counter).unwrap();
        assert_eq!(counter.stats().passes, 1);
        assert_eq!(counter.stats().swaps, 0);
    }

    #[test]
    fn test_worst_case_counts() {
        // reversed input of length n: every comparison swaps, n - 1 dirty passes plus the empty last one
        let mut counter = StepCounter::new();
        bubble_sort(&[5, 4, 3, 2, 1], Direction::Ascending, &mut counter).unwrap();
        let stats = counter.stats();
        assert_eq!(stats.comparisons, 10);
        assert_eq!(stats.swaps, 10);
        assert_eq!(stats.passes, 5);
    }

    #[test]
    fn test_swap_event() {
        let mut recorder = Recorder::new();
        bubble_sort(&[2, 1], Direction::Ascending, &mut recorder).unwrap();
        let (_, trace) = recorder.finish();
        let kinds: Vec<&str> = trace.iter().map(|e| e.kind.name()).collect();
        assert_eq!(kinds, vec!["compare", "swap", "pass-sorted"]);
        assert_eq!(
            trace.events()[0].kind,
            EventKind::Compare { pass: 1, index: 0, left: 2, right: 1, snapshot: vec![2, 1] }
        );
        assert_eq!(
            trace.events()[1].kind,
            EventKind::Swap { pass: 1, index: 0, first: 2, second: 1, snapshot: vec![1, 2] }
        );
        assert_eq!(trace.events()[2].kind, EventKind::PassSorted { pass: 2 });
    }

    #[test]
    fn test_does_not_touch_input() {
        let input = vec![3, 1, 2];
        let sorted = bubble_sort(&input, Direction::Ascending, &mut Silent).unwrap();
        assert_eq!(input, vec![3, 1, 2]);
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn test_incomparable_fails() {
        let result = bubble_sort(&[1.0, f64::NAN, 0.5], Direction::Ascending, &mut Silent);
        assert!(result.is_err());
    }
}
