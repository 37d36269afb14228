#[cfg(test)]
mod trace_laws {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use stepsort::generate::random_sequence;
    use stepsort::{sort_with, Algorithm, Direction, EventKind, SortOptions, TraceMode};

    fn traced(algorithm: Algorithm, direction: Direction) -> SortOptions {
        SortOptions::new(algorithm).with_direction(direction).traced()
    }

    #[rstest]
    fn steps_are_gapless(
        #[values(Algorithm::Exchange, Algorithm::Merge)] algorithm: Algorithm,
        #[values(0, 1, 2, 9, 50)] n: usize,
    ) {
        let input: Vec<i32> = random_sequence(&mut StdRng::seed_from_u64(99), n, 0..=10);
        let report = sort_with(&input, &traced(algorithm, Direction::Ascending)).unwrap();
        let trace = report.trace().unwrap();
        for (i, event) in trace.iter().enumerate() {
            assert_eq!(event.step, i + 1);
        }
    }

    #[rstest]
    #[case(Direction::Ascending, vec![1, 2, 3, 4, 5])]
    #[case(Direction::Descending, vec![5, 4, 3, 2, 1])]
    fn exchange_ordered_input_single_pass(#[case] direction: Direction, #[case] input: Vec<i32>) {
        let report = sort_with(&input, &traced(Algorithm::Exchange, direction)).unwrap();
        let trace = report.trace().unwrap();
        assert_eq!(report.sorted, input);
        assert_eq!(report.steps(), input.len() - 1);
        assert_eq!(report.stats.passes, 1);
        assert_eq!(trace.count("swap"), 0);
        assert_eq!(trace.count("compare"), 4);
        assert_eq!(trace.last().map(|e| &e.kind), Some(&EventKind::PassSorted { pass: 1 }));
    }

    #[test]
    fn exchange_counted_mode_matches() {
        let input: Vec<i32> = (1..=20).collect();
        let options = SortOptions::new(Algorithm::Exchange).with_mode(TraceMode::Counted);
        let report = sort_with(&input, &options).unwrap();
        assert_eq!(report.steps(), 19);
        assert_eq!(report.stats.swaps, 0);
        assert!(report.trace.is_none());
    }

    #[rstest]
    fn exchange_ends_with_one_marker(#[values(2, 3, 17, 60)] n: usize) {
        let input: Vec<i32> = random_sequence(&mut StdRng::seed_from_u64(n as u64), n, -100..=100);
        let report = sort_with(&input, &traced(Algorithm::Exchange, Direction::Descending)).unwrap();
        let trace = report.trace().unwrap();
        assert_eq!(trace.count("pass-sorted"), 1);
        assert!(matches!(trace.last().map(|e| &e.kind), Some(EventKind::PassSorted { .. })));
        assert_eq!(trace.count("compare"), report.steps());
        assert_eq!(trace.count("swap"), report.stats.swaps);
    }

    #[test]
    fn exchange_snapshots_replay() {
        let input = vec![4, 1, 3, 9, 2];
        let report = sort_with(&input, &traced(Algorithm::Exchange, Direction::Ascending)).unwrap();
        let mut replay = input.clone();
        for event in report.trace().unwrap() {
            match &event.kind {
                EventKind::Compare { index, left, right, snapshot, .. } => {
                    assert_eq!(&replay, snapshot);
                    assert_eq!((&replay[*index], &replay[*index + 1]), (left, right));
                }
                EventKind::Swap { index, first, second, snapshot, .. } => {
                    assert_eq!((&replay[*index], &replay[*index + 1]), (first, second));
                    replay.swap(*index, *index + 1);
                    assert_eq!(&replay, snapshot);
                }
                _ => {}
            }
        }
        assert_eq!(replay, report.sorted);
    }

    #[rstest]
    fn tracing_does_not_change_result(
        #[values(Algorithm::Exchange, Algorithm::Merge)] algorithm: Algorithm,
        #[values(Direction::Ascending, Direction::Descending)] direction: Direction,
    ) {
        let input: Vec<i32> = random_sequence(&mut StdRng::seed_from_u64(5), 80, 0..=15);
        let silent = sort_with(&input, &SortOptions::new(algorithm).with_direction(direction)).unwrap();
        let counted = sort_with(&input, &SortOptions::new(algorithm).with_direction(direction).with_mode(TraceMode::Counted)).unwrap();
        let traced = sort_with(&input, &traced(algorithm, direction)).unwrap();
        assert_eq!(silent.sorted, traced.sorted);
        assert_eq!(counted.sorted, traced.sorted);
        assert_eq!(counted.stats, traced.stats);
        assert!(silent.trace.is_none());
    }

    #[test]
    fn traces_are_per_call() {
        let options = traced(Algorithm::Merge, Direction::Ascending);
        let first = sort_with(&[3, 1, 2], &options).unwrap();
        let second = sort_with(&[3, 1, 2], &options).unwrap();
        assert_eq!(first.trace, second.trace);
        assert_eq!(first.trace().unwrap().events()[0].step, 1);
        assert_eq!(second.trace().unwrap().events()[0].step, 1);
    }
}
