use proptest::prelude::*;
use sort_visualiser_core::{generate, Algorithm, Frame};

fn check_sequence(input: &[i32], frames: &[Frame]) {
    assert!(frames.len() >= 2);

    let first = &frames[0];
    assert_eq!(first.array, input);
    assert_eq!(first.active_indices, None);
    assert!(first.sorted_indices.is_empty());
    assert_eq!(first.stats.comparisons, 0);
    assert_eq!(first.stats.swaps, 0);

    let (last, rest) = frames.split_last().unwrap();
    assert!(last.completed);
    assert!(rest.iter().all(|frame| !frame.completed));
    assert_eq!(last.sorted_indices, (0..input.len()).collect::<Vec<_>>());
    assert!(last.array.windows(2).all(|pair| pair[0] <= pair[1]));

    let mut expected = input.to_vec();
    expected.sort_unstable();
    assert_eq!(last.array, expected);

    for frame in frames {
        assert_eq!(frame.len(), input.len());
        assert!(frame.referenced_indices().all(|index| index < input.len()));
        assert!(frame
            .active_indices
            .as_ref()
            .map(|active| active.len() <= 2)
            .unwrap_or(true));
    }

    for pair in frames.windows(2) {
        assert!(pair[1].stats.comparisons >= pair[0].stats.comparisons);
        assert!(pair[1].stats.swaps >= pair[0].stats.swaps);
    }
}

#[test]
fn every_algorithm_sorts_generated_arrays() {
    for size in [2, 3, 10, 20, 57, 100] {
        let input = generate(size);
        for algorithm in Algorithm::ALL {
            check_sequence(&input, &algorithm.run(&input));
        }
    }
}

#[test]
fn bubble_sort_trace_for_small_example() {
    let frames = Algorithm::BubbleSort.run(&[5, 3, 8, 1]);
    let last = frames.last().unwrap();

    assert_eq!(last.array, vec![1, 3, 5, 8]);
    assert_eq!(last.stats.comparisons, 6);
    // compare 5/3 swap, 8/1 swap, 5/1 swap, 3/1 swap
    assert_eq!(last.stats.swaps, 4);
}

#[test]
fn selection_sort_two_elements() {
    let frames = Algorithm::SelectionSort.run(&[2, 1]);
    let last = frames.last().unwrap();

    assert_eq!(last.array, vec![1, 2]);
    assert_eq!(last.stats.comparisons, 1);
    assert_eq!(last.stats.swaps, 1);
}

#[test]
fn single_element_yields_initial_and_terminal_only() {
    for algorithm in Algorithm::ALL {
        let frames = algorithm.run(&[1]);

        assert_eq!(frames.len(), 2, "{algorithm}");
        assert!(!frames[0].completed);
        assert!(frames[1].completed);
        assert_eq!(frames[1].stats.comparisons, 0);
        assert_eq!(frames[1].stats.swaps, 0);
        assert_eq!(frames[1].sorted_indices, vec![0]);
    }
}

#[test]
fn empty_input_is_trivially_complete() {
    for algorithm in Algorithm::ALL {
        let frames = algorithm.run(&[]);

        assert_eq!(frames.len(), 2, "{algorithm}");
        assert!(frames[1].completed);
        assert!(frames[1].sorted_indices.is_empty());
    }
}

#[test]
fn comparison_frames_carry_the_compared_pair() {
    let input = generate(25);
    for algorithm in Algorithm::ALL {
        let frames = algorithm.run(&input);
        for pair in frames.windows(2) {
            if pair[1].stats.comparisons > pair[0].stats.comparisons {
                assert_eq!(pair[1].stats.comparisons, pair[0].stats.comparisons + 1);
                assert_eq!(pair[1].active_indices.as_ref().map(Vec::len), Some(2));
            }
            if pair[1].stats.swaps > pair[0].stats.swaps {
                assert_eq!(pair[1].stats.swaps, pair[0].stats.swaps + 1);
            }
        }
    }
}

#[test]
fn sorted_indices_never_shrink() {
    let input = generate(30);
    for algorithm in Algorithm::ALL {
        let frames = algorithm.run(&input);
        for pair in frames.windows(2) {
            assert!(
                pair[0]
                    .sorted_indices
                    .iter()
                    .all(|index| pair[1].is_sorted(*index)),
                "{algorithm} dropped a sorted index"
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_sequences_hold_invariants(input in prop::collection::vec(10i32..=100, 0..40)) {
        for algorithm in Algorithm::ALL {
            check_sequence(&input, &algorithm.run(&input));
        }
    }

    #[test]
    fn prop_engines_are_deterministic(input in prop::collection::vec(any::<i32>(), 0..30)) {
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.run(&input), algorithm.run(&input));
        }
    }
}
