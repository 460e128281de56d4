use crate::frame::{Frame, FrameRecorder};

/// Insertion sort. Each rightward shift counts as a swap; writing the held key
/// into its hole does not.
pub fn run(input: &[i32]) -> Vec<Frame> {
    let mut rec = FrameRecorder::new(input, "Starting Insertion Sort.");
    let n = rec.len();
    if n <= 1 {
        return rec.finish();
    }

    rec.mark_sorted(0);
    rec.pass_boundary(&[], "The first element is considered sorted.");

    for i in 1..n {
        let key = rec.value(i);
        rec.highlight(&[i], &[], format!("Selected {key} to insert."));

        let mut hole = i;
        while hole > 0 {
            let j = hole - 1;
            let candidate = rec.value(j);
            rec.compare([j, hole], &[], format!("Comparing {candidate} with key ({key})."));

            if candidate <= key {
                break;
            }

            rec.shift(j, hole, &[hole], |arr| {
                format!("Shifted {} to the right.", arr[hole])
            });
            hole = j;
        }

        rec.place(hole, key);
        rec.mark_sorted(i);
        rec.pass_boundary(&[hole], format!("Inserted {key} at position {hole}."));
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_shifts_as_swaps() {
        let frames = run(&[3, 2, 1]);
        let last = frames.last().unwrap();

        assert_eq!(last.array, vec![1, 2, 3]);
        // i=1: one comparison, one shift. i=2: two comparisons, two shifts.
        assert_eq!(last.stats.comparisons, 3);
        assert_eq!(last.stats.swaps, 3);
    }

    #[test]
    fn sorted_prefix_grows_after_each_insertion() {
        let frames = run(&[4, 3, 2, 1]);
        let insertions: Vec<_> = frames
            .iter()
            .filter(|frame| frame.description.starts_with("Inserted"))
            .collect();

        assert_eq!(insertions.len(), 3);
        assert_eq!(insertions[0].sorted_indices, vec![0, 1]);
        assert_eq!(insertions[2].sorted_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn shift_frame_shows_duplicated_value() {
        let frames = run(&[2, 1]);
        let shift = frames
            .iter()
            .find(|frame| frame.description.starts_with("Shifted"))
            .unwrap();

        assert_eq!(shift.array, vec![2, 2]);
        assert_eq!(shift.secondary_indices, vec![1]);
    }
}
