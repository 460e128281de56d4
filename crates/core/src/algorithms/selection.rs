use crate::frame::{Frame, FrameRecorder};

/// Selection sort. The running minimum carries the secondary role.
pub fn run(input: &[i32]) -> Vec<Frame> {
    let mut rec = FrameRecorder::new(input, "Starting Selection Sort initialized with random values.");
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        let start = rec.value(i);
        rec.highlight(
            &[i],
            &[min_idx],
            format!("Current minimum is at index {min_idx} (value: {start})"),
        );

        for j in i + 1..n {
            let (candidate, minimum) = (rec.value(j), rec.value(min_idx));
            rec.compare(
                [min_idx, j],
                &[min_idx],
                format!("Checking if {candidate} < {minimum}"),
            );

            if candidate < minimum {
                min_idx = j;
                rec.highlight(
                    &[i],
                    &[min_idx],
                    format!("Found new minimum: {candidate} at index {min_idx}"),
                );
            }
        }

        if min_idx != i {
            rec.swap(i, min_idx, &[min_idx], |arr| {
                format!("Swapped minimum {} with {} at index {i}", arr[i], arr[min_idx])
            });
        }

        rec.mark_sorted(i);
        let value = rec.value(i);
        rec.pass_boundary(&[], format!("{value} is now sorted at position {i}."));
    }

    rec.finish()
}
