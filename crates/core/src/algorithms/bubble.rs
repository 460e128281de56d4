use crate::frame::{Frame, FrameRecorder};

/// Bubble sort with the early exit on a pass that performs no swap.
pub fn run(input: &[i32]) -> Vec<Frame> {
    let mut rec = FrameRecorder::new(input, "Starting Bubble Sort initialized with random values.");
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..n - i - 1 {
            let (left, right) = (rec.value(j), rec.value(j + 1));
            rec.compare([j, j + 1], &[], format!("Comparing {left} and {right}"));

            if left > right {
                rec.swap(j, j + 1, &[], |arr| {
                    format!("Swapped {} and {}", arr[j], arr[j + 1])
                });
                swapped = true;
            }
        }

        let settled = n - i - 1;
        rec.mark_sorted(settled);
        let value = rec.value(settled);
        rec.pass_boundary(&[], format!("{value} is now sorted."));

        if !swapped {
            rec.mark_sorted_range(0..settled);
            break;
        }
    }

    rec.finish()
}
