use crate::frame::{Frame, FrameRecorder};

const SHRINK_FACTOR: f64 = 1.3;

/// Comb sort. Passes continue until the gap is 1 and a full pass swaps nothing.
pub fn run(input: &[i32]) -> Vec<Frame> {
    let mut rec = FrameRecorder::new(input, "Starting Comb Sort initialized with random values.");
    let n = rec.len();
    if n <= 1 {
        return rec.finish();
    }

    let mut gap = n;
    let mut swapped = true;

    while gap != 1 || swapped {
        gap = shrink(gap);
        swapped = false;
        rec.pass_boundary(&[], format!("Starting pass with gap {gap}."));

        for left in 0..n - gap {
            let right = left + gap;
            let (a, b) = (rec.value(left), rec.value(right));
            rec.compare(
                [left, right],
                &[right],
                format!("Comparing {a} and {b} with gap {gap}."),
            );

            if a > b {
                rec.swap(left, right, &[right], |arr| {
                    format!("Swapped {} and {}.", arr[right], arr[left])
                });
                swapped = true;
            }
        }
    }

    rec.finish()
}

fn shrink(gap: usize) -> usize {
    ((gap as f64 / SHRINK_FACTOR).floor() as usize).max(1)
}
