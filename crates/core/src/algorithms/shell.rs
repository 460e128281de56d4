use crate::frame::{Frame, FrameRecorder};

/// Shell sort over the halving gap sequence `n/2, n/4, .., 1`. Nothing is
/// marked sorted before the terminal frame.
pub fn run(input: &[i32]) -> Vec<Frame> {
    let mut rec = FrameRecorder::new(input, "Starting Shell Sort.");
    let n = rec.len();

    let mut gap = n / 2;
    while gap > 0 {
        rec.pass_boundary(&[], format!("Starting pass with gap {gap}."));

        for i in gap..n {
            let key = rec.value(i);
            rec.highlight(
                &[i],
                &[i - gap],
                format!("Selected {key} for gap insertion (gap {gap})."),
            );

            let mut j = i;
            while j >= gap {
                let compare_index = j - gap;
                let candidate = rec.value(compare_index);
                rec.compare(
                    [compare_index, j],
                    &[],
                    format!("Comparing {candidate} and {key} with gap {gap}."),
                );

                if candidate <= key {
                    break;
                }

                rec.shift(compare_index, j, &[j], |arr| {
                    format!("Shifted {} from index {compare_index} to {j}.", arr[j])
                });
                j = compare_index;
            }

            rec.place(j, key);
            rec.pass_boundary(&[j], format!("Placed {key} at index {j}."));
        }

        gap /= 2;
    }

    rec.finish()
}
