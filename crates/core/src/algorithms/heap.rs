use crate::frame::{Frame, FrameRecorder};

/// Heap sort: build a max-heap in place, then repeatedly move the root behind
/// the shrinking heap.
pub fn run(input: &[i32]) -> Vec<Frame> {
    let mut rec = FrameRecorder::new(input, "Starting Heap Sort initialized with random values.");
    let n = rec.len();
    if n <= 1 {
        return rec.finish();
    }

    rec.pass_boundary(&[], "Building max heap.");
    for start in (0..n / 2).rev() {
        rec.highlight(&[start], &[], format!("Heapifying subtree rooted at index {start}."));
        heapify(&mut rec, n, start);
    }
    rec.pass_boundary(&[], "Max heap ready. Extracting largest elements.");

    for end in (1..n).rev() {
        rec.mark_sorted(end);
        rec.swap(0, end, &[end], |arr| {
            format!("Moved max value {} to index {end}.", arr[end])
        });
        heapify(&mut rec, end, 0);
    }

    rec.finish()
}

/// Sinks `root` until neither child of the first `heap_size` elements is larger.
fn heapify(rec: &mut FrameRecorder, heap_size: usize, root: usize) {
    let mut root = root;

    loop {
        let left = root * 2 + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_size {
            let (parent, child) = (rec.value(root), rec.value(left));
            rec.compare(
                [root, left],
                &[largest],
                format!("Comparing parent {parent} and left child {child}."),
            );

            if child > parent {
                largest = left;
                rec.highlight(
                    &[root, left],
                    &[largest],
                    format!("Left child {child} is the new largest."),
                );
            }
        }

        if right < heap_size {
            let (current, child) = (rec.value(largest), rec.value(right));
            rec.compare(
                [largest, right],
                &[largest],
                format!("Comparing current largest {current} and right child {child}."),
            );

            if child > current {
                largest = right;
                rec.highlight(
                    &[root, right],
                    &[largest],
                    format!("Right child {child} is the new largest."),
                );
            }
        }

        if largest == root {
            break;
        }

        rec.swap(root, largest, &[largest], |arr| {
            format!(
                "Swapped {} and {} to restore heap property.",
                arr[largest], arr[root]
            )
        });
        root = largest;
    }
}
