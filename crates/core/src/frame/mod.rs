//! Animation frames and the recorder that the algorithm engines drive.
//!
//! A [`Frame`] is a complete, self-contained snapshot: the whole array plus the
//! highlight roles and running counters at one algorithmic event. Frames are
//! never diffs, so any frame can be rendered on its own without replaying the
//! ones before it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Cumulative counters carried by every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub comparisons: u64,
    /// Element-moving operations. Insertion and shell sort count each shift.
    pub swaps: u64,
}

/// Immutable snapshot of the array at one step of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub array: Vec<i32>,
    /// Indices under comparison or being moved. `None` on boundary frames.
    pub active_indices: Option<Vec<usize>>,
    /// Secondary role: minimum candidate, heap largest candidate, shifted value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_indices: Vec<usize>,
    /// Ascending indices whose value is final.
    pub sorted_indices: Vec<usize>,
    pub stats: Stats,
    pub completed: bool,
    pub description: String,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_indices
            .as_ref()
            .map(|active| active.contains(&index))
            .unwrap_or(false)
    }

    pub fn is_secondary(&self, index: usize) -> bool {
        self.secondary_indices.contains(&index)
    }

    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted_indices.binary_search(&index).is_ok()
    }

    /// Every index mentioned by any highlight role of the frame.
    pub fn referenced_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.active_indices
            .iter()
            .flatten()
            .chain(&self.secondary_indices)
            .chain(&self.sorted_indices)
            .copied()
    }
}

/// Shared frame builder used by every engine.
///
/// The recorder takes a private copy of the input, owns the working array and
/// the counters, and clones the array into each emitted frame. The initial frame
/// is pushed on construction; [`FrameRecorder::finish`] pushes the terminal one.
#[derive(Debug)]
pub struct FrameRecorder {
    array: Vec<i32>,
    stats: Stats,
    sorted: BTreeSet<usize>,
    frames: Vec<Frame>,
}

impl FrameRecorder {
    pub fn new(input: &[i32], description: impl Into<String>) -> Self {
        let mut recorder = Self {
            array: input.to_vec(),
            stats: Stats::default(),
            sorted: BTreeSet::new(),
            frames: Vec::new(),
        };
        recorder.push(None, &[], description.into());
        recorder
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn value(&self, index: usize) -> i32 {
        self.array[index]
    }

    pub fn values(&self) -> &[i32] {
        &self.array
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Records one comparison between the two `active` indices.
    pub fn compare(&mut self, active: [usize; 2], secondary: &[usize], description: impl Into<String>) {
        self.stats.comparisons += 1;
        self.push(Some(active.to_vec()), secondary, description.into());
    }

    /// Swaps two elements and records the post-swap state.
    pub fn swap<F>(&mut self, a: usize, b: usize, secondary: &[usize], describe: F)
    where
        F: FnOnce(&[i32]) -> String,
    {
        self.array.swap(a, b);
        self.stats.swaps += 1;
        let description = describe(&self.array);
        self.push(Some(vec![a, b]), secondary, description);
    }

    /// Copies `array[from]` over `array[to]`, counted as a swap.
    pub fn shift<F>(&mut self, from: usize, to: usize, secondary: &[usize], describe: F)
    where
        F: FnOnce(&[i32]) -> String,
    {
        self.array[to] = self.array[from];
        self.stats.swaps += 1;
        let description = describe(&self.array);
        self.push(Some(vec![from, to]), secondary, description);
    }

    /// Writes a held value back into the array without counting or emitting.
    pub fn place(&mut self, index: usize, value: i32) {
        self.array[index] = value;
    }

    /// Emits a narration frame that leaves the counters untouched.
    pub fn highlight(&mut self, active: &[usize], secondary: &[usize], description: impl Into<String>) {
        self.push(Some(active.to_vec()), secondary, description.into());
    }

    /// Emits a phase boundary frame with no active comparison.
    pub fn pass_boundary(&mut self, secondary: &[usize], description: impl Into<String>) {
        self.push(None, secondary, description.into());
    }

    pub fn mark_sorted(&mut self, index: usize) {
        debug_assert!(index < self.array.len());
        self.sorted.insert(index);
    }

    pub fn mark_sorted_range(&mut self, range: std::ops::Range<usize>) {
        debug_assert!(range.end <= self.array.len());
        self.sorted.extend(range);
    }

    /// Pushes the terminal frame and hands back the materialised sequence.
    pub fn finish(mut self) -> Vec<Frame> {
        self.sorted.extend(0..self.array.len());
        let frame = Frame {
            array: self.array.clone(),
            active_indices: None,
            secondary_indices: Vec::new(),
            sorted_indices: self.sorted.iter().copied().collect(),
            stats: self.stats,
            completed: true,
            description: "Sorting completed!".to_string(),
        };
        self.frames.push(frame);
        self.frames
    }

    fn push(&mut self, active: Option<Vec<usize>>, secondary: &[usize], description: String) {
        debug_assert!(active
            .iter()
            .flatten()
            .chain(secondary)
            .all(|&index| index < self.array.len()));

        self.frames.push(Frame {
            array: self.array.clone(),
            active_indices: active,
            secondary_indices: secondary.to_vec(),
            sorted_indices: self.sorted.iter().copied().collect(),
            stats: self.stats,
            completed: false,
            description,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_frame_is_pushed_on_construction() {
        let recorder = FrameRecorder::new(&[3, 1, 2], "start");
        let frames = recorder.finish();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].array, vec![3, 1, 2]);
        assert_eq!(frames[0].active_indices, None);
        assert!(frames[0].sorted_indices.is_empty());
        assert_eq!(frames[0].stats, Stats::default());
        assert!(!frames[0].completed);
    }

    #[test]
    fn emitted_frames_are_independent_copies() {
        let mut recorder = FrameRecorder::new(&[2, 1], "start");
        recorder.compare([0, 1], &[], "compare");
        recorder.swap(0, 1, &[], |arr| format!("Swapped {} and {}", arr[0], arr[1]));
        let frames = recorder.finish();

        assert_eq!(frames[1].array, vec![2, 1]);
        assert_eq!(frames[2].array, vec![1, 2]);
        assert_eq!(frames[2].description, "Swapped 1 and 2");
        assert_eq!(frames[2].stats, Stats { comparisons: 1, swaps: 1 });
    }

    #[test]
    fn shift_counts_as_swap_and_place_does_not() {
        let mut recorder = FrameRecorder::new(&[5, 4], "start");
        let key = recorder.value(1);
        recorder.shift(0, 1, &[1], |_| "shift".to_string());
        recorder.place(0, key);
        recorder.pass_boundary(&[0], "placed");
        let frames = recorder.finish();

        assert_eq!(frames[1].array, vec![5, 5]);
        assert_eq!(frames[1].active_indices, Some(vec![0, 1]));
        assert_eq!(frames[2].array, vec![4, 5]);
        assert_eq!(frames[2].stats.swaps, 1);
    }

    #[test]
    fn sorted_indices_stay_ascending() {
        let mut recorder = FrameRecorder::new(&[1, 2, 3, 4], "start");
        recorder.mark_sorted(3);
        recorder.mark_sorted_range(0..2);
        recorder.pass_boundary(&[], "pass");
        let frames = recorder.finish();

        assert_eq!(frames[1].sorted_indices, vec![0, 1, 3]);
        assert!(frames[1].is_sorted(3));
        assert!(!frames[1].is_sorted(2));
        assert_eq!(frames[2].sorted_indices, vec![0, 1, 2, 3]);
        assert!(frames[2].completed);
    }

    #[test]
    fn serialises_with_camel_case_fields() {
        let frames = FrameRecorder::new(&[1], "start").finish();
        let json = serde_json::to_value(&frames[0]).unwrap();

        assert!(json.get("activeIndices").is_some());
        assert!(json.get("sortedIndices").is_some());
        assert!(json.get("secondaryIndices").is_none());
    }
}
