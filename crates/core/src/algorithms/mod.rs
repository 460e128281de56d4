//! The sorting engines and the slug-keyed registry in front of them.
//!
//! Every engine is a pure function from an input slice to a fully materialised
//! frame sequence. Engines work on a private copy of the input and hold no
//! state between calls, so the same input always yields the same frames.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{frame::Frame, Result, SortVizError};

pub mod bubble;
pub mod comb;
pub mod heap;
pub mod insertion;
pub mod selection;
pub mod shell;

/// Identifier for every registered algorithm. Serialises as its slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    ShellSort,
    CombSort,
    HeapSort,
}

/// Educational details displayed next to a visualisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::ShellSort,
        Algorithm::CombSort,
        Algorithm::HeapSort,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble-sort",
            Algorithm::SelectionSort => "selection-sort",
            Algorithm::InsertionSort => "insertion-sort",
            Algorithm::ShellSort => "shell-sort",
            Algorithm::CombSort => "comb-sort",
            Algorithm::HeapSort => "heap-sort",
        }
    }

    /// Looks an algorithm up by slug, reporting unknown slugs as errors.
    pub fn from_slug(slug: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.slug() == slug)
            .ok_or_else(|| SortVizError::UnknownAlgorithm(slug.to_string()))
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn info(self) -> AlgorithmInfo {
        let (name, description, time_complexity) = match self {
            Algorithm::BubbleSort => (
                "Bubble Sort",
                "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                "O(n²)",
            ),
            Algorithm::SelectionSort => (
                "Selection Sort",
                "Grows a sorted sublist from the left by repeatedly selecting the minimum of the unsorted remainder and swapping it into place.",
                "O(n²)",
            ),
            Algorithm::InsertionSort => (
                "Insertion Sort",
                "Builds the final sorted array one item at a time, shifting larger elements right to open a hole for each new key.",
                "O(n²)",
            ),
            Algorithm::ShellSort => (
                "Shell Sort",
                "Improves insertion sort by comparing elements far apart first using a shrinking gap sequence, then finishes with a final insertion-style pass.",
                "Best O(n log n), average ~O(n^1.5), worst O(n²)",
            ),
            Algorithm::CombSort => (
                "Comb Sort",
                "Improves bubble sort by comparing elements with a shrinking gap, which quickly moves small values toward the front and large values toward the end.",
                "Best O(n log n), average O(n² / 2^p), worst O(n²)",
            ),
            Algorithm::HeapSort => (
                "Heap Sort",
                "Builds a max heap and repeatedly moves the root (largest value) to the end of the array, shrinking the heap each step.",
                "Best/Average/Worst O(n log n)",
            ),
        };

        AlgorithmInfo {
            slug: self.slug(),
            name,
            description,
            time_complexity,
            space_complexity: "O(1)",
        }
    }

    /// Runs the engine to completion and returns every frame it emitted.
    pub fn run(self, input: &[i32]) -> Vec<Frame> {
        let frames = match self {
            Algorithm::BubbleSort => bubble::run(input),
            Algorithm::SelectionSort => selection::run(input),
            Algorithm::InsertionSort => insertion::run(input),
            Algorithm::ShellSort => shell::run(input),
            Algorithm::CombSort => comb::run(input),
            Algorithm::HeapSort => heap::run(input),
        };

        if let Some(last) = frames.last() {
            tracing::debug!(
                algorithm = self.slug(),
                size = input.len(),
                frames = frames.len(),
                comparisons = last.stats.comparisons,
                swaps = last.stats.swaps,
                "materialised frame sequence"
            );
        }

        frames
    }
}

impl FromStr for Algorithm {
    type Err = SortVizError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slug(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
