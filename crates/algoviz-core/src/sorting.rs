//! Instrumented comparison sorts: bubble, selection, insertion and quick sort.
//!
//! Every comparison records a `compare` step with the snapshot taken before
//! any exchange; every exchange records a `swap` step with the snapshot after
//! it. The `sorted` field lists indices already known to hold their final
//! value:
//!
//! - bubble sort grows it from the right after each outer pass,
//! - selection sort grows it from the left,
//! - insertion sort reports the sorted prefix,
//! - quick sort leaves it empty until the terminal step.
//!
//! The terminal `complete` step lists the full index range.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::trace::{Complexity, Execution, Step, Trace};

/// The sorting family.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
}

impl SortAlgorithm {
    pub fn complexity(self) -> Complexity {
        match self {
            SortAlgorithm::Bubble | SortAlgorithm::Selection | SortAlgorithm::Insertion => {
                Complexity::new("O(n²)", "O(1)")
            }
            SortAlgorithm::Quick => Complexity::new("O(n log n)", "O(log n)"),
        }
    }

    pub fn run(self, input: &[i64]) -> Execution<SortStep, SortResult> {
        match self {
            SortAlgorithm::Bubble => bubble_sort(input),
            SortAlgorithm::Selection => selection_sort(input),
            SortAlgorithm::Insertion => insertion_sort(input),
            SortAlgorithm::Quick => quick_sort(input),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortAction {
    SelectPivot,
    Compare,
    Swap,
    Complete,
}

/// One sorting step. All sorts share this shape so the client renders them
/// with the same bar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortStep {
    pub action: SortAction,
    pub array: Vec<i64>,
    pub comparing: Vec<usize>,
    pub swapped: Vec<usize>,
    pub sorted: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<usize>,
}

impl Step for SortStep {
    fn action(&self) -> &'static str {
        self.action.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortResult {
    pub sorted: Vec<i64>,
    pub comparisons: usize,
    pub swaps: usize,
}

/// Working state for one sort run: the array being sorted, its trace, and
/// the running counters.
struct Sorter {
    array: Vec<i64>,
    trace: Trace<SortStep>,
    comparisons: usize,
    swaps: usize,
}

impl Sorter {
    fn new(input: &[i64]) -> Self {
        Sorter {
            array: input.to_vec(),
            trace: Trace::new(),
            comparisons: 0,
            swaps: 0,
        }
    }

    fn step(
        &mut self,
        action: SortAction,
        comparing: Vec<usize>,
        swapped: Vec<usize>,
        sorted: &[usize],
        pivot: Option<usize>,
    ) {
        self.trace.record(SortStep {
            action,
            array: self.array.clone(),
            comparing,
            swapped,
            sorted: sorted.to_vec(),
            pivot,
        });
    }

    fn compare(&mut self, a: usize, b: usize, sorted: &[usize], pivot: Option<usize>) {
        self.comparisons += 1;
        self.step(SortAction::Compare, vec![a, b], Vec::new(), sorted, pivot);
    }

    /// Exchanges two positions and records the snapshot after the exchange.
    /// Only exchanges that move something count toward `swaps`.
    fn swap(&mut self, a: usize, b: usize, sorted: &[usize], pivot: Option<usize>) {
        self.array.swap(a, b);
        if a != b {
            self.swaps += 1;
        }
        self.step(SortAction::Swap, Vec::new(), vec![a, b], sorted, pivot);
    }

    fn finish(mut self) -> Execution<SortStep, SortResult> {
        let all: Vec<usize> = (0..self.array.len()).collect();
        self.step(SortAction::Complete, Vec::new(), Vec::new(), &all, None);
        let result = SortResult {
            sorted: self.array,
            comparisons: self.comparisons,
            swaps: self.swaps,
        };
        Execution::new(self.trace, result)
    }
}

pub fn bubble_sort(input: &[i64]) -> Execution<SortStep, SortResult> {
    let mut s = Sorter::new(input);
    let n = s.array.len();
    let mut sorted = Vec::with_capacity(n);

    for i in 0..n {
        for j in 0..n - i - 1 {
            s.compare(j, j + 1, &sorted, None);
            if s.array[j] > s.array[j + 1] {
                s.swap(j, j + 1, &sorted, None);
            }
        }
        sorted.insert(0, n - i - 1);
    }

    s.finish()
}

pub fn selection_sort(input: &[i64]) -> Execution<SortStep, SortResult> {
    let mut s = Sorter::new(input);
    let n = s.array.len();
    let mut sorted = Vec::with_capacity(n);

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            s.compare(min_idx, j, &sorted, None);
            if s.array[j] < s.array[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            s.swap(i, min_idx, &sorted, None);
        }
        sorted.push(i);
    }

    s.finish()
}

/// Insertion sort that sinks each key by adjacent exchanges, so every
/// snapshot is a permutation of the input.
pub fn insertion_sort(input: &[i64]) -> Execution<SortStep, SortResult> {
    let mut s = Sorter::new(input);
    let n = s.array.len();
    let mut sorted: Vec<usize> = (0..n.min(1)).collect();

    for i in 1..n {
        let mut j = i;
        while j > 0 && s.array[j - 1] > s.array[j] {
            s.compare(j - 1, j, &sorted, None);
            s.swap(j - 1, j, &sorted, None);
            j -= 1;
        }
        sorted = (0..=i).collect();
    }

    s.finish()
}

/// Lomuto quick sort: the pivot is the last element of the subrange and the
/// left subrange is fully sorted before the right one is touched.
pub fn quick_sort(input: &[i64]) -> Execution<SortStep, SortResult> {
    let mut s = Sorter::new(input);
    if !s.array.is_empty() {
        let high = s.array.len() - 1;
        quick_sort_range(&mut s, 0, high);
    }
    s.finish()
}

fn quick_sort_range(s: &mut Sorter, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let p = partition(s, low, high);
    if p > low {
        quick_sort_range(s, low, p - 1);
    }
    quick_sort_range(s, p + 1, high);
}

fn partition(s: &mut Sorter, low: usize, high: usize) -> usize {
    let pivot = s.array[high];
    s.step(SortAction::SelectPivot, Vec::new(), Vec::new(), &[], Some(high));

    // Everything left of `boundary` is strictly less than the pivot.
    let mut boundary = low;
    for j in low..high {
        s.compare(j, high, &[], Some(high));
        if s.array[j] < pivot {
            if boundary != j {
                s.swap(boundary, j, &[], Some(high));
            }
            boundary += 1;
        }
    }

    s.swap(boundary, high, &[], Some(boundary));
    boundary
}
