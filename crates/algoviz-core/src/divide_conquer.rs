//! Merge sort instrumented as a divide-and-conquer narrative.
//!
//! Each split records a `divide` step that names the two recursive calls
//! as if they were spawned onto parallel workers, and brackets them with
//! `parallel_start`/`parallel_end`. The labels are presentation only: the
//! left half is always sorted completely before the right half, then the
//! two are merged, all on the calling thread.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use strum::IntoStaticStr;

use crate::trace::{Complexity, Execution, Step, Trace};

pub const MERGE_SORT_COMPLEXITY: Complexity = Complexity::new("O(n log n)", "O(n)");

/// Generates worker labels for the two halves of each split.
pub struct BranchLabeler {
    rng: ChaCha8Rng,
}

impl BranchLabeler {
    /// Labels drawn from OS entropy; differ between runs.
    pub fn from_entropy() -> Self {
        BranchLabeler {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reproducible labels for a given seed.
    pub fn seeded(seed: u64) -> Self {
        BranchLabeler {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn label(&mut self) -> String {
        format!("worker-{:06x}", self.rng.gen::<u32>() & 0x00ff_ffff)
    }

    pub fn pair(&mut self) -> Branches {
        Branches {
            left: self.label(),
            right: self.label(),
        }
    }
}

/// Labels for the left and right recursive calls of one split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branches {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "action", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MergeStep {
    Divide {
        array: Vec<i64>,
        left: usize,
        right: usize,
        mid: usize,
        depth: usize,
        branches: Branches,
        message: String,
    },
    ParallelStart {
        left: usize,
        right: usize,
        depth: usize,
        branches: Branches,
    },
    ParallelEnd {
        left: usize,
        right: usize,
        depth: usize,
        branches: Branches,
    },
    MergeStart {
        array: Vec<i64>,
        left: usize,
        right: usize,
        mid: usize,
        depth: usize,
        left_part: Vec<i64>,
        right_part: Vec<i64>,
        message: String,
    },
    MergeCompare {
        array: Vec<i64>,
        comparing: [usize; 2],
        placing: usize,
        value: i64,
        depth: usize,
        message: String,
    },
    MergeRemaining {
        array: Vec<i64>,
        placing: usize,
        value: i64,
        depth: usize,
        message: String,
    },
    MergeComplete {
        array: Vec<i64>,
        left: usize,
        right: usize,
        depth: usize,
        message: String,
    },
    Complete {
        array: Vec<i64>,
        message: String,
    },
}

impl Step for MergeStep {
    fn action(&self) -> &'static str {
        self.into()
    }
}

impl MergeStep {
    /// Copy of this step with branch labels blanked, for comparing traces
    /// from separate runs.
    pub fn without_labels(&self) -> MergeStep {
        let blank = || Branches {
            left: String::new(),
            right: String::new(),
        };
        let mut step = self.clone();
        match &mut step {
            MergeStep::Divide { branches, .. }
            | MergeStep::ParallelStart { branches, .. }
            | MergeStep::ParallelEnd { branches, .. } => *branches = blank(),
            _ => {}
        }
        step
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeSortResult {
    pub sorted: Vec<i64>,
}

pub fn merge_sort(input: &[i64]) -> Execution<MergeStep, MergeSortResult> {
    merge_sort_with(input, &mut BranchLabeler::from_entropy())
}

pub fn merge_sort_with(
    input: &[i64],
    labeler: &mut BranchLabeler,
) -> Execution<MergeStep, MergeSortResult> {
    let mut trace = Trace::new();
    let mut array = input.to_vec();

    if !array.is_empty() {
        let right = array.len() - 1;
        sort_range(&mut array, 0, right, 0, &mut trace, labeler);
    }

    trace.record(MergeStep::Complete {
        array: array.clone(),
        message: "Sorting complete!".to_string(),
    });

    Execution::new(trace, MergeSortResult { sorted: array })
}

fn sort_range(
    array: &mut [i64],
    left: usize,
    right: usize,
    depth: usize,
    trace: &mut Trace<MergeStep>,
    labeler: &mut BranchLabeler,
) {
    if left >= right {
        return;
    }
    let mid = (left + right) / 2;
    let branches = labeler.pair();

    trace.record(MergeStep::Divide {
        array: array.to_vec(),
        left,
        right,
        mid,
        depth,
        branches: branches.clone(),
        message: format!(
            "Divide [{}:{}] into [{}:{}] and [{}:{}]",
            left,
            right + 1,
            left,
            mid + 1,
            mid + 1,
            right + 1
        ),
    });
    trace.record(MergeStep::ParallelStart {
        left,
        right,
        depth,
        branches: branches.clone(),
    });

    sort_range(array, left, mid, depth + 1, trace, labeler);
    sort_range(array, mid + 1, right, depth + 1, trace, labeler);

    trace.record(MergeStep::ParallelEnd {
        left,
        right,
        depth,
        branches,
    });

    merge(array, left, mid, right, depth, trace);
}

/// Stable merge of `array[left..=mid]` and `array[mid + 1..=right]`; the
/// left element wins ties.
fn merge(
    array: &mut [i64],
    left: usize,
    mid: usize,
    right: usize,
    depth: usize,
    trace: &mut Trace<MergeStep>,
) {
    let left_part = array[left..=mid].to_vec();
    let right_part = array[mid + 1..=right].to_vec();

    trace.record(MergeStep::MergeStart {
        array: array.to_vec(),
        left,
        right,
        mid,
        depth,
        left_part: left_part.clone(),
        right_part: right_part.clone(),
        message: format!("Merge {:?} and {:?}", left_part, right_part),
    });

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_part.len() && j < right_part.len() {
        let comparing = [left + i, mid + 1 + j];
        let value = if left_part[i] <= right_part[j] {
            i += 1;
            left_part[i - 1]
        } else {
            j += 1;
            right_part[j - 1]
        };
        array[k] = value;
        trace.record(MergeStep::MergeCompare {
            array: array.to_vec(),
            comparing,
            placing: k,
            value,
            depth,
            message: format!("Place {} at position {}", value, k),
        });
        k += 1;
    }

    let rest = left_part[i..].iter().chain(&right_part[j..]);
    for &value in rest {
        array[k] = value;
        trace.record(MergeStep::MergeRemaining {
            array: array.to_vec(),
            placing: k,
            value,
            depth,
            message: format!("Place remaining {} at position {}", value, k),
        });
        k += 1;
    }

    trace.record(MergeStep::MergeComplete {
        array: array.to_vec(),
        left,
        right,
        depth,
        message: format!("Merged [{}:{}] = {:?}", left, right + 1, &array[left..=right]),
    });
}
