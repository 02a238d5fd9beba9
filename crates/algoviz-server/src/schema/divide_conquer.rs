//! Divide-and-conquer response types. Requests reuse
//! [`super::sorting::ArrayRequest`].

use algoviz_core::divide_conquer::{MergeSortResult, MergeStep};

use super::common::RunResponse;

pub type MergeSortResponse = RunResponse<MergeStep, MergeSortResult>;
