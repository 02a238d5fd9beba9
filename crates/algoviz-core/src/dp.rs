//! Bottom-up dynamic programming: 0/1 knapsack and longest common
//! subsequence.
//!
//! Both engines fill a full [`DpTable`], recording one step per cell, then
//! walk the finished table backwards to recover the optimal selection. The
//! table is never written during the backward walk.

use serde::Serialize;
use strum::IntoStaticStr;

use crate::input::Item;
use crate::trace::{Complexity, Execution, Step, Trace};

pub const KNAPSACK_COMPLEXITY: Complexity = Complexity::new("O(n × W)", "O(n × W)");
pub const LCS_COMPLEXITY: Complexity = Complexity::new("O(m × n)", "O(m × n)");

/// A dense 2-D table indexed by subproblem parameters. Serializes as an
/// array of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DpTable<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Copy + Default> DpTable<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        DpTable {
            rows: vec![vec![T::default(); cols]; rows],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.rows[row][col]
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        self.rows[row][col] = value;
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "action", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KnapsackStep {
    /// Including item `i - 1` beat leaving it out.
    Take {
        i: usize,
        w: usize,
        value: i64,
        #[serde(rename = "itemWeight")]
        item_weight: i64,
        #[serde(rename = "itemValue")]
        item_value: i64,
    },
    /// Leaving the item out was at least as good, or it did not fit.
    Skip {
        i: usize,
        w: usize,
        value: i64,
        #[serde(rename = "itemWeight")]
        item_weight: i64,
        #[serde(rename = "itemValue")]
        item_value: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<&'static str>,
    },
    Complete {
        table: DpTable<i64>,
        selected: Vec<usize>,
        #[serde(rename = "maxValue")]
        max_value: i64,
    },
}

impl Step for KnapsackStep {
    fn action(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnapsackResult {
    pub table: DpTable<i64>,
    /// Indices of the chosen items, in input order.
    pub selected: Vec<usize>,
    #[serde(rename = "maxValue")]
    pub max_value: i64,
}

/// 0/1 knapsack over `(n + 1) × (capacity + 1)` cells.
pub fn knapsack(capacity: usize, items: &[Item]) -> Execution<KnapsackStep, KnapsackResult> {
    let n = items.len();
    let mut trace = Trace::new();
    let mut dp: DpTable<i64> = DpTable::new(n + 1, capacity + 1);

    for i in 1..=n {
        let item = items[i - 1];
        for w in 0..=capacity {
            let skip = dp.get(i - 1, w);
            match fits(item.weight, w) {
                Some(rest) => {
                    let take = dp.get(i - 1, rest) + item.value;
                    dp.set(i, w, take.max(skip));
                    let value = dp.get(i, w);
                    trace.record(if take > skip {
                        KnapsackStep::Take {
                            i,
                            w,
                            value,
                            item_weight: item.weight,
                            item_value: item.value,
                        }
                    } else {
                        KnapsackStep::Skip {
                            i,
                            w,
                            value,
                            item_weight: item.weight,
                            item_value: item.value,
                            reason: None,
                        }
                    });
                }
                None => {
                    dp.set(i, w, skip);
                    trace.record(KnapsackStep::Skip {
                        i,
                        w,
                        value: skip,
                        item_weight: item.weight,
                        item_value: item.value,
                        reason: Some("too heavy"),
                    });
                }
            }
        }
    }

    let selected = knapsack_selection(&dp, items, capacity);
    let max_value = dp.get(n, capacity);

    trace.record(KnapsackStep::Complete {
        table: dp.clone(),
        selected: selected.clone(),
        max_value,
    });

    Execution::new(
        trace,
        KnapsackResult {
            table: dp,
            selected,
            max_value,
        },
    )
}

/// Remaining capacity after placing an item of `weight` into `w`, if it fits.
fn fits(weight: i64, w: usize) -> Option<usize> {
    let weight = usize::try_from(weight).ok()?;
    w.checked_sub(weight)
}

/// Walks rows from the last item up: a value change between row `i` and
/// row `i - 1` at the current capacity means item `i - 1` was taken.
fn knapsack_selection(dp: &DpTable<i64>, items: &[Item], capacity: usize) -> Vec<usize> {
    let mut selected = Vec::new();
    let mut w = capacity;
    for i in (1..=items.len()).rev() {
        if dp.get(i, w) != dp.get(i - 1, w) {
            let weight = items[i - 1].weight as usize;
            debug_assert!(weight <= w, "item {} taken at capacity {}", i - 1, w);
            selected.push(i - 1);
            w -= weight;
        }
    }
    selected.reverse();
    selected
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "action", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LcsStep {
    /// Characters matched: diagonal + 1.
    Match {
        i: usize,
        j: usize,
        #[serde(rename = "charA")]
        char_a: char,
        #[serde(rename = "charB")]
        char_b: char,
        value: usize,
    },
    /// No match: max of up and left.
    Max {
        i: usize,
        j: usize,
        #[serde(rename = "charA")]
        char_a: char,
        #[serde(rename = "charB")]
        char_b: char,
        value: usize,
    },
    Complete {
        table: DpTable<usize>,
        lcs: String,
        length: usize,
    },
}

impl Step for LcsStep {
    fn action(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LcsResult {
    pub table: DpTable<usize>,
    pub lcs: String,
    pub length: usize,
}

/// Longest common subsequence over `(m + 1) × (n + 1)` cells, comparing by
/// Unicode scalar value.
pub fn lcs(a: &str, b: &str) -> Execution<LcsStep, LcsResult> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    let mut trace = Trace::new();
    let mut dp: DpTable<usize> = DpTable::new(m + 1, n + 1);

    for i in 1..=m {
        for j in 1..=n {
            let (char_a, char_b) = (a[i - 1], b[j - 1]);
            if char_a == char_b {
                let value = dp.get(i - 1, j - 1) + 1;
                dp.set(i, j, value);
                trace.record(LcsStep::Match { i, j, char_a, char_b, value });
            } else {
                let value = dp.get(i - 1, j).max(dp.get(i, j - 1));
                dp.set(i, j, value);
                trace.record(LcsStep::Max { i, j, char_a, char_b, value });
            }
        }
    }

    let sequence = lcs_sequence(&dp, &a, &b);
    let length = dp.get(m, n);

    trace.record(LcsStep::Complete {
        table: dp.clone(),
        lcs: sequence.clone(),
        length,
    });

    Execution::new(
        trace,
        LcsResult {
            table: dp,
            lcs: sequence,
            length,
        },
    )
}

/// Backtracks from `(m, n)`. Moves up only when the cell above is strictly
/// larger than the cell to the left; ties move left.
fn lcs_sequence(dp: &DpTable<usize>, a: &[char], b: &[char]) -> String {
    let mut out = Vec::new();
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp.get(i - 1, j) > dp.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn knapsack_takes_both_items_when_they_fit() {
        let items = [Item::new(2, 3), Item::new(3, 4)];
        let run = knapsack(5, &items);
        assert_eq!(run.result.max_value, 7);
        assert_eq!(run.result.selected, vec![0, 1]);
        assert_eq!(run.result.table.row_count(), 3);
        assert_eq!(run.result.table.col_count(), 6);
        // One step per cell in rows 1..=n, plus the terminal step.
        assert_eq!(run.trace.len(), 2 * 6 + 1);
        assert!(run.trace.is_complete());
    }

    #[test]
    fn knapsack_marks_infeasible_cells_too_heavy() {
        let run = knapsack(1, &[Item::new(2, 10)]);
        assert_eq!(
            run.trace.steps()[1],
            KnapsackStep::Skip {
                i: 1,
                w: 1,
                value: 0,
                item_weight: 2,
                item_value: 10,
                reason: Some("too heavy"),
            }
        );
        assert_eq!(run.result.max_value, 0);
        assert!(run.result.selected.is_empty());
    }

    #[test]
    fn knapsack_tie_records_skip() {
        // Taking item 1 at w=1 gives 5, same as keeping item 0.
        let run = knapsack(1, &[Item::new(1, 5), Item::new(1, 5)]);
        let row_two: Vec<&str> = run.trace.steps()[2..4].iter().map(Step::action).collect();
        assert_eq!(row_two, vec!["skip", "skip"]);
        assert_eq!(run.result.selected, vec![0]);
    }

    #[test]
    fn knapsack_prefers_value_over_count() {
        let items = [Item::new(1, 1), Item::new(1, 1), Item::new(2, 5)];
        let run = knapsack(2, &items);
        assert_eq!(run.result.max_value, 5);
        assert_eq!(run.result.selected, vec![2]);
    }

    #[test]
    fn knapsack_step_uses_wire_names() {
        let run = knapsack(2, &[Item::new(1, 4)]);
        let json = serde_json::to_value(&run.trace.steps()[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "take", "i": 1, "w": 1, "value": 4, "itemWeight": 1, "itemValue": 4
            })
        );
    }

    #[test]
    fn lcs_finds_classic_subsequence() {
        let run = lcs("ABCBDAB", "BDCABA");
        assert_eq!(run.result.length, 4);
        assert_eq!(run.result.lcs.len(), 4);
        assert_eq!(run.trace.len(), 7 * 6 + 1);
    }

    #[test]
    fn lcs_ties_move_left() {
        // "AB" vs "BA": at (2, 2) up and left both hold 1. Moving left
        // reaches the B/B match; moving up would have produced "A".
        let run = lcs("AB", "BA");
        assert_eq!(run.result.length, 1);
        assert_eq!(run.result.lcs, "B");
    }

    #[test]
    fn lcs_records_match_and_max() {
        let run = lcs("A", "A");
        assert_eq!(run.trace.actions(), vec!["match", "complete"]);
        let run = lcs("A", "B");
        assert_eq!(run.trace.actions(), vec!["max", "complete"]);
        assert_eq!(run.result.lcs, "");
    }

    #[test]
    fn lcs_handles_multibyte_characters() {
        let run = lcs("héllo", "hallo");
        assert_eq!(run.result.lcs, "hllo");
    }

    fn brute_force_knapsack(capacity: i64, items: &[Item]) -> i64 {
        (0u32..1 << items.len())
            .filter_map(|mask| {
                let (w, v) = items
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .fold((0, 0), |(w, v), (_, it)| (w + it.weight, v + it.value));
                (w <= capacity).then_some(v)
            })
            .max()
            .unwrap_or(0)
    }

    fn is_subsequence(needle: &str, hay: &str) -> bool {
        let mut hay = hay.chars();
        needle.chars().all(|c| hay.any(|h| h == c))
    }

    #[test]
    fn reruns_are_identical() {
        let items = [Item::new(1, 1), Item::new(3, 4), Item::new(4, 5), Item::new(5, 7)];
        assert_eq!(knapsack(7, &items), knapsack(7, &items));
        assert_eq!(lcs("AGGTAB", "GXTXAYB"), lcs("AGGTAB", "GXTXAYB"));
    }

    proptest! {
        #[test]
        fn knapsack_is_optimal_and_selection_is_consistent(
            capacity in 1i64..15,
            raw in prop::collection::vec((0i64..8, 0i64..20), 1..7)
        ) {
            let items: Vec<Item> = raw.iter().map(|(w, v)| Item::new(*w, *v)).collect();
            let run = knapsack(capacity as usize, &items);
            prop_assert_eq!(run.result.max_value, brute_force_knapsack(capacity, &items));

            let weight: i64 = run.result.selected.iter().map(|i| items[*i].weight).sum();
            let value: i64 = run.result.selected.iter().map(|i| items[*i].value).sum();
            prop_assert!(weight <= capacity);
            prop_assert_eq!(value, run.result.max_value);
        }

        #[test]
        fn lcs_result_is_common_subsequence(a in "[ABC]{1,8}", b in "[ABC]{1,8}") {
            let run = lcs(&a, &b);
            prop_assert_eq!(run.result.lcs.chars().count(), run.result.length);
            prop_assert!(is_subsequence(&run.result.lcs, &a));
            prop_assert!(is_subsequence(&run.result.lcs, &b));
        }
    }
}
