//! Greedy engines: coin change by largest denomination, and interval
//! scheduling by earliest finish time.
//!
//! Coin change is the textbook heuristic and is only optimal for canonical
//! coin systems. It neither checks optimality nor backtracks, so for
//! denominations like `[4, 3]` and amount 6 it reports `possible: false`.

use indexmap::IndexMap;
use serde::Serialize;
use strum::IntoStaticStr;

use crate::input::Activity;
use crate::trace::{Complexity, Execution, Step, Trace};

pub const COIN_CHANGE_COMPLEXITY: Complexity = Complexity::new("O(n log n)", "O(n)");
pub const ACTIVITY_SELECTION_COMPLEXITY: Complexity = Complexity::new("O(n log n)", "O(n)");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(tag = "action", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CoinStep {
    Select {
        coin: u64,
        remaining: u64,
    },
    Use {
        coin: u64,
        count: u64,
        remaining: u64,
    },
    Skip {
        coin: u64,
        count: u64,
        remaining: u64,
    },
    Complete {
        result: IndexMap<String, u64>,
        #[serde(rename = "totalCoins")]
        total_coins: u64,
        remaining: u64,
        possible: bool,
    },
}

impl Step for CoinStep {
    fn action(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinChangeResult {
    /// Coin denomination (as a string key) to count, largest first.
    pub result: IndexMap<String, u64>,
    #[serde(rename = "totalCoins")]
    pub total_coins: u64,
    pub remaining: u64,
    pub possible: bool,
}

pub fn coin_change(coins: &[u64], amount: u64) -> Execution<CoinStep, CoinChangeResult> {
    let mut trace = Trace::new();
    let mut sorted = coins.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut breakdown = IndexMap::new();
    let mut remaining = amount;
    let mut total_coins = 0;

    for coin in sorted {
        if remaining == 0 {
            break;
        }
        trace.record(CoinStep::Select { coin, remaining });

        let count = remaining.checked_div(coin).unwrap_or(0);
        if count > 0 {
            breakdown.insert(coin.to_string(), count);
            total_coins += count;
            remaining -= coin * count;
            trace.record(CoinStep::Use {
                coin,
                count,
                remaining,
            });
        } else {
            trace.record(CoinStep::Skip {
                coin,
                count: 0,
                remaining,
            });
        }
    }

    let result = CoinChangeResult {
        result: breakdown,
        total_coins,
        remaining,
        possible: remaining == 0,
    };
    trace.record(CoinStep::Complete {
        result: result.result.clone(),
        total_coins,
        remaining,
        possible: result.possible,
    });

    Execution::new(trace, result)
}

#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "action", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActivityStep {
    Select {
        activity: Activity,
        /// Position in finish-time order.
        index: usize,
        #[serde(rename = "originalIndex")]
        original_index: usize,
        #[serde(rename = "lastFinish")]
        last_finish: i64,
    },
    Reject {
        activity: Activity,
        index: usize,
        #[serde(rename = "originalIndex")]
        original_index: usize,
        reason: &'static str,
        #[serde(rename = "lastFinish", skip_serializing_if = "Option::is_none")]
        last_finish: Option<i64>,
    },
    Complete {
        selected: Vec<usize>,
        #[serde(rename = "maxActivities")]
        max_activities: usize,
    },
}

impl Step for ActivityStep {
    fn action(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySelectionResult {
    /// Positions of the chosen activities in `sorted_activities`.
    pub selected: Vec<usize>,
    /// The input activities ordered by finish time (stable).
    #[serde(rename = "sortedActivities")]
    pub sorted_activities: Vec<Activity>,
    #[serde(rename = "maxActivities")]
    pub max_activities: usize,
}

/// Earliest-finish-first interval scheduling. An activity is compatible
/// when it starts no earlier than the last selected one finished; the first
/// activity in finish order is always selected.
pub fn activity_selection(
    activities: &[Activity],
) -> Execution<ActivityStep, ActivitySelectionResult> {
    let mut trace = Trace::new();
    let mut order: Vec<usize> = (0..activities.len()).collect();
    order.sort_by_key(|&i| activities[i].finish);

    let mut selected = Vec::new();
    let mut last_finish: Option<i64> = None;

    for (index, &original_index) in order.iter().enumerate() {
        let activity = &activities[original_index];
        if last_finish.map_or(true, |finish| activity.start >= finish) {
            selected.push(index);
            last_finish = Some(activity.finish);
            trace.record(ActivityStep::Select {
                activity: activity.clone(),
                index,
                original_index,
                last_finish: activity.finish,
            });
        } else {
            trace.record(ActivityStep::Reject {
                activity: activity.clone(),
                index,
                original_index,
                reason: "overlaps with previous",
                last_finish,
            });
        }
    }

    trace.record(ActivityStep::Complete {
        selected: selected.clone(),
        max_activities: selected.len(),
    });

    let sorted_activities = order.iter().map(|&i| activities[i].clone()).collect();
    let max_activities = selected.len();
    Execution::new(
        trace,
        ActivitySelectionResult {
            selected,
            sorted_activities,
            max_activities,
        },
    )
}
