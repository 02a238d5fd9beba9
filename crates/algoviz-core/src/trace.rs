//! Step recording shared by every engine.
//!
//! Each engine run owns one [`Trace`]: an append-only, ordered log of step
//! records. Recursive engines pass `&mut Trace` down the call tree so the
//! log reflects causal execution order. Once a step is recorded it cannot be
//! changed or removed.

use serde::Serialize;

/// Action tag carried by the last step of every finished trace.
pub const COMPLETE: &str = "complete";

/// A step record with an `action` tag.
///
/// The tag is what the client dispatches on when replaying a trace; it is
/// also the value of the `action` key in the serialized step.
pub trait Step {
    fn action(&self) -> &'static str;
}

/// An append-only ordered sequence of step records for one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Trace<S> {
    pub fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    /// Appends a step at the end of the log.
    pub fn record(&mut self, step: S) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<S: Step> Trace<S> {
    /// Action tags in recording order.
    pub fn actions(&self) -> Vec<&'static str> {
        self.steps.iter().map(Step::action).collect()
    }

    /// True if the last recorded step is the terminal `complete` step.
    pub fn is_complete(&self) -> bool {
        self.last().is_some_and(|s| s.action() == COMPLETE)
    }
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Informational asymptotic cost of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

impl Complexity {
    pub const fn new(time: &'static str, space: &'static str) -> Self {
        Complexity { time, space }
    }
}

/// What one engine call hands back: the full trace plus the final result.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution<S, R> {
    pub trace: Trace<S>,
    pub result: R,
}

impl<S, R> Execution<S, R> {
    pub fn new(trace: Trace<S>, result: R) -> Self {
        Execution { trace, result }
    }
}
