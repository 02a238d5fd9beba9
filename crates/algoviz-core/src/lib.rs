//! Step-recording execution engine for classic textbook algorithms.
//!
//! Every engine takes plain, already-validated input and returns an
//! [`Execution`]: the ordered [`Trace`] of step records describing what the
//! algorithm did, plus the final result. Engines are stateless; each call
//! builds its own arrays, tables and trace, so calls may run concurrently on
//! any thread without coordination.
//!
//! Input checking lives in [`validate`] and runs before any engine.

pub mod catalog;
pub mod divide_conquer;
pub mod dp;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod input;
pub mod mst;
pub mod search;
pub mod sorting;
pub mod trace;
pub mod validate;

// Re-export commonly used types
pub use error::InputError;
pub use input::{Activity, Edge, Item};
pub use trace::{Complexity, Execution, Step, Trace};
pub use validate::Limits;
