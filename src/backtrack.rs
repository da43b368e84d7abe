//! Backtracking evaluation of a compiled node sequence.
//!
//! Every node answers one question: can it account for exactly a given
//! substring (`consume`). The sequence search (`exec`) tries each way of
//! splitting the input between the head node and the rest, longest first
//! for greedy quantifiers and shortest first otherwise. The search is
//! exhaustive and can take exponential time on ambiguous patterns.

mod consume;
mod exec;
mod haystack;
mod trace;

pub(crate) use exec::{Anchoring, Executer};
pub(crate) use haystack::Haystack;
pub use trace::{LogTrace, Trace, TraceEvent};
