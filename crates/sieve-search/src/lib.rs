//! Greedy feature-subset search driven by leave-one-out 1-NN accuracy.
//!
//! Provides forward selection and backward elimination behind one
//! parameterized skeleton, with deterministic lowest-index tie-breaking,
//! best-so-far tracking, a one-shot accuracy-regression warning, optional
//! parallel candidate evaluation, and an optional deadline.

mod config;
mod direction;
mod error;
mod reporter;
mod result;
mod search;
mod tracker;

pub use config::SearchConfig;
pub use direction::Direction;
pub use error::SearchError;
pub use reporter::{LogReporter, NoopReporter, Reporter};
pub use result::{RoundResult, SearchResult};
