use sieve_nn::NnError;

/// Errors from greedy feature-subset search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Wraps an evaluation error. Under a validated dataset this only arises
    /// from a contract violation in candidate generation.
    #[error("subset evaluation failed: {0}")]
    Evaluation(#[from] NnError),
}
