//! Error types for the approval gate
//!
//! All variants are expected, recoverable outcomes. Callers render them
//! into user-facing text rather than aborting.

use thiserror::Error;

/// Errors surfaced by the approval workflow
#[derive(Debug, Error)]
pub enum GateError {
    /// No pending approval exists for the given id
    #[error("no pending approval with id '{0}'")]
    NotFound(String),

    /// The approval was not resolved within the waiting ceiling
    #[error("approval timed out")]
    Timeout,

    /// The wait was unblocked by an external shutdown signal
    #[error("approval wait cancelled")]
    Cancelled,

    /// The notification to the human could not be delivered
    #[error("failed to notify approver: {0}")]
    Notify(anyhow::Error),
}

/// Result alias used across the gate
pub type GateResult<T> = Result<T, GateError>;
