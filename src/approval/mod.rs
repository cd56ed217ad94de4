//! Dynamic approval layer
//!
//! Interactive human confirmation for sensitive tool invocations, with
//! per-session trust caching so an approved tool does not prompt again
//! until the session is reset.

mod describe;
mod gate;
mod registry;
mod trust;

pub use describe::describe_action;
pub use gate::{ApprovalGate, Notifier};
pub use registry::{
    ApprovalRegistry, PendingInfo, Resolution, ResolveOutcome, DEFAULT_WAIT_CEILING,
};
pub use trust::TrustCache;
