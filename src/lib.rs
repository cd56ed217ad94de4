//! toolgate - authorization gate for agent tool execution
//!
//! Gates sensitive operations requested by an autonomous agent behind two
//! layers: a static policy layer (named profiles of allow/deny rules
//! checked synchronously) and a dynamic layer (interactive human
//! confirmation with per-session trust caching).
//!
//! A tool dispatcher consults [`policy::ProfileChecker`] first; when the
//! tool also needs interactive confirmation it calls
//! [`approval::ApprovalGate::request`], which prompts the human through a
//! [`approval::Notifier`] and blocks the calling task until an
//! `/approve` / `/deny` resolution arrives or the wait times out.
//!
//! # Example
//!
//! ```ignore
//! use toolgate::{ApprovalGate, ProfileChecker};
//!
//! let checker = ProfileChecker::new(&profile.allow, &profile.deny, &known_tools);
//! let decision = checker.check("bash");
//! if !decision.allowed {
//!     return reject(decision.reason);
//! }
//!
//! let gate = ApprovalGate::new();
//! if gate.request(session, caller, "bash", &args, &telegram).await? {
//!     run_tool().await?;
//! }
//! ```

pub mod approval;
pub mod commands;
pub mod error;
pub mod logging;
pub mod policy;

pub use approval::{
    describe_action, ApprovalGate, ApprovalRegistry, Notifier, PendingInfo, Resolution,
    ResolveOutcome, TrustCache, DEFAULT_WAIT_CEILING,
};
pub use commands::handle_resolution;
pub use error::{GateError, GateResult};
pub use policy::{
    builtin_profiles, expand_rules, find_profile, group_names, group_tools, PolicyDecision,
    Profile, ProfileChecker,
};
