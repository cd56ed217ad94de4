//! Static policy layer
//!
//! Declarative allow/deny profiles compiled against the known tool catalog.
//! Checking is cheap and synchronous; the dynamic confirmation layer lives
//! in [`crate::approval`].

mod checker;
mod expand;
mod groups;
mod profile;

pub use checker::{PolicyDecision, ProfileChecker};
pub use expand::expand_rules;
pub use groups::{group_names, group_tools};
pub use profile::{builtin_profiles, find_profile, Profile};
