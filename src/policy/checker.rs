//! Profile checker
//!
//! Evaluates tool names against a profile's expanded allow/deny sets.
//! Deny always wins. An empty allow set allows every tool, so profiles can
//! express "deny these, ask about the rest" without enumerating the world.

use std::collections::HashSet;

use super::expand::expand_rules;
use super::profile::Profile;

/// Outcome of a policy check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDecision {
    /// Whether the tool may run
    pub allowed: bool,
    /// Human-readable reason when not allowed; empty otherwise
    pub reason: String,
}

/// Checks tool names against compiled allow/deny sets
pub struct ProfileChecker {
    allow: HashSet<String>,
    deny: HashSet<String>,
}

impl ProfileChecker {
    /// Build a checker from raw rule lists and the known tool catalog
    pub fn new(allow_rules: &[String], deny_rules: &[String], known_tools: &[String]) -> Self {
        Self {
            allow: expand_rules(allow_rules, known_tools),
            deny: expand_rules(deny_rules, known_tools),
        }
    }

    /// Build a checker from a profile
    pub fn for_profile(profile: &Profile, known_tools: &[String]) -> Self {
        Self::new(&profile.allow, &profile.deny, known_tools)
    }

    /// Whether the tool appears in the expanded deny set
    pub fn is_denied(&self, tool: &str) -> bool {
        self.deny.contains(tool)
    }

    /// Whether the tool is allowed
    ///
    /// An empty allow set allows everything, including tools that were not
    /// in the known catalog at build time.
    pub fn is_allowed(&self, tool: &str) -> bool {
        self.allow.is_empty() || self.allow.contains(tool)
    }

    /// Check a tool name, deny evaluated first
    pub fn check(&self, tool: &str) -> PolicyDecision {
        if self.is_denied(tool) {
            tracing::debug!("Policy denied tool: {}", tool);
            return PolicyDecision {
                allowed: false,
                reason: "denied by profile".to_string(),
            };
        }
        if !self.is_allowed(tool) {
            tracing::debug!("Tool not in allow list: {}", tool);
            return PolicyDecision {
                allowed: false,
                reason: "not in profile allow list".to_string(),
            };
        }
        PolicyDecision {
            allowed: true,
            reason: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_deny_wins_over_allow() {
        let checker = ProfileChecker::new(
            &strings(&["bash"]),
            &strings(&["bash"]),
            &strings(&["bash"]),
        );
        let decision = checker.check("bash");
        assert!(!decision.allowed);
        assert_eq!(decision.reason, "denied by profile");
    }

    #[test]
    fn test_empty_allow_allows_everything() {
        let checker = ProfileChecker::new(&[], &strings(&["ssh"]), &strings(&["bash"]));
        assert!(checker.is_allowed("bash"));
        assert!(checker.is_allowed("never_registered"));
        assert!(checker.check("never_registered").allowed);
    }

    #[test]
    fn test_check_reasons() {
        let known = strings(&["bash", "read_file", "write_file", "ssh"]);
        let checker = ProfileChecker::new(
            &strings(&["bash", "read_file"]),
            &strings(&["ssh"]),
            &known,
        );

        let denied = checker.check("ssh");
        assert!(!denied.allowed);
        assert_eq!(denied.reason, "denied by profile");

        let not_listed = checker.check("write_file");
        assert!(!not_listed.allowed);
        assert_eq!(not_listed.reason, "not in profile allow list");

        let allowed = checker.check("bash");
        assert!(allowed.allowed);
        assert!(allowed.reason.is_empty());
    }

    #[test]
    fn test_wildcard_deny() {
        let known = strings(&["git_push", "git_status", "bash"]);
        let checker = ProfileChecker::new(&[], &strings(&["git_*"]), &known);
        assert!(checker.is_denied("git_push"));
        assert!(!checker.is_denied("bash"));
    }
}
