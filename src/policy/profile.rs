//! Permission profiles
//!
//! A profile is a named bundle of allow/deny rules. Profiles are immutable
//! once loaded; hosts pick one from the built-in set or supply their own.

use serde::{Deserialize, Serialize};

/// A named bundle of allow/deny policy rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name used for lookup
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Allow rules; an empty list allows every tool
    #[serde(default)]
    pub allow: Vec<String>,
    /// Deny rules; deny always wins over allow
    #[serde(default)]
    pub deny: Vec<String>,
}

impl Profile {
    /// Create a new profile
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        allow: Vec<String>,
        deny: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            allow,
            deny,
        }
    }
}

fn rules(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed built-in profile set
pub fn builtin_profiles() -> Vec<Profile> {
    vec![
        Profile::new(
            "full",
            "Every tool allowed, nothing denied",
            rules(&["*"]),
            vec![],
        ),
        Profile::new(
            "standard",
            "Everything except remote access",
            vec![],
            rules(&["group:remote"]),
        ),
        Profile::new(
            "readonly",
            "Read-only filesystem and web access",
            rules(&["read_file", "list_dir", "glob", "group:web", "group:memory"]),
            rules(&["write_file", "edit_file", "group:runtime", "group:remote"]),
        ),
        Profile::new(
            "minimal",
            "Memory tools only",
            rules(&["group:memory"]),
            rules(&["group:runtime", "group:remote", "group:fs", "group:web"]),
        ),
    ]
}

/// Look up a profile by name
///
/// Caller-supplied custom profiles take precedence over built-ins with the
/// same name.
pub fn find_profile(name: &str, custom: &[Profile]) -> Option<Profile> {
    custom
        .iter()
        .find(|p| p.name == name)
        .cloned()
        .or_else(|| builtin_profiles().into_iter().find(|p| p.name == name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let profile = find_profile("readonly", &[]).unwrap();
        assert!(profile.allow.contains(&"read_file".to_string()));
        assert!(profile.deny.contains(&"write_file".to_string()));
    }

    #[test]
    fn test_unknown_profile() {
        assert!(find_profile("nope", &[]).is_none());
    }

    #[test]
    fn test_custom_overrides_builtin() {
        let custom = vec![Profile::new(
            "readonly",
            "Custom readonly",
            rules(&["bash"]),
            vec![],
        )];
        let profile = find_profile("readonly", &custom).unwrap();
        assert_eq!(profile.description, "Custom readonly");
        assert_eq!(profile.allow, vec!["bash".to_string()]);
    }

    #[test]
    fn test_profile_deserializes_with_missing_lists() {
        let profile: Profile =
            serde_json::from_str(r#"{"name":"p","description":"d"}"#).unwrap();
        assert!(profile.allow.is_empty());
        assert!(profile.deny.is_empty());
    }
}
