//! Rule expansion
//!
//! Turns declarative profile rules into concrete tool-name sets. Rules are
//! one of: the literal `*` (all known tools), `prefix*` (known tools with a
//! matching prefix), `group:<name>` (static group table lookup), or an
//! exact tool name.

use std::collections::HashSet;

use super::groups::group_tools;

/// Expand a list of rules against the known tool catalog
///
/// Exact names are included even when absent from `known_tools`, so rules
/// can reference tools that register later. Group rules substitute the
/// static table verbatim and ignore `known_tools` entirely.
pub fn expand_rules(rules: &[String], known_tools: &[String]) -> HashSet<String> {
    let mut expanded = HashSet::new();

    for rule in rules {
        if rule == "*" {
            expanded.extend(known_tools.iter().cloned());
        } else if let Some(group) = rule.strip_prefix("group:") {
            match group_tools(group) {
                Some(tools) => {
                    expanded.extend(tools.iter().map(|t| t.to_string()));
                }
                None => {
                    tracing::warn!("Unknown tool group in rule: {}", rule);
                }
            }
        } else if let Some(prefix) = rule.strip_suffix('*') {
            expanded.extend(
                known_tools
                    .iter()
                    .filter(|t| t.starts_with(prefix))
                    .cloned(),
            );
        } else {
            expanded.insert(rule.clone());
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_star_expands_to_all_known() {
        let known = strings(&["bash", "read_file"]);
        let expanded = expand_rules(&strings(&["*"]), &known);
        assert_eq!(expanded.len(), 2);
        assert!(expanded.contains("bash"));
        assert!(expanded.contains("read_file"));
    }

    #[test]
    fn test_prefix_wildcard() {
        let known = strings(&["git_status", "git_commit", "bash"]);
        let expanded = expand_rules(&strings(&["git_*"]), &known);
        assert_eq!(expanded.len(), 2);
        assert!(expanded.contains("git_status"));
        assert!(expanded.contains("git_commit"));
        assert!(!expanded.contains("bash"));
    }

    #[test]
    fn test_group_ignores_known_tools() {
        let expanded = expand_rules(&strings(&["group:memory"]), &strings(&["bash"]));
        assert!(expanded.contains("remember"));
        assert!(expanded.contains("recall"));
        assert!(expanded.contains("forget"));
        assert_eq!(expanded.len(), 3);
    }

    #[test]
    fn test_unknown_group_expands_to_nothing() {
        let expanded = expand_rules(&strings(&["group:bogus"]), &strings(&["bash"]));
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_exact_name_kept_even_if_unknown() {
        let expanded = expand_rules(&strings(&["future_tool"]), &strings(&["bash"]));
        assert!(expanded.contains("future_tool"));
    }

    #[test]
    fn test_mixed_rules() {
        let known = strings(&["git_status", "git_push", "bash"]);
        let rules = strings(&["git_*", "group:web", "custom"]);
        let expanded = expand_rules(&rules, &known);
        assert!(expanded.contains("git_status"));
        assert!(expanded.contains("git_push"));
        assert!(expanded.contains("web_fetch"));
        assert!(expanded.contains("web_search"));
        assert!(expanded.contains("custom"));
    }
}
