//! Static tool groups
//!
//! Groups are pre-enumerated bundles of tool names usable inside profile
//! rules as `group:<name>`. The table is substituted verbatim during rule
//! expansion, independent of the currently registered tool catalog, so the
//! hosting system must keep it in sync with the tools it actually exposes.

/// Look up the tool names belonging to a group
///
/// Returns `None` for unknown group names.
pub fn group_tools(name: &str) -> Option<&'static [&'static str]> {
    let tools: &'static [&'static str] = match name {
        "fs" => &["read_file", "write_file", "edit_file", "list_dir", "glob"],
        "web" => &["web_fetch", "web_search"],
        "runtime" => &["bash", "exec", "process_status"],
        "remote" => &["ssh", "scp"],
        "memory" => &["remember", "recall", "forget"],
        "sessions" => &["new_session", "list_sessions", "switch_session"],
        "media" => &["transcribe", "describe_image", "generate_image"],
        _ => return None,
    };
    Some(tools)
}

/// Names of all built-in groups, for help/docs output
pub fn group_names() -> &'static [&'static str] {
    &[
        "fs", "web", "runtime", "remote", "memory", "sessions", "media",
    ]
}
