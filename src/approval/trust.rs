//! Per-session trust cache
//!
//! Remembers which (session, tool) pairs a human has already approved so
//! repeat invocations within the same session skip the prompt. Entries are
//! only ever added one at a time and removed a whole session at a time.

use std::collections::HashSet;
use std::sync::Mutex;

/// Tracks approved (session, tool) pairs
///
/// The key is a tuple, not a joined string, so session ids and tool names
/// containing any separator character cannot collide.
#[derive(Debug, Default)]
pub struct TrustCache {
    entries: Mutex<HashSet<(String, String)>>,
}

impl TrustCache {
    /// Create an empty trust cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a tool as trusted for a session
    pub fn grant(&self, session_id: &str, tool_name: &str) {
        tracing::info!("Trusting tool '{}' for session '{}'", tool_name, session_id);
        let mut entries = self.entries.lock().unwrap();
        entries.insert((session_id.to_string(), tool_name.to_string()));
    }

    /// Whether a tool was already approved in this session
    pub fn is_trusted(&self, session_id: &str, tool_name: &str) -> bool {
        let entries = self.entries.lock().unwrap();
        entries.contains(&(session_id.to_string(), tool_name.to_string()))
    }

    /// Drop every trust entry belonging to a session
    pub fn clear_session(&self, session_id: &str) {
        tracing::info!("Clearing trusted tools for session '{}'", session_id);
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|(session, _)| session != session_id);
    }

    /// List the tools trusted in a session, sorted for stable output
    pub fn trusted_tools(&self, session_id: &str) -> Vec<String> {
        let entries = self.entries.lock().unwrap();
        let mut tools: Vec<String> = entries
            .iter()
            .filter(|(session, _)| session == session_id)
            .map(|(_, tool)| tool.clone())
            .collect();
        tools.sort();
        tools
    }
}
