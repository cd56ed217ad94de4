//! Slash-command glue for approval resolution
//!
//! The hosting chat router feeds the remainder of an `/approve` or `/deny`
//! message here, together with the session and resolver identity it got
//! from the transport. The id is optional; without one the most recent
//! pending approval in the session is targeted. Returns the user-facing
//! reply text.

use uuid::Uuid;

use crate::approval::{ApprovalGate, ResolveOutcome};

/// Handle an `/approve` or `/deny` command
///
/// `args` is everything after the command word: an optional approval id
/// followed by an optional free-text reason. An id-shaped first token is
/// always passed through to the registry, so a mistyped or stale id fails
/// with "not found" instead of silently resolving a different approval.
/// The latest-pending fallback applies only to genuinely id-less input.
pub fn handle_resolution(
    gate: &ApprovalGate,
    session_id: &str,
    resolver_id: &str,
    approved: bool,
    args: &str,
) -> String {
    let mut tokens = args.split_whitespace();
    let first = tokens.next();

    let (id, reason) = match first {
        Some(token) if Uuid::parse_str(token).is_ok() => {
            (token.to_string(), tokens.collect::<Vec<_>>().join(" "))
        }
        _ => {
            let Some(id) = gate.latest_pending(session_id) else {
                return "No pending approvals.".to_string();
            };
            (id, args.trim().to_string())
        }
    };

    let tool = gate.pending_tool(&id).unwrap_or_else(|| "tool".to_string());
    match gate.resolve(&id, session_id, resolver_id, approved, &reason) {
        ResolveOutcome::Resolved => {
            if approved {
                format!("✅ Approved: {}", tool)
            } else {
                format!("🚫 Denied: {}", tool)
            }
        }
        ResolveOutcome::NotFound => "No pending approval with that id.".to_string(),
        ResolveOutcome::SessionMismatch => {
            "That approval belongs to a different conversation.".to_string()
        }
        ResolveOutcome::CallerMismatch => {
            "Only the requester can answer this approval.".to_string()
        }
        ResolveOutcome::AlreadyResolved => "That approval was already resolved.".to_string(),
    }
}
