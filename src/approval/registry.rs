//! Pending approval registry
//!
//! Tracks in-flight confirmation requests and carries each resolution from
//! the resolver to the waiting task through a single-delivery result slot.
//!
//! The map lock is held only for the duration of a map operation, never
//! across an await. A waiting task blocks only on its own entry's oneshot
//! receiver plus a timer, so concurrent requests never block each other.
//! Delivery is at-most-once by construction: the sender half is taken out
//! of the entry exactly once, and whichever of {waiter timeout, resolver
//! send} observes the slot first wins while the loser becomes a no-op.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::describe::describe_action;
use crate::error::{GateError, GateResult};

/// Default ceiling on how long a wait may block
pub const DEFAULT_WAIT_CEILING: Duration = Duration::from_secs(120);

/// Outcome carried from resolver to waiter
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Whether the human approved the action
    pub approved: bool,
    /// Optional free-text reason supplied with the decision
    pub reason: String,
}

/// Result of a resolve attempt
///
/// Enumerated rather than a bare bool so callers can tell "nothing to
/// resolve" apart from "you were not allowed to resolve it".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The resolution was delivered to the waiting task
    Resolved,
    /// No pending approval with that id
    NotFound,
    /// The approval belongs to a different session
    SessionMismatch,
    /// The resolver is not the caller who triggered the approval
    CallerMismatch,
    /// A resolution was already delivered, or the waiter already gave up
    AlreadyResolved,
}

impl ResolveOutcome {
    /// Boolean view: did this attempt take effect?
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolveOutcome::Resolved)
    }
}

/// Read-only view of a pending approval
#[derive(Debug, Clone)]
pub struct PendingInfo {
    /// Tool the agent wants to run
    pub tool_name: String,
    /// Arguments the tool would receive
    pub args: Value,
    /// Human-readable action description embedded in the prompt
    pub description: String,
    /// Session the request was created under
    pub session_id: String,
    /// Identity that triggered the request
    pub caller_id: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// A single outstanding confirmation request
struct PendingEntry {
    tool_name: String,
    args: Value,
    description: String,
    session_id: String,
    caller_id: String,
    created_at: DateTime<Utc>,
    /// Producer half; taken by the first valid resolve attempt
    tx: Option<oneshot::Sender<Resolution>>,
    /// Consumer half; taken by the waiting task
    rx: Option<oneshot::Receiver<Resolution>>,
}

impl PendingEntry {
    fn info(&self) -> PendingInfo {
        PendingInfo {
            tool_name: self.tool_name.clone(),
            args: self.args.clone(),
            description: self.description.clone(),
            session_id: self.session_id.clone(),
            caller_id: self.caller_id.clone(),
            created_at: self.created_at,
        }
    }
}

/// Unregisters a waited-on entry when the wait ends or its future drops
struct RemoveOnDrop<'a> {
    registry: &'a ApprovalRegistry,
    id: &'a str,
}

impl Drop for RemoveOnDrop<'_> {
    fn drop(&mut self) {
        self.registry.remove(self.id);
    }
}

/// Registry of in-flight approval requests
pub struct ApprovalRegistry {
    pending: Mutex<HashMap<String, PendingEntry>>,
    ceiling: Duration,
    shutdown: CancellationToken,
}

impl ApprovalRegistry {
    /// Create a registry with the default 120 second ceiling
    pub fn new() -> Self {
        Self::with_ceiling(DEFAULT_WAIT_CEILING)
    }

    /// Create a registry with a custom wait ceiling
    pub fn with_ceiling(ceiling: Duration) -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            ceiling,
            shutdown: CancellationToken::new(),
        }
    }

    /// Attach an external shutdown signal
    ///
    /// When the token fires, every in-flight wait returns
    /// [`GateError::Cancelled`] instead of blocking out its full ceiling.
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Register a new pending approval
    ///
    /// Returns the fresh id plus the ready-to-send notification text.
    pub fn create(
        &self,
        session_id: &str,
        caller_id: &str,
        tool_name: &str,
        args: &Value,
    ) -> (String, String) {
        let id = Uuid::new_v4().to_string();
        let description = describe_action(tool_name, args);
        let message = format!(
            "⚠️ Approval required: {}\n\nReply /approve {} or /deny {}",
            description, id, id
        );

        let (tx, rx) = oneshot::channel();
        let entry = PendingEntry {
            tool_name: tool_name.to_string(),
            args: args.clone(),
            description,
            session_id: session_id.to_string(),
            caller_id: caller_id.to_string(),
            created_at: Utc::now(),
            tx: Some(tx),
            rx: Some(rx),
        };

        let mut pending = self.pending.lock().unwrap();
        pending.insert(id.clone(), entry);
        tracing::info!(
            "Created pending approval {} for tool '{}' in session '{}'",
            id,
            tool_name,
            session_id
        );

        (id, message)
    }

    /// Block the calling task until the approval is resolved
    ///
    /// Races the result slot against the ceiling and the shutdown signal.
    /// The entry is removed from the registry exactly once on every exit
    /// path, including the caller dropping this future mid-wait (a host
    /// wrapping the request in its own timeout, or a task abort). An
    /// unknown id fails immediately without blocking.
    pub async fn wait(&self, id: &str) -> GateResult<Resolution> {
        let rx = {
            let mut pending = self.pending.lock().unwrap();
            let entry = pending
                .get_mut(id)
                .ok_or_else(|| GateError::NotFound(id.to_string()))?;
            entry
                .rx
                .take()
                .ok_or_else(|| GateError::NotFound(id.to_string()))?
        };

        // Cleanup must run even if this future is dropped before the
        // select settles, otherwise the entry leaks with no timer left
        let _cleanup = RemoveOnDrop { registry: self, id };

        tokio::select! {
            delivered = rx => match delivered {
                Ok(resolution) => Ok(resolution),
                // Sender dropped without a send; the entry is gone
                Err(_) => Err(GateError::NotFound(id.to_string())),
            },
            _ = tokio::time::sleep(self.ceiling) => {
                tracing::info!("Approval {} timed out", id);
                Err(GateError::Timeout)
            }
            _ = self.shutdown.cancelled() => {
                tracing::info!("Approval {} cancelled by shutdown", id);
                Err(GateError::Cancelled)
            }
        }
    }

    /// Attempt to deliver a resolution
    ///
    /// Fails closed: unknown ids, cross-session attempts, and resolvers
    /// other than the original caller all leave the entry untouched. An
    /// empty `resolver_id` skips the caller check for transports that
    /// cannot supply an identity.
    pub fn resolve(
        &self,
        id: &str,
        session_id: &str,
        resolver_id: &str,
        approved: bool,
        reason: &str,
    ) -> ResolveOutcome {
        let tx = {
            let mut pending = self.pending.lock().unwrap();
            let entry = match pending.get_mut(id) {
                Some(entry) => entry,
                None => return ResolveOutcome::NotFound,
            };
            if entry.session_id != session_id {
                tracing::warn!(
                    "Rejected cross-session resolve of {} from session '{}'",
                    id,
                    session_id
                );
                return ResolveOutcome::SessionMismatch;
            }
            if !resolver_id.is_empty() && resolver_id != entry.caller_id {
                tracing::warn!(
                    "Rejected resolve of {} by '{}': not the requesting caller",
                    id,
                    resolver_id
                );
                return ResolveOutcome::CallerMismatch;
            }
            match entry.tx.take() {
                Some(tx) => tx,
                None => return ResolveOutcome::AlreadyResolved,
            }
        };

        let resolution = Resolution {
            approved,
            reason: reason.to_string(),
        };
        match tx.send(resolution) {
            Ok(()) => {
                tracing::info!("Approval {} resolved: approved={}", id, approved);
                ResolveOutcome::Resolved
            }
            // Waiter already left via timeout or cancellation
            Err(_) => ResolveOutcome::AlreadyResolved,
        }
    }

    /// Id of the most recently created pending approval for a session
    ///
    /// Entries whose resolution is already delivered but not yet consumed
    /// by a waiter are no longer pending and are skipped.
    pub fn latest_pending(&self, session_id: &str) -> Option<String> {
        let pending = self.pending.lock().unwrap();
        pending
            .iter()
            .filter(|(_, entry)| entry.session_id == session_id && entry.tx.is_some())
            .max_by_key(|(_, entry)| entry.created_at)
            .map(|(id, _)| id.clone())
    }

    /// Number of pending approvals for a session
    ///
    /// Same scan as [`latest_pending`](Self::latest_pending): an entry
    /// that was resolved but not yet waited on does not count.
    pub fn pending_count(&self, session_id: &str) -> usize {
        let pending = self.pending.lock().unwrap();
        pending
            .values()
            .filter(|entry| entry.session_id == session_id && entry.tx.is_some())
            .count()
    }

    /// Tool name of a pending approval, if it exists
    pub fn pending_tool(&self, id: &str) -> Option<String> {
        let pending = self.pending.lock().unwrap();
        pending.get(id).map(|entry| entry.tool_name.clone())
    }

    /// Snapshot of a pending approval, if it exists
    pub fn pending_info(&self, id: &str) -> Option<PendingInfo> {
        let pending = self.pending.lock().unwrap();
        pending.get(id).map(|entry| entry.info())
    }

    /// Drop a pending approval without resolving it
    ///
    /// Used when the prompt never reached the human and there is nothing
    /// to wait for. Unknown ids are a no-op.
    pub fn discard(&self, id: &str) {
        self.remove(id);
    }

    fn remove(&self, id: &str) {
        let mut pending = self.pending.lock().unwrap();
        pending.remove(id);
    }
}

impl Default for ApprovalRegistry {
    fn default() -> Self {
        Self::new()
    }
}
