//! Approval gate
//!
//! Orchestrates the full confirmation round trip: trust check, pending
//! registration, notification, blocking wait, trust grant. The gate owns
//! its registry and trust cache as plain constructed instances so hosts
//! can run several gates side by side and tests can build isolated ones.

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::registry::{ApprovalRegistry, ResolveOutcome};
use super::trust::TrustCache;
use crate::error::{GateError, GateResult};

/// Messaging collaborator used to deliver approval prompts
///
/// The gate touches the chat transport only through this trait.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a plain-text message to the approving human
    async fn notify(&self, message: &str) -> anyhow::Result<()>;
}

/// Gates sensitive tool execution behind human confirmation
pub struct ApprovalGate {
    registry: ApprovalRegistry,
    trust: TrustCache,
}

impl ApprovalGate {
    /// Create a gate with default timings
    pub fn new() -> Self {
        Self {
            registry: ApprovalRegistry::new(),
            trust: TrustCache::new(),
        }
    }

    /// Create a gate over a custom-configured registry
    pub fn with_registry(registry: ApprovalRegistry) -> Self {
        Self {
            registry,
            trust: TrustCache::new(),
        }
    }

    /// Create a gate whose waits abort when the token fires
    pub fn with_shutdown(token: CancellationToken) -> Self {
        Self::with_registry(ApprovalRegistry::new().with_shutdown(token))
    }

    /// Request confirmation for a tool invocation
    ///
    /// Returns `Ok(true)` when approved (or previously trusted in this
    /// session), `Ok(false)` when denied. A fresh approval grants trust
    /// for the (session, tool) pair so the next invocation skips the
    /// prompt. `notify` is invoked exactly once per new pending entry and
    /// not at all on a trust hit.
    pub async fn request(
        &self,
        session_id: &str,
        caller_id: &str,
        tool_name: &str,
        args: &Value,
        notifier: &dyn Notifier,
    ) -> GateResult<bool> {
        if self.trust.is_trusted(session_id, tool_name) {
            tracing::debug!(
                "Tool '{}' already trusted in session '{}', skipping prompt",
                tool_name,
                session_id
            );
            return Ok(true);
        }

        let (id, message) = self.registry.create(session_id, caller_id, tool_name, args);

        if let Err(e) = notifier.notify(&message).await {
            // Nobody saw the prompt; waiting out the ceiling would just
            // stall the caller on a question that was never asked.
            self.registry.discard(&id);
            return Err(GateError::Notify(e));
        }

        let resolution = self.registry.wait(&id).await?;
        if resolution.approved {
            self.trust.grant(session_id, tool_name);
        }
        Ok(resolution.approved)
    }

    /// Deliver an approve/deny decision for a pending request
    pub fn resolve(
        &self,
        id: &str,
        session_id: &str,
        resolver_id: &str,
        approved: bool,
        reason: &str,
    ) -> ResolveOutcome {
        self.registry.resolve(id, session_id, resolver_id, approved, reason)
    }

    /// Register a pending approval without waiting on it
    ///
    /// For hosts that deliver the prompt themselves instead of going
    /// through [`Notifier`]. Returns the id and the notification text.
    pub fn create_pending(
        &self,
        session_id: &str,
        caller_id: &str,
        tool_name: &str,
        args: &Value,
    ) -> (String, String) {
        self.registry.create(session_id, caller_id, tool_name, args)
    }

    /// Block on a previously created pending approval
    pub async fn wait(&self, id: &str) -> GateResult<bool> {
        let resolution = self.registry.wait(id).await?;
        Ok(resolution.approved)
    }

    /// Tool name of a pending approval, if it exists
    pub fn pending_tool(&self, id: &str) -> Option<String> {
        self.registry.pending_tool(id)
    }

    /// Most recent pending approval id for a session
    pub fn latest_pending(&self, session_id: &str) -> Option<String> {
        self.registry.latest_pending(session_id)
    }

    /// Number of pending approvals for a session
    pub fn pending_count(&self, session_id: &str) -> usize {
        self.registry.pending_count(session_id)
    }

    /// Forget every trusted tool for a session
    ///
    /// Called on session reset so previously approved tools prompt again.
    pub fn clear_session_trust(&self, session_id: &str) {
        self.trust.clear_session(session_id);
    }

    /// Tools currently trusted in a session
    pub fn trusted_tools(&self, session_id: &str) -> Vec<String> {
        self.trust.trusted_tools(session_id)
    }
}

impl Default for ApprovalGate {
    fn default() -> Self {
        Self::new()
    }
}
