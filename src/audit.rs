//! Audit trail for non-safe triage verdicts.
//!
//! Events are written as structured JSON on the `solace::audit` tracing
//! target so the host's subscriber decides where they land. The message
//! text itself is never recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::safety::{SafetyAction, SafetyAnalysis, SafetyLevel};

/// Tracing target for audit events.
pub const AUDIT_TARGET: &str = "solace::audit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    /// Critical verdict; normal processing was preempted.
    SafetyAlert,
    /// Warning verdict; processing continued with a redirect message.
    SafetyWarning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: String,
    pub event_type: AuditEventType,
    pub level: SafetyLevel,
    pub action: SafetyAction,
    pub reason: String,
    pub at: DateTime<Utc>,
}

impl AuditEvent {
    /// Build an event for a non-safe verdict; `None` for safe ones.
    #[must_use]
    pub fn from_safety(safety: &SafetyAnalysis) -> Option<Self> {
        let event_type = match safety.level {
            SafetyLevel::Safe => return None,
            SafetyLevel::Critical => AuditEventType::SafetyAlert,
            SafetyLevel::Warning | SafetyLevel::RedirectNeeded => AuditEventType::SafetyWarning,
        };
        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_type,
            level: safety.level,
            action: safety.action,
            reason: safety.reason.clone(),
            at: Utc::now(),
        })
    }

    /// Write the event to the audit target.
    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(json) => tracing::warn!(target: AUDIT_TARGET, event = %json, "safety audit event"),
            Err(e) => tracing::error!(
                target: AUDIT_TARGET,
                error = %e,
                id = %self.id,
                "failed to serialize audit event"
            ),
        }
    }
}
