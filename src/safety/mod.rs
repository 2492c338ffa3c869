//! Keyword-based safety triage.
//!
//! [`triage_safety`] is a severity-first cascade, not a scored classifier.
//! Rules are checked in a fixed order and the first match decides:
//!
//! | # | Rule | Level |
//! |---|------|-------|
//! | 1 | crisis (self-harm, suicide) | critical |
//! | 2 | abuse or violence | critical |
//! | 3 | emotional dependency on the assistant | warning |
//! | 4 | medical advice request | warning |
//! | 5 | legal advice request | warning |
//! | 6 | conversation longer than [`LONG_CONVERSATION_THRESHOLD`] | warning |
//! | 7 | otherwise | safe |
//!
//! A message with both a crisis term and a legal term is always critical.
//! Triage must run before any response is generated; a critical verdict
//! preempts emotion analysis entirely.

pub mod keywords;
pub mod messages;

use serde::{Deserialize, Serialize};

use crate::emotion::lexicon::Triggers;

/// Conversations with more messages than this get a dependency warning.
pub const LONG_CONVERSATION_THRESHOLD: usize = 100;

/// Severity of a triage verdict, ordered `Safe < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    Safe,
    Warning,
    Critical,
    /// Reserved. No current rule emits it.
    RedirectNeeded,
}

impl SafetyLevel {
    /// Wire name, e.g. `"redirect_needed"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::RedirectNeeded => "redirect_needed",
        }
    }
}

impl std::fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which cascade rule produced a non-safe verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Crisis,
    Abuse,
    Dependency,
    Medical,
    Legal,
    LongConversation,
}

/// Directive for the caller, rendered as a fixed upper-case string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyAction {
    #[serde(rename = "PROCEED NORMALLY")]
    ProceedNormally,
    #[serde(rename = "IMMEDIATE INTERVENTION REQUIRED")]
    ImmediateIntervention,
    #[serde(rename = "PROVIDE RESOURCES")]
    ProvideResources,
    #[serde(rename = "GENTLY REDIRECT TO HUMAN SUPPORT")]
    RedirectToHumanSupport,
    #[serde(rename = "REDIRECT TO MEDICAL PROFESSIONAL")]
    RedirectToMedicalProfessional,
    #[serde(rename = "REDIRECT TO LEGAL PROFESSIONAL")]
    RedirectToLegalProfessional,
    #[serde(rename = "ENCOURAGE PROFESSIONAL SUPPORT")]
    EncourageProfessionalSupport,
}

impl SafetyAction {
    /// Directive string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProceedNormally => "PROCEED NORMALLY",
            Self::ImmediateIntervention => "IMMEDIATE INTERVENTION REQUIRED",
            Self::ProvideResources => "PROVIDE RESOURCES",
            Self::RedirectToHumanSupport => "GENTLY REDIRECT TO HUMAN SUPPORT",
            Self::RedirectToMedicalProfessional => "REDIRECT TO MEDICAL PROFESSIONAL",
            Self::RedirectToLegalProfessional => "REDIRECT TO LEGAL PROFESSIONAL",
            Self::EncourageProfessionalSupport => "ENCOURAGE PROFESSIONAL SUPPORT",
        }
    }
}

impl std::fmt::Display for SafetyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage verdict for one message.
///
/// `redirect_message` is `Some` exactly when `level` is warning or critical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyAnalysis {
    pub level: SafetyLevel,
    /// Human-readable diagnostic.
    pub reason: String,
    pub action: SafetyAction,
    pub redirect_message: Option<String>,
    /// Rule that fired; `None` for safe verdicts.
    #[serde(default)]
    pub category: Option<RiskCategory>,
}

impl SafetyAnalysis {
    fn safe() -> Self {
        Self {
            level: SafetyLevel::Safe,
            reason: "No safety concerns detected".to_owned(),
            action: SafetyAction::ProceedNormally,
            redirect_message: None,
            category: None,
        }
    }

    fn flagged(category: RiskCategory) -> Self {
        let (level, reason, action, message) = match category {
            RiskCategory::Crisis => (
                SafetyLevel::Critical,
                "Possible suicidal ideation or self-harm risk detected",
                SafetyAction::ImmediateIntervention,
                messages::CRISIS,
            ),
            RiskCategory::Abuse => (
                SafetyLevel::Critical,
                "Possible abuse or violence situation detected",
                SafetyAction::ProvideResources,
                messages::ABUSE,
            ),
            RiskCategory::Dependency => (
                SafetyLevel::Warning,
                "Signs of emotional dependency on AI detected",
                SafetyAction::RedirectToHumanSupport,
                messages::DEPENDENCY,
            ),
            RiskCategory::Medical => (
                SafetyLevel::Warning,
                "Medical advice request detected",
                SafetyAction::RedirectToMedicalProfessional,
                messages::MEDICAL,
            ),
            RiskCategory::Legal => (
                SafetyLevel::Warning,
                "Legal advice request detected",
                SafetyAction::RedirectToLegalProfessional,
                messages::LEGAL,
            ),
            RiskCategory::LongConversation => (
                SafetyLevel::Warning,
                "Very long conversation - possible dependency forming",
                SafetyAction::EncourageProfessionalSupport,
                messages::LONG_CONVERSATION,
            ),
        };
        Self {
            level,
            reason: reason.to_owned(),
            action,
            redirect_message: Some(message.to_owned()),
            category: Some(category),
        }
    }

    /// Whether this verdict must preempt normal processing.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.level == SafetyLevel::Critical
    }

    /// Whether this verdict is anything other than safe.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.level != SafetyLevel::Safe
    }
}

/// Keyword rules in cascade order.
const KEYWORD_RULES: [(RiskCategory, Triggers); 5] = [
    (RiskCategory::Crisis, keywords::CRISIS),
    (RiskCategory::Abuse, keywords::ABUSE),
    (RiskCategory::Dependency, keywords::DEPENDENCY),
    (RiskCategory::Medical, keywords::MEDICAL),
    (RiskCategory::Legal, keywords::LEGAL),
];

/// Triage `text` for safety risk.
///
/// `conversation_length` is the number of messages already exchanged; it
/// only matters when no keyword rule fires. Never fails: empty text is safe.
#[must_use]
pub fn triage_safety(text: &str, conversation_length: usize) -> SafetyAnalysis {
    let lower = text.to_lowercase();

    let keyword_hit = KEYWORD_RULES
        .iter()
        .find(|(_, table)| keywords::contains_any(&lower, *table))
        .map(|(category, _)| *category);

    if let Some(category) = keyword_hit {
        return SafetyAnalysis::flagged(category);
    }
    if conversation_length > LONG_CONVERSATION_THRESHOLD {
        return SafetyAnalysis::flagged(RiskCategory::LongConversation);
    }
    SafetyAnalysis::safe()
}
