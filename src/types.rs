use serde::{Deserialize, Serialize};

/// Urgency ranking for a triage verdict.
///
/// Totally ordered: `Low < Medium < High < Critical`. Once a scan has reached
/// a level, later matches may only hold or raise it, never lower it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Fixed user-facing instruction keyed 1:1 to the severity level.
    pub fn recommended_action(&self) -> &'static str {
        match self {
            Severity::Critical => "IMMEDIATE EMERGENCY: Call 112 or visit emergency room NOW",
            Severity::High => "URGENT: Seek medical attention within 2-4 hours",
            Severity::Medium => "Consult healthcare provider within 24-48 hours",
            Severity::Low => "Monitor symptoms and consult doctor if they persist",
        }
    }

    /// High and Critical warrant the emergency path.
    pub fn is_emergency(&self) -> bool {
        *self >= Severity::High
    }
}

/// What kind of message the intent classifier judged this to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentCategory {
    /// Substantively about a health complaint or medical question.
    Medical,
    /// Anything else without a more specific bucket (also the fallback).
    General,
    /// Conversational opener ("hi", "good morning", ...).
    Greeting,
    /// Identity or memory question aimed at the assistant itself.
    Personal,
    /// Question about how to use the surrounding application.
    Technical,
}

/// Verdict of the intent classifier for one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    /// Whether the message requires medical-domain handling.
    pub is_medical: bool,
    /// In [0, 1]. A heuristic score, not a calibrated probability.
    pub confidence: f32,
    pub category: IntentCategory,
    /// Canned reply for known non-medical patterns. Set only for
    /// Greeting/Personal, never for Medical.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_response: Option<String>,
}

/// Verdict of the emergency severity analyzer for one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyResult {
    /// True iff `severity` is High or Critical.
    pub is_emergency: bool,
    pub severity: Severity,
    /// Every literal phrase that matched, deduplicated.
    pub detected_keywords: Vec<String>,
    /// Saturating sum of per-tier match weights, clamped to 1.0.
    pub confidence: f32,
    /// Fixed instruction derived from `severity`.
    pub recommended_action: String,
}

/// One row of an external AI symptom analysis, carrying its own severity
/// vocabulary ("Mild"/"Moderate"/"Severe"). Reconciled into [`Severity`] by
/// [`crate::emergency::severity_from_conditions`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessedCondition {
    #[serde(default)]
    pub name: String,
    pub severity: String,
}
