//! Caller-side routing policy: canned reply, emergency escalation, or
//! forward to the medical-reasoning backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emergency::{analyze_emergency, format_emergency_message};
use crate::intent::{classify_intent, non_medical_response};
use crate::types::{EmergencyResult, IntentCategory, IntentResult, Severity};

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("non-medical reply threshold must be within 0.0..=1.0, got {0}")]
    ThresholdOutOfRange(f32),
}

/// Tunable routing thresholds. System-level policy, not part of the
/// classifiers themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriagePolicy {
    /// Non-medical verdicts above this confidence are answered with a canned
    /// reply instead of reaching the backend.
    pub non_medical_reply_threshold: f32,
    /// Whether a critical emergency skips the backend entirely.
    pub short_circuit_critical: bool,
}

impl Default for TriagePolicy {
    fn default() -> Self {
        Self {
            non_medical_reply_threshold: 0.7,
            short_circuit_critical: true,
        }
    }
}

impl TriagePolicy {
    /// Override the canned-reply threshold. Rejects values outside [0, 1].
    pub fn with_threshold(threshold: f32) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&threshold) || threshold.is_nan() {
            return Err(PolicyError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            non_medical_reply_threshold: threshold,
            ..Self::default()
        })
    }
}

/// What the caller should do with a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum TriageDecision {
    /// Non-medical short-circuit: reply with `text`, skip the backend.
    Respond {
        text: String,
        category: IntentCategory,
        confidence: f32,
    },
    /// Emergency language detected: surface `message` in the emergency UI.
    /// When `skip_backend` is set the reasoning call is dropped entirely.
    Escalate {
        emergency: EmergencyResult,
        message: String,
        skip_backend: bool,
    },
    /// Hand the message to the medical-reasoning backend, with both analyses
    /// attached for the caller's own bookkeeping.
    Forward {
        intent: IntentResult,
        emergency: EmergencyResult,
    },
}

/// Run both classifiers and apply the routing policy.
pub fn triage(message: &str, policy: &TriagePolicy) -> TriageDecision {
    let intent = classify_intent(message);

    if !intent.is_medical && intent.confidence > policy.non_medical_reply_threshold {
        let text = non_medical_response(&intent, message);
        tracing::debug!(category = ?intent.category, "short-circuiting with canned reply");
        return TriageDecision::Respond {
            text,
            category: intent.category,
            confidence: intent.confidence,
        };
    }

    let emergency = analyze_emergency(message);
    if emergency.is_emergency {
        let rendered = format_emergency_message(&emergency);
        let skip_backend =
            emergency.severity == Severity::Critical && policy.short_circuit_critical;
        tracing::debug!(severity = ?emergency.severity, skip_backend, "escalating to emergency path");
        return TriageDecision::Escalate {
            emergency,
            message: rendered,
            skip_backend,
        };
    }

    TriageDecision::Forward { intent, emergency }
}
