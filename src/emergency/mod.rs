//! Emergency severity analysis over free-text messages.
//!
//! Runs independently of intent classification, as a safety net: even a
//! message already judged medical is scanned again for urgent language
//! before anything is forwarded to the reasoning backend.
//!
//! Tier gating is deliberate severity dominance: high-priority phrases are
//! only scanned when no critical phrase matched, and medium-priority words
//! only when both higher tiers found nothing. A high-tier match therefore
//! suppresses medium-tier keyword entries and confidence contributions
//! entirely. The multilingual phrase list is the one exception and is always
//! scanned; any match forces Critical.

mod format;
mod keywords;

pub use format::{format_emergency_message, EMERGENCY_HELPLINES};

use std::collections::HashSet;

use crate::types::{AssessedCondition, EmergencyResult, Severity};

/// Per-match confidence contribution for each tier.
const CRITICAL_WEIGHT: f32 = 0.9;
const HIGH_WEIGHT: f32 = 0.7;
const MEDIUM_WEIGHT: f32 = 0.4;
const PHRASE_WEIGHT: f32 = 0.95;

/// Scan a message for medically urgent language.
///
/// Pure and total: any input, in any script, yields a well-formed result;
/// unmatched input lands on `Severity::Low`.
pub fn analyze_emergency(message: &str) -> EmergencyResult {
    let normalized = message.to_lowercase();
    let mut detected: Vec<String> = Vec::new();
    let mut severity = Severity::Low;
    let mut confidence = 0.0f32;

    for keyword in keywords::CRITICAL_KEYWORDS {
        if normalized.contains(keyword) {
            detected.push((*keyword).to_string());
            severity = Severity::Critical;
            confidence += CRITICAL_WEIGHT;
        }
    }

    if severity != Severity::Critical {
        for keyword in keywords::HIGH_PRIORITY_KEYWORDS {
            if normalized.contains(keyword) {
                detected.push((*keyword).to_string());
                severity = Severity::High;
                confidence += HIGH_WEIGHT;
            }
        }
    }

    if severity == Severity::Low {
        for keyword in keywords::MEDIUM_PRIORITY_KEYWORDS {
            if normalized.contains(keyword) {
                detected.push((*keyword).to_string());
                severity = Severity::Medium;
                confidence += MEDIUM_WEIGHT;
            }
        }
    }

    // Explicit calls for help override whatever the tiers concluded.
    for phrase in keywords::EMERGENCY_PHRASES {
        if normalized.contains(phrase) {
            detected.push((*phrase).to_string());
            severity = Severity::Critical;
            confidence += PHRASE_WEIGHT;
        }
    }

    confidence = confidence.min(1.0);

    let mut seen = HashSet::new();
    detected.retain(|keyword| seen.insert(keyword.clone()));

    let is_emergency = severity.is_emergency();
    if severity == Severity::Critical {
        tracing::warn!(keywords = ?detected, confidence, "critical emergency language detected");
    } else {
        tracing::debug!(?severity, matches = detected.len(), "emergency scan complete");
    }

    EmergencyResult {
        is_emergency,
        severity,
        detected_keywords: detected,
        confidence,
        recommended_action: severity.recommended_action().to_string(),
    }
}

/// Corroboration signal for auto-escalation: at least two distinct phrase
/// hits and a near-saturated confidence.
pub fn has_multiple_emergency_indicators(message: &str) -> bool {
    let analysis = analyze_emergency(message);
    analysis.detected_keywords.len() >= 2 && analysis.confidence > 0.8
}

/// Reconcile the external AI assessment vocabulary ("Mild"/"Moderate"/
/// "Severe") into the triage [`Severity`] scale.
///
/// Empty input maps to `Low`; any "Severe" row forces `Critical`, any
/// "Moderate" forces `High`, and everything else (including unrecognized
/// labels) lands on `Medium`.
pub fn severity_from_conditions(conditions: &[AssessedCondition]) -> Severity {
    if conditions.is_empty() {
        return Severity::Low;
    }

    let has_label = |label: &str| {
        conditions
            .iter()
            .any(|c| c.severity.eq_ignore_ascii_case(label))
    };

    if has_label("Severe") {
        Severity::Critical
    } else if has_label("Moderate") {
        Severity::High
    } else {
        Severity::Medium
    }
}
