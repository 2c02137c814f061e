//! Rule-based triage for health-assistant chat messages.
//!
//! Two independent, pure classifiers over free text:
//!
//! - [`classify_intent`] decides whether a message is a medical complaint or
//!   social/administrative chat, so cheap canned replies can short-circuit
//!   the costly reasoning backend.
//! - [`analyze_emergency`] scans for medically urgent language across
//!   severity tiers (with multilingual emergency phrases) and produces an
//!   actionable severity verdict.
//!
//! [`triage`] combines both under a configurable [`TriagePolicy`] and tells
//! the caller what to do with the message: answer it directly, escalate to
//! the emergency UI, or forward it to the backend.
//!
//! Both classifiers are total functions: every input, including empty
//! strings and non-Latin scripts, yields a well-formed result. All keyword
//! and pattern tables are immutable statics, so concurrent calls are safe
//! without coordination.

pub mod emergency;
pub mod intent;
pub mod triage;
pub mod types;

pub use emergency::{
    analyze_emergency, format_emergency_message, has_multiple_emergency_indicators,
    severity_from_conditions, EMERGENCY_HELPLINES,
};
pub use intent::{classify_intent, non_medical_response};
pub use triage::{triage, PolicyError, TriageDecision, TriagePolicy};
pub use types::{AssessedCondition, EmergencyResult, IntentCategory, IntentResult, Severity};
