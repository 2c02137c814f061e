use std::fmt::Write;

use crate::types::{EmergencyResult, Severity};

/// Static helpline directory embedded in every emergency message.
pub const EMERGENCY_HELPLINES: &[(&str, &str)] = &[
    ("112", "All Emergency Services"),
    ("108", "Medical Emergency/Ambulance"),
    ("104", "National Health Helpline"),
];

/// Render the user-facing emergency overlay text.
///
/// Returns an empty string when the analysis is not an emergency; the caller
/// shows nothing in that case.
pub fn format_emergency_message(result: &EmergencyResult) -> String {
    if !result.is_emergency {
        return String::new();
    }

    let banner = if result.severity == Severity::Critical {
        "🚨 CRITICAL EMERGENCY"
    } else {
        "⚠️ URGENT MEDICAL ATTENTION NEEDED"
    };

    let mut message = String::new();
    let _ = writeln!(message, "{banner}");
    let _ = writeln!(message);
    let _ = writeln!(message, "Based on your symptoms, you may need immediate medical care.");
    let _ = writeln!(message);
    let _ = writeln!(message, "🏥 {}", result.recommended_action);
    let _ = writeln!(message);
    let _ = writeln!(message, "📞 Emergency Helplines:");
    for (number, service) in EMERGENCY_HELPLINES {
        let _ = writeln!(message, "• {number} - {service}");
    }
    let _ = writeln!(message);
    let _ = write!(message, "⚠️ If symptoms worsen, call 112 immediately.");
    message
}
