//! Severity-tier phrase tables. All entries are stored lowercase and matched
//! as substrings of the lowercased message.

/// Phrases that demand immediate emergency care. Any match forces
/// [`crate::types::Severity::Critical`].
pub(crate) const CRITICAL_KEYWORDS: &[&str] = &[
    // Cardiac / chest
    "chest pain", "heart attack", "cardiac arrest", "severe chest pain",
    "crushing chest pain", "chest tightness", "heart racing", "palpitations",
    // Breathing
    "can't breathe", "difficulty breathing", "shortness of breath", "gasping",
    "choking", "suffocating", "respiratory distress", "wheezing severely",
    // Neurological
    "stroke", "paralysis", "can't move", "slurred speech", "confusion",
    "severe headache", "sudden weakness", "facial drooping", "seizure",
    "unconscious", "fainting", "loss of consciousness",
    // Bleeding / trauma
    "severe bleeding", "heavy bleeding", "blood loss", "hemorrhage",
    "deep cut", "severe injury", "broken bone", "head injury",
    // Poisoning / overdose
    "poisoning", "overdose", "toxic", "swallowed poison", "drug overdose",
    // Severe pain
    "excruciating pain", "unbearable pain", "severe abdominal pain",
    "intense pain", "agonizing pain",
    // Other critical
    "allergic reaction", "anaphylaxis", "severe allergic", "swelling throat",
    "severe burn", "electric shock", "drowning", "hypothermia",
    "heat stroke", "severe dehydration",
];

/// Phrases that warrant urgent (same-day) attention. Scanned only when no
/// critical-tier phrase matched.
pub(crate) const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "severe pain", "high fever", "persistent vomiting", "severe diarrhea",
    "difficulty swallowing", "severe cough", "blood in urine", "blood in stool",
    "severe dizziness", "severe nausea", "severe headache", "blurred vision",
    "severe fatigue", "severe weakness", "severe abdominal pain",
    "persistent fever", "high temperature", "severe cold", "severe flu",
];

/// Common symptom words. Scanned only when the two higher tiers found
/// nothing.
pub(crate) const MEDIUM_PRIORITY_KEYWORDS: &[&str] = &[
    "pain", "fever", "headache", "nausea", "vomiting", "diarrhea",
    "cough", "cold", "flu", "tired", "weak", "dizzy", "sore throat",
    "runny nose", "congestion", "ache", "discomfort", "unwell",
];

/// Explicit calls for help across the three supported languages. Always
/// scanned; any match forces Critical regardless of tier outcome.
pub(crate) const EMERGENCY_PHRASES: &[&str] = &[
    // English
    "help me", "emergency", "urgent", "critical", "dying", "can't breathe",
    "severe pain", "call ambulance", "hospital now", "immediate help",
    // Hindi
    "मदद करो", "आपातकाल", "तुरंत", "गंभीर", "सांस नहीं आ रही", "तेज दर्द",
    "एम्बुलेंस बुलाओ", "अस्पताल", "तुरंत मदद",
    // Odia
    "ସାହାଯ୍ୟ କର", "ଜରୁରୀ", "ତୁରନ୍ତ", "ଗମ୍ଭୀର", "ନିଶ୍ୱାସ ନେଇ ପାରୁନି",
    "ତୀବ୍ର ଯନ୍ତ୍ରଣା", "ଆମ୍ବୁଲାନ୍ସ", "ହସ୍ପିଟାଲ",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tier_entries_are_lowercase() {
        for table in [CRITICAL_KEYWORDS, HIGH_PRIORITY_KEYWORDS, MEDIUM_PRIORITY_KEYWORDS] {
            for kw in table {
                assert_eq!(*kw, kw.to_lowercase(), "entry must be stored lowercase: {kw}");
            }
        }
    }

    #[test]
    fn no_empty_entries() {
        for table in [
            CRITICAL_KEYWORDS,
            HIGH_PRIORITY_KEYWORDS,
            MEDIUM_PRIORITY_KEYWORDS,
            EMERGENCY_PHRASES,
        ] {
            assert!(table.iter().all(|kw| !kw.trim().is_empty()));
        }
    }

    #[test]
    fn tier_tables_are_populated() {
        assert!(CRITICAL_KEYWORDS.len() >= 40);
        assert!(HIGH_PRIORITY_KEYWORDS.len() >= 15);
        assert!(MEDIUM_PRIORITY_KEYWORDS.len() >= 15);
        // English, Hindi and Odia phrase groups.
        assert!(EMERGENCY_PHRASES.len() >= 25);
    }
}
