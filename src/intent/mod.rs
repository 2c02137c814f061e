//! Intent classification: medical complaint vs social/administrative chat.
//!
//! Pattern checks run before keyword counting so short social messages that
//! happen to contain an incidental medical-sounding word ("how are you") are
//! not routed to the medical-reasoning backend.

mod patterns;
mod responses;

pub use responses::non_medical_response;

use crate::types::{IntentCategory, IntentResult};

/// Keyword-density threshold above which a message is treated as
/// substantively medical even with a single distinct hit.
const MEDICAL_DENSITY_THRESHOLD: f32 = 0.3;

/// Classify a free-text chat message as medical or non-medical.
///
/// Total function: every input, including the empty string and non-Latin
/// scripts, produces a result. Deterministic except for the random pick among
/// interchangeable greeting replies.
pub fn classify_intent(message: &str) -> IntentResult {
    let normalized = message.trim().to_lowercase();

    if patterns::GREETING_PATTERN.is_match(&normalized) {
        return non_medical(
            IntentCategory::Greeting,
            0.9,
            Some(responses::random_greeting().to_string()),
        );
    }

    if patterns::IDENTITY_PATTERNS.iter().any(|p| p.is_match(&normalized)) {
        return non_medical(
            IntentCategory::Personal,
            0.9,
            Some(responses::IDENTITY_RESPONSE.to_string()),
        );
    }

    if patterns::MEMORY_PATTERNS.iter().any(|p| p.is_match(&normalized)) {
        return non_medical(
            IntentCategory::Personal,
            0.9,
            Some(responses::MEMORY_RESPONSE.to_string()),
        );
    }

    if patterns::GENERAL_PATTERNS.iter().any(|p| p.is_match(&normalized)) {
        return non_medical(IntentCategory::General, 0.8, None);
    }

    // No non-medical pattern matched: score medical vocabulary density.
    let keyword_hits = patterns::MEDICAL_KEYWORDS
        .iter()
        .filter(|kw| normalized.contains(**kw))
        .count();
    let word_count = normalized.split_whitespace().count().max(1);
    let density = keyword_hits as f32 / word_count as f32;

    let result = if keyword_hits >= 2 || density > MEDICAL_DENSITY_THRESHOLD {
        medical((0.5 + density).min(0.9))
    } else if keyword_hits == 1 {
        medical(0.6)
    } else if patterns::MEDICAL_QUESTION_PATTERNS.iter().any(|p| p.is_match(&normalized)) {
        medical(0.8)
    } else {
        non_medical(IntentCategory::General, 0.5, None)
    };

    tracing::debug!(
        category = ?result.category,
        confidence = result.confidence,
        keyword_hits,
        "intent classified"
    );
    result
}

fn non_medical(category: IntentCategory, confidence: f32, suggested: Option<String>) -> IntentResult {
    IntentResult {
        is_medical: false,
        confidence,
        category,
        suggested_response: suggested,
    }
}

fn medical(confidence: f32) -> IntentResult {
    IntentResult {
        is_medical: true,
        confidence,
        category: IntentCategory::Medical,
        suggested_response: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =================================================================
    // GREETINGS
    // =================================================================

    #[test]
    fn hello_is_greeting() {
        let result = classify_intent("Hello");
        assert_eq!(result.category, IntentCategory::Greeting);
        assert!(!result.is_medical);
        assert_eq!(result.confidence, 0.9);
        let reply = result.suggested_response.expect("greeting must carry a reply");
        assert!(!reply.is_empty());
    }

    #[test]
    fn greeting_reply_is_member_of_fixed_pool() {
        // Selection is random; assert set membership, not exact text.
        for _ in 0..20 {
            let result = classify_intent("good morning");
            let reply = result.suggested_response.unwrap();
            assert!(super::responses::GREETING_RESPONSES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn greeting_is_case_insensitive() {
        assert_eq!(classify_intent("HELLO").category, IntentCategory::Greeting);
        assert_eq!(classify_intent("  Hey  ").category, IntentCategory::Greeting);
    }

    #[test]
    fn greeting_prefix_beats_medical_keywords() {
        // First match wins: an anchored greeting pre-empts keyword scoring.
        let result = classify_intent("hi, my chest hurts");
        assert_eq!(result.category, IntentCategory::Greeting);
    }

    #[test]
    fn embedded_greeting_word_does_not_match() {
        let result = classify_intent("the doctor said hello and checked my fever and cough");
        assert_eq!(result.category, IntentCategory::Medical);
    }

    // =================================================================
    // PERSONAL: IDENTITY VS MEMORY
    // =================================================================

    #[test]
    fn what_is_your_name_is_identity() {
        let result = classify_intent("What is your name?");
        assert_eq!(result.category, IntentCategory::Personal);
        assert!(!result.is_medical);
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.suggested_response.as_deref(), Some(super::responses::IDENTITY_RESPONSE));
    }

    #[test]
    fn what_is_my_name_gets_memory_reply_not_identity() {
        let result = classify_intent("What is my name?");
        assert_eq!(result.category, IntentCategory::Personal);
        assert_eq!(result.suggested_response.as_deref(), Some(super::responses::MEMORY_RESPONSE));
    }

    #[test]
    fn who_are_you_is_identity() {
        let result = classify_intent("who are you exactly");
        assert_eq!(result.category, IntentCategory::Personal);
        assert_eq!(result.suggested_response.as_deref(), Some(super::responses::IDENTITY_RESPONSE));
    }

    #[test]
    fn do_you_remember_me_is_memory() {
        let result = classify_intent("do you remember me from yesterday");
        assert_eq!(result.category, IntentCategory::Personal);
        assert_eq!(result.suggested_response.as_deref(), Some(super::responses::MEMORY_RESPONSE));
    }

    // =================================================================
    // GENERAL NON-MEDICAL
    // =================================================================

    #[test]
    fn how_are_you_is_general_not_medical() {
        let result = classify_intent("how are you");
        assert_eq!(result.category, IntentCategory::General);
        assert!(!result.is_medical);
        assert_eq!(result.confidence, 0.8);
        assert!(result.suggested_response.is_none());
    }

    #[test]
    fn thanks_and_goodbye_are_general() {
        assert_eq!(classify_intent("thanks a lot").category, IntentCategory::General);
        assert_eq!(classify_intent("ok goodbye").category, IntentCategory::General);
    }

    #[test]
    fn weather_question_is_general() {
        let result = classify_intent("what is the weather like today");
        assert_eq!(result.category, IntentCategory::General);
        assert_eq!(result.confidence, 0.8);
    }

    // =================================================================
    // MEDICAL KEYWORD SCORING
    // =================================================================

    #[test]
    fn multi_symptom_message_is_medical() {
        let result = classify_intent("I have had a fever, cough, and sore throat for three days");
        assert_eq!(result.category, IntentCategory::Medical);
        assert!(result.is_medical);
        assert!(result.confidence > 0.5);
        assert!(result.suggested_response.is_none());
    }

    #[test]
    fn medical_confidence_caps_at_point_nine() {
        // Near-pure medical vocabulary drives density toward 1.0; the score
        // must still cap at 0.9.
        let result = classify_intent("fever cough headache nausea rash");
        assert_eq!(result.category, IntentCategory::Medical);
        assert!(result.confidence <= 0.9);
    }

    #[test]
    fn single_keyword_is_medium_confidence_medical() {
        let result = classify_intent("my knee has been bothering them since last week honestly");
        assert_eq!(result.category, IntentCategory::Medical);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn medical_question_form_without_keywords_is_medical() {
        let result = classify_intent("should i go see a doctor about this");
        assert!(result.is_medical);
        assert_eq!(result.category, IntentCategory::Medical);
    }

    #[test]
    fn category_medical_implies_is_medical() {
        for message in ["I have a fever", "is this serious", "fever cough sore throat"] {
            let result = classify_intent(message);
            if result.category == IntentCategory::Medical {
                assert!(result.is_medical, "invariant broken for: {message}");
                assert!(result.suggested_response.is_none());
            }
        }
    }

    // =================================================================
    // FALLBACK AND EDGE CASES
    // =================================================================

    #[test]
    fn empty_string_is_low_confidence_general() {
        let result = classify_intent("");
        assert_eq!(result.category, IntentCategory::General);
        assert!(!result.is_medical);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn whitespace_only_is_general() {
        let result = classify_intent("   \t  ");
        assert_eq!(result.category, IntentCategory::General);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn unrelated_chatter_falls_back_to_general() {
        let result = classify_intent("my favourite film won an award last night");
        assert_eq!(result.category, IntentCategory::General);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn classification_is_idempotent() {
        for message in ["I have a fever", "what is my name", "", "how are you"] {
            let a = classify_intent(message);
            let b = classify_intent(message);
            assert_eq!(a.category, b.category);
            assert_eq!(a.is_medical, b.is_medical);
            assert_eq!(a.confidence, b.confidence);
        }
    }

    #[test]
    fn non_latin_input_does_not_panic() {
        let result = classify_intent("मुझे बुखार है और सिर दर्द हो रहा है");
        // No English keyword matches; falls through to the general fallback.
        assert_eq!(result.category, IntentCategory::General);
    }
}
