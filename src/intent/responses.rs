use rand::seq::SliceRandom;

use crate::types::{IntentCategory, IntentResult};

/// Interchangeable greeting replies; one is picked uniformly at random.
pub(crate) const GREETING_RESPONSES: &[&str] = &[
    "Hello! I'm your AI health assistant. How can I help you today?",
    "Hi there! I'm here to help with any health questions or concerns you might have.",
    "Good to see you! What can I help you with regarding your health today?",
];

pub(crate) const IDENTITY_RESPONSE: &str =
    "I'm an AI-powered health assistant, built to help you make sense of medical questions \
     and health concerns. What can I help you with today?";

pub(crate) const MEMORY_RESPONSE: &str =
    "I can only remember our current conversation. For your privacy, nothing you share is \
     stored between sessions, so if you'd like personalised guidance, please include the \
     relevant details in this chat.";

const NAME_RESPONSE: &str =
    "I don't have access to your personal information unless you share it with me during our \
     conversation. How can I help you with your health today?";

const GENERAL_REDIRECT: &str =
    "I'm designed specifically for medical questions and health concerns. If you have a \
     health-related question I'd be happy to help; for anything else, a general-purpose \
     assistant is a better fit.";

const TECHNICAL_REDIRECT: &str =
    "I focus on health guidance. For questions about using the app itself, please check the \
     help section or contact support. Is there anything health-related I can help you with?";

const DEFAULT_REDIRECT: &str =
    "I'm here to help with health and medical questions. What can I assist you with today?";

pub(crate) fn random_greeting() -> &'static str {
    GREETING_RESPONSES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GREETING_RESPONSES[0])
}

/// Canned reply the caller short-circuits with for a non-medical message.
///
/// Prefers the classifier's own `suggested_response`; otherwise falls back to
/// a fixed per-category text. Personal questions mentioning "name" get the
/// no-personal-data reply rather than the identity blurb.
pub fn non_medical_response(intent: &IntentResult, message: &str) -> String {
    if let Some(response) = &intent.suggested_response {
        return response.clone();
    }

    match intent.category {
        IntentCategory::Greeting => random_greeting().to_string(),
        IntentCategory::Personal => {
            if message.to_lowercase().contains("name") {
                NAME_RESPONSE.to_string()
            } else {
                IDENTITY_RESPONSE.to_string()
            }
        }
        IntentCategory::General => GENERAL_REDIRECT.to_string(),
        IntentCategory::Technical => TECHNICAL_REDIRECT.to_string(),
        IntentCategory::Medical => DEFAULT_REDIRECT.to_string(),
    }
}
