use std::sync::LazyLock;

use regex::Regex;

// All patterns here are matched against normalized text (trimmed, lowercased),
// so they are written lowercase without `(?i)`.

/// Conversational openers. Anchored at the start of the message so greeting
/// words buried inside longer medical sentences do not pre-empt
/// classification.
pub(crate) static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(hi|hello|hey|good morning|good afternoon|good evening)\b")
});

/// Questions about who the assistant is.
pub(crate) static IDENTITY_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![compile(r"what.*your.*name"), compile(r"who.*are.*you")]);

/// Questions about what the assistant remembers about the user.
pub(crate) static MEMORY_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![compile(r"what.*my.*name"), compile(r"remember.*me")]);

/// Generic small-talk and app-usage patterns with no medical content.
pub(crate) static GENERAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"what.*time"),
        compile(r"what.*weather"),
        compile(r"how.*are.*you"),
        compile(r"thank.*you"),
        compile(r"thanks"),
        compile(r"bye"),
        compile(r"goodbye"),
        compile(r"how.*app.*work"),
        compile(r"how.*use"),
        compile(r"help.*navigate"),
        compile(r"features"),
    ]
});

/// Explicit medical question forms, checked only when no keyword matched.
pub(crate) static MEDICAL_QUESTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"should.*see.*doctor"),
        compile(r"is.*this.*normal"),
        compile(r"what.*could.*this.*be"),
        compile(r"how.*to.*treat"),
        compile(r"when.*to.*worry"),
        compile(r"is.*this.*serious"),
        compile(r"medical.*advice"),
        compile(r"health.*concern"),
    ]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid intent pattern")
}

/// Medical-domain vocabulary, matched as case-insensitive substrings of the
/// normalized message. Hit count and density drive the medical verdict.
pub(crate) const MEDICAL_KEYWORDS: &[&str] = &[
    // Symptoms
    "pain", "ache", "hurt", "fever", "headache", "nausea", "vomit", "dizzy", "tired", "fatigue",
    "cough", "cold", "flu", "sore throat", "runny nose", "congestion", "sneeze",
    "rash", "itch", "swelling", "bruise", "cut", "wound", "bleeding", "burn",
    "chest pain", "shortness of breath", "difficulty breathing", "palpitations",
    "stomach ache", "abdominal pain", "diarrhea", "constipation", "heartburn",
    "back pain", "joint pain", "muscle pain", "cramp", "sprain",
    "anxiety", "depression", "stress", "insomnia", "sleep problems",
    // Clinical terms
    "symptom", "diagnosis", "treatment", "medicine", "medication", "prescription",
    "doctor", "hospital", "clinic", "emergency", "urgent care",
    "blood pressure", "diabetes", "cholesterol", "heart disease", "cancer",
    "infection", "virus", "bacteria", "allergy", "asthma",
    "pregnancy", "menstruation", "period", "contraception",
    // Body parts
    "head", "neck", "shoulder", "arm", "hand", "finger", "chest", "back",
    "stomach", "abdomen", "leg", "knee", "foot", "toe", "eye", "ear", "nose", "mouth", "throat",
    // Question phrases
    "should i see a doctor", "is this normal", "what could this be", "how to treat",
    "when to worry", "is this serious", "medical advice", "health concern",
];
