//! Symptom advisor ("AI Doctor" demo section)
//!
//! Maps free-text symptom descriptions to one of seven canned advice strings
//! via ordered substring matching. Not medical intelligence: a fixed keyword
//! table checked in priority order, with a generic fallback.
//!
//! Total over all string inputs; no error paths.

use std::fmt;

/// Symptom categories, in matching priority order
///
/// When keywords from several categories are present, the first category in
/// this order wins; there is no combination or ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomCategory {
    Fever,
    Stress,
    Injury,
    Headache,
    ChestPain,
    Stomach,
}

/// Advice produced for a symptom description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    /// Empty/whitespace input: ask the user to describe symptoms first
    Prompt,
    /// A category's keywords matched
    Matched(SymptomCategory),
    /// No keywords matched: generic guidance
    General,
}

/// Keyword table, ordered by matching priority
const KEYWORDS: [(SymptomCategory, &[&str]); 6] = [
    (SymptomCategory::Fever, &["fever", "temperature"]),
    (SymptomCategory::Stress, &["stress", "anxiety", "worried"]),
    (SymptomCategory::Injury, &["injury", "wound", "cut"]),
    (SymptomCategory::Headache, &["headache", "head"]),
    (SymptomCategory::ChestPain, &["chest pain", "breathing"]),
    (SymptomCategory::Stomach, &["stomach", "nausea", "vomit"]),
];

const PROMPT_ADVICE: &str = "Please describe your symptoms first.";

const GENERAL_ADVICE: &str = "💡 General health advice: Monitor your symptoms closely. Stay hydrated, get adequate rest, and maintain good hygiene. If symptoms worsen or persist, consult a healthcare professional. For emergencies, call local emergency services.";

/// Produce advice for a free-text symptom description
///
/// Complexity: O(n·k) substring scan over the fixed keyword table
pub fn advise(symptoms: &str) -> Advice {
    if symptoms.trim().is_empty() {
        return Advice::Prompt;
    }

    let lower = symptoms.to_lowercase();
    for (category, keywords) in KEYWORDS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return Advice::Matched(category);
        }
    }

    Advice::General
}

impl Advice {
    /// Canned advice text for this outcome
    pub fn text(&self) -> &'static str {
        match self {
            Advice::Prompt => PROMPT_ADVICE,
            Advice::General => GENERAL_ADVICE,
            Advice::Matched(category) => category.advice_text(),
        }
    }
}

impl SymptomCategory {
    /// Canned advice text for this category
    pub fn advice_text(&self) -> &'static str {
        match self {
            SymptomCategory::Fever => "🌡️ For fever: Rest and drink plenty of fluids. Take acetaminophen or ibuprofen as directed. Monitor temperature regularly. Seek medical attention if fever exceeds 103°F (39.4°C) or persists for more than 3 days.",
            SymptomCategory::Stress => "🧘‍♀️ For stress/anxiety: Try deep breathing exercises (4-7-8 technique). Practice mindfulness or meditation. Get regular exercise and adequate sleep. Consider talking to a counselor if symptoms persist.",
            SymptomCategory::Injury => "🩹 For minor injuries: Clean wound with water, apply antiseptic, cover with bandage. For bleeding, apply direct pressure. For serious injuries, seek immediate medical attention.",
            SymptomCategory::Headache => "💊 For headaches: Rest in a quiet, dark room. Apply cold or warm compress. Stay hydrated. Consider over-the-counter pain relievers. Seek medical help for severe or persistent headaches.",
            SymptomCategory::ChestPain => "🚨 For chest pain or breathing difficulties: This could be serious. Sit upright, stay calm. If severe or accompanied by sweating, nausea, or arm pain, call emergency services immediately.",
            SymptomCategory::Stomach => "🤢 For stomach issues: Rest and avoid solid foods initially. Drink clear fluids like water or ginger tea. Try small amounts of bland foods (BRAT diet). Seek medical attention if symptoms worsen.",
        }
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymptomCategory::Fever => "fever",
            SymptomCategory::Stress => "stress/anxiety",
            SymptomCategory::Injury => "injury",
            SymptomCategory::Headache => "headache",
            SymptomCategory::ChestPain => "chest pain/breathing",
            SymptomCategory::Stomach => "stomach/nausea",
        };
        write!(f, "{}", name)
    }
}
