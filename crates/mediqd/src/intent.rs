//! Intent classification - maps raw text to one coarse intent label.
//!
//! First keyword hit in declaration order wins; no match means `General`.
//! Total over any string input, no side effects.

use crate::knowledge;
use serde::{Deserialize, Serialize};

/// Coarse classification of what the patient wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SymptomCheck,
    Appointment,
    Emergency,
    Information,
    Location,
    Timing,
    Cost,
    General,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SymptomCheck => "symptom_check",
            Self::Appointment => "appointment",
            Self::Emergency => "emergency",
            Self::Information => "information",
            Self::Location => "location",
            Self::Timing => "timing",
            Self::Cost => "cost",
            Self::General => "general",
        };
        write!(f, "{}", s)
    }
}

impl Intent {
    /// Parse from string (for corpus fixtures)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "symptom_check" => Some(Self::SymptomCheck),
            "appointment" => Some(Self::Appointment),
            "emergency" => Some(Self::Emergency),
            "information" => Some(Self::Information),
            "location" => Some(Self::Location),
            "timing" => Some(Self::Timing),
            "cost" => Some(Self::Cost),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

/// Ordered intent keyword table. Declaration order breaks ties: the first
/// list with a hit wins. `General` has no keywords; it is the fallback.
///
/// Every keyword under `Emergency` must also appear in the emergency urgency
/// tier, so the urgency short-circuit always fires first for those messages.
pub const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::SymptomCheck,
        &["symptom", "feel", "suffering", "experiencing", "sick", "unwell", "hurt"],
    ),
    (
        Intent::Appointment,
        &["appointment", "book", "schedule", "reserve", "see a doctor"],
    ),
    (
        Intent::Emergency,
        &["emergency", "unconscious", "bleeding heavily"],
    ),
    (
        Intent::Information,
        &["information", "tell me about", "details about", "do you offer"],
    ),
    (
        Intent::Location,
        &["where", "location", "address", "directions", "how do i get"],
    ),
    (
        Intent::Timing,
        &["hours", "open", "timing", "closing", "available on"],
    ),
    (
        Intent::Cost,
        &["cost", "price", "fee", "charge", "insurance", "payment"],
    ),
];

/// Classify a message to an intent. Never fails.
pub fn classify_intent(message: &str) -> Intent {
    let text = message.to_lowercase();

    for (intent, keywords) in INTENT_KEYWORDS {
        if keywords.iter().any(|kw| knowledge::matches(&text, kw)) {
            return *intent;
        }
    }

    Intent::General
}
