//! Urgency assessment - severity tier from keyword presence.
//!
//! Tiers are scanned highest first, so a message mixing "severe" with "mild"
//! still classifies as emergency. Fail-safe bias toward the higher tier.

use crate::knowledge::{self, KnowledgeBase};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Emergency,
    Urgent,
    NonUrgent,
    Normal,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Emergency => "emergency",
            Self::Urgent => "urgent",
            Self::NonUrgent => "non_urgent",
            Self::Normal => "normal",
        };
        write!(f, "{}", s)
    }
}

impl Urgency {
    /// Parse from string (tier names in the knowledge base, corpus fixtures)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "emergency" => Some(Self::Emergency),
            "urgent" => Some(Self::Urgent),
            "non_urgent" => Some(Self::NonUrgent),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }
}

/// Assess message urgency. Returns `Normal` when no tier keyword matches.
pub fn assess_urgency(message: &str, kb: &KnowledgeBase) -> Urgency {
    let text = message.to_lowercase();

    for tier in kb.urgency_tiers() {
        if tier.keywords.iter().any(|kw| knowledge::matches(&text, kw)) {
            // Tier names are validated against the enum at startup
            return Urgency::from_str(tier.category).unwrap_or(Urgency::Normal);
        }
    }

    Urgency::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_keywords() {
        let kb = KnowledgeBase::new();
        assert_eq!(assess_urgency("severe chest pain", &kb), Urgency::Emergency);
        assert_eq!(assess_urgency("I can't breathe", &kb), Urgency::Emergency);
        assert_eq!(assess_urgency("he is unconscious", &kb), Urgency::Emergency);
    }

    #[test]
    fn test_higher_tier_wins_on_conflict() {
        let kb = KnowledgeBase::new();
        // Both "severe" (emergency) and "mild" (non_urgent) present
        assert_eq!(
            assess_urgency("a mild cough but severe headache", &kb),
            Urgency::Emergency
        );
        // "getting worse" (urgent) beats "occasional" (non_urgent)
        assert_eq!(
            assess_urgency("occasional pain that is getting worse", &kb),
            Urgency::Urgent
        );
    }

    #[test]
    fn test_non_urgent_tier() {
        let kb = KnowledgeBase::new();
        assert_eq!(assess_urgency("a mild rash", &kb), Urgency::NonUrgent);
    }

    #[test]
    fn test_default_is_normal() {
        let kb = KnowledgeBase::new();
        assert_eq!(assess_urgency("what are your opening hours", &kb), Urgency::Normal);
        assert_eq!(assess_urgency("", &kb), Urgency::Normal);
    }
}
