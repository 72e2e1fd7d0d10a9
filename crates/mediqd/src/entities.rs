//! Entity extraction - collects symptom and condition mentions.
//!
//! Every (category, keyword) pair with a hit emits one entity; there is no
//! dedup beyond the per-pair scan. An empty result is a valid outcome.

use crate::knowledge::{self, KnowledgeBase};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Symptom,
    Condition,
}

/// A recognized keyword mention, tagged with its taxonomy category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub category: String,
    pub keyword: String,
}

/// All entities extracted from one message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub symptoms: Vec<Entity>,
    pub conditions: Vec<Entity>,
}

impl ExtractedEntities {
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty() && self.conditions.is_empty()
    }
}

/// Scan a message against the symptom and condition taxonomies.
pub fn extract_entities(message: &str, kb: &KnowledgeBase) -> ExtractedEntities {
    let text = message.to_lowercase();

    let mut symptoms = Vec::new();
    for group in kb.symptom_groups() {
        for kw in group.keywords {
            if knowledge::matches(&text, kw) {
                symptoms.push(Entity {
                    kind: EntityKind::Symptom,
                    category: group.category.to_string(),
                    keyword: (*kw).to_string(),
                });
            }
        }
    }

    let mut conditions = Vec::new();
    for group in kb.condition_groups() {
        for kw in group.keywords {
            if knowledge::matches(&text, kw) {
                conditions.push(Entity {
                    kind: EntityKind::Condition,
                    category: group.category.to_string(),
                    keyword: (*kw).to_string(),
                });
            }
        }
    }

    ExtractedEntities { symptoms, conditions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_symptoms_by_category() {
        let kb = KnowledgeBase::new();
        let found = extract_entities("I feel nauseous and have stomach ache", &kb);

        let categories: Vec<&str> = found.symptoms.iter().map(|e| e.category.as_str()).collect();
        assert!(categories.contains(&"digestive"));
        assert!(categories.contains(&"pain"));
        assert!(found.conditions.is_empty());
    }

    #[test]
    fn test_multiple_keywords_emit_multiple_entities() {
        let kb = KnowledgeBase::new();
        let found = extract_entities("stomach pain with nausea and vomiting", &kb);

        // stomach, nausea, vomit all hit within digestive - one entity each
        let digestive = found
            .symptoms
            .iter()
            .filter(|e| e.category == "digestive")
            .count();
        assert!(digestive >= 3);
    }

    #[test]
    fn test_extracts_conditions() {
        let kb = KnowledgeBase::new();
        let found = extract_entities("I have asthma and a flu", &kb);

        let categories: Vec<&str> = found.conditions.iter().map(|e| e.category.as_str()).collect();
        assert!(categories.contains(&"chronic"));
        assert!(categories.contains(&"infectious"));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let kb = KnowledgeBase::new();
        let found = extract_entities("good morning", &kb);
        assert!(found.is_empty());
    }

    #[test]
    fn test_substring_semantics_preserved() {
        let kb = KnowledgeBase::new();
        // "painting" contains "pain" - known imprecision, kept on purpose
        let found = extract_entities("I was painting all day", &kb);
        assert!(found.symptoms.iter().any(|e| e.category == "pain"));
    }
}
