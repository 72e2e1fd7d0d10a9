//! Department recommendation from extracted symptom categories.

use crate::entities::Entity;
use crate::knowledge::KnowledgeBase;

/// Map symptom entities to suggested departments: union across categories,
/// duplicates removed, first-seen order preserved. Empty in, empty out.
pub fn recommend(symptoms: &[Entity], kb: &KnowledgeBase) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for entity in symptoms {
        for dept in kb.departments_for(&entity.category) {
            if !out.iter().any(|d| d == dept) {
                out.push((*dept).to_string());
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntityKind;

    fn symptom(category: &str) -> Entity {
        Entity {
            kind: EntityKind::Symptom,
            category: category.to_string(),
            keyword: "x".to_string(),
        }
    }

    #[test]
    fn test_union_dedup_first_seen_order() {
        let kb = KnowledgeBase::new();
        let symptoms = vec![symptom("respiratory"), symptom("respiratory"), symptom("skin")];

        let depts = recommend(&symptoms, &kb);
        assert_eq!(depts, vec!["Pulmonology", "ENT", "Dermatology"]);
    }

    #[test]
    fn test_shared_department_listed_once() {
        let kb = KnowledgeBase::new();
        // pain and fever both map to General Medicine
        let symptoms = vec![symptom("pain"), symptom("fever")];

        let depts = recommend(&symptoms, &kb);
        assert_eq!(depts, vec!["General Medicine", "Orthopedics"]);
    }

    #[test]
    fn test_empty_input_empty_output() {
        let kb = KnowledgeBase::new();
        assert!(recommend(&[], &kb).is_empty());
    }

    #[test]
    fn test_unknown_category_contributes_nothing() {
        let kb = KnowledgeBase::new();
        let depts = recommend(&[symptom("no_such_category"), symptom("cardiac")], &kb);
        assert_eq!(depts, vec!["Cardiology"]);
    }
}
