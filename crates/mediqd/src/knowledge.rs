//! Static medical knowledge base.
//!
//! Three keyword taxonomies (symptoms, urgency tiers, condition types) plus
//! the symptom-category to department mapping. Read-only, wired at startup,
//! no mutation API. All keywords are stored lowercase; callers lowercase the
//! message once and scan with `matches`.

use anyhow::{bail, Result};

/// One category with its keyword list
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

/// One symptom category with its suggested departments
#[derive(Debug, Clone, Copy)]
pub struct DepartmentGroup {
    pub category: &'static str,
    pub departments: &'static [&'static str],
}

/// Symptom taxonomy: category -> keyword list
pub const SYMPTOM_TAXONOMY: &[KeywordGroup] = &[
    KeywordGroup {
        category: "respiratory",
        keywords: &[
            "cough",
            "breathing",
            "short of breath",
            "wheezing",
            "congestion",
            "sore throat",
        ],
    },
    KeywordGroup {
        category: "digestive",
        keywords: &[
            "stomach",
            "nausea",
            "nauseous",
            "vomit",
            "diarrhea",
            "constipation",
            "indigestion",
        ],
    },
    KeywordGroup {
        category: "cardiac",
        keywords: &["chest pain", "palpitation", "chest tightness", "racing heart"],
    },
    KeywordGroup {
        category: "neurological",
        keywords: &["headache", "dizziness", "dizzy", "migraine", "numbness", "seizure"],
    },
    KeywordGroup {
        category: "skin",
        keywords: &["rash", "itch", "acne", "swelling", "bruise"],
    },
    KeywordGroup {
        category: "pain",
        keywords: &["pain", "ache", "sore", "hurt", "cramp"],
    },
    KeywordGroup {
        category: "fever",
        keywords: &["fever", "temperature", "chills", "sweating"],
    },
];

/// Urgency taxonomy, scanned in declaration order (highest tier first).
/// Tier names must parse as `Urgency` values; `validate` checks this.
pub const URGENCY_TAXONOMY: &[KeywordGroup] = &[
    KeywordGroup {
        category: "emergency",
        keywords: &[
            "emergency",
            "severe",
            "critical",
            "unbearable",
            "can't breathe",
            "cannot breathe",
            "unconscious",
            "bleeding heavily",
            "heart attack",
            "stroke",
        ],
    },
    KeywordGroup {
        category: "urgent",
        keywords: &[
            "getting worse",
            "worsening",
            "high fever",
            "intense",
            "spreading",
            "persistent",
        ],
    },
    KeywordGroup {
        category: "non_urgent",
        keywords: &["mild", "slight", "minor", "occasional", "a little"],
    },
];

/// Condition-type taxonomy: type -> keyword list
pub const CONDITION_TAXONOMY: &[KeywordGroup] = &[
    KeywordGroup {
        category: "chronic",
        keywords: &["diabetes", "hypertension", "asthma", "arthritis"],
    },
    KeywordGroup {
        category: "infectious",
        keywords: &["flu", "covid", "infection", "common cold"],
    },
    KeywordGroup {
        category: "allergy",
        keywords: &["allergy", "allergic", "hay fever"],
    },
];

/// Symptom category -> suggested departments.
/// Every category here must exist in SYMPTOM_TAXONOMY.
pub const DEPARTMENT_MAP: &[DepartmentGroup] = &[
    DepartmentGroup {
        category: "respiratory",
        departments: &["Pulmonology", "ENT"],
    },
    DepartmentGroup {
        category: "digestive",
        departments: &["Gastroenterology"],
    },
    DepartmentGroup {
        category: "cardiac",
        departments: &["Cardiology"],
    },
    DepartmentGroup {
        category: "neurological",
        departments: &["Neurology"],
    },
    DepartmentGroup {
        category: "skin",
        departments: &["Dermatology"],
    },
    DepartmentGroup {
        category: "pain",
        departments: &["General Medicine", "Orthopedics"],
    },
    DepartmentGroup {
        category: "fever",
        departments: &["General Medicine"],
    },
];

/// Keyword match predicate - the single seam for the match semantics.
///
/// Case-insensitive substring match (both arguments must already be
/// lowercase), not word-boundary match. "painting" matches "pain". This
/// mirrors the portal's original behavior; swap here to change it globally.
pub fn matches(text: &str, keyword: &str) -> bool {
    text.contains(keyword)
}

/// Immutable handle over the static tables
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    symptoms: &'static [KeywordGroup],
    urgency_tiers: &'static [KeywordGroup],
    conditions: &'static [KeywordGroup],
    departments: &'static [DepartmentGroup],
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self {
            symptoms: SYMPTOM_TAXONOMY,
            urgency_tiers: URGENCY_TAXONOMY,
            conditions: CONDITION_TAXONOMY,
            departments: DEPARTMENT_MAP,
        }
    }

    /// Check table invariants. Run once at daemon startup.
    pub fn validate(&self) -> Result<()> {
        for group in self
            .symptoms
            .iter()
            .chain(self.urgency_tiers)
            .chain(self.conditions)
        {
            if group.keywords.is_empty() {
                bail!("keyword list for '{}' is empty", group.category);
            }
            for kw in group.keywords {
                if *kw != kw.to_lowercase() {
                    bail!("keyword '{}' in '{}' is not lowercase", kw, group.category);
                }
            }
        }

        for tier in self.urgency_tiers {
            if crate::urgency::Urgency::from_str(tier.category).is_none() {
                bail!("unknown urgency tier '{}'", tier.category);
            }
        }

        for mapping in self.departments {
            if mapping.departments.is_empty() {
                bail!("department list for '{}' is empty", mapping.category);
            }
            if !self.symptoms.iter().any(|g| g.category == mapping.category) {
                bail!(
                    "department mapping references unknown symptom category '{}'",
                    mapping.category
                );
            }
        }

        Ok(())
    }

    pub fn symptom_groups(&self) -> &'static [KeywordGroup] {
        self.symptoms
    }

    pub fn condition_groups(&self) -> &'static [KeywordGroup] {
        self.conditions
    }

    pub fn urgency_tiers(&self) -> &'static [KeywordGroup] {
        self.urgency_tiers
    }

    pub fn department_map(&self) -> &'static [DepartmentGroup] {
        self.departments
    }

    /// Departments suggested for one symptom category (empty if unmapped)
    pub fn departments_for(&self, category: &str) -> &'static [&'static str] {
        self.departments
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.departments)
            .unwrap_or(&[])
    }

    pub fn symptom_category_count(&self) -> usize {
        self.symptoms.len()
    }

    /// Count of distinct department names across the whole mapping
    pub fn known_department_count(&self) -> usize {
        let mut names: Vec<&str> = self
            .departments
            .iter()
            .flat_map(|g| g.departments.iter().copied())
            .collect();
        names.sort();
        names.dedup();
        names.len()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}
