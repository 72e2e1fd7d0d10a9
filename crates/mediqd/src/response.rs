//! Response generation - one-shot decision branches over (intent, entities,
//! urgency). Stateless beyond its inputs and total: every combination
//! reaches exactly one return.

use crate::departments;
use crate::entities::ExtractedEntities;
use crate::intent::Intent;
use crate::knowledge::KnowledgeBase;
use crate::urgency::Urgency;
use serde::{Deserialize, Serialize};

/// UI affordance the caller should offer alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseAction {
    EmergencyAlert,
    SuggestDepartment,
    StartBooking,
    PromptSymptoms,
    ShowInfoOptions,
    ShowMenu,
}

impl std::fmt::Display for ResponseAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::EmergencyAlert => "emergency_alert",
            Self::SuggestDepartment => "suggest_department",
            Self::StartBooking => "start_booking",
            Self::PromptSymptoms => "prompt_symptoms",
            Self::ShowInfoOptions => "show_info_options",
            Self::ShowMenu => "show_menu",
        };
        write!(f, "{}", s)
    }
}

impl ResponseAction {
    /// Parse from string (for corpus fixtures)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "emergency_alert" => Some(Self::EmergencyAlert),
            "suggest_department" => Some(Self::SuggestDepartment),
            "start_booking" => Some(Self::StartBooking),
            "prompt_symptoms" => Some(Self::PromptSymptoms),
            "show_info_options" => Some(Self::ShowInfoOptions),
            "show_menu" => Some(Self::ShowMenu),
            _ => None,
        }
    }
}

/// Structured reply from the response generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub action: ResponseAction,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<String>>,
}

/// Fixed quick actions attached to the emergency alert
pub const EMERGENCY_SUGGESTIONS: [&str; 3] =
    ["Call Emergency", "Show Nearest ER", "View Emergency Guidelines"];

fn suggestions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Produce the structured reply for one classified message.
///
/// The emergency urgency branch takes absolute priority over intent. The
/// `Intent::Emergency` match arm below is unreachable in practice because
/// every emergency intent keyword is also an emergency urgency keyword;
/// keeping it in the catch-all arm keeps the match exhaustive without a
/// wildcard.
pub fn generate_response(
    intent: Intent,
    entities: &ExtractedEntities,
    urgency: Urgency,
    kb: &KnowledgeBase,
    emergency_number: &str,
) -> ChatResponse {
    if urgency == Urgency::Emergency {
        return ChatResponse {
            message: format!(
                "This may be a medical emergency. Please call {} immediately \
                 or go to the nearest emergency department.",
                emergency_number
            ),
            action: ResponseAction::EmergencyAlert,
            suggestions: suggestions(&EMERGENCY_SUGGESTIONS),
            departments: None,
        };
    }

    match intent {
        Intent::SymptomCheck => {
            if entities.symptoms.is_empty() {
                ChatResponse {
                    message: "I'd like to help. Could you describe your symptoms \
                              in a bit more detail?"
                        .to_string(),
                    action: ResponseAction::PromptSymptoms,
                    suggestions: suggestions(&[
                        "Describe Symptoms",
                        "Book Appointment",
                        "Talk to Staff",
                    ]),
                    departments: None,
                }
            } else {
                let recommended = departments::recommend(&entities.symptoms, kb);
                ChatResponse {
                    message: format!(
                        "Based on your symptoms, you may want to consult: {}.",
                        recommended.join(", ")
                    ),
                    action: ResponseAction::SuggestDepartment,
                    suggestions: suggestions(&[
                        "Book Appointment",
                        "View Departments",
                        "Describe More Symptoms",
                    ]),
                    departments: Some(recommended),
                }
            }
        }
        Intent::Appointment => ChatResponse {
            message: "I can help you book an appointment. Which department or \
                      doctor would you like to see?"
                .to_string(),
            action: ResponseAction::StartBooking,
            suggestions: suggestions(&["Choose Department", "Choose Doctor", "View Free Slots"]),
            departments: None,
        },
        Intent::Information => ChatResponse {
            message: "What information are you looking for?".to_string(),
            action: ResponseAction::ShowInfoOptions,
            suggestions: suggestions(&["Departments", "Doctors", "Visiting Hours", "Services"]),
            departments: None,
        },
        Intent::Emergency
        | Intent::Location
        | Intent::Timing
        | Intent::Cost
        | Intent::General => ChatResponse {
            message: "I can help you check symptoms, book appointments, or find \
                      hospital information. What would you like to do?"
                .to_string(),
            action: ResponseAction::ShowMenu,
            suggestions: suggestions(&[
                "Check Symptoms",
                "Book Appointment",
                "Hospital Information",
            ]),
            departments: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::extract_entities;

    const NUMBER: &str = "911";

    #[test]
    fn test_emergency_overrides_intent() {
        let kb = KnowledgeBase::new();
        let entities = ExtractedEntities::default();

        for intent in [Intent::SymptomCheck, Intent::Appointment, Intent::General] {
            let resp = generate_response(intent, &entities, Urgency::Emergency, &kb, NUMBER);
            assert_eq!(resp.action, ResponseAction::EmergencyAlert);
            assert!(resp.message.starts_with("This may be a medical emergency"));
            assert!(resp.message.contains("911"));
            assert_eq!(
                resp.suggestions,
                vec!["Call Emergency", "Show Nearest ER", "View Emergency Guidelines"]
            );
        }
    }

    #[test]
    fn test_symptom_check_without_entities_prompts() {
        let kb = KnowledgeBase::new();
        let resp = generate_response(
            Intent::SymptomCheck,
            &ExtractedEntities::default(),
            Urgency::Normal,
            &kb,
            NUMBER,
        );
        assert_eq!(resp.action, ResponseAction::PromptSymptoms);
        assert!(resp.departments.is_none());
    }

    #[test]
    fn test_symptom_check_with_entities_suggests_departments() {
        let kb = KnowledgeBase::new();
        let entities = extract_entities("a nasty cough and a rash", &kb);
        let resp = generate_response(Intent::SymptomCheck, &entities, Urgency::Normal, &kb, NUMBER);

        assert_eq!(resp.action, ResponseAction::SuggestDepartment);
        let depts = resp.departments.unwrap();
        assert_eq!(depts, vec!["Pulmonology", "ENT", "Dermatology"]);
        assert!(resp.message.contains("Pulmonology"));
    }

    #[test]
    fn test_appointment_and_information_branches() {
        let kb = KnowledgeBase::new();
        let entities = ExtractedEntities::default();

        let booking =
            generate_response(Intent::Appointment, &entities, Urgency::Normal, &kb, NUMBER);
        assert_eq!(booking.action, ResponseAction::StartBooking);

        let info = generate_response(Intent::Information, &entities, Urgency::Normal, &kb, NUMBER);
        assert_eq!(info.action, ResponseAction::ShowInfoOptions);
    }

    #[test]
    fn test_unbranched_intents_show_menu() {
        let kb = KnowledgeBase::new();
        let entities = ExtractedEntities::default();

        for intent in [Intent::Location, Intent::Timing, Intent::Cost, Intent::General] {
            let resp = generate_response(intent, &entities, Urgency::Normal, &kb, NUMBER);
            assert_eq!(resp.action, ResponseAction::ShowMenu);
        }
    }

    #[test]
    fn test_custom_emergency_number_in_message() {
        let kb = KnowledgeBase::new();
        let resp = generate_response(
            Intent::General,
            &ExtractedEntities::default(),
            Urgency::Emergency,
            &kb,
            "112",
        );
        assert!(resp.message.contains("call 112 immediately"));
    }
}
