//! Triage Simulator - deterministic scenario runs over the triage pipeline
//!
//! Usage:
//!   triage_sim --scenario clinic-day
//!   triage_sim --scenario emergency-wave
//!   triage_sim --scenario smalltalk
//!
//! Outputs machine-readable JSON reports to ./artifacts/simulations/

use mediqd::entities::extract_entities;
use mediqd::intent::classify_intent;
use mediqd::knowledge::KnowledgeBase;
use mediqd::response::{generate_response, ResponseAction};
use mediqd::urgency::assess_urgency;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const EMERGENCY_NUMBER: &str = "911";

// ============================================================================
// REPORT TYPES
// ============================================================================

#[derive(Debug, Serialize)]
struct MessageOutcome {
    message: String,
    intent: String,
    urgency: String,
    action: String,
    departments: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    scenario: String,
    messages_processed: usize,
    emergency_alerts: usize,
    department_suggestions: usize,
    menu_prompts: usize,
    entity_mentions: usize,
    outcomes: Vec<MessageOutcome>,
    success: bool,
    notes: String,
}

// ============================================================================
// SCENARIOS
// ============================================================================

const CLINIC_DAY: &[&str] = &[
    "I feel nauseous and have a stomach ache",
    "I want to book an appointment with a dermatologist",
    "What are your opening hours",
    "I am suffering from a dry cough",
    "How much does a consultation cost",
    "Where is the hospital",
    "my head hurts",
    "Tell me about your cardiology department",
    "I am experiencing mild dizziness",
    "thank you",
];

const EMERGENCY_WAVE: &[&str] = &[
    "severe chest pain right now",
    "my mother is unconscious",
    "he is bleeding heavily after a fall",
    "I can't breathe",
    "critical condition, need help now",
];

const SMALLTALK: &[&str] = &["hello", "good morning", "how are you", "thanks a lot", "goodbye"];

fn run_messages(kb: &KnowledgeBase, messages: &[&str]) -> Vec<MessageOutcome> {
    messages
        .iter()
        .map(|message| {
            let intent = classify_intent(message);
            let found = extract_entities(message, kb);
            let urgency = assess_urgency(message, kb);
            let response = generate_response(intent, &found, urgency, kb, EMERGENCY_NUMBER);

            MessageOutcome {
                message: (*message).to_string(),
                intent: intent.to_string(),
                urgency: urgency.to_string(),
                action: response.action.to_string(),
                departments: response.departments.unwrap_or_default(),
            }
        })
        .collect()
}

fn count_action(outcomes: &[MessageOutcome], action: ResponseAction) -> usize {
    let label = action.to_string();
    outcomes.iter().filter(|o| o.action == label).count()
}

fn build_report(scenario: &str, kb: &KnowledgeBase, messages: &[&str]) -> SimulationReport {
    let outcomes = run_messages(kb, messages);

    let emergency_alerts = count_action(&outcomes, ResponseAction::EmergencyAlert);
    let department_suggestions = count_action(&outcomes, ResponseAction::SuggestDepartment);
    let menu_prompts = count_action(&outcomes, ResponseAction::ShowMenu);
    let entity_mentions = messages
        .iter()
        .map(|m| {
            let found = extract_entities(m, kb);
            found.symptoms.len() + found.conditions.len()
        })
        .sum();

    let (success, notes) = match scenario {
        // Routine mixed traffic: real department advice, no false alarms
        "clinic-day" => (
            department_suggestions >= 1 && emergency_alerts == 0,
            "Mixed realistic traffic. Expect department suggestions and zero emergency alerts."
                .to_string(),
        ),
        // Every message carries an emergency keyword
        "emergency-wave" => (
            emergency_alerts == outcomes.len(),
            "All messages carry emergency keywords. Expect 100% emergency alerts.".to_string(),
        ),
        // Keyword-free chatter must fall through to the menu with no entities
        "smalltalk" => (
            menu_prompts == outcomes.len() && entity_mentions == 0,
            "Keyword-free chatter. Expect 100% menu prompts and zero entities.".to_string(),
        ),
        _ => unreachable!("scenario validated in main"),
    };

    SimulationReport {
        scenario: scenario.to_string(),
        messages_processed: outcomes.len(),
        emergency_alerts,
        department_suggestions,
        menu_prompts,
        entity_mentions,
        outcomes,
        success,
        notes,
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut scenario = "clinic-day".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scenario" => {
                if i + 1 < args.len() {
                    scenario = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --scenario requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Triage Simulator");
                println!();
                println!("Usage:");
                println!("  triage_sim --scenario <scenario>");
                println!();
                println!("Options:");
                println!("  --scenario <scenario> Scenario: clinic-day, emergency-wave, smalltalk");
                println!();
                println!("Examples:");
                println!("  triage_sim --scenario clinic-day");
                println!("  triage_sim --scenario emergency-wave");
                std::process::exit(0);
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                eprintln!("Run with --help for usage");
                std::process::exit(1);
            }
        }
    }

    let kb = KnowledgeBase::new();
    if let Err(e) = kb.validate() {
        eprintln!("Error: knowledge base invalid: {}", e);
        std::process::exit(1);
    }

    let report = match scenario.as_str() {
        "clinic-day" => build_report("clinic-day", &kb, CLINIC_DAY),
        "emergency-wave" => build_report("emergency-wave", &kb, EMERGENCY_WAVE),
        "smalltalk" => build_report("smalltalk", &kb, SMALLTALK),
        _ => {
            eprintln!("Error: Unknown scenario: {}", scenario);
            eprintln!("Valid scenarios: clinic-day, emergency-wave, smalltalk");
            std::process::exit(1);
        }
    };

    // Create output directory
    let output_dir = PathBuf::from("./artifacts/simulations");
    fs::create_dir_all(&output_dir).unwrap();

    let output_file = output_dir.join(format!("{}.json", scenario));
    let json = serde_json::to_string_pretty(&report).unwrap();
    fs::write(&output_file, json).unwrap();

    // Print summary
    println!("\n=== Triage Simulation: {} ===\n", scenario);
    println!("Messages:               {}", report.messages_processed);
    println!("Emergency alerts:       {}", report.emergency_alerts);
    println!("Department suggestions: {}", report.department_suggestions);
    println!("Menu prompts:           {}", report.menu_prompts);
    println!("Entity mentions:        {}", report.entity_mentions);
    println!("\nNotes: {}", report.notes);
    println!("\nReport saved to: {}\n", output_file.display());

    if report.success {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}
