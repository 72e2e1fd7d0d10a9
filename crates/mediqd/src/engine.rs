//! Chat facade - orchestrates the triage pipeline for one inbound message.
//!
//! classify + extract + assess run independently over the same text, the
//! context store records the turn, the response generator picks the branch,
//! and the result is formatted into the display string the widget shows.

use crate::config::Config;
use crate::context::{ContextStore, TurnRecord};
use crate::departments;
use crate::entities::{extract_entities, ExtractedEntities};
use crate::intent::{classify_intent, Intent};
use crate::knowledge::KnowledgeBase;
use crate::response::{generate_response, ChatResponse, ResponseAction};
use crate::urgency::{assess_urgency, Urgency};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// Widget-level department trigger words. Checked case-sensitively against
/// the original message, independent of the intent classifier - the second
/// of the two department-suggestion paths the portal shipped with. Kept as
/// a distinct call site on purpose.
pub const WIDGET_TRIGGERS: [&str; 3] = ["symptom", "feeling", "pain"];

/// Everything the pipeline derived from one message
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    pub intent: Intent,
    pub entities: ExtractedEntities,
    pub urgency: Urgency,
    pub response: ChatResponse,
    /// Final formatted string for the chat widget
    pub display: String,
}

/// The triage engine: knowledge base, session store, and formatting
pub struct TriageEngine {
    kb: KnowledgeBase,
    contexts: ContextStore,
    /// Shared by all requests that carry no session id; one opaque token per
    /// engine instantiation, so sessionless callers get no cross-restart
    /// continuity.
    fallback_session: String,
    emergency_number: String,
}

impl TriageEngine {
    pub fn new(kb: KnowledgeBase, config: &Config) -> Self {
        Self {
            kb,
            contexts: ContextStore::new(
                config.sessions.max_sessions,
                Duration::from_secs(config.sessions.ttl_secs),
            ),
            fallback_session: Uuid::new_v4().to_string(),
            emergency_number: config.triage.emergency_number.clone(),
        }
    }

    /// Run the full pipeline for one message and format the reply.
    pub async fn handle_message(&self, raw: &str, session_id: Option<&str>) -> TriageOutcome {
        let message = raw.trim();

        let intent = classify_intent(message);
        let entities = extract_entities(message, &self.kb);
        let urgency = assess_urgency(message, &self.kb);

        // Message bodies are never logged - lengths and derived labels only
        info!(
            "triage: len={} intent={} urgency={} symptoms={} conditions={}",
            message.len(),
            intent,
            urgency,
            entities.symptoms.len(),
            entities.conditions.len()
        );

        let sid = session_id.unwrap_or(&self.fallback_session);
        self.contexts
            .update(
                Some(sid),
                TurnRecord {
                    last_intent: intent,
                    entities: entities.clone(),
                    urgency,
                },
            )
            .await;

        let response = generate_response(intent, &entities, urgency, &self.kb, &self.emergency_number);
        let display = self.format_display(raw, &response, &entities);

        TriageOutcome {
            intent,
            entities,
            urgency,
            response,
            display,
        }
    }

    /// Format the final widget string: primary message, quick actions block,
    /// then the widget-level department line when either path fires.
    fn format_display(&self, raw: &str, response: &ChatResponse, entities: &ExtractedEntities) -> String {
        let mut out = response.message.clone();

        if !response.suggestions.is_empty() {
            out.push_str("\n\nQuick actions:");
            for suggestion in &response.suggestions {
                out.push_str("\n  * ");
                out.push_str(suggestion);
            }
        }

        // Case-sensitive scan of the ORIGINAL message, not the lowercased
        // pipeline text - observable behavior of the portal's chat widget.
        let widget_hit = WIDGET_TRIGGERS.iter().any(|t| raw.contains(t));

        if response.action == ResponseAction::SuggestDepartment || widget_hit {
            // Re-derived here, separately from the response generator's path
            let recommended = departments::recommend(&entities.symptoms, &self.kb);
            if !recommended.is_empty() {
                out.push_str("\n\nYou may want to visit: ");
                out.push_str(&recommended.join(", "));
            }
        }

        out
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Session context lookup (used by tests and future multi-turn logic)
    pub async fn context_for(&self, session_id: &str) -> Option<crate::context::ConversationContext> {
        self.contexts.get(session_id).await
    }

    pub async fn active_sessions(&self) -> usize {
        self.contexts.len().await
    }

    pub async fn prune_expired_sessions(&self) {
        self.contexts.prune_expired().await;
    }
}
