//! Command handlers for mediqctl

use crate::client::DaemonClient;
use crate::output;
use anyhow::{bail, Result};
use uuid::Uuid;

/// `mediqctl status` - daemon health and counters
pub async fn status(client: &DaemonClient) -> Result<()> {
    let health = match client.health().await {
        Ok(health) => health,
        Err(e) => {
            output::display_error(&e.to_string());
            bail!("daemon unreachable");
        }
    };

    output::display_success(&format!("mediqd v{} is {}", health.version, health.status));
    output::display_info(&format!("Uptime:             {}s", health.uptime_seconds));
    output::display_info(&format!("Active sessions:    {}", health.active_sessions));
    output::display_info(&format!("Symptom categories: {}", health.symptom_categories));
    output::display_info(&format!("Known departments:  {}", health.departments_known));
    Ok(())
}

/// `mediqctl chat <message>` - one-shot message with a fresh session
pub async fn chat(client: &DaemonClient, message: &str) -> Result<()> {
    if message.trim().is_empty() {
        output::display_error("Message is required");
        bail!("empty message");
    }

    let session = Uuid::new_v4().to_string();
    match client.chat(message, &session).await {
        Ok(reply) => {
            output::display_reply(&reply);
            Ok(())
        }
        Err(e) => {
            output::display_error(&e.to_string());
            bail!("chat failed");
        }
    }
}

/// `mediqctl departments` - advisory department directory
pub async fn departments(client: &DaemonClient) -> Result<()> {
    let directory = match client.departments().await {
        Ok(directory) => directory,
        Err(e) => {
            output::display_error(&e.to_string());
            bail!("daemon unreachable");
        }
    };

    println!();
    println!("Symptom category -> suggested departments");
    println!();
    for mapping in &directory.departments {
        println!("  {:<14} {}", mapping.category, mapping.departments.join(", "));
    }
    println!();
    Ok(())
}
