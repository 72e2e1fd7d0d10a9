//! Interactive chat loop.
//!
//! One UUID session for the whole run, so the daemon accumulates turn
//! history across messages. Type "exit" or "quit" to leave.

use crate::client::DaemonClient;
use crate::output;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use uuid::Uuid;

pub async fn run(client: &DaemonClient) -> Result<()> {
    if !client.is_available().await {
        output::display_error(&format!(
            "Cannot reach mediqd at {}. Is the daemon running?",
            client.base_url()
        ));
        return Ok(());
    }

    let session = Uuid::new_v4().to_string();

    println!();
    println!("MediQ triage chat (v{})", mediq_common::VERSION);
    println!("Describe your symptoms or ask about the hospital. Type 'exit' to leave.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("you> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(e)) => {
                output::display_error(&format!("Error reading input: {}", e));
                continue;
            }
            None => break, // EOF
        };

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Take care!");
            break;
        }

        match client.chat(&input, &session).await {
            Ok(reply) => output::display_reply(&reply),
            Err(e) => output::display_error(&e.to_string()),
        }
    }

    Ok(())
}
