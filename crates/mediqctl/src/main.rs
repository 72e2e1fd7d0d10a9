//! MediQ control CLI - talks to mediqd over HTTP.

mod client;
mod commands;
mod output;
mod repl;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::DaemonClient;

#[derive(Parser)]
#[command(name = "mediqctl", version, about = "CLI client for the MediQ triage daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show daemon health and session counters
    Status,
    /// Send one message and print the triage reply
    Chat {
        /// The message text (joined with spaces)
        message: Vec<String>,
    },
    /// Interactive chat with a stable session
    Repl,
    /// Print the symptom-category to department directory
    Departments,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = DaemonClient::from_env();

    match cli.command {
        Command::Status => commands::status(&client).await,
        Command::Chat { message } => commands::chat(&client, &message.join(" ")).await,
        Command::Repl => repl::run(&client).await,
        Command::Departments => commands::departments(&client).await,
    }
}
