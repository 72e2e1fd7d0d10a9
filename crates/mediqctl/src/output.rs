//! Output formatting - clean, ASCII-only terminal output

use mediq_common::ChatReply;
use owo_colors::OwoColorize;

/// Display a triage reply with its timestamp footer
pub fn display_reply(reply: &ChatReply) {
    println!();
    println!("{}", reply.response);
    println!();
    println!("{}", format!("[{}]", reply.timestamp).dimmed());
    println!();
}

pub fn display_success(message: &str) {
    println!("[OK] {}", message.green());
}

pub fn display_error(message: &str) {
    eprintln!("[ERROR] {}", message.red());
}

pub fn display_info(message: &str) {
    println!("[INFO] {}", message);
}
