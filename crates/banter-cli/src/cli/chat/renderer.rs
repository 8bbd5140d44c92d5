//! Terminal rendering of chat turns.
//!
//! `ChatRenderer` prints assistant replies and transcript blocks with
//! console styling: a role label, the turn content, and the turn's
//! wall-clock timestamp dimmed beside it. Replies arrive whole (no
//! streaming), so rendering is a single print per turn.

use console::style;

use banter_types::chat::{ChatTurn, Role};

/// Styled printer for chat turns.
pub struct ChatRenderer {
    model: String,
}

impl ChatRenderer {
    /// Create a renderer for a session running the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Print a freshly generated assistant turn.
    pub fn print_reply(&self, turn: &ChatTurn) {
        println!();
        println!("  {} {}", style("Bot >").cyan().bold(), turn.content);
    }

    /// Print the footer line after a reply.
    ///
    /// Format: "| {HH:MM} . {time}s . {model}"
    pub fn print_footer(&self, turn: &ChatTurn, response_ms: u64) {
        let seconds = response_ms as f64 / 1000.0;
        println!(
            "  {} {} {} {:.1}s {} {}",
            style("|").dim(),
            style(&turn.timestamp).dim(),
            style("\u{00b7}").dim(),
            style(seconds).dim(),
            style("\u{00b7}").dim(),
            style(&self.model).dim(),
        );
    }

    /// Re-render the whole transcript, one block per stored turn.
    pub fn print_transcript(&self, turns: &[ChatTurn]) {
        if turns.is_empty() {
            println!("\n  {}\n", style("No messages yet.").dim());
            return;
        }

        println!();
        for turn in turns {
            let label = match turn.role {
                Role::User => style("You").green().bold(),
                Role::Assistant => style("Bot").cyan().bold(),
            };
            println!(
                "  {} {} {}",
                label,
                turn.content,
                style(&turn.timestamp).dim()
            );
        }
        println!();
    }
}
