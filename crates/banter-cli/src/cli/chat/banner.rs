//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing the model
//! behind the session and a short session identifier.

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Displays the application name, the configured model, and the first
/// eight characters of the session ID, with a hint about slash commands.
pub fn print_welcome_banner(model: &str, session_id: &str) {
    println!();
    println!("  {} {}", style("💬").bold(), style("Banter").cyan().bold());
    println!(
        "  {}",
        style("Small talk with a hosted generation model.").dim()
    );
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
