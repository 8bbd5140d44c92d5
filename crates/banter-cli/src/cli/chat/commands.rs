//! Slash command parsing and execution for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the
//! transcript and the session itself.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the transcript and the terminal screen.
    Clear,
    /// Re-render the full transcript.
    History,
    /// Exit the chat session.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`. Commands take no
/// arguments; anything after the first word is ignored.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/history" => Some(ChatCommand::History),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!(
        "  {}    {}",
        style("/help").cyan(),
        "Show this help message"
    );
    println!(
        "  {}   {}",
        style("/clear").cyan(),
        "Clear the transcript and screen"
    );
    println!(
        "  {} {}",
        style("/history").cyan(),
        "Show the conversation so far"
    );
    println!(
        "  {}    {}",
        style("/exit").cyan(),
        "End the chat session"
    );
    println!();
    println!(
        "  {}",
        style("Ctrl+D to exit, Ctrl+C safe (no message loss)").dim()
    );
    println!();
}
