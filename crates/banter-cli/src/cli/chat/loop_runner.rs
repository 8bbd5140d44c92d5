//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: session creation, welcome
//! banner, the input loop with slash commands, generation behind a
//! thinking spinner, and turn rendering.

use std::time::{Duration, Instant};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use banter_core::chat::session::ChatSession;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat loop.
///
/// Consumes the application state: the generation backend moves into the
/// session, which lives until the user exits.
pub async fn run_chat_loop(state: AppState) -> anyhow::Result<()> {
    let model = state.config.generator.model.clone();
    let mut session = ChatSession::new(state.generator);
    let session_id = session.id().to_string();

    print_welcome_banner(&model, &session_id);

    let renderer = ChatRenderer::new(&model);
    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => {
                            session.clear();
                            chat_input.clear();
                            println!("  {}", style("Transcript cleared.").dim());
                        }
                        ChatCommand::History => {
                            renderer.print_transcript(session.transcript().turns());
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                // Thinking spinner while the backend works
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(Duration::from_millis(80));

                let started = Instant::now();
                let result = session.submit(&text).await;
                spinner.finish_and_clear();

                match result {
                    Ok(Some(exchange)) => {
                        let response_ms = started.elapsed().as_millis() as u64;
                        renderer.print_reply(&exchange.assistant);
                        renderer.print_footer(&exchange.assistant, response_ms);
                        println!();
                    }
                    // Input is non-empty here, so nothing was skipped.
                    Ok(None) => {}
                    Err(e) => {
                        eprintln!("\n  {} Generation failed: {e}", style("!").red().bold());
                        eprintln!(
                            "  {}",
                            style("Type a message to retry, /exit to quit.").dim()
                        );
                    }
                }
            }
        }
    }

    info!(
        session_id = %session.id(),
        started_at = %session.started_at(),
        turns = session.transcript().len(),
        "chat session ended"
    );
    Ok(())
}
