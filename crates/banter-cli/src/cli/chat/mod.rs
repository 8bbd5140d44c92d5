//! Interactive CLI chat experience for Banter.
//!
//! This module implements the full chat loop: welcome banner, async line
//! input, slash commands, a thinking spinner while generation is in
//! flight, and turn rendering. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
