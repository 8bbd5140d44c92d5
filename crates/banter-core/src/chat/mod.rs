//! Chat session state for Banter.
//!
//! This module owns the transcript (the append-only turn list), the
//! responder that picks between a canned greeting and generation, and
//! the session wrapper gluing them together.

pub mod responder;
pub mod session;
pub mod transcript;
