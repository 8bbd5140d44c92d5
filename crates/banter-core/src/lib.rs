//! Conversational core for Banter.
//!
//! This crate holds the logic that decides what the assistant says: the
//! ordered greeting rule table, the cleanup pipeline applied to raw model
//! output, and the transcript/session bookkeeping. It depends only on
//! `banter-types` -- never on `banter-infra` or any HTTP crate.

pub mod chat;
pub mod generate;
pub mod greeting;
