//! Shared domain types for Banter.
//!
//! This crate contains the domain types used across the Banter workspace:
//! chat turns, generation sampling parameters, and configuration.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod generate;
