//! Generation backend abstraction and output cleanup for Banter.
//!
//! This module defines the `TextGenerator` trait that the infrastructure
//! layer implements, and the cleanup pipeline applied to raw model output
//! before it reaches the transcript.

pub mod cleanup;
pub mod generator;
