//! Infrastructure layer for Banter.
//!
//! Contains the concrete boundary collaborators: the HTTP text-generation
//! backend (Hugging Face Inference API convention), configuration loading,
//! and data-directory resolution.

pub mod config;
pub mod filesystem;
pub mod generate;
