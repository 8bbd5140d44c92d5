//! Generation backend implementations.

pub mod hf;
