//! Hugging Face Inference API backend.
//!
//! Implements the `TextGenerator` trait from `banter-core` against a
//! hosted text-generation endpoint speaking the Hugging Face Inference
//! API convention (`POST {base_url}/models/{model}`).

pub mod client;
pub mod types;
