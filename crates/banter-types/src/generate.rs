//! Text-generation request types for Banter.
//!
//! These types model the data shapes for the generation backend:
//! sampling parameters and error handling.

use serde::{Deserialize, Serialize};

/// Sampling parameters for a generation request.
///
/// The values are deliberately fixed for the whole application -- tuning
/// them per request is out of scope. `Default` produces the canonical set,
/// and the struct serializes field-for-field into the `parameters` object
/// of the generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Maximum total length (prompt + continuation) in model tokens.
    pub max_length: u32,
    /// How many candidate sequences to request. Only the first is used.
    pub num_return_sequences: u32,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub do_sample: bool,
    /// Block n-gram repeats of this size during sampling.
    pub no_repeat_ngram_size: u32,
    /// Padding token id; 50256 is the GPT-2 end-of-text token.
    pub pad_token_id: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 50,
            num_return_sequences: 1,
            temperature: 0.7,
            top_k: 50,
            top_p: 0.95,
            do_sample: true,
            no_repeat_ngram_size: 2,
            pad_token_id: 50256,
        }
    }
}

/// Errors from generation backend operations.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("generation endpoint error (status {status}): {message}")]
    Endpoint { status: u16, message: String },

    #[error("http transport error: {0}")]
    Http(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("model is loading (estimated {estimated_seconds}s)")]
    ModelLoading { estimated_seconds: f64 },

    #[error("endpoint returned no generated sequences")]
    NoSequences,
}
