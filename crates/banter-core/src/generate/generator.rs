//! TextGenerator trait definition.
//!
//! This is the capability the chat core calls when no greeting rule
//! matches. Uses native async fn in traits (RPITIT, Rust 2024 edition).

use banter_types::generate::{GenerateError, GenerationParams};

/// Trait for text-generation backends.
///
/// Implementations live in banter-infra (e.g., `HfTextGenerator`). The
/// returned string is the raw `generated_text` from the model, which by
/// convention is the consumed prompt followed by the continuation; the
/// cleanup pipeline strips the echo.
///
/// Backends must be stateless per call: one instance may serve many
/// sessions concurrently.
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name (e.g., "huggingface").
    fn name(&self) -> &str;

    /// Model identifier this backend generates with.
    fn model(&self) -> &str;

    /// Generate a continuation for the prompt with the given sampling
    /// parameters.
    fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> impl std::future::Future<Output = Result<String, GenerateError>> + Send;
}
