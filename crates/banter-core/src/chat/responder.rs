//! Reply dispatch: canned greeting first, generation on a miss.

use rand::Rng;
use tracing::debug;

use banter_types::generate::{GenerateError, GenerationParams};

use crate::generate::cleanup;
use crate::generate::generator::TextGenerator;
use crate::greeting::GreetingTable;

/// Decides what the assistant says for one prompt.
///
/// The greeting table is consulted first; prompts matching no rule go to
/// the generation backend, and the raw output through the cleanup
/// pipeline. Generic over the generator and the random source so tests
/// can inject fakes and seeded rngs.
pub struct Responder<G: TextGenerator, R: Rng> {
    table: GreetingTable,
    generator: G,
    params: GenerationParams,
    rng: R,
}

impl<G: TextGenerator, R: Rng> Responder<G, R> {
    /// Create a responder over the given rule table, backend, and random
    /// source. Sampling parameters are the fixed application-wide set.
    pub fn new(table: GreetingTable, generator: G, rng: R) -> Self {
        Self {
            table,
            generator,
            params: GenerationParams::default(),
            rng,
        }
    }

    /// The generation backend this responder falls back to.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Produce the assistant reply for one prompt.
    ///
    /// Greeting rules are the priority path and never touch the backend;
    /// everything else is a single generation call followed by cleanup.
    pub async fn respond(&mut self, prompt: &str) -> Result<String, GenerateError> {
        if let Some(reply) = self.table.reply(prompt, &mut self.rng) {
            debug!("greeting rule matched, skipping generation");
            return Ok(reply);
        }

        debug!(
            backend = self.generator.name(),
            model = self.generator.model(),
            "generating reply"
        );
        let raw = self.generator.generate(prompt, &self.params).await?;
        Ok(cleanup::tidy(&raw, prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeting;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend fake that returns a fixed string and counts calls.
    struct CannedGenerator {
        reply: String,
        calls: AtomicUsize,
    }

    impl CannedGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TextGenerator for CannedGenerator {
        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "test-model"
        }

        async fn generate(
            &self,
            _prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GenerateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    fn responder(reply: &str) -> Responder<CannedGenerator, StdRng> {
        Responder::new(
            greeting::rules::builtin(),
            CannedGenerator::new(reply),
            StdRng::seed_from_u64(1),
        )
    }

    #[tokio::test]
    async fn test_greeting_bypasses_generation() {
        let mut responder = responder("unused");
        let reply = responder.respond("Hello!").await.unwrap();
        assert!(
            [
                "Hello! How can I help you today?",
                "Hi there! What's on your mind?",
                "Hey! Nice to meet you.",
            ]
            .contains(&reply.as_str())
        );
        assert_eq!(responder.generator().calls(), 0);
    }

    #[tokio::test]
    async fn test_miss_generates_and_cleans() {
        let prompt = "tell me about rust";
        let mut responder = responder("tell me about rust It depends. It depends.");
        let reply = responder.respond(prompt).await.unwrap();
        assert_eq!(reply, "It depends.");
        assert_eq!(responder.generator().calls(), 1);
    }

    #[tokio::test]
    async fn test_degenerate_generation_uses_fallback() {
        let prompt = "hmm";
        // Raw output equal to the prompt cleans down to nothing.
        let mut responder = responder("hmm");
        let reply = responder.respond(prompt).await.unwrap();
        assert_eq!(reply, cleanup::FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_generation_error_propagates() {
        struct FailingGenerator;

        impl TextGenerator for FailingGenerator {
            fn name(&self) -> &str {
                "failing"
            }

            fn model(&self) -> &str {
                "test-model"
            }

            async fn generate(
                &self,
                _prompt: &str,
                _params: &GenerationParams,
            ) -> Result<String, GenerateError> {
                Err(GenerateError::Endpoint {
                    status: 500,
                    message: "boom".to_string(),
                })
            }
        }

        let mut responder = Responder::new(
            greeting::rules::builtin(),
            FailingGenerator,
            StdRng::seed_from_u64(1),
        );
        let err = responder.respond("explain lifetimes").await.unwrap_err();
        assert!(matches!(err, GenerateError::Endpoint { status: 500, .. }));
    }
}
