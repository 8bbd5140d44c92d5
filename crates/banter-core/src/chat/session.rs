//! One interactive chat session.
//!
//! Glues a transcript to a responder and enforces the submit contract:
//! a submit either appends both the user turn and the assistant turn, or
//! appends neither.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use uuid::Uuid;

use banter_types::chat::ChatTurn;
use banter_types::generate::GenerateError;

use crate::chat::responder::Responder;
use crate::chat::transcript::Transcript;
use crate::generate::generator::TextGenerator;
use crate::greeting;

/// The pair of turns appended by one successful submit.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user: ChatTurn,
    pub assistant: ChatTurn,
}

/// A single interactive chat session.
///
/// Owns the transcript and the responder. Sessions are independent --
/// two sessions never share turns.
pub struct ChatSession<G: TextGenerator, R: Rng> {
    id: Uuid,
    started_at: DateTime<Utc>,
    transcript: Transcript,
    responder: Responder<G, R>,
}

impl<G: TextGenerator> ChatSession<G, StdRng> {
    /// Create a session with the built-in greeting rules and an
    /// entropy-seeded random source.
    pub fn new(generator: G) -> Self {
        Self::with_rng(generator, StdRng::from_entropy())
    }
}

impl<G: TextGenerator, R: Rng> ChatSession<G, R> {
    /// Create a session with an explicit random source, so tests can
    /// assert deterministic reply selection.
    pub fn with_rng(generator: G, rng: R) -> Self {
        let session = Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            transcript: Transcript::new(),
            responder: Responder::new(greeting::rules::builtin(), generator, rng),
        };
        info!(session_id = %session.id, "chat session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The generation backend behind this session.
    pub fn generator(&self) -> &G {
        self.responder.generator()
    }

    /// Submit one line of user input.
    ///
    /// A prompt that is empty after trimming is a no-op and returns
    /// `Ok(None)`. Otherwise the user turn and the assistant turn are
    /// appended together on success and handed back as an [`Exchange`].
    /// A generation error appends neither turn, so the transcript never
    /// holds a user turn without its reply.
    pub async fn submit(&mut self, prompt: &str) -> Result<Option<Exchange>, GenerateError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Ok(None);
        }

        // Stamp the user turn before the (possibly slow) generation call
        // so its timestamp reflects when the user spoke.
        let user = ChatTurn::user(prompt);
        let content = self.responder.respond(prompt).await?;
        let assistant = ChatTurn::assistant(content);

        self.transcript.append_turn(user.clone());
        self.transcript.append_turn(assistant.clone());
        Ok(Some(Exchange { user, assistant }))
    }

    /// Reset the transcript to empty. The session id and start time are
    /// unchanged.
    pub fn clear(&mut self) {
        info!(session_id = %self.id, "transcript cleared");
        self.transcript.clear();
    }
}
