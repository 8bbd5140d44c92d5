//! Append-only transcript of chat turns.

use banter_types::chat::ChatTurn;

/// Ordered, session-scoped list of chat turns.
///
/// The only mutations are appending a turn and clearing the whole list;
/// existing turns are never edited. The transcript lives exactly as long
/// as its session -- there is no durable storage.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one turn to the end of the transcript.
    pub fn append_turn(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Reset the transcript to empty.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
