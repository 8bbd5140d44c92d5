//! Cleanup pipeline for raw generated text.
//!
//! Small conversational models echo the prompt and stutter repeated
//! sentences. Before a reply reaches the transcript it gets three
//! repairs: strip the echoed prompt, drop duplicate sentences, and fall
//! back to a fixed reply when nothing usable remains.

use std::sync::LazyLock;

use regex::Regex;

/// Reply substituted when cleanup leaves fewer than two characters.
pub const FALLBACK_REPLY: &str = "I understand. Please tell me more about that.";

/// A sentence boundary: terminal punctuation followed by whitespace.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Clean raw generated text into a transcript-ready reply.
///
/// Applies, in order: echoed-prompt stripping, sentence splitting,
/// duplicate-sentence removal keeping first occurrences, and a rejoin
/// with single spaces. If fewer than two characters survive trimming,
/// returns [`FALLBACK_REPLY`] instead -- a degenerate generation never
/// surfaces as an error.
pub fn tidy(raw: &str, prompt: &str) -> String {
    let stripped = strip_echoed_prompt(raw, prompt);
    let joined = dedup_sentences(split_sentences(stripped)).join(" ");
    let trimmed = joined.trim();
    if trimmed.chars().count() < 2 {
        FALLBACK_REPLY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Strip the prompt from the front of the raw output.
///
/// Generation endpoints echo the consumed prompt ahead of the
/// continuation; only an exact prefix is removed.
fn strip_echoed_prompt<'a>(raw: &'a str, prompt: &str) -> &'a str {
    match raw.strip_prefix(prompt) {
        Some(rest) => rest.trim(),
        None => raw,
    }
}

/// Split text into sentences at terminal punctuation (`.`, `!`, `?`)
/// followed by whitespace. The punctuation stays with the preceding
/// sentence; the whitespace between sentences is consumed.
///
/// This is a heuristic, not a grammar: abbreviations, decimals, and
/// ellipses may split in odd places, and that is accepted behavior.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The terminal punctuation is one ASCII byte, so the sentence
        // ends one byte into the match.
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// Drop empty fragments and exact-duplicate sentences, keeping the first
/// occurrence of each.
fn dedup_sentences(sentences: Vec<&str>) -> Vec<&str> {
    let mut unique: Vec<&str> = Vec::new();
    for sentence in sentences {
        if !sentence.is_empty() && !unique.contains(&sentence) {
            unique.push(sentence);
        }
    }
    unique
}
