//! Chat turn types for Banter.
//!
//! These types model one interactive conversation: who spoke, what was
//! said, and the wall-clock minute it happened.

use chrono::Local;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Speaker of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// A single turn in a chat transcript.
///
/// Turns are immutable once created. The timestamp is captured at
/// construction and records the local wall-clock minute, which is exactly
/// what the transcript displays next to each turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    /// Local time of creation, formatted 24-hour `HH:MM`.
    pub timestamp: String,
}

impl ChatTurn {
    /// Creates a turn stamped with the current local time.
    pub fn now(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now().format("%H:%M").to_string(),
        }
    }

    /// Creates a user turn stamped with the current local time.
    pub fn user(content: impl Into<String>) -> Self {
        Self::now(Role::User, content)
    }

    /// Creates an assistant turn stamped with the current local time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::now(Role::Assistant, content)
    }
}
