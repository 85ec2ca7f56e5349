//! Resume tokens: the serializable record of where a conversation is
//! suspended, persisted by the hosting layer between turns.
//!
//! The engine never stores conversation state itself. Each turn it is
//! handed the token for the conversation and returns the next one; the
//! session layer owns the token in between.

use serde::{Deserialize, Serialize};

/// A suspension point: which handler receives the next inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Suspension {
    /// Conversation activated but nothing posted yet; the first message
    /// wakes the root dialog.
    RootAwaitingFirstMessage,

    /// Greeting posted; the next message picks a joke topic.
    RootAwaitingTopic,

    /// Chicken question posted; the next message is the user's guess.
    ChickenAwaitingReaction,
}

/// A continuation registered by a calling dialog, run with the child
/// dialog's return value when the child terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Continuation {
    /// Root's thanks-then-reprompt step after either joke dialog.
    RootResumeAfterJoke,
}

/// Where a conversation is suspended: the active suspension point plus
/// the enclosing callers (innermost last). Plain data; no behavior
/// travels with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeToken {
    pub suspension: Suspension,
    #[serde(default)]
    pub callers: Vec<Continuation>,
}

impl Default for ResumeToken {
    fn default() -> Self {
        Self {
            suspension: Suspension::RootAwaitingFirstMessage,
            callers: Vec::new(),
        }
    }
}
