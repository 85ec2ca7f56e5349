//! Conversation sessions: resume token plus message transcript, keyed
//! by session id.
//!
//! The store plays the session-persistence role of a hosting runtime:
//! it owns each conversation's resume token between turns. The dialog
//! engine itself never stores state. Callers deliver one message at a
//! time per conversation, in arrival order; the store does not
//! serialize turns itself.

use crate::resume::ResumeToken;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Unique session identifier (opaque string).
pub type SessionId = String;

/// A single message in a session transcript (user text in, bot post out).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMessage {
    pub role: String,
    pub content: String,
}

impl SessionMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: "bot".to_string(),
            content: content.into(),
        }
    }
}

/// A session: id, where the conversation is suspended, and the ordered
/// transcript.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub token: ResumeToken,
    pub messages: Vec<SessionMessage>,
}

/// In-memory store for sessions (create, get, token load/store, append).
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session with a generated id; returns the session id.
    pub async fn create(&self) -> SessionId {
        let id = format!("sess-{}", uuid::Uuid::new_v4());
        let session = Session {
            id: id.clone(),
            token: ResumeToken::default(),
            messages: Vec::new(),
        };
        self.inner.write().await.insert(id.clone(), session);
        id
    }

    /// Create a session with the given id if it does not exist; returns the id.
    pub async fn get_or_create(&self, id: impl Into<SessionId>) -> SessionId {
        let id = id.into();
        if self.inner.read().await.contains_key(&id) {
            return id;
        }
        let session = Session {
            id: id.clone(),
            token: ResumeToken::default(),
            messages: Vec::new(),
        };
        self.inner.write().await.insert(id.clone(), session);
        id
    }

    /// Return a clone of the session if it exists.
    pub async fn get(&self, id: &str) -> Option<Session> {
        self.inner.read().await.get(id).cloned()
    }

    /// Return the session's resume token if the session exists.
    pub async fn token(&self, id: &str) -> Option<ResumeToken> {
        self.inner.read().await.get(id).map(|s| s.token.clone())
    }

    /// Replace the session's resume token; returns error if session not found.
    pub async fn set_token(&self, id: &str, token: ResumeToken) -> Result<(), String> {
        let mut g = self.inner.write().await;
        let session = g.get_mut(id).ok_or_else(|| "session not found".to_string())?;
        session.token = token;
        Ok(())
    }

    /// Append a message to the session transcript; returns error if session not found.
    pub async fn append_message(&self, id: &str, message: SessionMessage) -> Result<(), String> {
        let mut g = self.inner.write().await;
        let session = g.get_mut(id).ok_or_else(|| "session not found".to_string())?;
        session.messages.push(message);
        Ok(())
    }
}
