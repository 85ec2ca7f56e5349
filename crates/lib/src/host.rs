//! Host turn: load the conversation's resume token, run the dialog
//! engine against the inbound message, persist the new token, and
//! record the transcript.

use crate::engine;
use crate::session::{SessionMessage, SessionStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("session error: {0}")]
    Session(String),
}

/// Run one conversation turn: append the user message, run the engine,
/// store the new resume token, then append and return the outbound
/// posts in order.
///
/// Missing inbound text is the caller's concern: deliver it as the
/// empty string, which every dialog accepts.
pub async fn run_turn(
    store: &SessionStore,
    session_id: &str,
    text: &str,
) -> Result<Vec<String>, HostError> {
    let token = store
        .token(session_id)
        .await
        .ok_or_else(|| HostError::Session("session not found".to_string()))?;

    store
        .append_message(session_id, SessionMessage::user(text))
        .await
        .map_err(HostError::Session)?;

    let (next_token, posts) = engine::turn(&token, text);
    log::debug!("turn: {} outbound post(s) for {}", posts.len(), session_id);

    store
        .set_token(session_id, next_token)
        .await
        .map_err(HostError::Session)?;
    for post in &posts {
        store
            .append_message(session_id, SessionMessage::bot(post.clone()))
            .await
            .map_err(HostError::Session)?;
    }

    Ok(posts)
}
