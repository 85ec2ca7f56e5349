//! Conversational dialogs: the root greeter plus the two joke leaves.
//!
//! Each handler is a pure step: it returns the posts to send and a
//! `Control` telling the engine whether to suspend, delegate to a child
//! dialog, or terminate back to the caller.

pub mod chicken;
pub mod lawyer;
pub mod root;

use crate::resume::{Continuation, Suspension};

/// Dialogs a caller can delegate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogId {
    Chicken,
    Lawyer,
}

/// What a dialog asks the engine to do once its posts for the current
/// step are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Suspend; the next inbound message is dispatched to this point.
    Wait(Suspension),

    /// Delegate to `child`; `resume` runs with the child's return value.
    Call {
        child: DialogId,
        resume: Continuation,
    },

    /// Terminate the current dialog, handing a value to the caller.
    Done(String),
}
