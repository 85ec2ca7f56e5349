//! Dialog turn engine: dispatch one inbound message against a resume
//! token and run dialogs up to the next suspension point.
//!
//! Delegation is a call stack carried inside the token: a caller pushes
//! its continuation when it delegates, and a terminating child pops it
//! and hands over its return value, all within the same turn.

use crate::dialogs::{chicken, lawyer, root, Control, DialogId};
use crate::resume::{Continuation, ResumeToken, Suspension};

/// Process one inbound message for a conversation suspended at `token`.
///
/// Runs the suspended handler and any delegated dialogs until the
/// conversation suspends again, collecting every outbound post in order.
/// Infallible: every input yields a new token and the posts for the turn.
pub fn turn(token: &ResumeToken, text: &str) -> (ResumeToken, Vec<String>) {
    let mut callers = token.callers.clone();
    let mut posts = Vec::new();

    let (mut step_posts, mut control) = match token.suspension {
        Suspension::RootAwaitingFirstMessage => root::on_first_message(text),
        Suspension::RootAwaitingTopic => root::on_topic_reply(text),
        Suspension::ChickenAwaitingReaction => chicken::on_reaction(text),
    };

    loop {
        posts.append(&mut step_posts);
        match control {
            Control::Wait(suspension) => {
                return (ResumeToken { suspension, callers }, posts);
            }
            Control::Call { child, resume } => {
                callers.push(resume);
                (step_posts, control) = match child {
                    DialogId::Chicken => chicken::start(),
                    DialogId::Lawyer => lawyer::start(),
                };
            }
            Control::Done(result) => match callers.pop() {
                Some(Continuation::RootResumeAfterJoke) => {
                    (step_posts, control) = root::on_joke_finished(&result);
                }
                None => {
                    // Only reachable from a corrupted token: the root dialog
                    // never terminates. Restart the conversation from the top.
                    log::debug!("dialog terminated with an empty caller stack, restarting");
                    return (ResumeToken::default(), posts);
                }
            },
        }
    }
}
