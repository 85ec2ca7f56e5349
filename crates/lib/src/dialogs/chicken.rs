//! Chicken joke dialog: asks the question, takes any reply, delivers
//! the punchline, and returns to the caller.

use crate::dialogs::Control;
use crate::resume::Suspension;

const QUESTION: &str = "Why did the chicken cross the road?";

const PUNCHLINE: &str =
    "But no. The chicken crossed the road simply to get to the other side.";

pub fn start() -> (Vec<String>, Control) {
    (
        vec![QUESTION.to_string()],
        Control::Wait(Suspension::ChickenAwaitingReaction),
    )
}

/// The user's guess is echoed back into the reply template before the
/// punchline. An empty reply is echoed as-is, never rejected.
pub fn on_reaction(text: &str) -> (Vec<String>, Control) {
    (
        vec![
            format!("{}! That's an interesting idea.", text),
            PUNCHLINE.to_string(),
        ],
        Control::Done(String::new()),
    )
}
