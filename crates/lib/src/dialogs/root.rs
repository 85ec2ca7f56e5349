//! Root dialog: greets, asks for a joke topic, dispatches to a joke
//! dialog, and loops back to the greeting when the joke is done.
//!
//! There is no terminal state: the conversation re-enters the topic
//! prompt forever. Unrecognized topic input is not re-prompted; anything
//! that does not mention chickens selects the lawyer joke.

use crate::dialogs::{Control, DialogId};
use crate::resume::{Continuation, Suspension};

/// Greeting and topic prompt, re-posted after every joke.
pub const PROMPT: &str =
    "Hi, let me tell you a joke.  Do you want to hear about chickens or lawyers?";

/// Topic token looked for in the reply, case-insensitive.
const CHICKEN_TOKEN: &str = "chicken";

const LAWYER_FALLBACK: &str = "Lawyer jokes it is then!";

const THANKS: &str = "Thanks for joking!";

/// The first inbound message activates the conversation: its content is
/// ignored and the greeting prompt is posted.
pub fn on_first_message(_text: &str) -> (Vec<String>, Control) {
    (
        vec![PROMPT.to_string()],
        Control::Wait(Suspension::RootAwaitingTopic),
    )
}

/// Topic reply: any mention of chickens selects the chicken joke;
/// everything else (empty input included) selects the lawyer joke.
pub fn on_topic_reply(text: &str) -> (Vec<String>, Control) {
    if text.to_lowercase().contains(CHICKEN_TOKEN) {
        (
            Vec::new(),
            Control::Call {
                child: DialogId::Chicken,
                resume: Continuation::RootResumeAfterJoke,
            },
        )
    } else {
        (
            vec![LAWYER_FALLBACK.to_string()],
            Control::Call {
                child: DialogId::Lawyer,
                resume: Continuation::RootResumeAfterJoke,
            },
        )
    }
}

/// Runs when a joke dialog terminates: thank the user, re-post the
/// prompt, and wait for the next topic. The returned value is ignored.
pub fn on_joke_finished(_result: &str) -> (Vec<String>, Control) {
    (
        vec![THANKS.to_string(), PROMPT.to_string()],
        Control::Wait(Suspension::RootAwaitingTopic),
    )
}
