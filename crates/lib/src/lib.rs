//! Jokebot core library — dialog engine, resume tokens, and session
//! plumbing shared by the CLI host.

pub mod dialogs;
pub mod engine;
pub mod host;
pub mod resume;
pub mod session;
