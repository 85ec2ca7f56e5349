//! Lawyer joke dialog: posts one fixed joke and returns immediately.
//! Never waits for input.

use crate::dialogs::Control;

const JOKE: &str = r#"

The attorney tells the accused, “I have some good news and some bad news.”

“What’s the bad news?” asks the accused.

“The bad news is, your blood  is all over the crime scene, and the DNA tests prove you did it.”

“What’s the good news?”

“Your cholesterol is 130.”
"#;

pub fn start() -> (Vec<String>, Control) {
    (vec![JOKE.to_string()], Control::Done(String::new()))
}
