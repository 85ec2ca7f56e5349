//! Integration test: drive full conversations through the session store
//! and host turn, asserting the ordered posts of each turn.

use lib::host;
use lib::session::SessionStore;

const PROMPT: &str = "Hi, let me tell you a joke.  Do you want to hear about chickens or lawyers?";

async fn deliver(store: &SessionStore, id: &str, text: &str) -> Vec<String> {
    host::run_turn(store, id, text).await.expect("turn")
}

#[tokio::test]
async fn first_message_gets_the_greeting_only() {
    let store = SessionStore::new();
    let id = store.create().await;

    let posts = deliver(&store, &id, "hi").await;
    assert_eq!(posts, vec![PROMPT.to_string()]);
}

#[tokio::test]
async fn chicken_flow_question_then_punchline_then_reprompt() {
    let store = SessionStore::new();
    let id = store.create().await;
    deliver(&store, &id, "hi").await;

    let posts = deliver(&store, &id, "I like chickens").await;
    assert_eq!(posts, vec!["Why did the chicken cross the road?".to_string()]);

    let posts = deliver(&store, &id, "red").await;
    assert_eq!(
        posts,
        vec![
            "red! That's an interesting idea.".to_string(),
            "But no. The chicken crossed the road simply to get to the other side.".to_string(),
            "Thanks for joking!".to_string(),
            PROMPT.to_string(),
        ]
    );
}

#[tokio::test]
async fn unrecognized_topic_gets_the_lawyer_joke() {
    let store = SessionStore::new();
    let id = store.create().await;
    deliver(&store, &id, "hi").await;

    let posts = deliver(&store, &id, "something else").await;
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[0], "Lawyer jokes it is then!");
    assert!(posts[1].contains("The attorney tells the accused"));
    assert!(posts[1].contains("Your cholesterol is 130."));
    assert_eq!(posts[2], "Thanks for joking!");
    assert_eq!(posts[3], PROMPT);
}

#[tokio::test]
async fn conversation_loops_back_to_the_prompt_forever() {
    let store = SessionStore::new();
    let id = store.create().await;
    deliver(&store, &id, "hi").await;

    for _ in 0..3 {
        deliver(&store, &id, "chicken please").await;
        let posts = deliver(&store, &id, "to escape").await;
        assert_eq!(posts.last().map(String::as_str), Some(PROMPT));
    }
}

#[tokio::test]
async fn unknown_session_is_an_error() {
    let store = SessionStore::new();
    assert!(host::run_turn(&store, "sess-missing", "hi").await.is_err());
}

#[tokio::test]
async fn transcript_records_user_and_bot_messages() {
    let store = SessionStore::new();
    let id = store.create().await;
    deliver(&store, &id, "hi").await;

    let session = store.get(&id).await.expect("session");
    assert_eq!(session.messages.len(), 2);
    assert_eq!(session.messages[0].role, "user");
    assert_eq!(session.messages[0].content, "hi");
    assert_eq!(session.messages[1].role, "bot");
    assert_eq!(session.messages[1].content, PROMPT);
}
