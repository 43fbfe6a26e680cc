use std::io::Cursor;

use application::ChatService;
use domain::{GenerationParams, Message, Persona, Role};
use presentation::CliApp;
use tests::recording::RecordingTransport;

fn app() -> CliApp<RecordingTransport> {
    CliApp::new(ChatService::new(
        RecordingTransport::new(),
        GenerationParams::default(),
        Persona::default(),
    ))
}

fn sent(app: &CliApp<RecordingTransport>) -> Vec<Vec<Message>> {
    app.service().transport().sent_histories()
}

#[tokio::test]
async fn history_on_turn_n_holds_all_previous_turns() {
    let mut app = app();
    let mut out = Vec::new();
    app.run(Cursor::new("one\ntwo\nthree\n"), &mut out)
        .await
        .expect("run");

    let system = Message::system(Persona::default().system_prompt);
    let histories = sent(&app);
    assert_eq!(histories.len(), 3);

    assert_eq!(histories[0], vec![system.clone(), Message::user("one")]);
    assert_eq!(
        histories[1],
        vec![
            system.clone(),
            Message::user("one"),
            Message::assistant("reply 1"),
            Message::user("two"),
        ]
    );
    assert_eq!(
        histories[2],
        vec![
            system,
            Message::user("one"),
            Message::assistant("reply 1"),
            Message::user("two"),
            Message::assistant("reply 2"),
            Message::user("three"),
        ]
    );

    let final_history = app.conversation().messages();
    assert_eq!(final_history.len(), 7);
    assert_eq!(final_history[6], Message::assistant("reply 3"));
}

#[tokio::test]
async fn roles_alternate_after_system_prompt() {
    let mut app = app();
    let mut out = Vec::new();
    app.run(Cursor::new("a\nb\nc\nd\n"), &mut out)
        .await
        .expect("run");

    let messages = app.conversation().messages();
    assert_eq!(messages[0].role, Role::System);
    for (i, message) in messages.iter().enumerate().skip(1) {
        let expected = if i % 2 == 1 { Role::User } else { Role::Assistant };
        assert_eq!(message.role, expected, "message {i}");
    }
}

#[tokio::test]
async fn exit_sends_nothing_further() {
    for exit in ["exit", "EXIT", "Exit", "eXiT"] {
        let mut app = app();
        let mut out = Vec::new();
        let input = format!("hello\n{exit}\nignored\n");
        app.run(Cursor::new(input), &mut out).await.expect("run");

        assert_eq!(sent(&app).len(), 1, "input {exit}");
        let printed = String::from_utf8(out).expect("utf8");
        assert!(printed.contains("Exiting."));
    }
}

#[tokio::test]
async fn invalid_utf8_line_is_still_sent() {
    let mut app = app();
    let mut out = Vec::new();
    app.run(Cursor::new(&b"caf\xe9\nsecond\n"[..]), &mut out)
        .await
        .expect("run");

    let histories = sent(&app);
    assert_eq!(histories.len(), 2);
    assert_eq!(histories[0][1], Message::user("caf\u{FFFD}"));
    assert_eq!(histories[1][3], Message::user("second"));
}

#[tokio::test]
async fn immediate_exit_sends_no_request() {
    let mut app = app();
    let mut out = Vec::new();
    app.run(Cursor::new("exit\n"), &mut out).await.expect("run");

    assert_eq!(app.service().transport().request_count(), 0);
    assert_eq!(app.conversation().messages().len(), 1);
}
