use std::sync::mpsc;
use std::time::Duration;

use arena_terminal::advisor::parse_generate_text;
use arena_terminal::share;
use arena_terminal::state::Intent;

#[test]
fn parse_joins_all_parts_of_the_first_candidate() {
    let body = r#"{"candidates":[
        {"content":{"parts":[{"text":"Pressione alto. "},{"text":"Saída em três toques."}]}},
        {"content":{"parts":[{"text":"segundo candidato ignorado"}]}}
    ]}"#;
    assert_eq!(
        parse_generate_text(body).unwrap(),
        "Pressione alto. Saída em três toques."
    );
}

#[test]
fn parse_rejects_blank_and_malformed_completions() {
    assert!(parse_generate_text(r#"{"candidates":[]}"#).is_err());
    assert!(parse_generate_text(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#).is_err());
    assert!(parse_generate_text("not json").is_err());
}

#[test]
fn parse_tolerates_omitted_optional_fields() {
    assert!(parse_generate_text(r#"{"candidates":[{"content":{}}]}"#).is_err());
    let body = r#"{"candidates":[{"content":{"parts":[{},{"text":"Plano B"}]}}]}"#;
    assert_eq!(parse_generate_text(body).unwrap(), "Plano B");
}

#[test]
fn qr_saver_reports_back_over_the_channel() {
    let (tx, rx) = mpsc::channel();
    share::spawn_qr_saver(tx, "https://arena.example/app".to_string());
    // Success or failure, the worker always answers with a console line.
    let intent = rx.recv_timeout(Duration::from_secs(30)).unwrap();
    match intent {
        Intent::Log(msg) => {
            assert!(msg.starts_with("[INFO]") || msg.starts_with("[WARN]"), "{msg}")
        }
        other => panic!("unexpected intent: {other:?}"),
    }
}
