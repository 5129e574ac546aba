//! Integration tests for the JSON-lines host protocol.
//!
//! Drives [`JsonLineHost`] with the exact JSON the host platform sends and
//! checks the JSON it gets back.

use std::sync::Arc;

use serde_json::{json, Value};
use viewpoint_discovery::adapters::{InMemoryMetricsSink, JsonLineHost};
use viewpoint_discovery::application::TurnHandlerRegistry;
use viewpoint_discovery::domain::viewpoint::templates;

fn host() -> JsonLineHost {
    JsonLineHost::new(TurnHandlerRegistry::with_defaults(Arc::new(
        InMemoryMetricsSink::new(),
    )))
}

fn turn(host: &JsonLineHost, inbound: Value) -> Value {
    let line = host.process_line(&inbound.to_string());
    serde_json::from_str(&line).expect("reply should be JSON")
}

#[test]
fn capture_topic_returns_context_variables() {
    let reply = turn(
        &host(),
        json!({"step_name": "capture_topic", "message": {"content": " AI "}, "context": {}}),
    );

    assert_eq!(
        reply["context_variables"],
        json!({"topic": "AI", "previous_topic": "AI"})
    );
    assert!(reply.get("continue").is_none());
}

#[test]
fn unknown_context_keys_are_never_echoed() {
    let reply = turn(
        &host(),
        json!({
            "step_name": "initial_viewpoint",
            "message": {"content": "I think so"},
            "context": {"topic": "AI", "user_secret": "hunter2", "locale": "en"}
        }),
    );

    let text = reply.to_string();
    assert!(!text.contains("user_secret"));
    assert!(!text.contains("hunter2"));
    assert_eq!(reply["context_variables"], json!({"viewpoint": "I think so"}));
}

#[test]
fn unchanged_topic_sets_continue_flag() {
    let reply = turn(
        &host(),
        json!({
            "step_name": "detect_topic_change",
            "context": {"topic": "AI", "previous_topic": "ai"}
        }),
    );

    assert_eq!(reply, json!({"continue": true}));
}

#[test]
fn changed_topic_replies_without_continue() {
    let reply = turn(
        &host(),
        json!({
            "step_name": "detect_topic_change",
            "context": {"topic": "AI Ethics", "previous_topic": "Climate"}
        }),
    );

    assert!(reply["response"].as_str().unwrap().contains("instead of Climate"));
    assert!(reply.get("continue").is_none());
}

#[test]
fn next_steps_handoff_on_the_wire() {
    let reply = turn(
        &host(),
        json!({"step_name": "next_steps", "message": {"content": "3"}}),
    );

    assert_eq!(reply["handoff"], json!({"agent": "whiteboard_agent", "timeout": 60}));
    assert_eq!(
        reply["context_variables"]["handoff_status"],
        "initiating_whiteboard"
    );
}

#[test]
fn return_from_handoff_resets_status() {
    let reply = turn(
        &host(),
        json!({
            "step_name": "handle_return_from_handoff",
            "context": {"topic": "AI", "handoff_status": "returning_from_whiteboard"}
        }),
    );

    assert_eq!(reply["context_variables"], json!({"handoff_status": "none"}));
}

#[test]
fn unknown_step_gets_generic_apology() {
    let reply = turn(&host(), json!({"step_name": "tell_a_joke", "context": {}}));

    assert_eq!(reply, json!({"response": templates::GENERIC_APOLOGY}));
}

#[test]
fn null_message_is_an_input_error() {
    let reply = turn(&host(), json!({"step_name": "evidence_question", "message": null}));

    assert!(reply["response"]
        .as_str()
        .unwrap()
        .starts_with("I'm having trouble processing your examples"));
    assert!(reply.get("context_variables").is_none());
}

#[tokio::test]
async fn malformed_line_does_not_stop_the_stream() {
    let input = format!(
        "{}\n{}\n{}\n",
        "{oops",
        json!({"step_name": "introduction"}),
        json!({"step_name": "closing", "context": {"topic": "AI"}})
    );
    let mut output = Vec::new();

    let answered = host().run(input.as_bytes(), &mut output).await.unwrap();

    assert_eq!(answered, 3);
    let replies: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(replies[0]["response"], templates::GENERIC_APOLOGY);
    assert_eq!(replies[1]["response"], templates::INTRODUCTION);
    assert!(replies[2]["response"]
        .as_str()
        .unwrap()
        .contains("viewpoint on AI."));
}

#[tokio::test]
async fn non_utf8_line_is_answered_and_reading_continues() {
    let mut input = json!({"step_name": "introduction"}).to_string().into_bytes();
    input.push(b'\n');
    input.extend_from_slice(br#"{"step_name": "evidence_question", "message": {"content": ""#);
    input.extend_from_slice(b"\xff\xfe\"}}\n");
    input.extend_from_slice(json!({"step_name": "closing"}).to_string().as_bytes());
    input.push(b'\n');
    let mut output = Vec::new();

    let answered = host().run(input.as_slice(), &mut output).await.unwrap();

    assert_eq!(answered, 3);
    let replies: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(replies[1], json!({"response": templates::GENERIC_APOLOGY}));
    assert!(replies[2]["response"]
        .as_str()
        .unwrap()
        .contains("viewpoint on our topic."));
}
