use serde_json::json;
use solace::EmpathyEngine;
use solace::host::contract::{CONTRACT_VERSION, CommandEnvelope, CommandName};
use solace::host::stdio::PARSE_ERROR_ID;

use crate::helpers::bridge_session;

fn line(request_id: &str, command: CommandName, payload: serde_json::Value) -> String {
    serde_json::to_string(&CommandEnvelope::new(request_id, command, payload))
        .expect("serialize envelope")
}

#[tokio::test]
async fn full_session_round_trip() {
    let lines = vec![
        line("1", CommandName::HostVersion, json!({})),
        line("2", CommandName::EmotionClassify, json!({"text": "estou muito triste e sem esperança!!!"})),
        line("3", CommandName::SafetyTriage, json!({"text": "I want to end it all and also need a lawyer"})),
        line(
            "4",
            CommandName::TurnPlan,
            json!({
                "text": "I'm worried about tomorrow",
                "history": [
                    {"role": "user", "content": "hi"},
                    {"role": "assistant", "content": "Hello! How are you feeling?"}
                ]
            }),
        ),
        line("5", CommandName::RuntimeStop, json!({})),
    ];

    let responses = bridge_session(EmpathyEngine::default(), &lines).await;
    assert_eq!(responses.len(), 5);
    assert!(responses.iter().all(|r| r.ok && r.v == CONTRACT_VERSION));

    assert_eq!(responses[0].payload["contract_version"], CONTRACT_VERSION);

    let analysis = &responses[1].payload;
    assert_eq!(analysis["emotional_state"], "sadness");
    assert_eq!(analysis["sentiment"], "negative");
    let intensity = analysis["intensity"].as_f64().expect("intensity");
    assert!((intensity - 0.75).abs() < 1e-5);

    assert_eq!(responses[2].payload["level"], "critical");
    assert_eq!(responses[2].payload["category"], "crisis");

    let plan = &responses[3].payload;
    assert_eq!(plan["kind"], "generate");
    assert_eq!(plan["analysis"]["emotional_state"], "anxiety");
    assert_eq!(plan["messages"].as_array().expect("messages").len(), 3);
    assert!(
        plan["system_prompt"]
            .as_str()
            .expect("prompt")
            .contains("Assistant: Hello! How are you feeling?...\n")
    );

    assert_eq!(responses[4].request_id, "5");
}

#[tokio::test]
async fn errors_do_not_end_the_session() {
    let lines = vec![
        "{this is not json".to_owned(),
        line("bad-payload", CommandName::SafetyTriage, json!({"conversation_length": 3})),
        r#"{"v":7,"request_id":"old","command":"host.ping","payload":{}}"#.to_owned(),
        line("ok", CommandName::HostPing, json!({})),
    ];

    let responses = bridge_session(EmpathyEngine::default(), &lines).await;
    assert_eq!(responses.len(), 4);

    assert_eq!(responses[0].request_id, PARSE_ERROR_ID);
    assert!(!responses[0].ok);

    assert_eq!(responses[1].request_id, "bad-payload");
    assert!(!responses[1].ok);
    assert!(responses[1].error.as_deref().unwrap_or_default().contains("safety.triage"));

    assert_eq!(responses[2].request_id, "old");
    assert!(!responses[2].ok);

    assert!(responses[3].ok);
    assert_eq!(responses[3].payload["pong"], true);
}

#[tokio::test]
async fn compose_honours_prompt_window() {
    let history: Vec<serde_json::Value> = (0..8)
        .map(|i| json!({"role": "user", "content": format!("note {i}")}))
        .collect();
    let lines = vec![line(
        "c",
        CommandName::PromptCompose,
        json!({"text": "hi", "history": history}),
    )];

    let responses = bridge_session(EmpathyEngine::default(), &lines).await;
    let prompt = responses[0].payload["system_prompt"].as_str().expect("prompt");
    assert!(prompt.contains("User: note 3...\n"));
    assert!(!prompt.contains("note 2"));
    assert_eq!(
        responses[0].payload["user_message"],
        "[Emotional State: calm, Sentiment: positive, Intensity: 0.0%]\n\nUser: hi"
    );
    assert_eq!(responses[0].payload["safety"]["level"], "safe");
}
