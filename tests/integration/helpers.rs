//! Shared helpers for integration tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use solace::host::contract::ResponseEnvelope;
use solace::host::handler::HostCommandRouter;
use solace::host::stdio::run_bridge;
use solace::{ChatMessage, EmpathyEngine, ResponseGenerator, SolaceError};

/// Generator that returns a fixed reply (or error) and records what it saw.
pub(crate) struct ScriptedGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_system_prompt: Mutex<Option<String>>,
    last_messages: Mutex<Vec<ChatMessage>>,
}

impl ScriptedGenerator {
    pub(crate) fn replying(text: &str) -> Self {
        Self::with(Ok(text.to_owned()))
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::with(Err(message.to_owned()))
    }

    fn with(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_system_prompt: Mutex::new(None),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_system_prompt(&self) -> Option<String> {
        self.last_system_prompt.lock().expect("prompt lock").clone()
    }

    pub(crate) fn last_messages(&self) -> Vec<ChatMessage> {
        self.last_messages.lock().expect("messages lock").clone()
    }
}

#[async_trait]
impl ResponseGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> solace::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_system_prompt.lock().expect("prompt lock") = Some(system_prompt.to_owned());
        *self.last_messages.lock().expect("messages lock") = messages.to_vec();
        self.reply.clone().map_err(SolaceError::Backend)
    }
}

/// Alternating user/assistant history of `n` messages, oldest first.
pub(crate) fn alternating_history(n: usize) -> Vec<ChatMessage> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                ChatMessage::user(format!("user turn {i}"))
            } else {
                ChatMessage::assistant(format!("assistant turn {i}"))
            }
        })
        .collect()
}

/// Feed `lines` through the JSON bridge and parse every response line.
pub(crate) async fn bridge_session(engine: EmpathyEngine, lines: &[String]) -> Vec<ResponseEnvelope> {
    let router = HostCommandRouter::new(engine);
    let mut input = lines.join("\n");
    input.push('\n');
    let mut output = Vec::new();
    run_bridge(&router, input.as_bytes(), &mut output)
        .await
        .expect("bridge session");
    String::from_utf8(output)
        .expect("utf-8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("response envelope"))
        .collect()
}
