//! Command routing from host envelopes to the engine.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::conversation::{ChatMessage, format_conversation_context, tail};
use crate::emotion::classify_emotion;
use crate::engine::EmpathyEngine;
use crate::error::{Result, SolaceError};
use crate::host::contract::{CONTRACT_VERSION, CommandEnvelope, CommandName, ResponseEnvelope};
use crate::prompt::{compose_system_prompt, compose_user_message};
use crate::safety::triage_safety;

/// Routes validated command envelopes to the engine.
///
/// Stateless apart from the engine it wraps; every command is answered from
/// its own payload.
pub struct HostCommandRouter {
    engine: EmpathyEngine,
}

impl HostCommandRouter {
    pub fn new(engine: EmpathyEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &EmpathyEngine {
        &self.engine
    }

    /// Validate and route an envelope, turning any failure into an error
    /// response that carries the request id.
    pub fn dispatch(&self, envelope: &CommandEnvelope) -> ResponseEnvelope {
        if let Err(e) = envelope.validate() {
            warn!(request_id = %envelope.request_id, error = %e, "invalid host command envelope");
            return ResponseEnvelope::error(envelope.request_id.clone(), e.to_string());
        }

        match self.route(envelope) {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    request_id = %envelope.request_id,
                    command = %envelope.command,
                    error = %e,
                    "host command failed"
                );
                ResponseEnvelope::error(envelope.request_id.clone(), e.to_string())
            }
        }
    }

    /// Route a command envelope to the appropriate handler.
    pub fn route(&self, envelope: &CommandEnvelope) -> Result<ResponseEnvelope> {
        debug!(request_id = %envelope.request_id, command = %envelope.command, "routing host command");
        match envelope.command {
            CommandName::HostPing => Ok(ResponseEnvelope::ok(
                envelope.request_id.clone(),
                serde_json::json!({"pong": true}),
            )),
            CommandName::HostVersion => Ok(ResponseEnvelope::ok(
                envelope.request_id.clone(),
                serde_json::json!({
                    "contract_version": CONTRACT_VERSION,
                    "package_version": env!("CARGO_PKG_VERSION"),
                }),
            )),
            CommandName::EmotionClassify => self.handle_emotion_classify(envelope),
            CommandName::SafetyTriage => self.handle_safety_triage(envelope),
            CommandName::PromptCompose => self.handle_prompt_compose(envelope),
            CommandName::TurnPlan => self.handle_turn_plan(envelope),
            CommandName::RuntimeStop => Ok(ResponseEnvelope::ok(
                envelope.request_id.clone(),
                serde_json::json!({"accepted": true}),
            )),
        }
    }

    fn handle_emotion_classify(&self, envelope: &CommandEnvelope) -> Result<ResponseEnvelope> {
        let payload: TextPayload = parse_payload(envelope)?;
        let analysis = classify_emotion(&payload.text);
        Ok(ResponseEnvelope::ok(
            envelope.request_id.clone(),
            serde_json::to_value(analysis)?,
        ))
    }

    fn handle_safety_triage(&self, envelope: &CommandEnvelope) -> Result<ResponseEnvelope> {
        let payload: TriagePayload = parse_payload(envelope)?;
        let safety = triage_safety(&payload.text, payload.conversation_length);
        Ok(ResponseEnvelope::ok(
            envelope.request_id.clone(),
            serde_json::to_value(safety)?,
        ))
    }

    /// Compose the prompt pair for a turn.
    ///
    /// The prompt is built even for flagged text, so the payload carries the
    /// `safety` verdict alongside it. A critical verdict means the prompt must
    /// not reach a backend; `turn.plan` is the short-circuiting path.
    fn handle_prompt_compose(&self, envelope: &CommandEnvelope) -> Result<ResponseEnvelope> {
        let payload: TurnPayload = parse_payload(envelope)?;
        let window = &self.engine.config().history;
        let safety = triage_safety(&payload.text, payload.history.len());
        let analysis = classify_emotion(&payload.text);
        let context = format_conversation_context(
            tail(&payload.history, window.prompt_window),
            window.preview_chars,
        );
        let system_prompt = compose_system_prompt(&analysis, &context);
        let user_message = compose_user_message(&payload.text, &analysis);

        Ok(ResponseEnvelope::ok(
            envelope.request_id.clone(),
            serde_json::json!({
                "analysis": serde_json::to_value(&analysis)?,
                "safety": serde_json::to_value(&safety)?,
                "system_prompt": system_prompt,
                "user_message": user_message,
            }),
        ))
    }

    fn handle_turn_plan(&self, envelope: &CommandEnvelope) -> Result<ResponseEnvelope> {
        let payload: TurnPayload = parse_payload(envelope)?;
        let plan = self.engine.plan_turn(&payload.text, &payload.history);
        Ok(ResponseEnvelope::ok(
            envelope.request_id.clone(),
            serde_json::to_value(plan)?,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct TextPayload {
    text: String,
}

#[derive(Debug, Deserialize)]
struct TriagePayload {
    text: String,
    #[serde(default)]
    conversation_length: usize,
}

#[derive(Debug, Deserialize)]
struct TurnPayload {
    text: String,
    #[serde(default)]
    history: Vec<ChatMessage>,
}

fn parse_payload<T: serde::de::DeserializeOwned>(envelope: &CommandEnvelope) -> Result<T> {
    serde_json::from_value(envelope.payload.clone()).map_err(|e| {
        SolaceError::Bridge(format!("invalid payload for {}: {e}", envelope.command))
    })
}
