//! Per-turn orchestration: triage, classify, compose, generate.
//!
//! [`EmpathyEngine`] is an immutable service built once from
//! [`SolaceConfig`] and shared by reference across request handlers. It holds
//! no mutable state, so concurrent calls need no locking.
//!
//! Ordering within a turn is fixed: safety triage runs first and a critical
//! verdict returns the redirect message without analysing emotion or
//! calling the backend. Warning verdicts travel with the generation request
//! so the caller can surface the redirect alongside the reply.

use futures_util::{Stream, StreamExt};
use serde::Serialize;
use tracing::{debug, warn};

use crate::audit::AuditEvent;
use crate::config::SolaceConfig;
use crate::conversation::{ChatMessage, format_conversation_context, prepare_messages, tail};
use crate::emotion::{EmotionAnalysis, classify_emotion};
use crate::fallback::fallback_response;
use crate::generator::ResponseGenerator;
use crate::prompt::compose_system_prompt;
use crate::safety::{SafetyAnalysis, triage_safety};

/// Everything the backend needs for one non-critical turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub safety: SafetyAnalysis,
    pub analysis: EmotionAnalysis,
    pub system_prompt: String,
    /// Windowed history plus the annotated user message, oldest first.
    pub messages: Vec<ChatMessage>,
}

/// Outcome of planning a turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnPlan {
    /// Critical verdict: reply with the redirect message, generate nothing.
    Intervene { safety: SafetyAnalysis },
    /// Hand the request to the generative backend.
    Generate(Box<GenerationRequest>),
}

/// Where a reply's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Generated,
    Fallback,
    SafetyRedirect,
}

/// Final reply for one turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReply {
    pub text: String,
    pub source: ReplySource,
    pub safety: SafetyAnalysis,
    /// `None` when a critical verdict preempted analysis.
    pub analysis: Option<EmotionAnalysis>,
}

/// Immutable turn planner and reply orchestrator.
#[derive(Debug, Clone, Default)]
pub struct EmpathyEngine {
    config: SolaceConfig,
}

impl EmpathyEngine {
    pub fn new(config: SolaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolaceConfig {
        &self.config
    }

    /// Triage, then (unless critical) classify and compose the backend request.
    ///
    /// `history` is the conversation so far, oldest first, excluding `text`.
    /// Its length is the conversation length used by triage.
    pub fn plan_turn(&self, text: &str, history: &[ChatMessage]) -> TurnPlan {
        let safety = triage_safety(text, history.len());
        self.audit(&safety);

        if safety.is_critical() {
            warn!(
                level = %safety.level,
                action = %safety.action,
                "critical safety verdict; skipping generation"
            );
            return TurnPlan::Intervene { safety };
        }

        let analysis = classify_emotion(text);
        debug!(
            state = %analysis.emotional_state,
            sentiment = %analysis.sentiment,
            confidence = analysis.confidence,
            intensity = analysis.intensity,
            safety = %safety.level,
            "turn classified"
        );

        let window = &self.config.history;
        let context =
            format_conversation_context(tail(history, window.prompt_window), window.preview_chars);
        let system_prompt = compose_system_prompt(&analysis, &context);
        let messages = prepare_messages(history, text, &analysis, window.generation_window);

        TurnPlan::Generate(Box::new(GenerationRequest {
            safety,
            analysis,
            system_prompt,
            messages,
        }))
    }

    /// Produce a complete reply, falling back to a canned line if the backend fails.
    pub async fn respond<G>(&self, generator: &G, text: &str, history: &[ChatMessage]) -> TurnReply
    where
        G: ResponseGenerator + ?Sized,
    {
        let request = match self.plan_turn(text, history) {
            TurnPlan::Intervene { safety } => {
                return TurnReply {
                    text: safety.redirect_message.clone().unwrap_or_default(),
                    source: ReplySource::SafetyRedirect,
                    safety,
                    analysis: None,
                };
            }
            TurnPlan::Generate(request) => *request,
        };

        let GenerationRequest {
            safety,
            analysis,
            system_prompt,
            messages,
        } = request;

        let (text, source) = match generator.generate(&system_prompt, &messages).await {
            Ok(reply) => (reply, ReplySource::Generated),
            Err(e) => {
                warn!(
                    error = %e,
                    state = %analysis.emotional_state,
                    "generation failed; using fallback reply"
                );
                (
                    fallback_response(analysis.emotional_state).to_owned(),
                    ReplySource::Fallback,
                )
            }
        };

        TurnReply {
            text,
            source,
            safety,
            analysis: Some(analysis),
        }
    }

    /// Stream a reply chunk by chunk.
    ///
    /// A critical verdict yields only the redirect message. A backend error,
    /// before or during streaming, yields the fallback line and ends the
    /// stream.
    pub fn stream_reply<'a, G>(
        &'a self,
        generator: &'a G,
        text: &'a str,
        history: &'a [ChatMessage],
    ) -> impl Stream<Item = String> + Send + 'a
    where
        G: ResponseGenerator + ?Sized,
    {
        async_stream::stream! {
            match self.plan_turn(text, history) {
                TurnPlan::Intervene { safety } => {
                    yield safety.redirect_message.unwrap_or_default();
                }
                TurnPlan::Generate(request) => {
                    let fallback = fallback_response(request.analysis.emotional_state);
                    match generator.stream(&request.system_prompt, &request.messages).await {
                        Ok(mut chunks) => {
                            while let Some(chunk) = chunks.next().await {
                                match chunk {
                                    Ok(chunk) => {
                                        yield chunk;
                                    }
                                    Err(e) => {
                                        warn!(error = %e, "reply stream failed; using fallback reply");
                                        yield fallback.to_owned();
                                        break;
                                    }
                                }
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "reply stream could not start; using fallback reply");
                            yield fallback.to_owned();
                        }
                    }
                }
            }
        }
    }

    fn audit(&self, safety: &SafetyAnalysis) {
        if !self.config.safety.audit_events {
            return;
        }
        if let Some(event) = AuditEvent::from_safety(safety) {
            event.emit();
        }
    }
}
