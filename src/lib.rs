//! Solace: rule-based emotion classification and safety triage for an
//! empathic coaching assistant.
//!
//! Each user message is passed through two independent, deterministic
//! analyses before any generative backend is contacted:
//!
//! - **Safety triage** ([`triage_safety`]) scans for crisis, abuse,
//!   dependency, medical and legal risk and flags very long conversations.
//!   A critical verdict preempts everything else.
//! - **Emotion classification** ([`classify_emotion`]) scores the text
//!   against a keyword lexicon and estimates intensity.
//!
//! The analysis then drives a response policy, rendered into a system prompt
//! by [`compose_system_prompt`]. [`EmpathyEngine`] wires these stages into a
//! per-turn plan and, given a [`ResponseGenerator`], a reply with canned
//! fallbacks when the backend fails.

pub mod audit;
pub mod config;
pub mod conversation;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod host;
pub mod policy;
pub mod prompt;
pub mod safety;
pub mod sentiment;
pub mod solace_dirs;

pub use config::SolaceConfig;
pub use conversation::{ChatMessage, Role};
pub use emotion::{EmotionAnalysis, EmotionalState, classify_emotion};
pub use engine::{EmpathyEngine, GenerationRequest, ReplySource, TurnPlan, TurnReply};
pub use error::{Result, SolaceError};
pub use fallback::fallback_response;
pub use generator::{ReplyStream, ResponseGenerator};
pub use policy::{ResponseLength, ResponsePolicy, build_policy};
pub use prompt::{compose_system_prompt, compose_user_message};
pub use safety::{RiskCategory, SafetyAction, SafetyAnalysis, SafetyLevel, triage_safety};
pub use sentiment::{Sentiment, sentiment_of};
