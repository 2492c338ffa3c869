//! Canned replies for when the generative backend fails.
//!
//! Callers that cannot get a generated reply still answer in a tone that
//! fits the detected emotion.

use crate::emotion::EmotionalState;

/// Reply for states without a dedicated line.
pub const DEFAULT_FALLBACK: &str = "I'm here to listen. What's on your mind?";

/// Fallback reply for `state`.
#[must_use]
pub fn fallback_response(state: EmotionalState) -> &'static str {
    match state {
        EmotionalState::Sadness => {
            "I hear that you're going through a difficult time. Your feelings are valid. Would you like to talk about what's on your mind?"
        }
        EmotionalState::Anxiety => {
            "I sense some worry in what you're sharing. Take a moment to breathe. What's the most pressing thing on your mind right now?"
        }
        EmotionalState::Anger => {
            "I understand you're frustrated. That's a valid feeling. What would help you feel better right now?"
        }
        EmotionalState::Joy => {
            "That's wonderful! I'm happy for you. Tell me more about what's bringing you joy."
        }
        EmotionalState::Calm => "You seem grounded right now. What brought you here today?",
        EmotionalState::Overwhelmed => {
            "It sounds like a lot is happening. Let's take this one step at a time. What's the most urgent thing?"
        }
        EmotionalState::Fear
        | EmotionalState::Hope
        | EmotionalState::Confusion
        | EmotionalState::Frustration => DEFAULT_FALLBACK,
    }
}
