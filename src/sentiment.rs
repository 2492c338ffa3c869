//! Coarse three-way polarity derived from the emotional state.
//!
//! Sentiment is never computed from the text. It is a fixed lookup on the
//! [`EmotionalState`] chosen by the scorer, so the two can never disagree.

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionalState;

/// Polarity bucket of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Wire name (`"positive"`, `"neutral"`, `"negative"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an emotional state to its polarity.
#[must_use]
pub fn sentiment_of(state: EmotionalState) -> Sentiment {
    match state {
        EmotionalState::Joy | EmotionalState::Hope | EmotionalState::Calm => Sentiment::Positive,
        EmotionalState::Sadness
        | EmotionalState::Anxiety
        | EmotionalState::Anger
        | EmotionalState::Fear
        | EmotionalState::Frustration
        | EmotionalState::Overwhelmed => Sentiment::Negative,
        EmotionalState::Confusion => Sentiment::Neutral,
    }
}
