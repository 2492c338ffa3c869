//! Emotion classification of user utterances.
//!
//! [`classify_emotion`] combines three pure steps over the static lexicon:
//!
//! 1. **Scoring** ([`scorer::detect`]): dominant state, soft confidence and
//!    matched triggers.
//! 2. **Sentiment** ([`crate::sentiment::sentiment_of`]): polarity looked up
//!    from the state.
//! 3. **Intensity** ([`intensity::intensity`]): strength estimate from
//!    keyword volume, intensifiers, exclamations and capitals.
//!
//! Nothing here keeps state between calls; the same text always yields the
//! same [`EmotionAnalysis`].

pub mod intensity;
pub mod lexicon;
pub mod scorer;

use serde::{Deserialize, Serialize};

use crate::sentiment::{Sentiment, sentiment_of};

/// The dominant emotion of an utterance.
///
/// Declaration order matters: it is the scoring order and the tie-break
/// order. `Calm` doubles as the no-signal fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalState {
    Sadness,
    Anxiety,
    Anger,
    Fear,
    Joy,
    Hope,
    Confusion,
    Frustration,
    Overwhelmed,
    Calm,
}

impl EmotionalState {
    /// All states in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Sadness,
        Self::Anxiety,
        Self::Anger,
        Self::Fear,
        Self::Joy,
        Self::Hope,
        Self::Confusion,
        Self::Frustration,
        Self::Overwhelmed,
        Self::Calm,
    ];

    /// Wire name, e.g. `"overwhelmed"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sadness => "sadness",
            Self::Anxiety => "anxiety",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Joy => "joy",
            Self::Hope => "hope",
            Self::Confusion => "confusion",
            Self::Frustration => "frustration",
            Self::Overwhelmed => "overwhelmed",
            Self::Calm => "calm",
        }
    }

    /// Parse a wire name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Polarity of this state.
    #[must_use]
    pub fn sentiment(self) -> Sentiment {
        sentiment_of(self)
    }
}

impl std::fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    pub sentiment: Sentiment,
    pub emotional_state: EmotionalState,
    /// Share of all trigger matches won by `emotional_state`, `0.0..=1.0`.
    pub confidence: f32,
    /// Matched triggers of `emotional_state`, in lexicon order.
    pub keywords: Vec<String>,
    /// Strength of expression, `0.0..=1.0`.
    pub intensity: f32,
}

/// Classify `text` into state, sentiment, confidence, keywords and intensity.
///
/// Total for every input: empty or unmatched text yields `calm` at
/// [`scorer::NO_SIGNAL_CONFIDENCE`].
#[must_use]
pub fn classify_emotion(text: &str) -> EmotionAnalysis {
    let detection = scorer::detect(text);
    let intensity = intensity::intensity(text, detection.keywords.as_slice());
    EmotionAnalysis {
        sentiment: sentiment_of(detection.state),
        emotional_state: detection.state,
        confidence: detection.confidence,
        keywords: detection.keywords.iter().map(|kw| (*kw).to_owned()).collect(),
        intensity,
    }
}
