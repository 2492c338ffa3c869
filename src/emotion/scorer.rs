//! Keyword-count scoring of the dominant emotional state.

use super::EmotionalState;
use super::lexicon::emotion_keywords;

/// Confidence reported when no trigger matches at all.
pub const NO_SIGNAL_CONFIDENCE: f32 = 0.3;

/// Winning state, its soft confidence, and the triggers that matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub state: EmotionalState,
    /// Winner's share of all matches across states, in `0.0..=1.0`.
    pub confidence: f32,
    /// Matched triggers of the winning state, in lexicon order.
    pub keywords: Vec<&'static str>,
}

impl Detection {
    fn no_signal() -> Self {
        Self {
            state: EmotionalState::Calm,
            confidence: NO_SIGNAL_CONFIDENCE,
            keywords: Vec::new(),
        }
    }
}

/// Score `text` against every state's triggers and pick the strongest.
///
/// Each state scores one point per trigger contained in the lower-cased
/// text. The highest score wins; on a tie the state declared first in
/// [`EmotionalState::ALL`] is kept. When nothing matches the result is
/// `calm` at [`NO_SIGNAL_CONFIDENCE`] with no keywords.
#[must_use]
pub fn detect(text: &str) -> Detection {
    detect_lowercased(&text.to_lowercase())
}

pub(crate) fn detect_lowercased(lower: &str) -> Detection {
    let mut best: Option<(EmotionalState, Vec<&'static str>)> = None;
    let mut total_matches = 0usize;

    for state in EmotionalState::ALL {
        let matched: Vec<&'static str> = emotion_keywords(state)
            .iter()
            .filter(|kw| lower.contains(kw))
            .collect();
        total_matches += matched.len();

        let beats_current = match &best {
            Some((_, current)) => matched.len() > current.len(),
            None => !matched.is_empty(),
        };
        if beats_current {
            best = Some((state, matched));
        }
    }

    let Some((state, keywords)) = best else {
        return Detection::no_signal();
    };

    let confidence = (keywords.len() as f32 / total_matches as f32).min(1.0);
    Detection {
        state,
        confidence,
        keywords,
    }
}
