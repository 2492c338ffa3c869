//! Per-emotion response policy.
//!
//! A [`ResponsePolicy`] tells the downstream generator how to answer: which
//! tone to take, how long to be, what to do, what to avoid and what to
//! include. Policies are a fixed table indexed by [`EmotionalState`].

use serde::{Deserialize, Serialize};

use crate::emotion::{EmotionAnalysis, EmotionalState};
use crate::sentiment::Sentiment;

/// Target length of the generated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseLength {
    Short,
    Medium,
    MediumLong,
}

impl ResponseLength {
    /// Wire name (`"short"`, `"medium"`, `"medium-long"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::MediumLong => "medium-long",
        }
    }
}

impl std::fmt::Display for ResponseLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response directives for one emotional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponsePolicy {
    pub tone: &'static str,
    pub response_length: ResponseLength,
    pub approach: &'static str,
    pub avoid: &'static str,
    pub include: &'static str,
}

/// Policy for the analysed state.
#[must_use]
pub fn build_policy(analysis: &EmotionAnalysis) -> ResponsePolicy {
    policy_for(analysis.emotional_state)
}

/// Policy table lookup.
#[must_use]
pub fn policy_for(state: EmotionalState) -> ResponsePolicy {
    match state {
        EmotionalState::Sadness => ResponsePolicy {
            tone: "compassionate, warm, validating",
            response_length: ResponseLength::Medium,
            approach: "Listen deeply, validate feelings, gently explore what's beneath the sadness",
            avoid: "toxic positivity, dismissing feelings, quick fixes",
            include: "acknowledgment of pain, gentle hope, support",
        },
        EmotionalState::Anxiety => ResponsePolicy {
            tone: "calm, grounding, reassuring",
            response_length: ResponseLength::Medium,
            approach: "Help ground in present moment, break down worries, offer perspective",
            avoid: "dismissing concerns, overwhelming with too much info",
            include: "breathing techniques, perspective, actionable steps",
        },
        EmotionalState::Anger => ResponsePolicy {
            tone: "respectful, understanding, non-judgmental",
            response_length: ResponseLength::Medium,
            approach: "Acknowledge the anger, explore what's beneath it, find constructive outlets",
            avoid: "dismissing anger, being defensive, minimizing",
            include: "validation, curiosity, constructive channeling",
        },
        EmotionalState::Fear => ResponsePolicy {
            tone: "protective, reassuring, empowering",
            response_length: ResponseLength::Medium,
            approach: "Acknowledge fear, explore it with curiosity, build confidence",
            avoid: "dismissing fears, false reassurance, pushing too hard",
            include: "validation, gradual exposure, empowerment",
        },
        EmotionalState::Joy => ResponsePolicy {
            tone: "enthusiastic, celebratory, warm",
            response_length: ResponseLength::Short,
            approach: "Celebrate with them, explore what created this joy, amplify positivity",
            avoid: "dampening enthusiasm, over-analyzing",
            include: "celebration, gratitude, momentum building",
        },
        EmotionalState::Hope => ResponsePolicy {
            tone: "encouraging, supportive, visionary",
            response_length: ResponseLength::Medium,
            approach: "Nurture hope, build on it, create action plans",
            avoid: "false promises, overwhelming",
            include: "encouragement, practical steps, vision",
        },
        EmotionalState::Confusion => ResponsePolicy {
            tone: "patient, clarifying, exploratory",
            response_length: ResponseLength::Medium,
            approach: "Help clarify thoughts, ask clarifying questions, break down complexity",
            avoid: "adding more confusion, being too technical",
            include: "clarity, structure, step-by-step guidance",
        },
        EmotionalState::Frustration => ResponsePolicy {
            tone: "understanding, problem-solving, empowering",
            response_length: ResponseLength::Medium,
            approach: "Validate frustration, explore solutions, build agency",
            avoid: "dismissing, being defensive, overwhelming",
            include: "validation, problem-solving, empowerment",
        },
        EmotionalState::Overwhelmed => ResponsePolicy {
            tone: "calming, simplifying, supportive",
            response_length: ResponseLength::Short,
            approach: "Simplify, break down, prioritize, offer breathing room",
            avoid: "adding more tasks, complexity, pressure",
            include: "simplification, prioritization, rest",
        },
        EmotionalState::Calm => ResponsePolicy {
            tone: "balanced, thoughtful, clear",
            response_length: ResponseLength::Medium,
            approach: "Explore deeper, maintain calm, guide reflection",
            avoid: "disrupting calm, unnecessary drama",
            include: "clarity, depth, wisdom",
        },
    }
}

/// One-line guidance for the overall polarity.
#[must_use]
pub fn sentiment_hint(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => {
            "Build on this positive momentum. Explore what's working and how to sustain it."
        }
        Sentiment::Negative => {
            "Validate the difficulty. Explore what's beneath the negativity with curiosity and compassion."
        }
        Sentiment::Neutral => {
            "Explore deeper. Help the person connect with their underlying feelings and needs."
        }
    }
}

/// Length budget from intensity: the stronger the emotion, the shorter the reply.
///
/// `> 0.8` is short, `> 0.5` is medium, anything else medium-long.
#[must_use]
pub fn length_from_intensity(intensity: f32) -> ResponseLength {
    if intensity > 0.8 {
        ResponseLength::Short
    } else if intensity > 0.5 {
        ResponseLength::Medium
    } else {
        ResponseLength::MediumLong
    }
}
