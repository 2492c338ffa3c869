//! System prompt and user message assembly.
//!
//! The system prompt is built from four layers:
//!
//! 1. **Role and safety preamble** ([`SAFETY_PREAMBLE`]): coaching role,
//!    crisis-line disclosure, professional-help disclaimer, boundaries.
//! 2. **Response policy** from [`crate::policy::build_policy`].
//! 3. **Sentiment hint** from [`crate::policy::sentiment_hint`].
//! 4. **Conversation context**, pre-formatted by the caller (see
//!    [`crate::conversation::format_conversation_context`]).
//!
//! Everything here is pure string assembly; no backend is contacted.

use crate::conversation::EMPTY_CONTEXT;
use crate::emotion::EmotionAnalysis;
use crate::policy::{build_policy, sentiment_hint};

/// Role definition and safety rules, always first in the system prompt.
pub const SAFETY_PREAMBLE: &str = "\
You are an empathic AI coach designed to provide emotional support and guidance. Your role is to:

1. Listen deeply and validate feelings
2. Ask powerful questions that lead to self-discovery
3. Provide compassionate guidance without judgment
4. Help users understand their emotions and patterns
5. Support growth and positive change

IMPORTANT SAFETY GUIDELINES:
- You are NOT a therapist or medical professional
- If someone mentions self-harm, suicide, or severe mental health crisis, respond with:
  \"I care about your wellbeing. Please reach out to a mental health professional or crisis line:
   - National Suicide Prevention Lifeline: 988
   - Crisis Text Line: Text HOME to 741741\"
- Do NOT provide medical, legal, or financial advice
- Do NOT encourage dependency on AI
- Encourage professional help when appropriate
- Maintain healthy boundaries";

/// Closing line of every system prompt.
pub const CLOSING: &str = "Remember: Your goal is to help this person feel heard, understood, and empowered to navigate their emotions.";

/// Assemble the system prompt for one turn.
///
/// An empty `context` is rendered as the beginning-of-conversation line.
/// Any other context, whitespace included, is embedded as given.
#[must_use]
pub fn compose_system_prompt(analysis: &EmotionAnalysis, context: &str) -> String {
    let policy = build_policy(analysis);
    let context = if context.is_empty() {
        EMPTY_CONTEXT
    } else {
        context
    };

    format!(
        "{SAFETY_PREAMBLE}\n\n\
         EMOTIONAL RESPONSE GUIDELINES:\n\
         - Tone: {tone}\n\
         - Response Length: {length}\n\
         - Approach: {approach}\n\
         - Avoid: {avoid}\n\
         - Include: {include}\n\n\
         SENTIMENT CONTEXT:\n\
         {hint}\n\n\
         CONVERSATION CONTEXT:\n\
         {context}\n\n\
         {CLOSING}",
        tone = policy.tone,
        length = policy.response_length,
        approach = policy.approach,
        avoid = policy.avoid,
        include = policy.include,
        hint = sentiment_hint(analysis.sentiment),
    )
}

/// Prefix the user's text with its emotional context.
///
/// `"[Emotional State: sadness, Sentiment: negative, Intensity: 75.0%]\n\nUser: ..."`
#[must_use]
pub fn compose_user_message(text: &str, analysis: &EmotionAnalysis) -> String {
    format!(
        "[Emotional State: {}, Sentiment: {}, Intensity: {:.1}%]\n\nUser: {}",
        analysis.emotional_state,
        analysis.sentiment,
        analysis.intensity * 100.0,
        text
    )
}
