//! Surface-cue estimate of how strongly an emotion is expressed.
//!
//! Four independent channels each contribute a capped amount; the sum is
//! clamped to `1.0`. Every channel is non-decreasing in its trigger count.

use super::lexicon::INTENSIFIERS;

const KEYWORD_WEIGHT: f32 = 0.2;
const KEYWORD_CAP: f32 = 0.5;
const INTENSIFIER_WEIGHT: f32 = 0.15;
const INTENSIFIER_CAP: f32 = 0.3;
const EXCLAMATION_WEIGHT: f32 = 0.1;
const EXCLAMATION_CAP: f32 = 0.2;
const CAPS_WEIGHT: f32 = 0.1;
const CAPS_CAP: f32 = 0.2;

/// Estimate intensity in `0.0..=1.0` from `text` and the matched emotion triggers.
///
/// `text` is the original, un-lowercased input: shouting in capitals is one
/// of the cues.
#[must_use]
pub fn intensity<S>(text: &str, matched_keywords: &[S]) -> f32 {
    let lower = text.to_lowercase();
    let total = capped(matched_keywords.len(), KEYWORD_WEIGHT, KEYWORD_CAP)
        + capped(intensifier_count(&lower), INTENSIFIER_WEIGHT, INTENSIFIER_CAP)
        + capped(exclamation_count(text), EXCLAMATION_WEIGHT, EXCLAMATION_CAP)
        + capped(caps_word_count(text), CAPS_WEIGHT, CAPS_CAP);
    total.min(1.0)
}

fn capped(count: usize, weight: f32, cap: f32) -> f32 {
    (count as f32 * weight).min(cap)
}

/// Distinct intensifiers present; repeats of the same word count once.
fn intensifier_count(lower: &str) -> usize {
    INTENSIFIERS.iter().filter(|w| lower.contains(*w)).count()
}

fn exclamation_count(text: &str) -> usize {
    text.matches('!').count()
}

/// Whitespace-separated words longer than one character whose cased
/// characters are all upper-case. Words without any cased character
/// (numbers, punctuation runs) do not count.
fn caps_word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .filter(|word| {
            word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
        })
        .count()
}
