use solace::emotion::lexicon::emotion_keywords;
use solace::{EmotionalState, Sentiment, classify_emotion, compose_user_message};

const SAMPLES: &[&str] = &[
    "",
    "nothing to report",
    "I'm so happy and grateful today!",
    "Estou muito ansioso e preocupado com o trabalho",
    "I'm confused, I don't understand what is happening",
    "ESTOU COM RAIVA E FRUSTRADO!!!",
    "tudo está demais, estou sobrecarregado",
    "tenho medo do escuro",
    "I feel hopeful about the future, really optimistic",
    "I'm SO SO tired of this, I'm fed up!!!!",
];

#[test]
fn scores_stay_in_unit_range() {
    for text in SAMPLES {
        let a = classify_emotion(text);
        assert!((0.0..=1.0).contains(&a.confidence), "{text}: {}", a.confidence);
        assert!((0.0..=1.0).contains(&a.intensity), "{text}: {}", a.intensity);
    }
}

#[test]
fn sentiment_is_a_function_of_state() {
    for text in SAMPLES {
        let a = classify_emotion(text);
        assert_eq!(a.sentiment, solace::sentiment_of(a.emotional_state), "{text}");
    }
}

#[test]
fn keywords_come_from_winning_state_in_lexicon_order() {
    for text in SAMPLES {
        let a = classify_emotion(text);
        let table: Vec<&str> = emotion_keywords(a.emotional_state).iter().collect();
        let positions: Vec<usize> = a
            .keywords
            .iter()
            .map(|kw| {
                table
                    .iter()
                    .position(|entry| *entry == kw.as_str())
                    .unwrap_or_else(|| panic!("{kw} not in {} table", a.emotional_state))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}: {positions:?}");
    }
}

#[test]
fn no_match_is_calm_with_fixed_confidence() {
    let a = classify_emotion("nothing to report");
    assert_eq!(a.emotional_state, EmotionalState::Calm);
    assert_eq!(a.sentiment, Sentiment::Positive);
    assert!((a.confidence - 0.3).abs() < 1e-6);
    assert!(a.keywords.is_empty());
}

#[test]
fn portuguese_example_is_sad_and_intense() {
    let text = "estou muito triste e sem esperança!!!";
    let a = classify_emotion(text);
    assert_eq!(a.emotional_state, EmotionalState::Sadness);
    assert_eq!(a.sentiment, Sentiment::Negative);
    assert_eq!(a.keywords, vec!["triste", "sem esperança"]);
    let plain = classify_emotion("estou triste e sem esperança");
    assert!(a.intensity > plain.intensity);
}

#[test]
fn mixed_signal_confidence_is_winner_share() {
    let a = classify_emotion("Estou muito ansioso e preocupado com o trabalho");
    assert_eq!(a.emotional_state, EmotionalState::Anxiety);
    assert_eq!(a.keywords, vec!["ansioso", "preocupado"]);
    assert!((a.confidence - 1.0).abs() < 1e-6);
}

#[test]
fn exclamations_never_lower_intensity() {
    let base = "I'm so angry";
    let mut previous = classify_emotion(base).intensity;
    for n in 1..=5 {
        let text = format!("{base}{}", "!".repeat(n));
        let next = classify_emotion(&text).intensity;
        assert!(next >= previous, "{text}");
        previous = next;
    }
}

#[test]
fn shouting_raises_intensity_without_changing_state() {
    let quiet = classify_emotion("i am furious");
    let loud = classify_emotion("I AM FURIOUS");
    assert_eq!(quiet.emotional_state, loud.emotional_state);
    assert!(loud.intensity > quiet.intensity);
}

#[test]
fn user_message_reports_rounded_percentage() {
    let text = "I'm so happy and grateful today!";
    let a = classify_emotion(text);
    let msg = compose_user_message(text, &a);
    let expected_pct = format!("{:.1}%", a.intensity * 100.0);
    assert!(msg.starts_with("[Emotional State: joy, Sentiment: positive, Intensity: "));
    assert!(msg.contains(&expected_pct));
    assert!(msg.ends_with(&format!("\n\nUser: {text}")));
}
