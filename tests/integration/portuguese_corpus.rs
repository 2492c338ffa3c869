use solace::emotion::lexicon::emotion_keywords;
use solace::{EmotionalState, RiskCategory, SafetyLevel, classify_emotion, triage_safety};

/// Portuguese sentences and the state each must classify as.
const CORPUS: &[(&str, EmotionalState, &[&str])] = &[
    ("estou feliz porque sou casado", EmotionalState::Joy, &["feliz"]),
    ("o ano passado foi alegre", EmotionalState::Joy, &["alegre"]),
    ("estou calmo mas triste", EmotionalState::Sadness, &["triste"]),
    ("estou fazendo progresso no trabalho", EmotionalState::Hope, &["progresso"]),
    ("o dia foi pesado e estou cansado", EmotionalState::Overwhelmed, &["cansado"]),
    ("estou triste desde o ano passado", EmotionalState::Sadness, &["triste"]),
    ("estou muito ansioso com a prova", EmotionalState::Anxiety, &["ansioso"]),
    ("tenho raiva do meu chefe", EmotionalState::Anger, &["raiva"]),
    ("estou confuso, não entendo nada", EmotionalState::Confusion, &["confuso", "não entendo"]),
    ("sinto-me sobrecarregado e exausto", EmotionalState::Overwhelmed, &["sobrecarregado", "exausto"]),
    ("hoje estou tranquilo e relaxado", EmotionalState::Calm, &["tranquilo", "relaxado"]),
    ("estou frustrado e decepcionado", EmotionalState::Frustration, &["frustrado", "decepcionado"]),
    ("sou grato pela ajuda", EmotionalState::Joy, &["grato"]),
    ("sinto pânico e pavor", EmotionalState::Fear, &["pânico", "pavor"]),
];

/// Everyday Portuguese words that spell out a short English emotion word.
const ORDINARY_WORDS: &[&str] = &[
    "casado", "passado", "pesado", "atrasado", "usado", "calmo", "calma", "acalmar", "progresso",
    "abusei", "abusado", "violento", "confidente", "panico",
];

#[test]
fn portuguese_sentences_classify_as_expected() {
    for (text, state, keywords) in CORPUS {
        let a = classify_emotion(text);
        assert_eq!(a.emotional_state, *state, "{text}");
        assert_eq!(a.keywords, *keywords, "{text}");
    }
}

#[test]
fn calmo_is_counted_once() {
    let a = classify_emotion("estou calmo mas triste");
    assert!((a.confidence - 0.5).abs() < 1e-6);
}

#[test]
fn english_triggers_never_fire_on_ordinary_portuguese_words() {
    for word in ORDINARY_WORDS {
        for state in EmotionalState::ALL {
            let hits: Vec<&str> = emotion_keywords(state)
                .english
                .iter()
                .copied()
                .filter(|kw| word.contains(kw))
                .collect();
            assert!(hits.is_empty(), "{word} matched {state} {hits:?}");
        }
        assert_eq!(triage_safety(word, 0).level, SafetyLevel::Safe, "{word}");
    }
}

#[test]
fn portuguese_triage_keeps_its_verdicts() {
    assert_eq!(triage_safety("ontem abusei do chocolate", 0).level, SafetyLevel::Safe);
    let s = triage_safety("fui agredido ontem", 0);
    assert_eq!(s.category, Some(RiskCategory::Abuse));
    assert_eq!(s.level, SafetyLevel::Critical);
}
