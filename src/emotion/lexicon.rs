//! Keyword tables for emotion scoring and intensity estimation.
//!
//! Tables hold Portuguese and English triggers, already lower-cased.
//! Matching is plain substring containment against the lower-cased input,
//! so a trigger also fires inside longer words. An English trigger must
//! therefore never occur inside a Portuguese word the tables serve: short
//! English words ("sad", "calm") are written as phrases instead.

use super::EmotionalState;

/// One trigger set, split by language.
#[derive(Debug, Clone, Copy)]
pub struct Triggers {
    pub portuguese: &'static [&'static str],
    pub english: &'static [&'static str],
}

impl Triggers {
    /// Every trigger, Portuguese block first. This is the scoring order.
    pub fn iter(self) -> impl Iterator<Item = &'static str> {
        self.portuguese.iter().chain(self.english).copied()
    }
}

// ── Emotion triggers ────────────────────────────────────────────────────

const SADNESS: Triggers = Triggers {
    portuguese: &[
        "triste",
        "deprimido",
        "mal",
        "infeliz",
        "choro",
        "chorar",
        "desanimado",
        "vazio",
        "sem esperança",
        "sozinho",
        "isolado",
        "melancolia",
        "pena",
        "luto",
        "perda",
        "fracasso",
    ],
    english: &[
        "i'm sad",
        "i am sad",
        "feel sad",
        "sadness",
        "depressed",
        "unhappy",
        "lonely",
        "hopeless",
        "heartbroken",
        "grief",
        "crying",
    ],
};

const ANXIETY: Triggers = Triggers {
    portuguese: &[
        "ansioso",
        "nervoso",
        "preocupado",
        "medo",
        "pânico",
        "tenso",
        "estressado",
        "inquieto",
        "assustado",
        "apreensivo",
        "angustiado",
        "fobia",
        "tremendo",
        "suando",
    ],
    english: &[
        "anxious",
        "anxiety",
        "nervous",
        "worried",
        "panicking",
        "panic attack",
        "stressed",
        "restless",
        "uneasy",
    ],
};

const ANGER: Triggers = Triggers {
    portuguese: &[
        "raiva",
        "furioso",
        "irritado",
        "bravo",
        "revoltado",
        "indignado",
        "ódio",
        "ressentido",
        "frustrado",
        "exasperado",
        "agravado",
        "encolerizado",
        "furibundo",
        "irado",
    ],
    english: &[
        "angry",
        "furious",
        "irritated",
        "outraged",
        "resentful",
        "i hate",
        "pissed off",
    ],
};

const FEAR: Triggers = Triggers {
    portuguese: &[
        "medo",
        "assustado",
        "apavorado",
        "aterrorizado",
        "medroso",
        "fobia",
        "pânico",
        "horror",
        "pavor",
        "susto",
        "tremendo",
    ],
    english: &[
        "afraid",
        "scared",
        "terrified",
        "frightened",
        "dread",
    ],
};

const JOY: Triggers = Triggers {
    portuguese: &[
        "feliz",
        "alegre",
        "contente",
        "animado",
        "entusiasmado",
        "grato",
        "maravilhoso",
        "incrível",
        "ótimo",
        "excelente",
        "amor",
        "adoro",
        "amando",
        "perfeito",
    ],
    english: &[
        "happy",
        "joyful",
        "grateful",
        "wonderful",
        "excited",
        "delighted",
        "thrilled",
        "love",
    ],
};

const HOPE: Triggers = Triggers {
    portuguese: &[
        "esperança",
        "otimista",
        "confiante",
        "positivo",
        "acredito",
        "possível",
        "vou conseguir",
        "conseguir",
        "melhorar",
        "progresso",
        "oportunidade",
        "chance",
        "futuro brilhante",
    ],
    english: &[
        "hopeful",
        "optimistic",
        "feel confident",
        "i'm confident",
        "i believe",
        "looking forward",
        "opportunity",
        "making progress",
    ],
};

const CONFUSION: Triggers = Triggers {
    portuguese: &[
        "confuso",
        "perdido",
        "desorientado",
        "não entendo",
        "incerto",
        "dúvida",
        "indeciso",
        "perplexo",
        "atordoado",
        "embaraçado",
    ],
    english: &[
        "confused",
        "don't understand",
        "unsure",
        "uncertain",
        "puzzled",
        "disoriented",
    ],
};

const FRUSTRATION: Triggers = Triggers {
    portuguese: &[
        "frustrado",
        "decepcionado",
        "insatisfeito",
        "desapontado",
        "arrependido",
        "ressentido",
        "descontente",
        "amargado",
    ],
    english: &[
        "frustrated",
        "disappointed",
        "fed up",
        "dissatisfied",
        "let down",
    ],
};

const OVERWHELMED: Triggers = Triggers {
    portuguese: &[
        "sobrecarregado",
        "esgotado",
        "cansado",
        "exausto",
        "sem força",
        "drenado",
        "destruído",
        "acabado",
        "no limite",
        "queimado",
    ],
    english: &[
        "overwhelmed",
        "exhausted",
        "burned out",
        "burnt out",
        "drained",
        "too much",
        "tired",
    ],
};

const CALM: Triggers = Triggers {
    portuguese: &[
        "calmo",
        "tranquilo",
        "sereno",
        "pacífico",
        "relaxado",
        "zen",
        "em paz",
        "equilibrado",
        "centrado",
    ],
    english: &[
        "mindful",
        "feel calm",
        "i'm calm",
        "i am calm",
        "relaxed",
        "peaceful",
        "serene",
        "at peace",
    ],
};

/// Trigger words for one emotional state.
#[must_use]
pub fn emotion_keywords(state: EmotionalState) -> Triggers {
    match state {
        EmotionalState::Sadness => SADNESS,
        EmotionalState::Anxiety => ANXIETY,
        EmotionalState::Anger => ANGER,
        EmotionalState::Fear => FEAR,
        EmotionalState::Joy => JOY,
        EmotionalState::Hope => HOPE,
        EmotionalState::Confusion => CONFUSION,
        EmotionalState::Frustration => FRUSTRATION,
        EmotionalState::Overwhelmed => OVERWHELMED,
        EmotionalState::Calm => CALM,
    }
}

// ── Modifiers ───────────────────────────────────────────────────────────

/// Words that amplify the emotion they accompany.
pub const INTENSIFIERS: &[&str] = &[
    "muito",
    "demais",
    "extremamente",
    "super",
    "ultra",
    "mega",
    "bastante",
    "very",
    "extremely",
    "really",
    "incredibly",
    "totally",
];

/// Negation words.
///
/// Not consulted by the scorer: "not happy" still scores as joy. Kept so a
/// negation-aware scorer can be introduced without reshaping the tables.
pub const NEGATORS: &[&str] = &["não", "nunca", "jamais", "nada", "not", "never", "nothing"];

/// English/Portuguese pairs across `tables` where one trigger occurs inside
/// the other.
#[cfg(test)]
pub(crate) fn cross_language_overlaps(tables: &[Triggers]) -> Vec<(&'static str, &'static str)> {
    let portuguese: Vec<&'static str> = tables.iter().flat_map(|t| t.portuguese).copied().collect();
    let mut overlaps = Vec::new();
    for en in tables.iter().flat_map(|t| t.english).copied() {
        for pt in &portuguese {
            if pt.contains(en) || en.contains(pt) {
                overlaps.push((en, *pt));
            }
        }
    }
    overlaps
}
