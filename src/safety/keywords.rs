//! Risk keyword tables, Portuguese and English, lower-cased.

use crate::emotion::lexicon::Triggers;

/// Suicidal ideation and self-harm.
pub const CRISIS: Triggers = Triggers {
    portuguese: &[
        "suicida",
        "suicídio",
        "me matar",
        "morrer",
        "morte",
        "fim",
        "não aguento mais",
        "não posso mais",
        "desistir",
        "acabar com isso",
        "pular da janela",
        "overdose",
        "veneno",
        "corda",
        "faca",
        "auto-agressão",
        "me cortar",
        "machucar a mim mesmo",
    ],
    english: &[
        "suicide",
        "kill myself",
        "end my life",
        "end it all",
        "want to die",
        "self-harm",
        "hurt myself",
        "cut myself",
        "no reason to live",
    ],
};

/// Abuse and violence.
pub const ABUSE: Triggers = Triggers {
    portuguese: &[
        "abuso",
        "violência",
        "agredido",
        "espancado",
        "violado",
        "assalto",
        "estupro",
        "tortura",
        "maltratado",
    ],
    english: &[
        "abused",
        "abusive",
        "violence",
        "assaulted",
        "raped",
        "beaten",
        "tortured",
        "mistreated",
    ],
};

/// Emotional dependency on the assistant.
pub const DEPENDENCY: Triggers = Triggers {
    portuguese: &[
        "você é meu único",
        "não consigo viver sem você",
        "você é minha razão de viver",
        "preciso de você para tudo",
        "não posso estar sem você",
        "você é minha vida",
    ],
    english: &[
        "you're my only",
        "you are my only",
        "can't live without you",
        "cannot live without you",
        "you're my reason to live",
        "you are my reason to live",
        "i need you for everything",
        "you're my life",
        "you are my life",
    ],
};

/// Requests for medical advice.
pub const MEDICAL: Triggers = Triggers {
    portuguese: &[
        "prescrição",
        "medicamento",
        "diagnóstico",
        "tratamento",
        "doença",
        "sintoma",
        "cura",
        "cirurgia",
        "remédio",
    ],
    english: &[
        "prescription",
        "medication",
        "diagnosis",
        "diagnosed",
        "symptom",
        "surgery",
        "dosage",
        "treatment",
    ],
};

/// Requests for legal advice.
pub const LEGAL: Triggers = Triggers {
    portuguese: &[
        "advogado",
        "processo",
        "lei",
        "crime",
        "culpa",
        "prisão",
        "tribunal",
        "julgamento",
        "direito",
        "contrato",
    ],
    english: &[
        "lawyer",
        "attorney",
        "lawsuit",
        "court",
        "legal advice",
        "contract",
        "custody",
    ],
};

/// Whether any keyword occurs in the already lower-cased `text`.
pub(crate) fn contains_any(text: &str, keywords: Triggers) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}
