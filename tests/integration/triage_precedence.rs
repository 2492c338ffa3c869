use solace::safety::LONG_CONVERSATION_THRESHOLD;
use solace::{RiskCategory, SafetyAction, SafetyLevel, triage_safety};

#[test]
fn crisis_beats_every_other_rule() {
    let s = triage_safety("I want to end it all and also need a lawyer", 0);
    assert_eq!(s.level, SafetyLevel::Critical);
    assert_eq!(s.category, Some(RiskCategory::Crisis));
}

#[test]
fn each_rule_fires_on_its_own() {
    let cases = [
        ("penso em suicídio", RiskCategory::Crisis, SafetyLevel::Critical),
        ("ele me deixou espancado", RiskCategory::Abuse, SafetyLevel::Critical),
        ("você é minha vida", RiskCategory::Dependency, SafetyLevel::Warning),
        ("qual remédio devo tomar", RiskCategory::Medical, SafetyLevel::Warning),
        ("preciso de um advogado", RiskCategory::Legal, SafetyLevel::Warning),
        ("I'm cutting off contact, is the contract void?", RiskCategory::Legal, SafetyLevel::Warning),
    ];
    for (text, category, level) in cases {
        let s = triage_safety(text, 0);
        assert_eq!(s.category, Some(category), "{text}");
        assert_eq!(s.level, level, "{text}");
    }
}

#[test]
fn cascade_order_is_severity_first() {
    // Each text carries its own rule plus every weaker one.
    let cases = [
        ("I was beaten, you are my life, what medication, my lawyer", RiskCategory::Abuse),
        ("you are my life, what medication, my lawyer", RiskCategory::Dependency),
        ("what medication, my lawyer", RiskCategory::Medical),
    ];
    for (text, expected) in cases {
        assert_eq!(triage_safety(text, 1_000).category, Some(expected), "{text}");
    }
}

#[test]
fn long_conversation_boundary() {
    let at = triage_safety("hello", LONG_CONVERSATION_THRESHOLD);
    assert_eq!(at.level, SafetyLevel::Safe);
    assert_eq!(at.action, SafetyAction::ProceedNormally);

    let over = triage_safety("hello", LONG_CONVERSATION_THRESHOLD + 1);
    assert_eq!(over.level, SafetyLevel::Warning);
    assert_eq!(over.category, Some(RiskCategory::LongConversation));
    assert!(over.redirect_message.is_some());
}

#[test]
fn matching_ignores_case() {
    assert_eq!(
        triage_safety("I WANT TO DIE", 0).category,
        Some(RiskCategory::Crisis)
    );
}

#[test]
fn triage_is_deterministic() {
    let text = "Do I need a lawyer for custody?";
    assert_eq!(triage_safety(text, 3), triage_safety(text, 3));
}
