use solace::SolaceConfig;

#[test]
fn custom_windows_survive_a_save_load_cycle() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("config.toml");

    let mut config = SolaceConfig::default();
    config.safety.audit_events = false;
    config.history.generation_window = 4;
    config.history.preview_chars = 40;
    config.save_to_file(&path).expect("save config");

    let loaded = SolaceConfig::from_file(&path).expect("load config");
    assert_eq!(loaded, config);
}

#[test]
fn hand_written_toml_fills_missing_sections() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[history]\nprompt_window = 2\n").expect("write config");

    let loaded = SolaceConfig::from_file(&path).expect("load config");
    assert_eq!(loaded.history.prompt_window, 2);
    assert_eq!(loaded.history.generation_window, 10);
    assert!(loaded.safety.audit_events);
}
