//! Tests for layered config resolution and validation.

use skillup_core::config::SkillupConfig;

#[test]
fn defaults_when_nothing_is_set() {
    let config = SkillupConfig::default();
    assert_eq!(config.database.effective_path().to_str(), Some("skillup.db"));
    assert_eq!(config.dashboard.effective_hours_per_course(), 0.5);
    assert_eq!(config.dashboard.effective_recommendation_limit(), 3);
    assert_eq!(
        config.certificate.effective_placeholder_email(),
        "participante@skillup.com"
    );
    assert_eq!(config.storage.effective_avatar_bucket(), "avatars");
}

#[test]
fn toml_values_override_defaults() {
    let config = SkillupConfig::from_toml(
        r#"
        [database]
        path = "data/lms.db"

        [dashboard]
        hours_per_course = 1.5

        [storage]
        avatar_bucket = "fotos"
        "#,
    )
    .unwrap();
    assert_eq!(config.database.effective_path().to_str(), Some("data/lms.db"));
    assert_eq!(config.dashboard.effective_hours_per_course(), 1.5);
    assert_eq!(config.storage.effective_avatar_bucket(), "fotos");
    // Untouched sections keep defaults
    assert_eq!(config.dashboard.effective_recommendation_limit(), 3);
}

#[test]
fn unknown_keys_are_ignored() {
    let config = SkillupConfig::from_toml(
        r#"
        [dashboard]
        hours_per_course = 2.0
        some_future_knob = true
        "#,
    )
    .unwrap();
    assert_eq!(config.dashboard.effective_hours_per_course(), 2.0);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    assert!(SkillupConfig::from_toml("not [ valid").is_err());
}

#[test]
fn validation_rejects_bad_values() {
    let mut config = SkillupConfig::default();
    config.dashboard.hours_per_course = Some(0.0);
    assert!(SkillupConfig::validate(&config).is_err());

    let mut config = SkillupConfig::default();
    config.database.read_pool_size = Some(0);
    assert!(SkillupConfig::validate(&config).is_err());

    let mut config = SkillupConfig::default();
    config.certificate.placeholder_email = Some("no-at-sign".to_string());
    assert!(SkillupConfig::validate(&config).is_err());
}

#[test]
fn load_layers_env_over_file_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("skillup.toml"),
        r#"
        [dashboard]
        hours_per_course = 2.0

        [storage]
        avatar_bucket = "fotos"
        "#,
    )
    .unwrap();

    // The only test touching SKILLUP_* variables; the others stay on the
    // pure from_toml/default paths.
    std::env::set_var("SKILLUP_HOURS_PER_COURSE", "3.5");
    let config = SkillupConfig::load(dir.path()).unwrap();
    std::env::remove_var("SKILLUP_HOURS_PER_COURSE");

    // Env beats file.
    assert_eq!(config.dashboard.effective_hours_per_course(), 3.5);
    // File beats default.
    assert_eq!(config.storage.effective_avatar_bucket(), "fotos");
    // Untouched settings keep defaults.
    assert_eq!(config.dashboard.effective_recommendation_limit(), 3);
    assert_eq!(config.database.effective_path().to_str(), Some("skillup.db"));
}

#[test]
fn load_without_a_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SkillupConfig::load(dir.path()).unwrap();
    // Settings no other test overrides, so parallel runs stay stable.
    assert_eq!(config.database.effective_path().to_str(), Some("skillup.db"));
    assert_eq!(
        config.certificate.effective_placeholder_email(),
        "participante@skillup.com"
    );
}

#[test]
fn config_roundtrips_through_toml() {
    let mut config = SkillupConfig::default();
    config.dashboard.recommendation_limit = Some(5);
    let toml = config.to_toml().unwrap();
    let parsed = SkillupConfig::from_toml(&toml).unwrap();
    assert_eq!(parsed.dashboard.effective_recommendation_limit(), 5);
}
