use rink_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert_eq!(cfg.country_code, "FR");
    assert!(cfg.validate().is_ok());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let loaded = manager.load().expect("load defaults");
    assert_eq!(loaded, Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        currency: "EUR".to_string(),
        country_code: "DE".to_string(),
        pinned_month: Some(11),
        ..Config::default()
    };

    manager.save(&cfg).expect("save config");
    assert!(manager.config_path().ends_with("config/config.json"));
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.country_code, "DE");
    assert_eq!(loaded.pinned_month, Some(11));
}

#[test]
fn invalid_settings_are_not_saved() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let cfg = Config {
        pinned_month: Some(0),
        ..Config::default()
    };
    let err = manager.save(&cfg).expect_err("month zero is invalid");
    assert!(matches!(err, ConfigError::Invalid { field: "pinned_month", .. }));
    assert!(!manager.config_path().exists());
}

#[test]
fn corrupt_file_reports_serialization_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write corrupt file");

    let err = ConfigManager::new(path).load().expect_err("corrupt config");
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn update_persists_edits_and_rejects_invalid_ones() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let updated = manager
        .update(|cfg| cfg.pinned_month = Some(2))
        .expect("pin february");
    assert_eq!(updated.pinned_month, Some(2));
    assert_eq!(manager.load().expect("reload").pinned_month, Some(2));

    assert!(manager.update(|cfg| cfg.currency = " ".into()).is_err());
    assert_eq!(manager.load().expect("reload").currency, Config::default().currency);
}

#[test]
fn default_location_lives_under_the_platform_config_dir() {
    let manager = ConfigManager::default_location();
    assert!(manager
        .config_path()
        .ends_with("rink-projection/config/config.json"));
    assert_eq!(
        manager.config_path().parent().and_then(|dir| dir.parent()),
        Some(Config::default().resolve_data_root().as_path())
    );
}
