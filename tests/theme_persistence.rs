use termfolio::config::{Config, ConfigStore, ThemeMode};

#[test]
fn defaults_to_light() {
    assert_eq!(Config::default().theme, ThemeMode::Light);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn theme_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config {
        theme: ThemeMode::Dark,
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.theme, ThemeMode::Dark);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("config.toml");
    Config::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = 42").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn store_persists_theme_toggle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let store = ConfigStore::new(Config::default(), path.clone());
    store.set_theme(ThemeMode::Dark);

    assert_eq!(store.get().theme, ThemeMode::Dark);
    let on_disk = Config::load_from(&path).unwrap();
    assert_eq!(on_disk.theme, ThemeMode::Dark);
}

#[test]
fn toggling_twice_restores_the_mode() {
    let mode = ThemeMode::Light;
    assert_eq!(mode.toggled().toggled(), mode);
    assert!(ThemeMode::Dark.is_dark());
    assert!(!ThemeMode::Light.is_dark());
}
