use appsview_core::config::{self, Config, ConfigError};

#[test]
fn accepts_default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.command_timeout_ms, 2_000);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.icon_theme, None);
    assert!(cfg.config_path.to_string_lossy().contains("appsview"));
    assert!(config::validate(&cfg).is_ok());
}

#[test]
fn rejects_timeout_out_of_range() {
    let cfg = Config {
        command_timeout_ms: 60_000,
        ..Default::default()
    };
    assert!(matches!(config::validate(&cfg), Err(ConfigError::Invalid(_))));
}

#[test]
fn rejects_unknown_log_level_and_blank_theme() {
    let cfg = Config {
        log_level: "chatty".into(),
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());

    let cfg = Config {
        icon_theme: Some("  ".into()),
        ..Default::default()
    };
    assert!(config::validate(&cfg).is_err());
}

#[test]
fn rejects_grid_that_cannot_fit_a_tile() {
    let mut cfg = Config::default();
    cfg.grid.screen_width = 100;
    assert!(config::validate(&cfg).is_err());

    let mut cfg = Config::default();
    cfg.grid.tile_height = 0;
    assert!(config::validate(&cfg).is_err());
}

#[test]
fn oversized_padding_is_rejected_when_loading() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[grid]\npadding = 4000000000\n").unwrap();

    let error = config::load(Some(&path)).expect_err("overflowing padding should be invalid");
    assert!(matches!(error, ConfigError::Invalid(_)));
}

#[test]
fn missing_file_loads_defaults_with_requested_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested/config.toml");

    let cfg = config::load(Some(&path)).unwrap();
    assert_eq!(cfg.config_path, path);
    assert_eq!(cfg.grid, Config::default().grid);
}

#[test]
fn partial_file_overrides_only_given_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        "icon_theme = \"Papirus-Dark\"\ndesktop_dirs = [\"/opt/apps\"]\n\n[grid]\nscreen_width = 1280\n",
    )
    .unwrap();

    let cfg = config::load(Some(&path)).unwrap();
    assert_eq!(cfg.icon_theme.as_deref(), Some("Papirus-Dark"));
    assert_eq!(cfg.desktop_dirs, Some(vec!["/opt/apps".into()]));
    assert_eq!(cfg.grid.screen_width, 1280);
    assert_eq!(cfg.grid.padding, 12);
    assert_eq!(cfg.command_timeout_ms, 2_000);
}

#[test]
fn broken_file_is_a_parse_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "command_timeout_ms = \"soon\"\n").unwrap();

    assert!(matches!(
        config::load(Some(&path)),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn saved_config_loads_back() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cfg = Config {
        icon_theme: Some("Adwaita".into()),
        config_path: tmp.path().join("appsview/config.toml"),
        ..Default::default()
    };
    cfg.grid.tile_width = 128;

    config::save(&cfg).unwrap();
    let loaded = config::load(Some(&cfg.config_path)).unwrap();

    assert_eq!(loaded, cfg);
}
