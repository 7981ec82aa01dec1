//! Settings persistence and validation.

use nodeboard::input::RoundingMode;
use nodeboard::settings::{Settings, SettingsError};
use nodeboard::Color;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nodeboard").join("settings.json");
    let settings = Settings::default()
        .with_grid_spacing(0.5)
        .with_rounding(RoundingMode::TiesAwayFromZero)
        .with_pick_tolerance(0.1);

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn test_partial_file_fills_defaults() {
    let settings = Settings::from_json(r##"{ "grid_spacing": 2.0, "node_color": "#ff000080" }"##).unwrap();

    assert_eq!(settings.grid_spacing, 2.0);
    assert_eq!(settings.node_color, Color::rgba(255, 0, 0, 0x80));
    assert_eq!(settings.pick_tolerance, Settings::default().pick_tolerance);
}

#[test]
fn test_out_of_range_values_rejected() {
    let cases = [
        (r#"{ "grid_spacing": 0.0 }"#, "grid_spacing"),
        (r#"{ "pick_tolerance": -0.1 }"#, "pick_tolerance"),
        (r#"{ "ghost_alpha": 1.5 }"#, "ghost_alpha"),
    ];
    for (json, expected) in cases {
        match Settings::from_json(json) {
            Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected invalid {expected}, got {other:?}"),
        }
    }
}

#[test]
fn test_malformed_json_and_bad_color() {
    assert!(matches!(Settings::from_json("{ not json"), Err(SettingsError::Json(_))));
    assert!(matches!(
        Settings::from_json(r#"{ "highlight_color": "crimson" }"#),
        Err(SettingsError::Json(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load_from(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_invalid_settings_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let result = Settings::default().with_grid_spacing(-1.0).save_to(&path);

    assert!(matches!(result, Err(SettingsError::Invalid { field: "grid_spacing", .. })));
    assert!(!path.exists());
}
