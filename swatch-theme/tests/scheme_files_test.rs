use std::fs;

use swatch_theme::config::ThemeConfig;
use swatch_theme::scheme_file::SchemeFile;
use swatch_theme::{style_record, Color, SchemeId, SchemeState, ThemeError, WidgetId};

style_record! {
    struct ButtonStyle {
        background,
        font,
        border,
    }
}

fn button_state() -> SchemeState<ButtonStyle> {
    SchemeState::new(
        WidgetId::new("test", "Button"),
        ButtonStyle {
            background: Color::WHITE,
            font: Color::BLACK,
            border: Color::from_rgb8(222, 222, 222),
        },
        ButtonStyle {
            background: Color::from_rgb8(83, 83, 83),
            font: Color::from_rgb8(230, 230, 230),
            border: Color::from_rgb8(137, 137, 137),
        },
    )
}

#[test]
fn test_scheme_file_registers_custom_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solarized.toml");
    fs::write(
        &path,
        r##"
scheme = "Solarized"

[Button]
background = "#fdf6e3"
font = "#657b83"
"##,
    )
    .unwrap();

    let file = SchemeFile::from_file(&path).unwrap();
    let mut state = button_state();
    assert!(state.register_from(&file).unwrap());

    let applied = *state.apply(&SchemeId::new("Solarized")).unwrap();
    assert_eq!(applied.background, Color::from_rgb8(0xfd, 0xf6, 0xe3));
    assert_eq!(applied.font, Color::from_rgb8(0x65, 0x7b, 0x83));
    // Not in the file, so it comes from the light record.
    assert_eq!(applied.border, Color::from_rgb8(222, 222, 222));
}

#[test]
fn test_scheme_file_without_section_registers_nothing() {
    let file = SchemeFile::from_json_str(r##"{ "scheme": "Mono", "Label": { "font": "#111111" } }"##)
        .unwrap();
    let mut state = button_state();
    assert!(!state.register_from(&file).unwrap());

    let err = state.apply(&SchemeId::new("Mono")).unwrap_err();
    assert!(err.is_unregistered_scheme());
}

#[test]
fn test_bad_colour_is_a_decode_error() {
    let file = SchemeFile::from_toml_str("scheme = \"Broken\"\n[Button]\nfont = \"blue\"\n").unwrap();
    let mut state = button_state();
    let err = state.register_from(&file).unwrap_err();
    assert!(matches!(err, ThemeError::RecordDecode { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scheme.yaml");
    fs::write(&path, "scheme: X").unwrap();
    let err = SchemeFile::from_file(&path).unwrap_err();
    assert!(matches!(err, ThemeError::UnsupportedFormat { .. }));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SchemeFile::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ThemeError::SchemeFileNotFound { .. }));
}

#[test]
fn test_config_loads_listed_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.toml");
    let second = dir.path().join("b.json");
    fs::write(&first, "scheme = \"A\"\n").unwrap();
    fs::write(&second, r#"{ "scheme": "B" }"#).unwrap();

    let config = ThemeConfig::new()
        .with_scheme_file(&first)
        .with_scheme_file(&second);
    let files = config.load_scheme_files().unwrap();
    let names: Vec<_> = files.iter().map(|f| f.scheme().as_str().to_owned()).collect();
    assert_eq!(names, ["A", "B"]);
}
