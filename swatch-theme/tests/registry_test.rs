use swatch_theme::{style_record, Color, SchemeId, SchemeState, StyleRegistry, ThemeError, WidgetId};

style_record! {
    struct LabelStyle {
        font,
    }
}

fn label(r: u8) -> LabelStyle {
    LabelStyle {
        font: Color::from_rgb8(r, r, r),
    }
}

#[test]
fn test_lookup_returns_latest_registration() {
    let mut registry = StyleRegistry::new(WidgetId::new("test", "Label"));
    registry.register(SchemeId::new("Custom"), label(1));
    registry.register(SchemeId::new("Custom"), label(2));
    assert_eq!(registry.lookup(&SchemeId::new("Custom")).unwrap(), &label(2));
    assert_eq!(registry.schemes().count(), 1);
}

#[test]
fn test_unregistered_scheme_names_element_and_scheme() {
    let state = SchemeState::new(WidgetId::new("test", "Label"), label(0), label(230));
    let err = state.registry().lookup(&SchemeId::new("Sepia")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Element test:Label has no style record registered for scheme 'Sepia'"
    );
    assert!(matches!(err, ThemeError::UnregisteredScheme { .. }));
}

#[test]
fn test_apply_is_idempotent() {
    let mut state = SchemeState::new(WidgetId::new("test", "Label"), label(0), label(230));
    let once = *state.apply(&SchemeId::dark()).unwrap();
    let twice = *state.apply(&SchemeId::dark()).unwrap();
    assert_eq!(once, twice);
    assert_eq!(state.active(), &SchemeId::dark());
}

#[test]
fn test_custom_scheme_after_registration() {
    let mut state = SchemeState::new(WidgetId::new("test", "Label"), label(0), label(230));
    assert!(state.apply(&SchemeId::new("Sepia")).is_err());
    assert_eq!(state.current(), &label(0));

    state.register(SchemeId::new("Sepia"), label(112));
    assert_eq!(state.apply(&SchemeId::new("Sepia")).unwrap(), &label(112));
}

#[test]
fn test_record_mut_edits_registered_record() {
    let mut state = SchemeState::new(WidgetId::new("test", "Label"), label(0), label(230));
    if let Some(dark) = state.record_mut(&SchemeId::dark()) {
        dark.font = Color::from_rgb8(200, 0, 0);
    }
    state.apply(&SchemeId::dark()).unwrap();
    assert_eq!(state.current().font, Color::from_rgb8(200, 0, 0));
}
