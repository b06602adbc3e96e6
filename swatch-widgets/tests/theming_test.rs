use std::fs;

use swatch_core::config::Config;
use swatch_core::context::UiContext;
use swatch_core::element::{Element, SchemeSwitchable};
use swatch_core::image::ImageHandle;
use swatch_core::kurbo::{Point, Size};
use swatch_core::painter::{PaintOp, RecordingPainter};
use swatch_core::propagate;
use swatch_theme::scheme_file::SchemeFile;
use swatch_theme::{Color, SchemeId};
use swatch_widgets::button::{Button, ButtonStyle};
use swatch_widgets::frame::{Frame, FrameStyle};
use swatch_widgets::icon::Icon;
use swatch_widgets::image::Image;
use swatch_widgets::label::{Label, LabelStyle};
use swatch_widgets::panel::{Panel, PanelStyle};
use swatch_widgets::select::{Select, SelectItem};
use swatch_widgets::styled::Styled;
use swatch_widgets::tabs::TabbedPane;

fn scheme_of(element: &mut dyn Element) -> SchemeId {
    element
        .scheme_switchable()
        .map(|switchable| switchable.active_scheme().clone())
        .unwrap_or_default()
}

fn sepia() -> SchemeId {
    SchemeId::new("Sepia")
}

#[test]
fn test_frame_switches_nested_elements() {
    let context = UiContext::headless();
    let mut frame = Frame::new(&context, Size::new(640.0, 480.0), "main");

    let mut panel = Panel::new(&context, Size::new(300.0, 200.0));
    panel.add(Label::new(&context, "name"), 10.0, 10.0).unwrap();
    panel.add(Button::new(&context, "save"), 10.0, 40.0).unwrap();
    frame.add(panel, 0.0, 0.0).unwrap();

    let mut tabs = TabbedPane::new(&context, Size::new(300.0, 200.0));
    tabs.add_tab("first", Label::new(&context, "page")).unwrap();
    frame.add(tabs, 320.0, 0.0).unwrap();

    frame.switch_scheme(&SchemeId::dark()).unwrap();
    assert_eq!(frame.style(), &FrameStyle::dark());

    let panel = frame.content_mut().get_mut(0).unwrap();
    assert_eq!(scheme_of(panel), SchemeId::dark());
    for child in panel.children_mut() {
        assert_eq!(scheme_of(child), SchemeId::dark());
    }
    let tabs = frame.content_mut().get_mut(1).unwrap();
    for page in tabs.children_mut() {
        assert_eq!(scheme_of(page), SchemeId::dark());
    }
}

#[test]
fn test_failed_switch_stops_in_pre_order() {
    let context = UiContext::headless();
    let mut frame = Frame::new(&context, Size::new(640.0, 480.0), "main");
    frame.register_scheme(sepia(), FrameStyle::light());

    let mut known = Label::new(&context, "known");
    known.register_scheme(sepia(), LabelStyle::dark());
    frame.add(known, 0.0, 0.0).unwrap();
    frame.add(Label::new(&context, "unknown"), 0.0, 20.0).unwrap();
    let mut last = Label::new(&context, "last");
    last.register_scheme(sepia(), LabelStyle::dark());
    frame.add(last, 0.0, 40.0).unwrap();

    let err = frame.switch_scheme(&sepia()).unwrap_err();
    assert!(err.is_unregistered_scheme());
    assert!(err.to_string().contains("Label"));

    assert_eq!(frame.active_scheme(), &sepia());
    let schemes: Vec<SchemeId> = frame.children_mut().into_iter().map(scheme_of).collect();
    assert_eq!(schemes, vec![sepia(), SchemeId::light(), SchemeId::light()]);
}

#[test]
fn test_added_child_takes_container_scheme() {
    let context = UiContext::headless();
    let mut panel = Panel::new(&context, Size::new(300.0, 200.0));
    panel.register_scheme(sepia(), PanelStyle::dark());
    swatch_core::propagate::apply_scheme(&mut panel, &sepia()).unwrap();

    let mut label = Label::new(&context, "a");
    label.register_scheme(sepia(), LabelStyle::dark());
    let child = panel.add(label, 0.0, 0.0).unwrap();
    assert_eq!(scheme_of(child), sepia());

    assert!(panel.add(Label::new(&context, "b"), 0.0, 20.0).is_err());
    assert_eq!(panel.elements().len(), 1);
}

#[test]
fn test_icon_without_dark_image_keeps_light_image() {
    let context = UiContext::headless();
    let icon = Icon::new(&context, ImageHandle::new("sun", 12, 12));
    let mut frame = Frame::new(&context, Size::new(200.0, 100.0), "main");
    frame
        .add(Label::new(&context, "weather").with_icon(icon).unwrap(), 0.0, 0.0)
        .unwrap();

    frame.switch_scheme(&SchemeId::dark()).unwrap();
    let label = frame.content_mut().get_mut(0).unwrap();
    let icon = label.auxiliary_mut().remove(0);
    assert_eq!(scheme_of(icon), SchemeId::dark());

    let mut painter = RecordingPainter::new();
    frame.paint(&mut painter, Point::ZERO);
    assert!(painter
        .ops()
        .iter()
        .any(|op| matches!(op, PaintOp::Image { id, .. } if id == "sun")));
}

#[test]
fn test_image_fails_where_icon_falls_back() {
    let context = UiContext::headless();
    let mut frame = Frame::new(&context, Size::new(200.0, 100.0), "main");
    frame.register_scheme(sepia(), FrameStyle::light());
    frame
        .add(Image::new(&context, Size::new(32.0, 32.0), ImageHandle::new("photo", 64, 64)), 0.0, 0.0)
        .unwrap();
    assert!(frame.switch_scheme(&sepia()).is_err());
}

#[test]
fn test_select_popup_follows_scheme() {
    let context = UiContext::headless();
    let mut select = Select::new(&context, Size::new(120.0, 30.0))
        .with_item("red")
        .unwrap()
        .with_item(SelectItem::Element(Box::new(Label::new(&context, "custom"))))
        .unwrap();
    swatch_core::propagate::apply_scheme(&mut select, &SchemeId::dark()).unwrap();
    for auxiliary in select.auxiliary_mut() {
        assert_eq!(scheme_of(auxiliary), SchemeId::dark());
    }
}

#[test]
fn test_scheme_file_registers_records() {
    let file = SchemeFile::from_toml_str(
        r##"
scheme = "Solarized"

[Button]
background = "#fdf6e3"
"##,
    )
    .unwrap();
    let context = UiContext::headless();
    let mut button = Button::new(&context, "ok");
    let mut label = Label::new(&context, "ok");

    assert!(button.register_from_file(&file).unwrap());
    assert!(!label.register_from_file(&file).unwrap());

    swatch_core::propagate::apply_scheme(&mut button, &SchemeId::new("Solarized")).unwrap();
    assert_eq!(button.style().background, Color::from_rgb8(0xfd, 0xf6, 0xe3));
    assert_eq!(button.style().font, ButtonStyle::light().font);
    assert!(swatch_core::propagate::apply_scheme(&mut label, &SchemeId::new("Solarized")).is_err());
}

#[test]
fn test_config_scheme_files_reach_the_whole_window() {
    let dir = tempfile::tempdir().unwrap();
    let scheme_path = dir.path().join("solarized.toml");
    fs::write(
        &scheme_path,
        r##"
scheme = "Solarized"

[Frame]
background = "#fdf6e3"

[Label]
font = "#586e75"
"##,
    )
    .unwrap();
    let config = Config::from_toml(&format!(
        "[theme]\ndefault_scheme = \"Solarized\"\nscheme_files = [\"{}\"]\n",
        scheme_path.display()
    ))
    .unwrap();

    let context = UiContext::headless();
    let mut frame = Frame::new(&context, Size::new(200.0, 100.0), "main");
    frame.add(Label::new(&context, "before"), 0.0, 0.0).unwrap();
    frame.apply_config(&config).unwrap();

    let solarized = SchemeId::new("Solarized");
    assert_eq!(frame.style().background, Color::from_rgb8(0xfd, 0xf6, 0xe3));
    assert_eq!(scheme_of(frame.content_mut().get_mut(0).unwrap()), solarized);

    let later = frame.add(Label::new(&context, "after"), 0.0, 20.0).unwrap();
    assert_eq!(scheme_of(later), solarized);
}

#[test]
fn test_scheme_file_registers_through_a_built_tree() {
    let file = SchemeFile::from_toml_str(
        r##"
scheme = "Solarized"

[Label]
font = "#586e75"
"##,
    )
    .unwrap();
    let context = UiContext::headless();
    let mut panel = Panel::new(&context, Size::new(100.0, 100.0));
    panel.add(Label::new(&context, "a"), 0.0, 0.0).unwrap();
    panel.add(Label::new(&context, "b"), 0.0, 20.0).unwrap();

    assert_eq!(propagate::register_scheme_file(&mut panel, &file).unwrap(), 2);
    // The panel has no section, so the switch stops at it.
    assert!(propagate::apply_scheme(&mut panel, &SchemeId::new("Solarized")).is_err());
    for label in panel.elements_mut().as_dyn_mut() {
        assert!(propagate::apply_scheme(label, &SchemeId::new("Solarized")).is_ok());
    }
}
