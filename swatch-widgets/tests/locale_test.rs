use std::rc::Rc;

use swatch_core::catalog::MapCatalog;
use swatch_core::context::UiContext;
use swatch_core::element::Element;
use swatch_core::image::ImageHandle;
use swatch_core::kurbo::Size;
use swatch_core::locale::Locale;
use swatch_core::metrics::Font;
use swatch_widgets::button::Button;
use swatch_widgets::checkbox::Checkbox;
use swatch_widgets::frame::Frame;
use swatch_widgets::image::Image;
use swatch_widgets::label::Label;
use swatch_widgets::panel::Panel;
use swatch_widgets::slider::{Orientation, Slider};
use swatch_widgets::tabs::TabbedPane;

fn context() -> UiContext {
    let catalog = MapCatalog::new()
        .with_entry("en", "greeting", "Hi")
        .with_entry("de", "greeting", "Hallo")
        .with_entry("en", "tab.home", "Home")
        .with_entry("de", "tab.home", "Start")
        .with_entry("en", "app", "Editor")
        .with_entry("de", "app", "Bearbeiter");
    UiContext::headless()
        .with_catalog(Rc::new(catalog))
        .with_locale(Locale::new("en"))
        .with_font(Font::new("", 10.0))
}

fn sizes(frame: &Frame) -> Vec<Size> {
    frame.children().iter().map(|child| child.base().size()).collect()
}

#[test]
fn test_locale_switch_resizes_autosized_elements() {
    let context = context();
    let mut frame = Frame::new(&context, Size::new(400.0, 300.0), "app");
    frame.add(Label::new(&context, "greeting"), 0.0, 0.0).unwrap();
    frame.add(Button::new(&context, "greeting"), 0.0, 20.0).unwrap();
    frame.add(Checkbox::new(&context, "greeting"), 0.0, 50.0).unwrap();
    assert_eq!(
        sizes(&frame),
        vec![Size::new(10.0, 10.0), Size::new(18.0, 18.0), Size::new(28.0, 17.0)]
    );

    frame.switch_locale(&Locale::new("de"));
    assert_eq!(frame.display_title(), "Bearbeiter");
    assert_eq!(
        sizes(&frame),
        vec![Size::new(25.0, 10.0), Size::new(33.0, 18.0), Size::new(43.0, 17.0)]
    );
}

#[test]
fn test_fixed_size_button_keeps_size() {
    let context = context();
    let mut button = Button::new(&context, "greeting").with_size(Size::new(80.0, 30.0));
    swatch_core::propagate::apply_locale(&mut button, &Locale::new("de"));
    assert_eq!(button.display_text(), "Hallo");
    assert_eq!(button.base().size(), Size::new(80.0, 30.0));
}

#[test]
fn test_missing_key_renders_key() {
    let context = context();
    let mut label = Label::new(&context, "farewell");
    assert_eq!(label.display_text(), "farewell");
    swatch_core::propagate::apply_locale(&mut label, &Locale::new("de"));
    assert_eq!(label.display_text(), "farewell");
}

#[test]
fn test_nested_pages_follow_locale() {
    let context = context();
    let mut frame = Frame::new(&context, Size::new(400.0, 300.0), "app");
    let mut panel = Panel::new(&context, Size::new(200.0, 100.0));
    panel.add(Label::new(&context, "greeting"), 0.0, 0.0).unwrap();
    let mut tabs = TabbedPane::new(&context, Size::new(300.0, 200.0));
    tabs.add_tab("tab.home", panel).unwrap();
    frame.add(tabs, 0.0, 0.0).unwrap();

    frame.switch_locale(&Locale::new("de"));

    let tabs = frame.content().get(0).unwrap();
    let panel = tabs.children()[0];
    let label = panel.children()[0];
    assert_eq!(label.base().size(), Size::new(25.0, 10.0));
    assert_eq!(label.base().locale(), &Locale::new("de"));
}

#[test]
fn test_slider_tick_labels_follow_locale() {
    let context = context();
    let mut slider = Slider::new(&context, Orientation::Horizontal, Size::new(117.0, 40.0), 0, 100, 0, 50);
    slider.set_label(50, Label::new(&context, "greeting")).unwrap();
    swatch_core::propagate::apply_locale(&mut slider, &Locale::new("de"));
    assert_eq!(slider.labels()[&50].display_text(), "Hallo");
}

#[test]
fn test_elements_without_texts_are_skipped() {
    let context = context();
    let mut frame = Frame::new(&context, Size::new(400.0, 300.0), "app");
    frame
        .add(Image::new(&context, Size::new(16.0, 16.0), ImageHandle::new("logo", 16, 16)), 0.0, 0.0)
        .unwrap();

    frame.switch_locale(&Locale::new("de"));
    let image = frame.content().get(0).unwrap();
    assert_eq!(image.base().locale(), &Locale::new("en"));
}
