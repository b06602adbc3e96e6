#![warn(missing_docs)]

//! Widget library for swatch => See `swatch` crate.
//!
//! Contains the custom-painted swatch elements. Every kind registers a
//! `Light` and a `Dark` style record at construction, starts out `Light`,
//! and follows scheme and locale switches started anywhere above it.

mod palette;

/// Contains the [styled::Styled] trait for scheme registration.
pub mod styled;

/// Contains the [container::Children] list shared by containers.
pub mod container;

/// Contains the [label::Label] widget.
pub mod label;

/// Contains the [button::Button] widget.
pub mod button;

/// Contains the [checkbox::Checkbox] widget.
pub mod checkbox;

/// Contains the [icon::Icon] widget.
pub mod icon;

/// Contains the [image::Image] widget.
pub mod image;

/// Contains the [progress::Progress] widget.
pub mod progress;

/// Contains the [panel::Panel] widget.
pub mod panel;

/// Contains the [frame::Frame] window content.
pub mod frame;

/// Contains the [tabs::TabbedPane] widget.
pub mod tabs;

/// Contains the [tree::Tree] widget.
pub mod tree;

/// Contains the [table::Table] widget and its [table::TableHeader].
pub mod table;

/// Contains the [slider::Slider] widget.
pub mod slider;

/// Contains the [text_field::TextField] widget.
pub mod text_field;

/// Contains the [text_area::TextArea] widget.
pub mod text_area;

/// Contains the [scroll::ScrollContainer] widget.
pub mod scroll;

/// Contains the [select::Select] widget.
pub mod select;

/// Contains the [list::List] widget.
pub mod list;
