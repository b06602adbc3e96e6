#![warn(missing_docs)]

//! Custom-painted widgets whose colour scheme and language can be switched
//! at runtime, for a whole window at once.
//!
//! ```rust
//! use swatch::prelude::*;
//!
//! let context = UiContext::headless();
//! let mut frame = Frame::new(&context, Size::new(320.0, 240.0), "app.title");
//! frame.add(Button::new(&context, "ok"), 10.0, 10.0).unwrap();
//!
//! frame.switch_scheme(&SchemeId::dark()).unwrap();
//! frame.switch_locale(&Locale::new("en_us"));
//! ```

pub use vello::kurbo as geometry;
pub use vello::peniko as color;

pub use swatch_core as core;
pub use swatch_theme as theme;
pub use swatch_widgets as widgets;

/// A "prelude" for users of swatch.
///
/// Importing this module brings into scope the most common types needed to
/// build and switch an element tree.
///
/// ```rust
/// use swatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::catalog::{Catalog, MapCatalog};
    pub use crate::core::config::Config;
    pub use crate::core::context::UiContext;
    pub use crate::core::element::{Element, LocaleSwitchable, SchemeSwitchable, Update};
    pub use crate::core::locale::Locale;
    pub use crate::core::metrics::{FixedAdvanceMetrics, Font, TextMetrics};
    pub use crate::core::painter::{Painter, RecordingPainter};
    pub use crate::core::propagate::{apply_locale, apply_scheme};
    pub use crate::core::text::Text;

    pub use crate::theme::scheme_file::SchemeFile;
    pub use crate::theme::{Color, SchemeId, ThemeError, ThemeResult};

    pub use vello::kurbo::{Point, Rect, Size};

    pub use crate::widgets::button::Button;
    pub use crate::widgets::checkbox::Checkbox;
    pub use crate::widgets::frame::Frame;
    pub use crate::widgets::icon::Icon;
    pub use crate::widgets::image::Image;
    pub use crate::widgets::label::Label;
    pub use crate::widgets::list::List;
    pub use crate::widgets::panel::Panel;
    pub use crate::widgets::progress::{Progress, ProgressShape};
    pub use crate::widgets::scroll::ScrollContainer;
    pub use crate::widgets::select::Select;
    pub use crate::widgets::slider::{Orientation, Slider};
    pub use crate::widgets::styled::Styled;
    pub use crate::widgets::table::Table;
    pub use crate::widgets::tabs::TabbedPane;
    pub use crate::widgets::text_area::TextArea;
    pub use crate::widgets::text_field::TextField;
    pub use crate::widgets::tree::{Tree, TreeNode};
}
