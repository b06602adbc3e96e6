//! # Style Records
//!
//! A style record is a fixed-shape set of named colour slots for one element
//! kind. Records are plain `Copy` values; applying a scheme copies the
//! registered record into the element.
//!
//! [style_record!] declares such a struct with hex-string (de)serialization
//! for every slot, so records can also be read from scheme files.

/// Declare a style record: a struct whose fields are all [Color](crate::Color) slots.
///
/// The generated struct derives `Debug`, `Clone`, `Copy`, `PartialEq` and
/// serde's `Serialize`/`Deserialize`, with each slot written as a hex string.
///
/// ```rust
/// use swatch_theme::{style_record, Color};
///
/// style_record! {
///     /// Colours of a progress bar.
///     pub struct BarStyle {
///         /// Outline.
///         border,
///         fill,
///     }
/// }
///
/// let style = BarStyle { border: Color::BLACK, fill: Color::WHITE };
/// assert_eq!(style, style.clone());
/// ```
#[macro_export]
macro_rules! style_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                #[serde(with = "swatch_theme::serde_color")]
                pub $field: $crate::Color,
            )*
        }
    };
}
