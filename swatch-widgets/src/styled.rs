//! Scheme registration shared by all element kinds.

use serde::de::DeserializeOwned;
use serde::Serialize;
use swatch_theme::scheme_file::SchemeFile;
use swatch_theme::{SchemeId, SchemeState, ThemeResult};

/// An element with a style record per scheme.
pub trait Styled {
    /// The element kind's record shape.
    type Style: Clone + Serialize + DeserializeOwned;

    /// Registered records and the applied one.
    fn scheme_state(&self) -> &SchemeState<Self::Style>;

    /// Mutable access to the registered records.
    fn scheme_state_mut(&mut self) -> &mut SchemeState<Self::Style>;

    /// Register (or overwrite) the record for `scheme`.
    ///
    /// Takes effect the next time `scheme` is applied.
    fn register_scheme(&mut self, scheme: SchemeId, style: Self::Style) {
        self.scheme_state_mut().register(scheme, style);
    }

    /// Register the record a scheme file defines for this element kind.
    ///
    /// Returns `false` if the file has no section for this kind.
    fn register_from_file(&mut self, file: &SchemeFile) -> ThemeResult<bool> {
        self.scheme_state_mut().register_from(file)
    }

    /// The applied record.
    fn style(&self) -> &Self::Style {
        self.scheme_state().current()
    }
}

/// Implements [Styled] over a `style: SchemeState<$record>` field, and
/// [SchemeSwitchable](swatch_core::element::SchemeSwitchable) as a plain
/// record swap unless `custom_apply` is given. Custom impls forward
/// `register_scheme_file` to the `style` field themselves.
macro_rules! styled {
    ($element:ty, $record:ty) => {
        styled!($element, $record, custom_apply);

        impl swatch_core::element::SchemeSwitchable for $element {
            fn apply_own_scheme(&mut self, scheme: &swatch_theme::SchemeId) -> swatch_theme::ThemeResult<()> {
                self.style.apply(scheme)?;
                Ok(())
            }

            fn active_scheme(&self) -> &swatch_theme::SchemeId {
                self.style.active()
            }

            fn register_scheme_file(
                &mut self,
                file: &swatch_theme::scheme_file::SchemeFile,
            ) -> swatch_theme::ThemeResult<bool> {
                self.style.register_from(file)
            }
        }
    };
    ($element:ty, $record:ty, custom_apply) => {
        impl $crate::styled::Styled for $element {
            type Style = $record;

            fn scheme_state(&self) -> &swatch_theme::SchemeState<$record> {
                &self.style
            }

            fn scheme_state_mut(&mut self) -> &mut swatch_theme::SchemeState<$record> {
                &mut self.style
            }
        }
    };
}

pub(crate) use styled;
