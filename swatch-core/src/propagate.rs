//! # Propagation
//!
//! Switching scheme or locale starts at a root element and walks its tree
//! depth first, in pre-order:
//!
//! 1. the element applies its own record (or texts),
//! 2. its structural children are visited in order,
//! 3. its auxiliary children are visited in order,
//! 4. it requests a repaint.
//!
//! An element without the relevant capability is skipped together with
//! everything below it. A failing scheme lookup aborts the walk: elements
//! visited earlier keep the new scheme, later ones are not visited.
//!
//! Scheme files are registered over the same walk with [register_scheme_file].

use swatch_theme::scheme_file::SchemeFile;
use swatch_theme::{SchemeId, ThemeResult};

use crate::element::{Element, Update};
use crate::locale::Locale;

/// Apply `scheme` to `root` and everything below it.
///
/// Fails with [ThemeError::UnregisteredScheme](swatch_theme::ThemeError::UnregisteredScheme)
/// at the first element that has no record for `scheme`.
pub fn apply_scheme(root: &mut dyn Element, scheme: &SchemeId) -> ThemeResult<()> {
    log::debug!("Applying scheme '{}' from {}", scheme, root.widget_id());
    visit_scheme(root, scheme)
}

fn visit_scheme(element: &mut dyn Element, scheme: &SchemeId) -> ThemeResult<()> {
    let Some(switchable) = element.scheme_switchable() else {
        log::trace!("Skipping {}: no scheme support", element.widget_id());
        return Ok(());
    };
    switchable.apply_own_scheme(scheme)?;
    log::trace!("Applied scheme '{}' to {}", scheme, element.widget_id());

    for child in element.children_mut() {
        visit_scheme(child, scheme)?;
    }
    for auxiliary in element.auxiliary_mut() {
        visit_scheme(auxiliary, scheme)?;
    }

    element.base_mut().request(Update::DRAW);
    Ok(())
}

/// Register the records `file` defines on `root` and everything below it.
///
/// Returns how many elements took a record. The file's scheme can be applied
/// afterwards. Stops at the first section that does not decode.
pub fn register_scheme_file(root: &mut dyn Element, file: &SchemeFile) -> ThemeResult<usize> {
    log::debug!("Registering scheme '{}' from {}", file.scheme(), root.widget_id());
    visit_scheme_file(root, file)
}

fn visit_scheme_file(element: &mut dyn Element, file: &SchemeFile) -> ThemeResult<usize> {
    let Some(switchable) = element.scheme_switchable() else {
        return Ok(0);
    };
    let mut registered = usize::from(switchable.register_scheme_file(file)?);
    for child in element.children_mut() {
        registered += visit_scheme_file(child, file)?;
    }
    for auxiliary in element.auxiliary_mut() {
        registered += visit_scheme_file(auxiliary, file)?;
    }
    Ok(registered)
}

/// Apply `locale` to `root` and everything below it.
pub fn apply_locale(root: &mut dyn Element, locale: &Locale) {
    log::debug!("Applying locale '{}' from {}", locale, root.widget_id());
    visit_locale(root, locale);
}

fn visit_locale(element: &mut dyn Element, locale: &Locale) {
    let Some(switchable) = element.locale_switchable() else {
        log::trace!("Skipping {}: no locale support", element.widget_id());
        return;
    };
    switchable.apply_own_locale(locale);
    element.base_mut().set_locale(locale.clone());
    log::trace!("Applied locale '{}' to {}", locale, element.widget_id());

    for child in element.children_mut() {
        visit_locale(child, locale);
    }
    for auxiliary in element.auxiliary_mut() {
        visit_locale(auxiliary, locale);
    }

    element.base_mut().request(Update::DRAW);
}

/// Drain pending updates of `root` and everything below it, including
/// elements skipped by propagation.
pub fn take_updates(root: &mut dyn Element) -> Update {
    let mut update = root.base_mut().take_update();
    for child in root.children_mut() {
        update |= take_updates(child);
    }
    for auxiliary in root.auxiliary_mut() {
        update |= take_updates(auxiliary);
    }
    update
}

/// Bring a newly attached element in line with its new parent.
///
/// Applies the parent's scheme, then its locale. Used by containers when a
/// child is added so it never shows stale colours or text.
pub fn sync_to(element: &mut dyn Element, scheme: &SchemeId, locale: &Locale) -> ThemeResult<()> {
    apply_scheme(element, scheme)?;
    apply_locale(element, locale);
    Ok(())
}
