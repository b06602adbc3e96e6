//! # Style Registries
//!
//! [StyleRegistry] is the per-instance map from [SchemeId] to a style record.
//! [SchemeState] pairs a registry with the record that is currently applied,
//! which is the piece of state an element actually reads while painting.
//!
//! Lookups are strict: asking for a scheme that was never registered is an
//! error ([ThemeError::UnregisteredScheme]). Decorative assets that prefer to
//! keep their current value use [SchemeState::apply_soft] instead.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ThemeError, ThemeResult};
use crate::id::WidgetId;
use crate::scheme::SchemeId;
use crate::scheme_file::SchemeFile;

/// Mapping from scheme to the style record of one element instance.
///
/// At most one record exists per scheme; registering again overwrites.
/// Records are never removed.
#[derive(Debug, Clone)]
pub struct StyleRegistry<R> {
    owner: WidgetId,
    records: IndexMap<SchemeId, R>,
}

impl<R> StyleRegistry<R> {
    /// Create an empty registry for an element of kind `owner`.
    pub fn new(owner: WidgetId) -> Self {
        Self {
            owner,
            records: IndexMap::new(),
        }
    }

    /// Insert or overwrite the record for `scheme`. Returns the previous record, if any.
    pub fn register(&mut self, scheme: SchemeId, record: R) -> Option<R> {
        self.records.insert(scheme, record)
    }

    /// Returns the record for `scheme`, failing if none was registered.
    pub fn lookup(&self, scheme: &SchemeId) -> ThemeResult<&R> {
        self.records
            .get(scheme)
            .ok_or_else(|| ThemeError::unregistered(self.owner.clone(), scheme.clone()))
    }

    /// Returns the record for `scheme` if one was registered.
    pub fn get(&self, scheme: &SchemeId) -> Option<&R> {
        self.records.get(scheme)
    }

    /// Mutable access to a registered record.
    pub fn get_mut(&mut self, scheme: &SchemeId) -> Option<&mut R> {
        self.records.get_mut(scheme)
    }

    /// Returns `true` if a record is registered for `scheme`.
    pub fn contains(&self, scheme: &SchemeId) -> bool {
        self.records.contains_key(scheme)
    }

    /// Registered schemes, in registration order.
    pub fn schemes(&self) -> impl Iterator<Item = &SchemeId> {
        self.records.keys()
    }

    /// Number of registered schemes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was registered yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The element kind owning this registry.
    pub fn owner(&self) -> &WidgetId {
        &self.owner
    }
}

/// A [StyleRegistry] together with the active scheme and its applied record.
///
/// This is what every element embeds. Construction registers a `Light` and a
/// `Dark` record and applies `Light`.
#[derive(Debug, Clone)]
pub struct SchemeState<R> {
    registry: StyleRegistry<R>,
    active: SchemeId,
    current: R,
}

impl<R: Clone> SchemeState<R> {
    /// Create the state with the built-in `Light` and `Dark` records, `Light` applied.
    pub fn new(owner: WidgetId, light: R, dark: R) -> Self {
        let mut registry = StyleRegistry::new(owner);
        registry.register(SchemeId::light(), light.clone());
        registry.register(SchemeId::dark(), dark);
        Self {
            registry,
            active: SchemeId::light(),
            current: light,
        }
    }

    /// Create the state with only a `Light` record.
    pub fn light_only(owner: WidgetId, light: R) -> Self {
        let mut registry = StyleRegistry::new(owner);
        registry.register(SchemeId::light(), light.clone());
        Self {
            registry,
            active: SchemeId::light(),
            current: light,
        }
    }

    /// Register (or overwrite) the record for `scheme`.
    ///
    /// The applied record does not change until the scheme is applied again.
    pub fn register(&mut self, scheme: SchemeId, record: R) {
        self.registry.register(scheme, record);
    }

    /// Apply `scheme`, failing fast if it is not registered.
    ///
    /// On failure nothing changes: the previous scheme stays active.
    pub fn apply(&mut self, scheme: &SchemeId) -> ThemeResult<&R> {
        let record = self.registry.lookup(scheme)?.clone();
        self.current = record;
        self.active = scheme.clone();
        Ok(&self.current)
    }

    /// Apply `scheme` if it is registered, otherwise keep the current record.
    ///
    /// The active scheme is updated either way. Returns `true` if a record was found.
    pub fn apply_soft(&mut self, scheme: &SchemeId) -> bool {
        self.active = scheme.clone();
        match self.registry.get(scheme) {
            Some(record) => {
                self.current = record.clone();
                true
            }
            None => false,
        }
    }

    /// The applied record.
    pub fn current(&self) -> &R {
        &self.current
    }

    /// The active scheme.
    pub fn active(&self) -> &SchemeId {
        &self.active
    }

    /// The registered record for `scheme`.
    pub fn record(&self, scheme: &SchemeId) -> Option<&R> {
        self.registry.get(scheme)
    }

    /// Mutable access to the registered record for `scheme`.
    pub fn record_mut(&mut self, scheme: &SchemeId) -> Option<&mut R> {
        self.registry.get_mut(scheme)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &StyleRegistry<R> {
        &self.registry
    }
}

impl<R: Clone + Serialize + DeserializeOwned> SchemeState<R> {
    /// Register the record a scheme file defines for this element kind.
    ///
    /// Slots missing from the file inherit the `Light` record's values.
    /// Returns `false` if the file has no section for this kind.
    pub fn register_from(&mut self, file: &SchemeFile) -> ThemeResult<bool> {
        let owner = self.registry.owner().clone();
        let base = self
            .registry
            .get(&SchemeId::light())
            .unwrap_or(&self.current)
            .clone();
        match file.record_over(&owner, &base)? {
            Some(record) => {
                log::debug!("Registered scheme '{}' for {} from file", file.scheme(), owner);
                self.registry.register(file.scheme().clone(), record);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
