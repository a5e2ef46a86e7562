//! Structural classification.
//!
//! The [`Classifier`] is an opt-in view over a registry's `(type, predicate)`
//! pairs, scanned in first-registration order. The first type whose
//! instance check holds wins; values matching nothing fall back to their
//! [`Kind`].

use crate::registry::InterfaceRegistry;
use mimic_core::{Class, INSTANCE_PREDICATE, InterfaceError, Kind, Slot, TypeTag, Value};
use std::fmt;

/// The outcome of classifying a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The value belongs to a registered class.
    Class(TypeTag),
    /// No class matched (or the value is primitive): the raw kind.
    Kind(Kind),
}

impl Classification {
    /// The class, if one matched.
    pub fn as_class(&self) -> Option<TypeTag> {
        match self {
            Classification::Class(tag) => Some(*tag),
            Classification::Kind(_) => None,
        }
    }

    /// The kind, if no class matched.
    pub fn as_kind(&self) -> Option<Kind> {
        match self {
            Classification::Kind(kind) => Some(*kind),
            Classification::Class(_) => None,
        }
    }

    /// Whether the value was classified as `T`.
    pub fn is<T: Class>(&self) -> bool {
        self.as_class().is_some_and(|tag| tag.is::<T>())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Class(tag) => fmt::Display::fmt(tag, f),
            Classification::Kind(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

impl From<TypeTag> for Classification {
    fn from(tag: TypeTag) -> Self {
        Classification::Class(tag)
    }
}

impl From<Kind> for Classification {
    fn from(kind: Kind) -> Self {
        Classification::Kind(kind)
    }
}

/// A prioritized list of `(type, predicate)` pairs.
///
/// Priority is first-registration order in the underlying registry.
#[derive(Clone, Copy)]
pub struct Classifier<'a> {
    registry: &'a InterfaceRegistry,
}

impl<'a> Classifier<'a> {
    pub(crate) fn new(registry: &'a InterfaceRegistry) -> Self {
        Self { registry }
    }

    /// The candidate types in priority order, with their predicate slot.
    pub fn entries(&self) -> impl Iterator<Item = (TypeTag, Option<&'a Slot>)> + 'a {
        self.registry
            .tables()
            .map(|(tag, table)| (tag, table.get(INSTANCE_PREDICATE)))
    }

    /// Number of candidate types.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Whether `value` belongs to `tag`: the native instance-of relation, or
    /// the registered predicate.
    pub fn matches(&self, value: &Value, tag: &TypeTag) -> Result<bool, InterfaceError> {
        if value.is_instance_of(tag) {
            return Ok(true);
        }
        self.registry.test_predicate(value, tag)
    }

    /// Classify `value`.
    ///
    /// Primitives and `null` return their kind without running any
    /// predicate. Otherwise the first matching type wins; a type whose
    /// predicate slot is corrupted is skipped. Never fails.
    pub fn classify(&self, value: &Value) -> Classification {
        if value.is_primitive() {
            return Classification::Kind(value.kind());
        }
        for (tag, _) in self.registry.tables() {
            match self.matches(value, &tag) {
                Ok(true) => {
                    log_trace!(class = %tag, "value classified");
                    return Classification::Class(tag);
                }
                Ok(false) => {}
                Err(e) => {
                    log_warn!(class = %tag, error = %e, "skipping type with corrupted predicate");
                    #[cfg(not(feature = "tracing"))]
                    {
                        let _ = e;
                    }
                }
            }
        }
        log_trace!(kind = %value.kind(), "no registered class matched");
        Classification::Kind(value.kind())
    }

    /// Every matching type, in priority order.
    pub fn candidates(&self, value: &Value) -> Vec<TypeTag> {
        if value.is_primitive() {
            return Vec::new();
        }
        self.registry
            .tables()
            .map(|(tag, _)| tag)
            .filter(|tag| self.matches(value, tag).unwrap_or(false))
            .collect()
    }
}
