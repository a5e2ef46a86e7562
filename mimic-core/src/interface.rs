//! Interface declarations.

use crate::error::InterfaceError;
use std::{collections::BTreeSet, fmt, sync::Arc};

/// The reserved method name used for structural classification.
///
/// It is injected into every [`Interface`].
pub const INSTANCE_PREDICATE: &str = "is_object_instance";

/// A frozen set of declared method names.
///
/// Constructed once, then shared by reference count: clones are cheap and
/// there is no way to mutate the set afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Interface {
    methods: Arc<BTreeSet<String>>,
}

impl Interface {
    /// Declare an interface.
    ///
    /// Duplicate names collapse and [`INSTANCE_PREDICATE`] is always added.
    /// Any string is a valid name, including the empty string.
    pub fn new<I, S>(names: I) -> Result<Self, InterfaceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut methods = BTreeSet::new();
        for name in names {
            methods.insert(name.into());
        }
        methods.insert(INSTANCE_PREDICATE.to_owned());
        Ok(Self {
            methods: Arc::new(methods),
        })
    }

    /// Whether `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains(name)
    }

    /// Declared names in sorted order, including the reserved predicate.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }

    /// Number of declared names, including the reserved predicate.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Always `false`: the reserved predicate is always declared.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// The reserved predicate name.
    pub fn predicate_name(&self) -> &'static str {
        INSTANCE_PREDICATE
    }
}

impl fmt::Debug for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.methods.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declares_and_injects() {
        let iface = Interface::new(["talk", "walk", "talk"]).unwrap();
        assert_eq!(iface.len(), 3);
        assert!(iface.contains("talk"));
        assert!(iface.contains("walk"));
        assert!(iface.contains(INSTANCE_PREDICATE));
        assert!(!iface.contains("fly"));
    }

    #[test]
    fn test_empty_declaration() {
        let iface = Interface::new(Vec::<String>::new()).unwrap();
        assert_eq!(iface.iter().collect::<Vec<_>>(), [INSTANCE_PREDICATE]);
        assert!(!iface.is_empty());
    }

    #[test]
    fn test_blank_names_are_declared() {
        let iface = Interface::new(["talk", "", "  "]).unwrap();
        assert_eq!(iface.len(), 4);
        assert!(iface.contains(""));
        assert!(iface.contains("  "));
        assert!(!iface.contains(" "));
    }

    #[test]
    fn test_explicit_predicate_name_collapses() {
        let iface = Interface::new([INSTANCE_PREDICATE, "talk"]).unwrap();
        assert_eq!(iface.len(), 2);
    }

    #[test]
    fn test_clones_share() {
        let a = Interface::new(["talk"]).unwrap();
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), r#"{"is_object_instance", "talk"}"#);
    }
}
