//! The interface registry.
//!
//! [`InterfaceRegistry`] owns a frozen [`Interface`] and a dispatch table
//! mapping each registered [`TypeTag`] to its [`MethodTable`]. Entries are
//! created on first registration for a type and never removed; iteration
//! follows first-registration order.

use crate::classify::{Classification, Classifier};
use mimic_core::{
    INSTANCE_PREDICATE, Interface, InterfaceError, IntoTypeTag, Method, MimicError, Predicate,
    Slot, TypeTag, Value,
};
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// MethodTable
// ============================================================================

/// Per-type mapping from declared method name to implementation slot.
///
/// A missing name means the type does not implement that method.
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    slots: BTreeMap<String, Slot>,
}

impl MethodTable {
    /// The slot registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    /// Whether `name` has a slot.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Implemented names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Number of implemented names.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is implemented.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn insert(&mut self, name: &str, slot: Slot) -> Option<Slot> {
        self.slots.insert(name.to_owned(), slot)
    }
}

struct TypeEntry {
    tag: TypeTag,
    table: MethodTable,
}

// ============================================================================
// InterfaceRegistry
// ============================================================================

/// A dispatch table emulating interface polymorphism.
///
/// Registration takes `&mut self`; every read path takes `&self`. Wrap the
/// registry in a [`SharedRegistry`](crate::SharedRegistry) to mutate it from
/// several threads.
///
/// # Example
/// ```ignore
/// let mut registry = InterfaceRegistry::with_methods(["talk", "walk"])?;
/// registry.set_implementation(Dog::type_tag(), "talk", Method::constant("woof"))?;
///
/// let talk = registry.get_implementation(&dog, "talk", &default_impl, &data_impl);
/// let said = talk.call(&dog, &[])?;
/// ```
pub struct InterfaceRegistry {
    interface: Interface,
    entries: Vec<TypeEntry>,
    index: HashMap<TypeTag, usize>,
}

impl InterfaceRegistry {
    /// Create an empty registry for `interface`.
    pub fn new(interface: Interface) -> Self {
        Self {
            interface,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Declare an interface from method names and create a registry for it.
    pub fn with_methods<I, S>(names: I) -> Result<Self, InterfaceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(Interface::new(names)?))
    }

    /// The declared interface.
    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    /// Register `slot` as the implementation of `method` for `target`.
    ///
    /// Overwrites any earlier slot for the same (type, method) pair and
    /// leaves every other pair untouched.
    ///
    /// # Errors
    ///
    /// [`InterfaceError::InvalidArgument`] if `target` is not a class or
    /// `method` is not declared by the interface.
    pub fn set_implementation(
        &mut self,
        target: impl IntoTypeTag,
        method: &str,
        slot: impl Into<Slot>,
    ) -> Result<(), InterfaceError> {
        let tag = target.into_type_tag()?;
        if !self.interface.contains(method) {
            return Err(InterfaceError::InvalidArgument(format!(
                "method `{method}` is not declared by the interface"
            )));
        }

        let position = match self.index.get(&tag) {
            Some(&position) => position,
            None => {
                self.entries.push(TypeEntry {
                    tag,
                    table: MethodTable::default(),
                });
                self.index.insert(tag, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        let previous = self.entries[position].table.insert(method, slot.into());

        log_debug!(
            class = %tag,
            method,
            overwrote = previous.is_some(),
            "implementation registered"
        );
        #[cfg(not(feature = "tracing"))]
        {
            let _ = previous;
        }
        Ok(())
    }

    /// Register the classification predicate for `target`.
    ///
    /// Shorthand for [`set_implementation`](Self::set_implementation) under
    /// [`INSTANCE_PREDICATE`].
    pub fn set_is_object_instance(
        &mut self,
        target: impl IntoTypeTag,
        predicate: Predicate,
    ) -> Result<(), InterfaceError> {
        self.set_implementation(target, INSTANCE_PREDICATE, predicate)
    }

    /// Resolve the method that applies to `value`.
    ///
    /// - `null` and primitives always resolve to `data_type_impl`; the
    ///   dispatch table is not consulted.
    /// - A class resolves against its own table, a structured value against
    ///   its class's table.
    /// - If no method is registered under `method`, `default_impl` is
    ///   returned.
    ///
    /// The returned method is never invoked here.
    pub fn get_implementation<'a>(
        &'a self,
        value: &Value,
        method: &str,
        default_impl: &'a Method,
        data_type_impl: &'a Method,
    ) -> &'a Method {
        let Some(tag) = value.type_identity() else {
            return data_type_impl;
        };
        self.lookup(&tag, method)
            .and_then(Slot::as_method)
            .unwrap_or(default_impl)
    }

    /// Resolve and invoke `method` on `receiver`.
    ///
    /// # Errors
    ///
    /// [`MimicError::Method`] with whatever the invoked method returned.
    pub fn call(
        &self,
        receiver: &Value,
        method: &str,
        args: &[Value],
        default_impl: &Method,
        data_type_impl: &Method,
    ) -> Result<Value, MimicError> {
        self.get_implementation(receiver, method, default_impl, data_type_impl)
            .call(receiver, args)
            .map_err(MimicError::Method)
    }

    /// Whether `value` is an instance of `target`.
    ///
    /// The native instance-of relation short-circuits to `true`. Otherwise
    /// the predicate registered for `target` decides; without one the answer
    /// is `false`.
    ///
    /// # Errors
    ///
    /// - [`InterfaceError::InvalidArgument`] if `target` is not a class.
    /// - [`InterfaceError::InvalidState`] if the slot under
    ///   [`INSTANCE_PREDICATE`] is not a predicate.
    pub fn is_object_instance(
        &self,
        value: &Value,
        target: impl IntoTypeTag,
    ) -> Result<bool, InterfaceError> {
        let tag = target.into_type_tag()?;
        if value.is_instance_of(&tag) {
            return Ok(true);
        }
        self.test_predicate(value, &tag)
    }

    pub(crate) fn test_predicate(
        &self,
        value: &Value,
        tag: &TypeTag,
    ) -> Result<bool, InterfaceError> {
        match self.lookup(tag, INSTANCE_PREDICATE) {
            None => Ok(false),
            Some(Slot::Predicate(predicate)) => Ok(predicate.test(value)),
            Some(other) => Err(InterfaceError::InvalidState(format!(
                "`{INSTANCE_PREDICATE}` of `{tag}` holds a {}, not a predicate",
                other.describe()
            ))),
        }
    }

    /// Classify `value` against the registered classes.
    ///
    /// See [`Classifier::classify`].
    pub fn class_of_object(&self, value: &Value) -> Classification {
        self.classifier().classify(value)
    }

    /// A classifier over the registered types in registration order.
    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(self)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no type has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `tag` has at least one registration.
    pub fn contains_type(&self, tag: &TypeTag) -> bool {
        self.index.contains_key(tag)
    }

    /// Registered types in first-registration order.
    pub fn registered_types(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.entries.iter().map(|e| e.tag)
    }

    /// The method table of `tag`.
    pub fn method_table(&self, tag: &TypeTag) -> Option<&MethodTable> {
        self.index.get(tag).map(|&i| &self.entries[i].table)
    }

    /// Whether `tag` has a slot under `method`.
    pub fn implements(&self, tag: &TypeTag, method: &str) -> bool {
        self.lookup(tag, method).is_some()
    }

    pub(crate) fn tables(&self) -> impl Iterator<Item = (TypeTag, &MethodTable)> {
        self.entries.iter().map(|e| (e.tag, &e.table))
    }

    fn lookup(&self, tag: &TypeTag, method: &str) -> Option<&Slot> {
        self.method_table(tag)?.get(method)
    }
}

impl std::fmt::Debug for InterfaceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceRegistry")
            .field("interface", &self.interface)
            .field(
                "types",
                &self
                    .entries
                    .iter()
                    .map(|e| (e.tag, &e.table))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ============================================================================
// RegistryBuilder
// ============================================================================

/// Builder for constructing an [`InterfaceRegistry`] fluently.
///
/// The first failed registration is remembered and returned by
/// [`build`](Self::build); later registrations are skipped.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new(interface)
///     .implement(Dog::type_tag(), "talk", Method::constant("woof"))
///     .predicate(Point::type_tag(), Predicate::new(is_point))
///     .build()?;
/// ```
pub struct RegistryBuilder {
    registry: InterfaceRegistry,
    error: Option<InterfaceError>,
}

impl RegistryBuilder {
    /// Create a builder for `interface`.
    pub fn new(interface: Interface) -> Self {
        Self {
            registry: InterfaceRegistry::new(interface),
            error: None,
        }
    }

    /// Register an implementation.
    pub fn implement(
        mut self,
        target: impl IntoTypeTag,
        method: &str,
        slot: impl Into<Slot>,
    ) -> Self {
        self.implement_mut(target, method, slot);
        self
    }

    /// Register an implementation (mutable version).
    pub fn implement_mut(&mut self, target: impl IntoTypeTag, method: &str, slot: impl Into<Slot>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.registry.set_implementation(target, method, slot) {
            self.error = Some(e);
        }
    }

    /// Register a classification predicate.
    pub fn predicate(self, target: impl IntoTypeTag, predicate: Predicate) -> Self {
        self.implement(target, INSTANCE_PREDICATE, predicate)
    }

    /// Build the registry.
    ///
    /// # Errors
    ///
    /// The first registration error, if any.
    pub fn build(self) -> Result<InterfaceRegistry, InterfaceError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.registry),
        }
    }
}
