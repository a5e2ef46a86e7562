//! Mutex-guarded registry for concurrent hosts.

use crate::{classify::Classification, registry::InterfaceRegistry};
use mimic_core::{InterfaceError, IntoTypeTag, Method, MimicError, Predicate, Slot, Value};
use std::sync::{Arc, Mutex, MutexGuard};

/// An [`InterfaceRegistry`] shared between threads.
///
/// A single mutex guards both registration and every read path. Clones
/// share the same registry.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<InterfaceRegistry>>,
}

impl SharedRegistry {
    /// Share `registry`.
    pub fn new(registry: InterfaceRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, InterfaceRegistry>, InterfaceError> {
        self.inner
            .lock()
            .map_err(|_| InterfaceError::InvalidState("registry mutex poisoned".to_owned()))
    }

    /// See [`InterfaceRegistry::set_implementation`].
    pub fn set_implementation(
        &self,
        target: impl IntoTypeTag,
        method: &str,
        slot: impl Into<Slot>,
    ) -> Result<(), InterfaceError> {
        self.lock()?.set_implementation(target, method, slot)
    }

    /// See [`InterfaceRegistry::set_is_object_instance`].
    pub fn set_is_object_instance(
        &self,
        target: impl IntoTypeTag,
        predicate: Predicate,
    ) -> Result<(), InterfaceError> {
        self.lock()?.set_is_object_instance(target, predicate)
    }

    /// See [`InterfaceRegistry::get_implementation`]. Returns a handle to
    /// the resolved method.
    pub fn get_implementation(
        &self,
        value: &Value,
        method: &str,
        default_impl: &Method,
        data_type_impl: &Method,
    ) -> Result<Method, InterfaceError> {
        Ok(self
            .lock()?
            .get_implementation(value, method, default_impl, data_type_impl)
            .clone())
    }

    /// Resolve under the lock, then invoke outside it.
    pub fn call(
        &self,
        receiver: &Value,
        method: &str,
        args: &[Value],
        default_impl: &Method,
        data_type_impl: &Method,
    ) -> Result<Value, MimicError> {
        let resolved = self.get_implementation(receiver, method, default_impl, data_type_impl)?;
        resolved.call(receiver, args).map_err(MimicError::Method)
    }

    /// See [`InterfaceRegistry::is_object_instance`].
    ///
    /// The predicate runs with the registry locked. A predicate that calls
    /// back into this `SharedRegistry` deadlocks.
    pub fn is_object_instance(
        &self,
        value: &Value,
        target: impl IntoTypeTag,
    ) -> Result<bool, InterfaceError> {
        self.lock()?.is_object_instance(value, target)
    }

    /// See [`InterfaceRegistry::class_of_object`].
    ///
    /// Fails only if the mutex is poisoned. Predicates run with the registry
    /// locked, so a predicate that calls back into this `SharedRegistry`
    /// deadlocks.
    pub fn class_of_object(&self, value: &Value) -> Result<Classification, InterfaceError> {
        Ok(self.lock()?.class_of_object(value))
    }

    /// Run `f` with the registry locked.
    ///
    /// `f` must not touch this `SharedRegistry` again: the mutex is not
    /// reentrant and the call deadlocks. That includes predicates `f` runs
    /// through the registry.
    pub fn with<R>(&self, f: impl FnOnce(&InterfaceRegistry) -> R) -> Result<R, InterfaceError> {
        Ok(f(&*self.lock()?))
    }

    /// Run `f` with the registry locked for mutation.
    pub fn with_mut<R>(
        &self,
        f: impl FnOnce(&mut InterfaceRegistry) -> R,
    ) -> Result<R, InterfaceError> {
        Ok(f(&mut *self.lock()?))
    }
}

impl From<InterfaceRegistry> for SharedRegistry {
    fn from(registry: InterfaceRegistry) -> Self {
        Self::new(registry)
    }
}
