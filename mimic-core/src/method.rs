//! Implementation slots stored in method tables.
//!
//! A method table maps a declared name to a [`Slot`]. Ordinary interface
//! methods are [`Method`]s; the reserved instance-predicate name normally
//! holds a [`Predicate`]. Both are cheap to clone (reference counted).

use crate::{error::BoxError, value::Value};
use std::{fmt, sync::Arc};

type MethodFn = dyn Fn(&Value, &[Value]) -> Result<Value, BoxError> + Send + Sync;
type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// An interface method implementation.
///
/// Invoked with the receiver first, then the call arguments.
#[derive(Clone)]
pub struct Method {
    f: Arc<MethodFn>,
}

impl Method {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// A method that ignores its inputs and returns a clone of `value`.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move |_, _| Ok(value.clone()))
    }

    /// Invoke the method.
    pub fn call(&self, receiver: &Value, args: &[Value]) -> Result<Value, BoxError> {
        (self.f)(receiver, args)
    }

    /// Whether both handles refer to the same implementation.
    pub fn ptr_eq(&self, other: &Method) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method({:p})", Arc::as_ptr(&self.f))
    }
}

/// A structural classification predicate.
#[derive(Clone)]
pub struct Predicate {
    f: Arc<PredicateFn>,
}

impl Predicate {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Evaluate the predicate.
    pub fn test(&self, value: &Value) -> bool {
        (self.f)(value)
    }

    /// Whether both handles refer to the same implementation.
    pub fn ptr_eq(&self, other: &Predicate) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({:p})", Arc::as_ptr(&self.f))
    }
}

/// An entry in a method table.
#[derive(Debug, Clone)]
pub enum Slot {
    /// An interface method.
    Method(Method),
    /// A classification predicate.
    Predicate(Predicate),
}

impl Slot {
    /// The method, if this slot holds one.
    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Slot::Method(m) => Some(m),
            Slot::Predicate(_) => None,
        }
    }

    /// The predicate, if this slot holds one.
    pub fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            Slot::Predicate(p) => Some(p),
            Slot::Method(_) => None,
        }
    }

    /// Short description of the slot variant.
    pub fn describe(&self) -> &'static str {
        match self {
            Slot::Method(_) => "method",
            Slot::Predicate(_) => "predicate",
        }
    }
}

impl From<Method> for Slot {
    fn from(m: Method) -> Self {
        Slot::Method(m)
    }
}

impl From<Predicate> for Slot {
    fn from(p: Predicate) -> Self {
        Slot::Predicate(p)
    }
}
