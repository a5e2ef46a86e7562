//! Testing utilities for Mimic.
//!
//! This module provides instrumented implementations for asserting how the
//! registry dispatches and classifies.
//!
//! # Features
//!
//! - [`RecordingMethod`]: A method that records every receiver it is called on
//! - [`CountingPredicate`]: A predicate that counts its invocations

use mimic_core::{Method, Predicate, Value};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Method
// ============================================================================

/// A method that records all receivers it is invoked on.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingMethod::returning("woof");
/// registry.set_implementation(Dog::type_tag(), "talk", recorder.method())?;
///
/// registry.call(&dog, "talk", &[], &default_impl, &data_impl)?;
/// assert_eq!(recorder.count(), 1);
/// ```
#[derive(Clone)]
pub struct RecordingMethod {
    receivers: Arc<Mutex<Vec<Value>>>,
    result: Value,
}

impl RecordingMethod {
    /// Create a recorder that returns `undefined`.
    pub fn new() -> Self {
        Self::returning(Value::Undefined)
    }

    /// Create a recorder that returns `result`.
    pub fn returning(result: impl Into<Value>) -> Self {
        Self {
            receivers: Arc::new(Mutex::new(Vec::new())),
            result: result.into(),
        }
    }

    /// A [`Method`] feeding this recorder.
    pub fn method(&self) -> Method {
        let receivers = self.receivers.clone();
        let result = self.result.clone();
        Method::new(move |receiver, _args| {
            receivers.lock().unwrap().push(receiver.clone());
            Ok(result.clone())
        })
    }

    /// Get a clone of the recorded receivers.
    pub fn receivers(&self) -> Vec<Value> {
        self.receivers.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.receivers.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.receivers.lock().unwrap().clear();
    }
}

impl Default for RecordingMethod {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Counting Predicate
// ============================================================================

/// A predicate wrapper that counts invocations.
///
/// Useful to verify that classification short-circuits without running
/// predicates.
#[derive(Clone)]
pub struct CountingPredicate {
    count: Arc<AtomicUsize>,
    inner: Predicate,
}

impl CountingPredicate {
    /// Count calls to a predicate with the given verdict function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            inner: Predicate::new(f),
        }
    }

    /// A predicate that always answers `verdict`.
    pub fn always(verdict: bool) -> Self {
        Self::new(move |_| verdict)
    }

    /// A [`Predicate`] feeding this counter.
    pub fn predicate(&self) -> Predicate {
        let count = self.count.clone();
        let inner = self.inner.clone();
        Predicate::new(move |value| {
            count.fetch_add(1, Ordering::SeqCst);
            inner.test(value)
        })
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}
