//! # mimic - Interface-Style Dispatch over Dynamic Values
//!
//! `mimic` emulates interface polymorphism at runtime. An [`Interface`]
//! declares a frozen set of method names; an [`InterfaceRegistry`] stores,
//! per class, one implementation for each name and resolves which
//! implementation applies to an arbitrary [`Value`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mimic::prelude::*;
//!
//! #[derive(Debug)]
//! struct Dog { name: String }
//! impl Class for Dog { const NAME: &'static str = "Dog"; }
//!
//! let mut registry = InterfaceRegistry::with_methods(["talk", "walk"])?;
//! registry.set_implementation(Dog::type_tag(), "talk", Method::constant("woof"))?;
//!
//! let dog = Value::instance(Dog { name: "Rex".into() });
//! let talk = registry.get_implementation(&dog, "talk", &default_impl, &data_impl);
//! assert_eq!(talk.call(&dog, &[])?, Value::from("woof"));
//! ```
//!
//! ## Classification
//!
//! Register a predicate per class with
//! [`InterfaceRegistry::set_is_object_instance`], then ask
//! [`InterfaceRegistry::class_of_object`] which class a value structurally
//! belongs to. The earliest registered class wins.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Errors
pub use mimic_core::{BoxError, InterfaceError, MimicError};

// Interface declaration
pub use mimic_core::{INSTANCE_PREDICATE, Interface};

// Slots
pub use mimic_core::{Method, Predicate, Slot};

// Type identity
pub use mimic_core::{Class, IntoTypeTag, TypeTag};

// Values
pub use mimic_core::{Instance, Kind, KindSet, Record, Symbol, Value};

pub use mimic_std::{
    Classification, Classifier, InterfaceRegistry, MethodTable, RegistryBuilder, SharedRegistry,
};

/// Link-time class registration support module.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use mimic_std::collected::{CollectedClass, collected_classes};
}

#[cfg(feature = "inventory")]
pub use mimic_std::submit_class;

/// Testing utilities.
pub mod testing {
    pub use mimic_std::testing::{CountingPredicate, RecordingMethod};
}

/// Prelude module - common imports for Mimic.
///
/// # Usage
///
/// ```rust,ignore
/// use mimic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Class, Classification, Interface, InterfaceError, InterfaceRegistry, Kind, Method,
        MimicError, Predicate, Record, RegistryBuilder, SharedRegistry, TypeTag, Value,
    };
}

#[cfg(feature = "macros")]
pub use mimic_macros::Class;

#[cfg(feature = "inventory")]
pub use inventory;
