//! # mimic-std
//!
//! The interface registry for the Mimic runtime.
//!
//! This crate provides:
//! - **Dispatch**: [`InterfaceRegistry`], [`RegistryBuilder`], [`MethodTable`]
//! - **Classification**: [`Classifier`], [`Classification`]
//! - **Concurrency**: [`SharedRegistry`]
//! - **Link-time registration**: `collected` (with the `inventory` feature)
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use mimic_core;

#[macro_use]
mod log;

// Modules
pub mod classify;
#[cfg(feature = "inventory")]
pub mod collected;
pub mod registry;
pub mod shared;
pub mod testing;

pub use classify::{Classification, Classifier};
pub use registry::{InterfaceRegistry, MethodTable, RegistryBuilder};
pub use shared::SharedRegistry;

#[cfg(feature = "inventory")]
pub use inventory;
