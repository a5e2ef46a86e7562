//! # mimic-core
//!
//! Core types for the Mimic interface registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only needs the value model, e.g. to define classes or write
//! method bodies, without pulling in the registry itself.
//!
//! # Building Blocks
//!
//! ## Values ([`Value`])
//!
//! The dynamic value model the registry dispatches on. Primitives
//! (`undefined`, `boolean`, `number`, `bigint`, `string`, `symbol`) and
//! `null` carry no type identity; records, class instances and classes do.
//!
//! ## Type identities ([`TypeTag`], [`Class`])
//!
//! A stable type token derived from a Rust type. Only [`Class`] types produce
//! tags, so a primitive can never become a registry key.
//!
//! ## Slots ([`Method`], [`Predicate`], [`Slot`])
//!
//! Implementations stored per (class, method name).
//!
//! ## Interfaces ([`Interface`])
//!
//! The frozen set of declared method names, always including
//! [`INSTANCE_PREDICATE`].
//!
//! # Error Types
//!
//! - [`MimicError`] - Top-level error type
//! - [`InterfaceError`] - `InvalidArgument` / `InvalidState`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod interface;
mod kind;
mod method;
mod tag;
mod value;

// Re-exports
pub use error::{BoxError, InterfaceError, MimicError};
pub use interface::{INSTANCE_PREDICATE, Interface};
pub use kind::{Kind, KindSet};
pub use method::{Method, Predicate, Slot};
pub use tag::{Class, IntoTypeTag, TypeTag};
pub use value::{Instance, Record, Symbol, Value};
