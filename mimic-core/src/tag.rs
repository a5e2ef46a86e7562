//! Type identities.
//!
//! A [`TypeTag`] is the stable key under which implementations are
//! registered. It is derived from a Rust type implementing [`Class`], so the
//! key never depends on the identity of a callable and primitives can never
//! become keys.

use crate::{error::InterfaceError, value::Value};
use std::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

/// A type whose instances can be wrapped in a [`Value::Instance`].
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct Dog { name: String }
///
/// impl Class for Dog {
///     const NAME: &'static str = "Dog";
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Mimic `Class`",
    label = "missing `Class` implementation",
    note = "Implement `Class` (or `#[derive(Class)]`) to register `{Self}` in an interface registry."
)]
pub trait Class: Any + Send + Sync + fmt::Debug {
    /// Display name of the class.
    const NAME: &'static str;

    /// The type tag of this class.
    fn type_tag() -> TypeTag
    where
        Self: Sized,
    {
        TypeTag::of::<Self>()
    }
}

/// A stable type discriminator.
///
/// Equality and hashing use the underlying [`TypeId`] only; the name is for
/// display.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// The tag of class `T`.
    pub fn of<T: Class>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::NAME,
        }
    }

    /// The class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying Rust type id.
    pub fn rust_type_id(&self) -> TypeId {
        self.id
    }

    /// Whether this tag identifies class `T`.
    pub fn is<T: Class>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Conversion into a registration target.
///
/// Tags convert unconditionally. Values convert only when they are
/// constructor-kind ([`Value::Class`]); anything else is an
/// [`InterfaceError::InvalidArgument`].
pub trait IntoTypeTag {
    /// Perform the conversion.
    fn into_type_tag(self) -> Result<TypeTag, InterfaceError>;
}

impl IntoTypeTag for TypeTag {
    fn into_type_tag(self) -> Result<TypeTag, InterfaceError> {
        Ok(self)
    }
}

impl IntoTypeTag for &TypeTag {
    fn into_type_tag(self) -> Result<TypeTag, InterfaceError> {
        Ok(*self)
    }
}

impl IntoTypeTag for &Value {
    fn into_type_tag(self) -> Result<TypeTag, InterfaceError> {
        match self {
            Value::Class(tag) => Ok(*tag),
            other => Err(InterfaceError::invalid_argument(format!(
                "expected a class, got a value of kind `{}`",
                other.kind()
            ))),
        }
    }
}

impl IntoTypeTag for Value {
    fn into_type_tag(self) -> Result<TypeTag, InterfaceError> {
        (&self).into_type_tag()
    }
}
