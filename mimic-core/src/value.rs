//! The dynamic value model.
//!
//! [`Value`] is what the registry dispatches on. Primitives and `null` carry
//! no type identity; records, instances and classes do.

use crate::{
    kind::Kind,
    tag::{Class, TypeTag},
};
use std::{
    any::Any,
    collections::BTreeMap,
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

/// A runtime value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The null reference.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double-precision number.
    Number(f64),
    /// A large integer.
    BigInt(i128),
    /// An immutable string.
    String(Arc<str>),
    /// A unique symbol.
    Symbol(Symbol),
    /// A plain keyed record. Its class is [`Record`].
    Record(Record),
    /// A shared instance of a [`Class`].
    Instance(Instance),
    /// A constructor-kind value: the class itself.
    Class(TypeTag),
}

impl Value {
    /// Wrap `value` as a class instance.
    pub fn instance<T: Class>(value: T) -> Self {
        Value::Instance(Instance::new(value))
    }

    /// The constructor-kind value of class `T`.
    pub fn class<T: Class>() -> Self {
        Value::Class(TypeTag::of::<T>())
    }

    /// The runtime kind.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Record(_) | Value::Instance(_) => Kind::Object,
            Value::Class(_) => Kind::Function,
        }
    }

    /// Whether this value is `null` or of a primitive kind.
    pub fn is_primitive(&self) -> bool {
        self.kind().is_primitive()
    }

    /// The type identity used for dispatch.
    ///
    /// A class is its own identity; a structured value's identity is its
    /// class. Primitives and `null` have none.
    pub fn type_identity(&self) -> Option<TypeTag> {
        match self {
            Value::Class(tag) => Some(*tag),
            Value::Instance(instance) => Some(instance.type_tag()),
            Value::Record(_) => Some(Record::type_tag()),
            _ => None,
        }
    }

    /// The native instance-of relation.
    ///
    /// Holds only for structured values whose own class is `tag`. Classes
    /// are never instances.
    pub fn is_instance_of(&self, tag: &TypeTag) -> bool {
        match self {
            Value::Record(_) | Value::Instance(_) => self.type_identity().as_ref() == Some(tag),
            _ => false,
        }
    }

    /// The string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// The number, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The record, if this is a record.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Borrow the instance as `T`, if it is one.
    pub fn downcast_ref<T: Class>(&self) -> Option<&T> {
        match self {
            Value::Instance(instance) => instance.downcast_ref(),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::BigInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into())
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Value::Instance(value)
    }
}

impl From<TypeTag> for Value {
    fn from(value: TypeTag) -> Self {
        Value::Class(value)
    }
}

// ============================================================================
// Symbol
// ============================================================================

static NEXT_SYMBOL: AtomicU64 = AtomicU64::new(0);

/// A unique symbol. Two symbols are equal only if one is a clone of the other.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a fresh symbol.
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed),
            description: description.map(Into::into),
        }
    }

    /// The description given at creation.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// ============================================================================
// Record
// ============================================================================

/// A plain keyed record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Class for Record {
    const NAME: &'static str = "Record";
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Get a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether the field exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Whether the record has exactly the given field names.
    pub fn has_exact_keys(&self, keys: &[&str]) -> bool {
        self.fields.len() == keys.len() && keys.iter().all(|k| self.fields.contains_key(*k))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Instance
// ============================================================================

trait ClassObject: Any + Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Class> ClassObject for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A shared, type-erased instance of a [`Class`].
///
/// Clones share the same object; equality is object identity.
#[derive(Clone)]
pub struct Instance {
    tag: TypeTag,
    object: Arc<dyn ClassObject>,
}

impl Instance {
    /// Wrap `value`.
    pub fn new<T: Class>(value: T) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            object: Arc::new(value),
        }
    }

    /// The class of this instance.
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    /// Borrow the object as `T`.
    pub fn downcast_ref<T: Class>(&self) -> Option<&T> {
        self.object.as_any().downcast_ref()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.object, &other.object)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.object, f)
    }
}
