//! Runtime kinds of values.
//!
//! Every [`Value`](crate::Value) has exactly one [`Kind`]. Primitive kinds and
//! `null` are handled categorically by the registry and never become
//! dispatch-table keys.

use bitflags::bitflags;
use std::fmt;

/// The runtime kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The absent value.
    Undefined,
    /// The null reference.
    Null,
    /// `true` or `false`.
    Boolean,
    /// A double-precision number.
    Number,
    /// A large integer.
    BigInt,
    /// A string.
    String,
    /// A unique symbol.
    Symbol,
    /// A structured value (record or class instance).
    Object,
    /// A constructor-kind value.
    Function,
}

bitflags! {
    /// A set of [`Kind`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KindSet: u16 {
        /// See [`Kind::Undefined`].
        const UNDEFINED = 1 << 0;
        /// See [`Kind::Null`].
        const NULL = 1 << 1;
        /// See [`Kind::Boolean`].
        const BOOLEAN = 1 << 2;
        /// See [`Kind::Number`].
        const NUMBER = 1 << 3;
        /// See [`Kind::BigInt`].
        const BIGINT = 1 << 4;
        /// See [`Kind::String`].
        const STRING = 1 << 5;
        /// See [`Kind::Symbol`].
        const SYMBOL = 1 << 6;
        /// See [`Kind::Object`].
        const OBJECT = 1 << 7;
        /// See [`Kind::Function`].
        const FUNCTION = 1 << 8;

        /// Kinds that bypass the dispatch table: the six primitives and `null`.
        const PRIMITIVE = Self::UNDEFINED.bits()
            | Self::NULL.bits()
            | Self::BOOLEAN.bits()
            | Self::NUMBER.bits()
            | Self::BIGINT.bits()
            | Self::STRING.bits()
            | Self::SYMBOL.bits();

        /// Kinds that carry a type identity.
        const STRUCTURED = Self::OBJECT.bits() | Self::FUNCTION.bits();
    }
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 9] = [
        Kind::Undefined,
        Kind::Null,
        Kind::Boolean,
        Kind::Number,
        Kind::BigInt,
        Kind::String,
        Kind::Symbol,
        Kind::Object,
        Kind::Function,
    ];

    /// The single-bit flag for this kind.
    pub const fn flag(self) -> KindSet {
        match self {
            Kind::Undefined => KindSet::UNDEFINED,
            Kind::Null => KindSet::NULL,
            Kind::Boolean => KindSet::BOOLEAN,
            Kind::Number => KindSet::NUMBER,
            Kind::BigInt => KindSet::BIGINT,
            Kind::String => KindSet::STRING,
            Kind::Symbol => KindSet::SYMBOL,
            Kind::Object => KindSet::OBJECT,
            Kind::Function => KindSet::FUNCTION,
        }
    }

    /// Whether values of this kind bypass the dispatch table.
    pub const fn is_primitive(self) -> bool {
        KindSet::PRIMITIVE.contains(self.flag())
    }

    /// The lowercase tag name, e.g. `"bigint"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::BigInt => "bigint",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Object => "object",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl KindSet {
    /// Whether `kind` is a member of this set.
    pub const fn has(self, kind: Kind) -> bool {
        self.contains(kind.flag())
    }
}

impl FromIterator<Kind> for KindSet {
    fn from_iter<I: IntoIterator<Item = Kind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(KindSet::empty(), |set, kind| set | kind.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_partition() {
        let primitives: KindSet = Kind::ALL.into_iter().filter(|k| k.is_primitive()).collect();
        assert_eq!(primitives, KindSet::PRIMITIVE);
        assert!(!Kind::Object.is_primitive());
        assert!(!Kind::Function.is_primitive());
        assert!(Kind::Null.is_primitive());
        assert_eq!(KindSet::PRIMITIVE | KindSet::STRUCTURED, KindSet::all());
    }

    #[test]
    fn test_display() {
        assert_eq!(Kind::BigInt.to_string(), "bigint");
        assert_eq!(Kind::Function.to_string(), "function");
        assert!(KindSet::STRUCTURED.has(Kind::Object));
    }
}
