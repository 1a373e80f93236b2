//! Runtime values.
//!
//! Values are immutable once built: operators always produce a fresh `Value`
//! and assignment replaces the binding rather than mutating what it held.

use std::fmt;

/// The type tag of a [`Value`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Int,
    Bool,
    String,
    Nil,
}

impl Type {
    pub const fn as_str(self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Bool => "bool",
            Type::String => "string",
            Type::Nil => "nil",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Brewin runtime value.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(String),
    #[default]
    Nil,
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// The type tag; fixed for the lifetime of the value.
    pub fn value_type(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Bool(_) => Type::Bool,
            Value::Str(_) => Type::String,
            Value::Nil => Type::Nil,
        }
    }
}

/// The printable form used by `print` and input prompts.
///
/// `nil` prints as the literal text `nil`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Str(s) => f.write_str(s),
            Value::Nil => f.write_str("nil"),
        }
    }
}
