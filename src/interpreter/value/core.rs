use std::fmt;

use thiserror::Error;

use crate::util::num::format_number;

/// Represents a runtime value in the interpreter.
///
/// Formulas operate on exactly three scalar kinds. There is no null and no
/// composite value; every operator and construct checks the kinds of its
/// operands before using them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A text value.
    String(String),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value, produced by `TRUE()`, `FALSE()`, equality and
    /// comparison operators, `NOT`, `AND` and `OR`.
    Bool(bool),
}

/// The kind of a [`Value`], used in error reporting and projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::String`]
    String,
    /// [`Value::Number`]
    Number,
    /// [`Value::Bool`]
    Bool,
}

/// Returned when a value is projected to a kind it does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} value, found {found}")]
pub struct KindMismatch {
    /// The kind the caller asked for.
    pub expected: ValueKind,
    /// The kind the value actually has.
    pub found:    ValueKind,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Number(_) => ValueKind::Number,
            Self::Bool(_) => ValueKind::Bool,
        }
    }

    /// Borrows the value as a string slice, or fails if it is not a string.
    ///
    /// # Example
    /// ```
    /// use celform::{Value, ValueKind};
    ///
    /// assert_eq!(Value::from("abc").as_str().unwrap(), "abc");
    ///
    /// let err = Value::Number(1.0).as_str().unwrap_err();
    /// assert_eq!(err.found, ValueKind::Number);
    /// ```
    pub fn as_str(&self) -> Result<&str, KindMismatch> {
        match self {
            Self::String(s) => Ok(s.as_str()),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    /// Converts the value to an `f64`, or fails if it is not a number.
    pub const fn as_number(&self) -> Result<f64, KindMismatch> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(self.mismatch(ValueKind::Number)),
        }
    }

    /// Converts the value to `bool`, or fails if it is not a boolean.
    pub const fn as_bool(&self) -> Result<bool, KindMismatch> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(ValueKind::Bool)),
        }
    }

    /// Consumes the value, returning the owned string if it is one.
    pub fn into_string(self) -> Result<String, KindMismatch> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    const fn mismatch(&self, expected: ValueKind) -> KindMismatch {
        KindMismatch { expected,
                       found: self.kind() }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Bool(true) => write!(f, "TRUE"),
            Self::Bool(false) => write!(f, "FALSE"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
        };
        write!(f, "{name}")
    }
}
