//! Value-kind vocabulary for attribute types and operation signatures.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of a dynamically-typed attribute value, operation parameter, or
/// operation return.
///
/// Kinds double as the signature vocabulary for operation dispatch: an
/// invocation names its parameter kinds and the adapter matches them
/// against the registered operation bindings. Scalar kinds and `Void`
/// are *standard*: any management client can render them. `Array` and
/// `Object` are composite and draw a registration-time warning because
/// a client may fail to display them nicely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// UTF-8 text.
    String,
    /// Whole number.
    Integer,
    /// Floating-point number.
    Number,
    /// True or false.
    Boolean,
    /// Ordered collection of values.
    Array,
    /// Keyed collection of values.
    Object,
    /// No value; the kind of `null` and of operations without a result.
    Void,
}

impl ValueKind {
    /// Returns the canonical lowercase kind name used in signatures.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Void => "void",
        }
    }

    /// Classifies a concrete value.
    #[must_use]
    pub fn of_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Void,
            Value::Bool(_) => Self::Boolean,
            Value::Number(number) => {
                if number.is_f64() {
                    Self::Number
                } else {
                    Self::Integer
                }
            }
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns whether a management client can be expected to render
    /// values of this kind without trouble.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        !matches!(self, Self::Array | Self::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = ParseValueKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            "void" => Ok(Self::Void),
            other => Err(ParseValueKindError(other.to_owned())),
        }
    }
}

/// Error returned while parsing a kind name from an operation signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown value kind: {0}")]
pub struct ParseValueKindError(pub String);
