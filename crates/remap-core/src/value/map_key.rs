use super::Value;
use crate::{Error, Result};

use std::fmt;

/// Key of a [`Value::Map`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MapKey {
    I64(i64),
    String(String),
}

impl MapKey {
    /// Converts a value into a key. Only strings and integers qualify.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(Self::String(v)),
            Value::I32(v) => Ok(Self::I64(v.into())),
            Value::I64(v) => Ok(Self::I64(v)),
            value => Err(Error::type_conversion(value, "map key")),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::I64(v) => Value::I64(v),
            Self::String(v) => Value::String(v),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            Self::I64(_) => None,
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<&str> for MapKey {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for MapKey {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<i64> for MapKey {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}
