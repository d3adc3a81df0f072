//! Field values and the record abstraction the engine operates on.

use std::fmt;

/// Text shown for a cell whose field holds no value.
pub const PLACEHOLDER: &str = "-";

/// A single field value of a record.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Missing or explicitly empty.
    Null,
    Text(String),
    Number(f64),
    /// Short ordered sequence of strings, such as a task list.
    List(Vec<String>),
}

impl Value {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// String form used for search and comparison. `None` for [`Value::Null`].
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(number.to_string()),
            Self::List(items) => Some(items.join(",")),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str(PLACEHOLDER),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&[String]> for Value {
    fn from(value: &[String]) -> Self {
        Self::List(value.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A row of domain data as seen by the table engine.
pub trait Record {
    /// Every field of the record as `(key, value)`, in declaration order.
    fn fields(&self) -> Vec<(&'static str, Value)>;

    /// Value stored under `key`, or [`Value::Null`] when the record has no such field.
    fn field(&self, key: &str) -> Value {
        self.fields()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map_or(Value::Null, |(_, value)| value)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;
