//! Tagged wire values exchanged with the remote API.
//!
//! The remote side speaks JSON with hyphenated keys. [`WireValue`] is the closed set
//! of shapes the resource layer sends and accepts, so conversions in both directions
//! are checked at the type level instead of by runtime assertion.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Untyped key/value object as sent to or returned by the client.
///
/// Keys are wire-format (hyphenated) field names.
pub type RemoteObject = BTreeMap<String, WireValue>;

/// A single wire-format value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WireValue {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// String
    Str(String),
    /// Ordered list
    List(Vec<WireValue>),
    /// Nested object
    Map(RemoteObject),
}

impl WireValue {
    /// Short name of the value's shape, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Returns the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the list payload, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[WireValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the object payload, if this is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&RemoteObject> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Converts a JSON object into a remote object.
    ///
    /// `null` yields `None`, which the read path treats as "object absent".
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWireValue`] if the value is neither `null` nor an
    /// object, or contains a value that cannot be represented.
    pub fn object_from_json(value: serde_json::Value) -> Result<Option<RemoteObject>> {
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(_) => match Self::try_from(value)? {
                Self::Map(map) => Ok(Some(map)),
                other => Err(Error::InvalidWireValue(format!(
                    "expected object, found {}",
                    other.kind_name()
                ))),
            },
            other => Err(Error::InvalidWireValue(format!(
                "expected object, found {other}"
            ))),
        }
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for WireValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for WireValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<WireValue>> for WireValue {
    fn from(value: Vec<WireValue>) -> Self {
        Self::List(value)
    }
}

impl From<RemoteObject> for WireValue {
    fn from(value: RemoteObject) -> Self {
        Self::Map(value)
    }
}

impl TryFrom<serde_json::Value> for WireValue {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Err(Error::InvalidWireValue(
                "null is only allowed as an object member".to_string(),
            )),
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => number_to_wire(&n),
            serde_json::Value::String(s) => Ok(Self::Str(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            serde_json::Value::Object(map) => {
                let mut object = RemoteObject::new();
                for (key, member) in map {
                    // Null members mean "unset" on the remote side.
                    if member.is_null() {
                        continue;
                    }
                    object.insert(key, Self::try_from(member)?);
                }
                Ok(Self::Map(object))
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn number_to_wire(n: &serde_json::Number) -> Result<WireValue> {
    if let Some(v) = n.as_i64() {
        return Ok(WireValue::Int(v));
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Ok(WireValue::Int(f as i64))
        }
        _ => Err(Error::InvalidWireValue(format!(
            "non-integral number {n}"
        ))),
    }
}

impl From<WireValue> for serde_json::Value {
    fn from(value: WireValue) -> Self {
        match value {
            WireValue::Bool(b) => Self::Bool(b),
            WireValue::Int(v) => Self::from(v),
            WireValue::Str(s) => Self::String(s),
            WireValue::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            WireValue::Map(map) => Self::Object(
                map.into_iter()
                    .map(|(key, member)| (key, Self::from(member)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for WireValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(de::Error::custom)
    }
}
