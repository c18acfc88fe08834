//! JSON-compatible attribute values for operations.
//!
//! [`AttrValue`] is a closed recursive union covering exactly the shapes a
//! JSON document can hold. The tag is fixed at construction, never inferred
//! at read time. The one representable state JSON cannot express is a
//! non-finite double, which [`AttrValue::is_json_compatible`] rejects
//! recursively.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An attribute value attached to an [`Operation`](crate::operation::Operation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// A boolean.
    Bool(bool),
    /// A signed 64-bit integer.
    Int(i64),
    /// An unsigned 64-bit integer.
    UInt(u64),
    /// A double-precision float.
    Double(f64),
    /// A string.
    String(String),
    /// An ordered list of attribute values.
    List(Vec<AttrValue>),
    /// A string-keyed mapping of attribute values.
    Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    /// Returns `true` if this value (and every nested value) can be
    /// represented in JSON.
    ///
    /// The union is closed, so the only failing case is a non-finite
    /// double (NaN or infinity) at any nesting depth.
    pub fn is_json_compatible(&self) -> bool {
        match self {
            AttrValue::Bool(_)
            | AttrValue::Int(_)
            | AttrValue::UInt(_)
            | AttrValue::String(_) => true,
            AttrValue::Double(d) => d.is_finite(),
            AttrValue::List(items) => items.iter().all(AttrValue::is_json_compatible),
            AttrValue::Map(entries) => entries.values().all(AttrValue::is_json_compatible),
        }
    }

    /// Returns the contained string, if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained boolean, if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the contained signed integer, if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the contained unsigned integer, if this is a `UInt` value.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            AttrValue::UInt(u) => Some(*u),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<u64> for AttrValue {
    fn from(v: u64) -> Self {
        AttrValue::UInt(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Double(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::String(v)
    }
}
