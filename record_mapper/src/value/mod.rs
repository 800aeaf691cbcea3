//! Generic record values exchanged between attributes and the storage layer.
//!
//! [`AttributeValue`] is the format-agnostic representation of a single field.
//! Absence is modelled explicitly through [`AttributeValue::Null`], so checking
//! for it is a plain pattern match that never consults a conversion strategy.
//!
//! Values serialise in the externally tagged wire shape used by document
//! stores, for example `{"S": "Oslo"}`, `{"N": "30"}` or `{"NULL": true}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MapperError;

#[cfg(feature = "serde_json")]
mod json;


/// Kind of a record value, as declared by conversion strategies and recorded
/// in key metadata.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AttributeValueType {
    /// String.
    S,
    /// Number, carried in decimal text form.
    N,
    /// Binary.
    B,
    /// Boolean.
    #[serde(rename = "BOOL")]
    Bool,
    /// Explicit null marker.
    #[serde(rename = "NULL")]
    Null,
    /// Heterogeneous list.
    L,
    /// String-keyed map.
    M,
    /// String set.
    #[serde(rename = "SS")]
    Ss,
    /// Number set.
    #[serde(rename = "NS")]
    Ns,
    /// Binary set.
    #[serde(rename = "BS")]
    Bs,
}

impl AttributeValueType {
    /// Returns the tag used for this kind on the wire.
    #[must_use]
    pub const fn wire_tag(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::N => "N",
            Self::B => "B",
            Self::Bool => "BOOL",
            Self::Null => "NULL",
            Self::L => "L",
            Self::M => "M",
            Self::Ss => "SS",
            Self::Ns => "NS",
            Self::Bs => "BS",
        }
    }

    /// Whether values of this kind may serve as index keys.
    #[must_use]
    pub const fn is_scalar_key(self) -> bool {
        matches!(self, Self::S | Self::N | Self::B)
    }
}

impl fmt::Display for AttributeValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_tag())
    }
}

/// A single field's value in generic record form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireValue", into = "WireValue")]
pub enum AttributeValue {
    /// String payload.
    S(String),
    /// Number payload in decimal text form.
    N(String),
    /// Binary payload.
    B(Vec<u8>),
    /// Boolean payload.
    Bool(bool),
    /// Explicit null marker, distinct from the absence of a key.
    Null,
    /// List of nested values.
    L(Vec<Self>),
    /// Map of nested values.
    M(BTreeMap<String, Self>),
    /// Set of strings.
    Ss(Vec<String>),
    /// Set of numbers in decimal text form.
    Ns(Vec<String>),
    /// Set of binary blobs.
    Bs(Vec<Vec<u8>>),
}

impl AttributeValue {
    /// Builds a number value from anything with a decimal rendition.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_mapper::AttributeValue;
    /// assert_eq!(AttributeValue::from_number(30), AttributeValue::N("30".into()));
    /// ```
    #[must_use]
    pub fn from_number(number: impl fmt::Display) -> Self {
        Self::N(number.to_string())
    }

    /// Returns `true` for the explicit null marker.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn value_type(&self) -> AttributeValueType {
        match self {
            Self::S(_) => AttributeValueType::S,
            Self::N(_) => AttributeValueType::N,
            Self::B(_) => AttributeValueType::B,
            Self::Bool(_) => AttributeValueType::Bool,
            Self::Null => AttributeValueType::Null,
            Self::L(_) => AttributeValueType::L,
            Self::M(_) => AttributeValueType::M,
            Self::Ss(_) => AttributeValueType::Ss,
            Self::Ns(_) => AttributeValueType::Ns,
            Self::Bs(_) => AttributeValueType::Bs,
        }
    }

    /// Borrows the string payload.
    #[must_use]
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the number payload's text.
    #[must_use]
    pub fn as_n(&self) -> Option<&str> {
        match self {
            Self::N(n) => Some(n),
            _ => None,
        }
    }

    /// Borrows the binary payload.
    #[must_use]
    pub fn as_b(&self) -> Option<&[u8]> {
        match self {
            Self::B(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the boolean payload.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrows the list payload.
    #[must_use]
    pub fn as_l(&self) -> Option<&[Self]> {
        match self {
            Self::L(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows the map payload.
    #[must_use]
    pub const fn as_m(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::M(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S(s) | Self::N(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::B(bytes) => write!(f, "<{} bytes>", bytes.len()),
            Self::L(items) => write!(f, "<list of {}>", items.len()),
            Self::M(map) => write!(f, "<map of {}>", map.len()),
            Self::Ss(items) | Self::Ns(items) => write!(f, "{items:?}"),
            Self::Bs(items) => write!(f, "<set of {} blobs>", items.len()),
        }
    }
}

/// Externally tagged wire shape; only differs from [`AttributeValue`] in that
/// the null marker carries the literal `true`.
#[derive(Serialize, Deserialize)]
enum WireValue {
    S(String),
    N(String),
    B(Vec<u8>),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "NULL")]
    Null(bool),
    L(Vec<AttributeValue>),
    M(BTreeMap<String, AttributeValue>),
    #[serde(rename = "SS")]
    Ss(Vec<String>),
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    #[serde(rename = "BS")]
    Bs(Vec<Vec<u8>>),
}

impl From<AttributeValue> for WireValue {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::S(s) => Self::S(s),
            AttributeValue::N(n) => Self::N(n),
            AttributeValue::B(b) => Self::B(b),
            AttributeValue::Bool(b) => Self::Bool(b),
            AttributeValue::Null => Self::Null(true),
            AttributeValue::L(items) => Self::L(items),
            AttributeValue::M(map) => Self::M(map),
            AttributeValue::Ss(items) => Self::Ss(items),
            AttributeValue::Ns(items) => Self::Ns(items),
            AttributeValue::Bs(items) => Self::Bs(items),
        }
    }
}

impl TryFrom<WireValue> for AttributeValue {
    type Error = MapperError;

    fn try_from(wire: WireValue) -> Result<Self, Self::Error> {
        Ok(match wire {
            WireValue::S(s) => Self::S(s),
            WireValue::N(n) => Self::N(n),
            WireValue::B(b) => Self::B(b),
            WireValue::Bool(b) => Self::Bool(b),
            WireValue::Null(true) => Self::Null,
            WireValue::Null(false) => {
                return Err(MapperError::malformed("NULL marker must be `true`"));
            }
            WireValue::L(items) => Self::L(items),
            WireValue::M(map) => Self::M(map),
            WireValue::Ss(items) => Self::Ss(items),
            WireValue::Ns(items) => Self::Ns(items),
            WireValue::Bs(items) => Self::Bs(items),
        })
    }
}
