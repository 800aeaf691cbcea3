//! Primary error enum for attribute mapping flows.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::AttributeValueType;

/// Which half of an index key a metadata operation targeted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// The partition (hash) key of an index.
    Partition,
    /// The sort (range) key of an index.
    Sort,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partition => f.write_str("partition"),
            Self::Sort => f.write_str("sort"),
        }
    }
}

/// Errors that can occur while mapping attributes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapperError {
    /// A raw attribute definition was incomplete or malformed.
    #[error("invalid attribute definition: {message}")]
    InvalidAttribute {
        /// Human-readable explanation of the problem.
        message: String,
    },

    /// A record value of the wrong variant was handed to a conversion.
    #[error("expected a {expected} attribute value but found {found}")]
    TypeMismatch {
        /// Variant the conversion strategy understands.
        expected: AttributeValueType,
        /// Variant that was actually supplied.
        found: AttributeValueType,
    },

    /// A record value had the right variant but could not be interpreted.
    #[error("could not convert {value_type} attribute value '{value}': {message}")]
    Conversion {
        /// Variant of the offending value.
        value_type: AttributeValueType,
        /// Textual rendition of the offending value.
        value: String,
        /// Explanation reported by the underlying parser.
        message: String,
    },

    /// A lifted attribute was written while its containing component was absent
    /// and no creation step was supplied.
    #[error("attribute '{attribute}' cannot be written because its containing component is absent")]
    MissingComponent {
        /// Name of the attribute being written.
        attribute: String,
    },

    /// An attribute was tagged as a key but its record type cannot be a key.
    #[error("attribute '{attribute}' of type {value_type} is not a suitable type to be used as a key")]
    InvalidKeyType {
        /// Name of the attribute.
        attribute: String,
        /// Record value type declared by its conversion strategy.
        value_type: AttributeValueType,
    },

    /// Two different attributes claimed the same key slot of an index.
    #[error("index '{index}' already has {kind} key '{existing}'; cannot also use '{attempted}'")]
    KeyConflict {
        /// Index whose key was being assigned.
        index: String,
        /// Which key slot was contested.
        kind: KeyKind,
        /// Attribute already holding the slot.
        existing: String,
        /// Attribute that tried to take the slot.
        attempted: String,
    },

    /// One attribute was declared as a key with two different record types.
    #[error("key attribute '{attribute}' declared as both {existing} and {attempted}")]
    KeyTypeConflict {
        /// Name of the key attribute.
        attribute: String,
        /// Type recorded first.
        existing: AttributeValueType,
        /// Type that conflicted with it.
        attempted: AttributeValueType,
    },

    /// A custom metadata entry was set twice with different values.
    #[error("custom metadata '{key}' has already been set to a different value")]
    CustomMetadataConflict {
        /// Key of the custom metadata entry.
        key: String,
    },

    /// A record value was not in the expected wire shape.
    #[error("malformed record value: {message}")]
    MalformedValue {
        /// Explanation of the malformation.
        message: String,
    },

    /// Error encoding or decoding record JSON.
    #[cfg(feature = "serde_json")]
    #[error("failed to process record JSON: {0}")]
    Json(#[from] serde_json::Error),
}
