//! Constructors for frequently raised `MapperError` variants.

use std::fmt::Display;
use std::sync::Arc;

use super::MapperError;
use crate::value::{AttributeValue, AttributeValueType};

impl MapperError {
    /// Construct a type mismatch between the variant a strategy expects and the
    /// value it received.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_mapper::{AttributeValue, AttributeValueType, MapperError};
    /// let e = MapperError::type_mismatch(AttributeValueType::N, &AttributeValue::Bool(true));
    /// assert!(matches!(*e, MapperError::TypeMismatch { .. }));
    /// ```
    #[must_use]
    pub fn type_mismatch(expected: AttributeValueType, found: &AttributeValue) -> Arc<Self> {
        Arc::new(Self::TypeMismatch {
            expected,
            found: found.value_type(),
        })
    }

    /// Construct a conversion failure for `value`, recording the parser's
    /// explanation.
    #[must_use]
    pub fn conversion(
        value_type: AttributeValueType,
        value: impl Into<String>,
        message: impl Display,
    ) -> Arc<Self> {
        Arc::new(Self::Conversion {
            value_type,
            value: value.into(),
            message: message.to_string(),
        })
    }

    /// Construct an invalid attribute definition error.
    #[must_use]
    pub fn invalid_attribute(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::InvalidAttribute {
            message: message.into(),
        })
    }

    /// Construct a missing component error for the named attribute.
    #[must_use]
    pub fn missing_component(attribute: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::MissingComponent {
            attribute: attribute.into(),
        })
    }

    /// Construct a malformed value error.
    ///
    /// Returned unwrapped because it is only raised as the `TryFrom` error of
    /// the wire decoder, where serde needs an owned error type.
    #[must_use]
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedValue {
            message: message.into(),
        }
    }
}
