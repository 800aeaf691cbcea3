//! JSON encoding of record values in their wire shape.

use serde_json::Value;

use super::AttributeValue;
use crate::{MapperResult, MapperResultExt};

impl AttributeValue {
    /// Encodes this value as wire-shaped JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapperError::Json`] if serialisation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_mapper::AttributeValue;
    /// use serde_json::json;
    /// let encoded = AttributeValue::Null.to_json()?;
    /// assert_eq!(encoded, json!({"NULL": true}));
    /// # Ok::<_, std::sync::Arc<record_mapper::MapperError>>(())
    /// ```
    pub fn to_json(&self) -> MapperResult<Value> {
        serde_json::to_value(self).into_mapper()
    }

    /// Decodes a value from wire-shaped JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapperError::Json`] when `value` is not a single
    /// tagged record value, or carries a `NULL` marker other than `true`.
    pub fn from_json(value: Value) -> MapperResult<Self> {
        serde_json::from_value(value).into_mapper()
    }
}
