//! Conversion strategies between domain values and record values.
//!
//! [`AttributeType`] is the contract the resolver relies on. The strategies in
//! this module cover the common scalar and collection shapes; applications
//! supply their own implementations for anything else.

mod collection;
mod scalar;

use std::sync::Arc;

use crate::MapperResult;
use crate::value::{AttributeValue, AttributeValueType};

pub use collection::{ListAttributeType, StringSetAttributeType};
pub use scalar::{BinaryAttributeType, BoolAttributeType, NumberAttributeType, StringAttributeType};


/// Bidirectional mapping between `V` and [`AttributeValue`].
pub trait AttributeType<V>: Send + Sync {
    /// Convert a domain value into its record form.
    ///
    /// # Errors
    ///
    /// Returns a conversion error when `value` has no record representation.
    fn to_attribute_value(&self, value: &V) -> MapperResult<AttributeValue>;

    /// Convert a record value back into a domain value.
    ///
    /// `Ok(None)` means the record holds no usable value; callers skip the
    /// write rather than treating it as a failure. The null marker never
    /// reaches this method when called through a resolved attribute.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapperError::TypeMismatch`] or
    /// [`crate::MapperError::Conversion`] when `value` cannot be interpreted.
    fn from_attribute_value(&self, value: &AttributeValue) -> MapperResult<Option<V>>;

    /// Record value kind this strategy produces.
    fn attribute_value_type(&self) -> AttributeValueType;
}

impl<V, A> AttributeType<V> for Arc<A>
where
    A: AttributeType<V> + ?Sized,
{
    fn to_attribute_value(&self, value: &V) -> MapperResult<AttributeValue> {
        (**self).to_attribute_value(value)
    }

    fn from_attribute_value(&self, value: &AttributeValue) -> MapperResult<Option<V>> {
        (**self).from_attribute_value(value)
    }

    fn attribute_value_type(&self) -> AttributeValueType {
        (**self).attribute_value_type()
    }
}
