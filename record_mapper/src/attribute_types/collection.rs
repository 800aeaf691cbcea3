//! Strategies for multi-valued fields.

use std::marker::PhantomData;

use super::AttributeType;
use crate::value::{AttributeValue, AttributeValueType};
use crate::{MapperError, MapperResult};

/// Maps `Vec<String>` to `SS`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringSetAttributeType;

impl AttributeType<Vec<String>> for StringSetAttributeType {
    fn to_attribute_value(&self, value: &Vec<String>) -> MapperResult<AttributeValue> {
        Ok(AttributeValue::Ss(value.clone()))
    }

    fn from_attribute_value(&self, value: &AttributeValue) -> MapperResult<Option<Vec<String>>> {
        match value {
            AttributeValue::Ss(items) => Ok(Some(items.clone())),
            other => Err(MapperError::type_mismatch(AttributeValueType::Ss, other)),
        }
    }

    fn attribute_value_type(&self) -> AttributeValueType {
        AttributeValueType::Ss
    }
}

/// Maps `Vec<V>` to `L`, converting each element with an inner strategy.
///
/// Elements whose record form is the null marker, or which convert to no
/// usable value, are dropped when reading a list back.
pub struct ListAttributeType<V, A> {
    element: A,
    items: PhantomData<fn() -> V>,
}

impl<V, A> ListAttributeType<V, A>
where
    A: AttributeType<V>,
{
    /// Wrap `element` so it converts whole lists.
    #[must_use]
    pub const fn new(element: A) -> Self {
        Self {
            element,
            items: PhantomData,
        }
    }
}

impl<V, A: std::fmt::Debug> std::fmt::Debug for ListAttributeType<V, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListAttributeType")
            .field("element", &self.element)
            .finish()
    }
}

impl<V, A> AttributeType<Vec<V>> for ListAttributeType<V, A>
where
    A: AttributeType<V>,
{
    fn to_attribute_value(&self, value: &Vec<V>) -> MapperResult<AttributeValue> {
        value
            .iter()
            .map(|item| self.element.to_attribute_value(item))
            .collect::<MapperResult<Vec<_>>>()
            .map(AttributeValue::L)
    }

    fn from_attribute_value(&self, value: &AttributeValue) -> MapperResult<Option<Vec<V>>> {
        let items = value
            .as_l()
            .ok_or_else(|| MapperError::type_mismatch(AttributeValueType::L, value))?;
        let mut converted = Vec::with_capacity(items.len());
        for item in items.iter().filter(|item| !item.is_null()) {
            if let Some(element) = self.element.from_attribute_value(item)? {
                converted.push(element);
            }
        }
        Ok(Some(converted))
    }

    fn attribute_value_type(&self) -> AttributeValueType {
        AttributeValueType::L
    }
}
