//! Strategies for single-valued fields.

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use super::AttributeType;
use crate::value::{AttributeValue, AttributeValueType};
use crate::{MapperError, MapperResult};

/// Maps `String` to `S`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringAttributeType;

impl AttributeType<String> for StringAttributeType {
    fn to_attribute_value(&self, value: &String) -> MapperResult<AttributeValue> {
        Ok(AttributeValue::S(value.clone()))
    }

    fn from_attribute_value(&self, value: &AttributeValue) -> MapperResult<Option<String>> {
        value
            .as_s()
            .map(|s| Some(s.to_owned()))
            .ok_or_else(|| MapperError::type_mismatch(AttributeValueType::S, value))
    }

    fn attribute_value_type(&self) -> AttributeValueType {
        AttributeValueType::S
    }
}

/// Maps `bool` to `BOOL`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolAttributeType;

impl AttributeType<bool> for BoolAttributeType {
    fn to_attribute_value(&self, value: &bool) -> MapperResult<AttributeValue> {
        Ok(AttributeValue::Bool(*value))
    }

    fn from_attribute_value(&self, value: &AttributeValue) -> MapperResult<Option<bool>> {
        value
            .as_bool()
            .map(Some)
            .ok_or_else(|| MapperError::type_mismatch(AttributeValueType::Bool, value))
    }

    fn attribute_value_type(&self) -> AttributeValueType {
        AttributeValueType::Bool
    }
}

/// Maps `Vec<u8>` to `B`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryAttributeType;

impl AttributeType<Vec<u8>> for BinaryAttributeType {
    fn to_attribute_value(&self, value: &Vec<u8>) -> MapperResult<AttributeValue> {
        Ok(AttributeValue::B(value.clone()))
    }

    fn from_attribute_value(&self, value: &AttributeValue) -> MapperResult<Option<Vec<u8>>> {
        value
            .as_b()
            .map(|bytes| Some(bytes.to_vec()))
            .ok_or_else(|| MapperError::type_mismatch(AttributeValueType::B, value))
    }

    fn attribute_value_type(&self) -> AttributeValueType {
        AttributeValueType::B
    }
}

/// Maps any number with a decimal text form to `N`.
///
/// # Examples
///
/// ```
/// use record_mapper::{AttributeType, AttributeValue, attribute_types::NumberAttributeType};
///
/// let age = NumberAttributeType::<u8>::new();
/// assert_eq!(age.to_attribute_value(&30)?, AttributeValue::N("30".into()));
/// assert!(age.from_attribute_value(&AttributeValue::N("300".into())).is_err());
/// # Ok::<_, std::sync::Arc<record_mapper::MapperError>>(())
/// ```
///
/// Record numbers are plain decimal literals, so `NaN` and infinities are
/// rejected in both directions.
pub struct NumberAttributeType<T> {
    number: PhantomData<fn() -> T>,
}

impl<T> NumberAttributeType<T> {
    /// Create the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            number: PhantomData,
        }
    }
}

impl<T> Default for NumberAttributeType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NumberAttributeType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NumberAttributeType<T> {}

impl<T> std::fmt::Debug for NumberAttributeType<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NumberAttributeType<{}>", std::any::type_name::<T>())
    }
}

impl<T> AttributeType<T> for NumberAttributeType<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    fn to_attribute_value(&self, value: &T) -> MapperResult<AttributeValue> {
        let rendered = AttributeValue::from_number(value);
        match rendered.as_n() {
            Some(text) if !is_finite_literal(text) => Err(MapperError::conversion(
                AttributeValueType::N,
                text,
                NOT_FINITE,
            )),
            _ => Ok(rendered),
        }
    }

    fn from_attribute_value(&self, value: &AttributeValue) -> MapperResult<Option<T>> {
        let text = value
            .as_n()
            .ok_or_else(|| MapperError::type_mismatch(AttributeValueType::N, value))?;
        let trimmed = text.trim();
        if !is_finite_literal(trimmed) {
            return Err(MapperError::conversion(
                AttributeValueType::N,
                text,
                NOT_FINITE,
            ));
        }
        trimmed
            .parse::<T>()
            .map(Some)
            .map_err(|e| MapperError::conversion(AttributeValueType::N, text, e))
    }

    fn attribute_value_type(&self) -> AttributeValueType {
        AttributeValueType::N
    }
}

const NOT_FINITE: &str = "not a finite decimal number";

/// Sign, digits, optional fraction and exponent; no `NaN` or `inf`.
fn is_finite_literal(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}
