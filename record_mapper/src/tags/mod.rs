//! Declarative contributors of schema metadata.
//!
//! A [`Tag`] is applied once per attribute, when the attribute is resolved. It
//! receives the attribute name and the record value type declared by the
//! attribute's conversion strategy and records whatever it needs on the
//! [`TableMetadataBuilder`].

use std::fmt;
use std::sync::Arc;

use crate::metadata::{PRIMARY_INDEX_NAME, TableMetadataBuilder};
use crate::value::{AttributeValue, AttributeValueType};
use crate::{KeyKind, MapperResult};

#[cfg(test)]
mod tests;

/// Contributes schema metadata for one attribute.
pub trait Tag: fmt::Debug + Send + Sync {
    /// Record this tag's contribution for `attribute_name`.
    ///
    /// # Errors
    ///
    /// Returns the builder's error when the contribution conflicts with
    /// metadata recorded by an earlier tag.
    fn modify_metadata(
        &self,
        attribute_name: &str,
        value_type: AttributeValueType,
        metadata: &mut TableMetadataBuilder,
    ) -> MapperResult<()>;
}

impl<T: Tag + ?Sized> Tag for Arc<T> {
    fn modify_metadata(
        &self,
        attribute_name: &str,
        value_type: AttributeValueType,
        metadata: &mut TableMetadataBuilder,
    ) -> MapperResult<()> {
        (**self).modify_metadata(attribute_name, value_type, metadata)
    }
}

/// Marks the attribute as the key of one or more indices.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyTag {
    kind: KeyKind,
    indices: Vec<String>,
}

impl Tag for KeyTag {
    fn modify_metadata(
        &self,
        attribute_name: &str,
        value_type: AttributeValueType,
        metadata: &mut TableMetadataBuilder,
    ) -> MapperResult<()> {
        for index in &self.indices {
            match self.kind {
                KeyKind::Partition => {
                    metadata.add_index_partition_key(index, attribute_name, value_type)?;
                }
                KeyKind::Sort => {
                    metadata.add_index_sort_key(index, attribute_name, value_type)?;
                }
            }
        }
        Ok(())
    }
}

/// Attaches a fixed custom metadata entry, independent of the attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustomMetadataTag {
    key: String,
    value: AttributeValue,
}

impl Tag for CustomMetadataTag {
    fn modify_metadata(
        &self,
        _attribute_name: &str,
        _value_type: AttributeValueType,
        metadata: &mut TableMetadataBuilder,
    ) -> MapperResult<()> {
        metadata.add_custom_metadata(&self.key, self.value.clone())?;
        Ok(())
    }
}

/// Adapts a closure into a [`Tag`].
pub struct FnTag<F> {
    label: &'static str,
    apply: F,
}

impl<F> fmt::Debug for FnTag<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTag").field("label", &self.label).finish_non_exhaustive()
    }
}

impl<F> Tag for FnTag<F>
where
    F: Fn(&str, AttributeValueType, &mut TableMetadataBuilder) -> MapperResult<()> + Send + Sync,
{
    fn modify_metadata(
        &self,
        attribute_name: &str,
        value_type: AttributeValueType,
        metadata: &mut TableMetadataBuilder,
    ) -> MapperResult<()> {
        (self.apply)(attribute_name, value_type, metadata)
    }
}

/// Marks the attribute as the partition key of the primary index.
#[must_use]
pub fn primary_partition_key() -> KeyTag {
    KeyTag {
        kind: KeyKind::Partition,
        indices: vec![PRIMARY_INDEX_NAME.to_owned()],
    }
}

/// Marks the attribute as the sort key of the primary index.
#[must_use]
pub fn primary_sort_key() -> KeyTag {
    KeyTag {
        kind: KeyKind::Sort,
        indices: vec![PRIMARY_INDEX_NAME.to_owned()],
    }
}

/// Marks the attribute as the partition key of each named secondary index.
#[must_use]
pub fn secondary_partition_key<I, S>(indices: I) -> KeyTag
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    KeyTag {
        kind: KeyKind::Partition,
        indices: indices.into_iter().map(Into::into).collect(),
    }
}

/// Marks the attribute as the sort key of each named secondary index.
#[must_use]
pub fn secondary_sort_key<I, S>(indices: I) -> KeyTag
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    KeyTag {
        kind: KeyKind::Sort,
        indices: indices.into_iter().map(Into::into).collect(),
    }
}

/// Attaches `value` under `key` in the table's custom metadata.
#[must_use]
pub fn custom_metadata(key: impl Into<String>, value: AttributeValue) -> CustomMetadataTag {
    CustomMetadataTag {
        key: key.into(),
        value,
    }
}

/// Builds an ad-hoc tag from a closure. `label` only appears in debug output.
///
/// # Examples
///
/// ```
/// use record_mapper::{AttributeValue, tags};
///
/// let audited = tags::tag_fn("audited", |name, _kind, metadata| {
///     metadata.add_custom_metadata("audited", AttributeValue::S(name.to_owned()))?;
///     Ok(())
/// });
/// # let _ = audited;
/// ```
pub const fn tag_fn<F>(label: &'static str, apply: F) -> FnTag<F>
where
    F: Fn(&str, AttributeValueType, &mut TableMetadataBuilder) -> MapperResult<()> + Send + Sync,
{
    FnTag { label, apply }
}
