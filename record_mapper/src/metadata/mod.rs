//! Schema metadata contributed by attribute tags.
//!
//! Each resolved attribute owns one immutable [`TableMetadata`] fragment built
//! by folding its tags over a [`TableMetadataBuilder`]. Schema assembly outside
//! this crate merges the fragments of every attribute into a single document
//! level value with [`TableMetadataBuilder::merge_with`].

mod builder;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::{AttributeValue, AttributeValueType};

pub use builder::TableMetadataBuilder;

#[cfg(test)]
mod tests;

/// Name under which the table's primary index is recorded.
pub const PRIMARY_INDEX_NAME: &str = "$PRIMARY_INDEX";

/// An attribute participating in an index key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct KeyAttribute {
    name: String,
    value_type: AttributeValueType,
}

impl KeyAttribute {
    pub(crate) fn new(name: impl Into<String>, value_type: AttributeValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }

    /// Name of the key attribute.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record value type of the key attribute.
    #[must_use]
    pub const fn value_type(&self) -> AttributeValueType {
        self.value_type
    }
}

/// Key layout of a single index.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct IndexMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    partition_key: Option<KeyAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_key: Option<KeyAttribute>,
}

impl IndexMetadata {
    /// Partition key of the index, if one has been declared.
    #[must_use]
    pub const fn partition_key(&self) -> Option<&KeyAttribute> {
        self.partition_key.as_ref()
    }

    /// Sort key of the index, if one has been declared.
    #[must_use]
    pub const fn sort_key(&self) -> Option<&KeyAttribute> {
        self.sort_key.as_ref()
    }
}

/// Immutable schema metadata for one attribute or a whole document.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TableMetadata {
    indices: BTreeMap<String, IndexMetadata>,
    key_attributes: BTreeMap<String, AttributeValueType>,
    custom_metadata: BTreeMap<String, AttributeValue>,
}

impl TableMetadata {
    /// Start building a new metadata value.
    #[must_use]
    pub fn builder() -> TableMetadataBuilder {
        TableMetadataBuilder::new()
    }

    /// Returns `true` when no tag contributed anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() && self.key_attributes.is_empty() && self.custom_metadata.is_empty()
    }

    /// Name of the primary partition key attribute.
    #[must_use]
    pub fn primary_partition_key(&self) -> Option<&str> {
        self.index_partition_key(PRIMARY_INDEX_NAME)
    }

    /// Name of the primary sort key attribute.
    #[must_use]
    pub fn primary_sort_key(&self) -> Option<&str> {
        self.index_sort_key(PRIMARY_INDEX_NAME)
    }

    /// Name of the partition key attribute of `index`.
    #[must_use]
    pub fn index_partition_key(&self, index: &str) -> Option<&str> {
        self.indices
            .get(index)
            .and_then(IndexMetadata::partition_key)
            .map(KeyAttribute::name)
    }

    /// Name of the sort key attribute of `index`.
    #[must_use]
    pub fn index_sort_key(&self, index: &str) -> Option<&str> {
        self.indices
            .get(index)
            .and_then(IndexMetadata::sort_key)
            .map(KeyAttribute::name)
    }

    /// Names of every key attribute of `index`, partition key first.
    #[must_use]
    pub fn index_keys(&self, index: &str) -> Vec<&str> {
        self.indices.get(index).map_or_else(Vec::new, |meta| {
            meta.partition_key()
                .into_iter()
                .chain(meta.sort_key())
                .map(KeyAttribute::name)
                .collect()
        })
    }

    /// Every declared index, keyed by index name.
    #[must_use]
    pub const fn indices(&self) -> &BTreeMap<String, IndexMetadata> {
        &self.indices
    }

    /// Every attribute used as a key by any index, with its record type.
    #[must_use]
    pub const fn key_attributes(&self) -> &BTreeMap<String, AttributeValueType> {
        &self.key_attributes
    }

    /// Whether `attribute` is a key of any index.
    #[must_use]
    pub fn is_key_attribute(&self, attribute: &str) -> bool {
        self.key_attributes.contains_key(attribute)
    }

    /// Custom metadata recorded under `key`.
    #[must_use]
    pub fn custom_metadata(&self, key: &str) -> Option<&AttributeValue> {
        self.custom_metadata.get(key)
    }
}
