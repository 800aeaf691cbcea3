//! Accumulates metadata contributions before freezing them.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::trace;

use super::{IndexMetadata, KeyAttribute, TableMetadata};
use crate::error::KeyKind;
use crate::value::{AttributeValue, AttributeValueType};
use crate::{MapperError, MapperResult};

/// Mutable accumulator for [`TableMetadata`].
///
/// Every mutator accepts re-applying identical information and rejects
/// conflicting information, so the order in which tags and fragments are
/// applied never changes the outcome.
#[derive(Clone, Debug, Default)]
pub struct TableMetadataBuilder {
    indices: BTreeMap<String, IndexMetadata>,
    key_attributes: BTreeMap<String, AttributeValueType>,
    custom_metadata: BTreeMap<String, AttributeValue>,
}

impl TableMetadataBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indices: BTreeMap::new(),
            key_attributes: BTreeMap::new(),
            custom_metadata: BTreeMap::new(),
        }
    }

    /// Declare `attribute` as the partition key of `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::InvalidKeyType`] for non-scalar types,
    /// [`MapperError::KeyConflict`] when the index already has a different
    /// partition key, and [`MapperError::KeyTypeConflict`] when `attribute`
    /// is already a key of another type.
    pub fn add_index_partition_key(
        &mut self,
        index: &str,
        attribute: &str,
        value_type: AttributeValueType,
    ) -> MapperResult<&mut Self> {
        self.add_index_key(index, KeyKind::Partition, attribute, value_type)
    }

    /// Declare `attribute` as the sort key of `index`.
    ///
    /// # Errors
    ///
    /// As for [`Self::add_index_partition_key`].
    pub fn add_index_sort_key(
        &mut self,
        index: &str,
        attribute: &str,
        value_type: AttributeValueType,
    ) -> MapperResult<&mut Self> {
        self.add_index_key(index, KeyKind::Sort, attribute, value_type)
    }

    /// Record that `attribute` is used as a key somewhere.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::InvalidKeyType`] for non-scalar types and
    /// [`MapperError::KeyTypeConflict`] when the attribute was already marked
    /// with another type.
    pub fn mark_attribute_as_key(
        &mut self,
        attribute: &str,
        value_type: AttributeValueType,
    ) -> MapperResult<&mut Self> {
        if self.check_key_type(attribute, value_type)? {
            self.key_attributes.insert(attribute.to_owned(), value_type);
        }
        Ok(self)
    }

    /// Attach an arbitrary metadata value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::CustomMetadataConflict`] when `key` already holds
    /// a different value.
    pub fn add_custom_metadata(
        &mut self,
        key: &str,
        value: AttributeValue,
    ) -> MapperResult<&mut Self> {
        match self.custom_metadata.get(key) {
            Some(existing) if *existing != value => {
                Err(Arc::new(MapperError::CustomMetadataConflict {
                    key: key.to_owned(),
                }))
            }
            Some(_) => Ok(self),
            None => {
                self.custom_metadata.insert(key.to_owned(), value);
                Ok(self)
            }
        }
    }

    /// Fold a finished fragment into this builder.
    ///
    /// # Errors
    ///
    /// Propagates the first conflict between `other` and what has already been
    /// accumulated. On error the builder is left exactly as it was.
    pub fn merge_with(&mut self, other: &TableMetadata) -> MapperResult<&mut Self> {
        let mut merged = self.clone();
        for (index, meta) in &other.indices {
            if let Some(key) = meta.partition_key() {
                merged.add_index_partition_key(index, key.name(), key.value_type())?;
            }
            if let Some(key) = meta.sort_key() {
                merged.add_index_sort_key(index, key.name(), key.value_type())?;
            }
        }
        for (attribute, value_type) in &other.key_attributes {
            merged.mark_attribute_as_key(attribute, *value_type)?;
        }
        for (key, value) in &other.custom_metadata {
            merged.add_custom_metadata(key, value.clone())?;
        }
        *self = merged;
        Ok(self)
    }

    /// Freeze the accumulated metadata.
    #[must_use]
    pub fn build(self) -> TableMetadata {
        TableMetadata {
            indices: self.indices,
            key_attributes: self.key_attributes,
            custom_metadata: self.custom_metadata,
        }
    }

    fn add_index_key(
        &mut self,
        index: &str,
        kind: KeyKind,
        attribute: &str,
        value_type: AttributeValueType,
    ) -> MapperResult<&mut Self> {
        let existing = self
            .indices
            .get(index)
            .and_then(|meta| match kind {
                KeyKind::Partition => meta.partition_key(),
                KeyKind::Sort => meta.sort_key(),
            })
            .map(KeyAttribute::name);
        if let Some(existing_name) = existing
            && existing_name != attribute
        {
            return Err(Arc::new(MapperError::KeyConflict {
                index: index.to_owned(),
                kind,
                existing: existing_name.to_owned(),
                attempted: attribute.to_owned(),
            }));
        }
        let already_declared = existing.is_some();
        if self.check_key_type(attribute, value_type)? {
            self.key_attributes.insert(attribute.to_owned(), value_type);
        }
        if !already_declared {
            trace!(index, %kind, attribute, "declared index key");
            let meta = self.indices.entry(index.to_owned()).or_default();
            let key = Some(KeyAttribute::new(attribute, value_type));
            match kind {
                KeyKind::Partition => meta.partition_key = key,
                KeyKind::Sort => meta.sort_key = key,
            }
        }
        Ok(self)
    }

    /// Validate a key declaration without touching the builder.
    ///
    /// Returns `true` when the attribute is not yet marked as a key.
    fn check_key_type(
        &self,
        attribute: &str,
        value_type: AttributeValueType,
    ) -> MapperResult<bool> {
        if !value_type.is_scalar_key() {
            return Err(Arc::new(MapperError::InvalidKeyType {
                attribute: attribute.to_owned(),
                value_type,
            }));
        }
        match self.key_attributes.get(attribute) {
            Some(existing) if *existing != value_type => {
                Err(Arc::new(MapperError::KeyTypeConflict {
                    attribute: attribute.to_owned(),
                    existing: *existing,
                    attempted: value_type,
                }))
            }
            Some(_) => Ok(false),
            None => Ok(true),
        }
    }
}
