//! Resolution of raw fields into record-aware descriptors.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::{AttributeReader, AttributeWriter, StaticAttribute};
use crate::MapperResult;
use crate::attribute_types::AttributeType;
use crate::metadata::{TableMetadata, TableMetadataBuilder};
use crate::value::AttributeValue;

/// An immutable descriptor that reads and writes one field of `C` in record
/// form.
///
/// Cloning is cheap: every part is shared. Descriptors are `Send + Sync` and
/// can be used from many threads once built.
pub struct ResolvedAttribute<C, V> {
    pub(super) name: Arc<str>,
    pub(super) reader: AttributeReader<C>,
    pub(super) writer: AttributeWriter<C>,
    pub(super) table_metadata: Arc<TableMetadata>,
    pub(super) attribute_type: Arc<dyn AttributeType<V>>,
}

impl<C: 'static, V: 'static> ResolvedAttribute<C, V> {
    /// Bind `attribute` to `attribute_type`.
    ///
    /// The reader yields [`AttributeValue::Null`] whenever the getter reports
    /// an absent value. The writer ignores the null marker and values the
    /// strategy cannot turn into a `V`, so the setter only ever sees real
    /// values. Tags are applied once, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the first metadata conflict raised while applying the tags.
    pub fn create<A>(attribute: StaticAttribute<C, V>, attribute_type: A) -> MapperResult<Self>
    where
        A: AttributeType<V> + 'static,
    {
        let StaticAttribute {
            name: attribute_name,
            getter,
            setter,
            tags,
        } = attribute;
        let value_type = attribute_type.attribute_value_type();
        let strategy: Arc<dyn AttributeType<V>> = Arc::new(attribute_type);

        let mut metadata = TableMetadataBuilder::new();
        for tag in &tags {
            tag.modify_metadata(&attribute_name, value_type, &mut metadata)?;
        }
        let table_metadata = Arc::new(metadata.build());
        let name: Arc<str> = Arc::from(attribute_name);

        let read_strategy = Arc::clone(&strategy);
        let reader: AttributeReader<C> = Arc::new(move |item: &C| {
            getter(item).map_or_else(
                || Ok(AttributeValue::Null),
                |value| read_strategy.to_attribute_value(&value),
            )
        });

        let write_strategy = Arc::clone(&strategy);
        let write_name = Arc::clone(&name);
        let writer: AttributeWriter<C> = Arc::new(move |item: &mut C, value: &AttributeValue| {
            if value.is_null() {
                trace!(attribute = %write_name, "skipping write of null attribute value");
                return Ok(());
            }
            write_strategy.from_attribute_value(value)?.map_or_else(
                || trace!(attribute = %write_name, "conversion yielded no value; skipping write"),
                |converted| setter(item, converted),
            );
            Ok(())
        });

        debug!(
            attribute = %name,
            %value_type,
            tags = tags.len(),
            "resolved attribute"
        );
        Ok(Self {
            name,
            reader,
            writer,
            table_metadata,
            attribute_type: strategy,
        })
    }
}

impl<C, V> ResolvedAttribute<C, V> {
    /// Name of the attribute.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Conversion strategy the attribute was resolved with.
    #[must_use]
    pub const fn attribute_type(&self) -> &Arc<dyn AttributeType<V>> {
        &self.attribute_type
    }

    /// Function reading the attribute out of a `C`.
    #[must_use]
    pub const fn reader(&self) -> &AttributeReader<C> {
        &self.reader
    }

    /// Function writing the attribute into a `C`.
    #[must_use]
    pub const fn writer(&self) -> &AttributeWriter<C> {
        &self.writer
    }

    /// Schema metadata contributed by the attribute's tags.
    #[must_use]
    pub const fn table_metadata(&self) -> &Arc<TableMetadata> {
        &self.table_metadata
    }

    /// Read the attribute out of `item`.
    ///
    /// # Errors
    ///
    /// Propagates conversion failures from the attribute's strategy unchanged.
    pub fn read(&self, item: &C) -> MapperResult<AttributeValue> {
        (self.reader)(item)
    }

    /// Write `value` into `item`.
    ///
    /// # Errors
    ///
    /// Propagates conversion failures from the attribute's strategy unchanged,
    /// and reports [`crate::MapperError::MissingComponent`] for lifted
    /// attributes whose component is absent and cannot be created.
    pub fn write(&self, item: &mut C, value: &AttributeValue) -> MapperResult<()> {
        (self.writer)(item, value)
    }
}

impl<C, V> Clone for ResolvedAttribute<C, V> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            reader: Arc::clone(&self.reader),
            writer: Arc::clone(&self.writer),
            table_metadata: Arc::clone(&self.table_metadata),
            attribute_type: Arc::clone(&self.attribute_type),
        }
    }
}

impl<C, V> fmt::Debug for ResolvedAttribute<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedAttribute")
            .field("name", &self.name)
            .field(
                "value_type",
                &AttributeType::<V>::attribute_value_type(&*self.attribute_type),
            )
            .field("table_metadata", &self.table_metadata)
            .finish_non_exhaustive()
    }
}
