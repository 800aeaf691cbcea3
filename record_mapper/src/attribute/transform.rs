//! Lifting resolved attributes onto containing types.

use std::any::type_name;
use std::sync::Arc;

use tracing::{debug, trace};

use super::{AttributeReader, AttributeWriter, ComponentAccess, ResolvedAttribute};
use crate::MapperError;
use crate::value::AttributeValue;

impl<T: 'static, V: 'static> ResolvedAttribute<T, V> {
    /// Re-target this attribute from component type `T` onto containing type
    /// `S`.
    ///
    /// The lifted reader yields [`AttributeValue::Null`] when the component is
    /// absent. The lifted writer runs the creation step, if any, before
    /// projecting. Name, metadata and conversion strategy are shared with
    /// `self` unchanged. Apply repeatedly to expose deeply nested fields.
    #[must_use]
    pub fn transform<S: 'static>(&self, component: ComponentAccess<S, T>) -> ResolvedAttribute<S, V> {
        let has_creator = component.has_creator();
        let ComponentAccess {
            get,
            get_mut,
            create,
        } = component;

        let inner_reader = Arc::clone(&self.reader);
        let reader: AttributeReader<S> = Arc::new(move |item: &S| {
            get(item).map_or_else(|| Ok(AttributeValue::Null), |inner| inner_reader(inner))
        });

        let inner_writer = Arc::clone(&self.writer);
        let write_name = Arc::clone(&self.name);
        let writer: AttributeWriter<S> = Arc::new(move |item: &mut S, value: &AttributeValue| {
            if let Some(create_component) = &create {
                trace!(attribute = %write_name, "ensuring component exists before write");
                create_component(item);
            }
            let inner = get_mut(item).ok_or_else(|| MapperError::missing_component(&*write_name))?;
            inner_writer(inner, value)
        });

        debug!(
            attribute = %self.name,
            component = type_name::<T>(),
            container = type_name::<S>(),
            has_creator,
            "lifted attribute onto containing type"
        );
        ResolvedAttribute {
            name: Arc::clone(&self.name),
            reader,
            writer,
            table_metadata: Arc::clone(&self.table_metadata),
            attribute_type: Arc::clone(&self.attribute_type),
        }
    }
}
