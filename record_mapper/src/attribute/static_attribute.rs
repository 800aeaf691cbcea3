//! Raw, unresolved field descriptions.

use std::fmt;
use std::sync::Arc;

use super::ResolvedAttribute;
use crate::attribute_types::AttributeType;
use crate::tags::Tag;
use crate::{MapperError, MapperResult};

pub(super) type Getter<C, V> = Arc<dyn Fn(&C) -> Option<V> + Send + Sync>;
pub(super) type Setter<C, V> = Arc<dyn Fn(&mut C, V) + Send + Sync>;

/// A named field of `C` holding a `V`, described by plain accessors.
///
/// The getter returns `None` when the field is absent. Build one with
/// [`StaticAttribute::builder`].
pub struct StaticAttribute<C, V> {
    pub(super) name: String,
    pub(super) getter: Getter<C, V>,
    pub(super) setter: Setter<C, V>,
    pub(super) tags: Vec<Arc<dyn Tag>>,
}

impl<C, V> StaticAttribute<C, V> {
    /// Start describing the field called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> StaticAttributeBuilder<C, V> {
        StaticAttributeBuilder {
            name: name.into(),
            getter: None,
            setter: None,
            tags: Vec::new(),
        }
    }

    /// Name of the field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tags declared on the field, in declaration order.
    #[must_use]
    pub fn tags(&self) -> &[Arc<dyn Tag>] {
        &self.tags
    }

    /// The raw getter; `None` means the field is absent.
    #[must_use]
    pub fn getter(&self) -> &(dyn Fn(&C) -> Option<V> + Send + Sync) {
        &*self.getter
    }

    /// The raw setter.
    #[must_use]
    pub fn setter(&self) -> &(dyn Fn(&mut C, V) + Send + Sync) {
        &*self.setter
    }
}

impl<C: 'static, V: 'static> StaticAttribute<C, V> {
    /// Resolve this field against `attribute_type`.
    ///
    /// # Errors
    ///
    /// See [`ResolvedAttribute::create`].
    pub fn resolve<A>(self, attribute_type: A) -> MapperResult<ResolvedAttribute<C, V>>
    where
        A: AttributeType<V> + 'static,
    {
        ResolvedAttribute::create(self, attribute_type)
    }
}

impl<C, V> fmt::Debug for StaticAttribute<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticAttribute")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Builder for [`StaticAttribute`].
pub struct StaticAttributeBuilder<C, V> {
    name: String,
    getter: Option<Getter<C, V>>,
    setter: Option<Setter<C, V>>,
    tags: Vec<Arc<dyn Tag>>,
}

impl<C: 'static, V: 'static> StaticAttributeBuilder<C, V> {
    /// Function reading the field; `None` means the field is absent.
    #[must_use]
    pub fn getter<F>(mut self, getter: F) -> Self
    where
        F: Fn(&C) -> Option<V> + Send + Sync + 'static,
    {
        self.getter = Some(Arc::new(getter));
        self
    }

    /// Function storing a value into the field.
    #[must_use]
    pub fn setter<F>(mut self, setter: F) -> Self
    where
        F: Fn(&mut C, V) + Send + Sync + 'static,
    {
        self.setter = Some(Arc::new(setter));
        self
    }

    /// Append one tag.
    #[must_use]
    pub fn tag<T>(mut self, tag: T) -> Self
    where
        T: Tag + 'static,
    {
        self.tags.push(Arc::new(tag));
        self
    }

    /// Append several shared tags.
    #[must_use]
    pub fn tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Tag>>,
    {
        self.tags.extend(tags);
        self
    }

    /// Finish the description.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::InvalidAttribute`] when the name is blank or the
    /// getter or setter was never supplied.
    pub fn build(self) -> MapperResult<StaticAttribute<C, V>> {
        if self.name.trim().is_empty() {
            return Err(MapperError::invalid_attribute(
                "attribute name must not be empty",
            ));
        }
        let getter = self.getter.ok_or_else(|| {
            MapperError::invalid_attribute(format!("attribute '{}' has no getter", self.name))
        })?;
        let setter = self.setter.ok_or_else(|| {
            MapperError::invalid_attribute(format!("attribute '{}' has no setter", self.name))
        })?;
        Ok(StaticAttribute {
            name: self.name,
            getter,
            setter,
            tags: self.tags,
        })
    }
}

impl<C, V> fmt::Debug for StaticAttributeBuilder<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticAttributeBuilder")
            .field("name", &self.name)
            .field("has_getter", &self.getter.is_some())
            .field("has_setter", &self.setter.is_some())
            .field("tags", &self.tags)
            .finish()
    }
}
