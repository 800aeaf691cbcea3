//! Attribute descriptors and their composition.
//!
//! [`StaticAttribute`] is the raw description of a field: a name, a getter, a
//! setter and the tags that contribute schema metadata. [`ResolvedAttribute`]
//! binds it to a conversion strategy, and [`ResolvedAttribute::transform`]
//! re-targets a resolved attribute from a component type onto any type that
//! contains the component, as described by a [`ComponentAccess`].

mod component;
mod resolved;
mod static_attribute;
mod transform;

use std::sync::Arc;

use crate::MapperResult;
use crate::value::AttributeValue;

pub use component::ComponentAccess;
pub use resolved::ResolvedAttribute;
pub use static_attribute::{StaticAttribute, StaticAttributeBuilder};

/// Reads one attribute of `C` into record form.
pub type AttributeReader<C> = Arc<dyn Fn(&C) -> MapperResult<AttributeValue> + Send + Sync>;

/// Writes a record value into one attribute of `C`.
pub type AttributeWriter<C> =
    Arc<dyn Fn(&mut C, &AttributeValue) -> MapperResult<()> + Send + Sync>;
