//! Attribute resolution and composition for generic record mapping.
//!
//! A [`StaticAttribute`] describes one named field of a domain type through a
//! getter and a setter. Resolving it against an [`AttributeType`] produces a
//! [`ResolvedAttribute`]: a self-contained, immutable descriptor that reads the
//! field into an [`AttributeValue`], writes an [`AttributeValue`] back into the
//! field, and carries the [`TableMetadata`] contributed by the field's tags.
//!
//! Resolved attributes compose. [`ResolvedAttribute::transform`] lifts an
//! attribute declared on a component type onto any type that contains that
//! component, reading absent components as [`AttributeValue::Null`] and
//! creating them lazily on write when asked to.
//!
//! ```rust
//! use record_mapper::{
//!     AttributeValue, ComponentAccess, MapperResult, StaticAttribute,
//!     attribute_types::StringAttributeType,
//! };
//!
//! #[derive(Default)]
//! struct Address {
//!     city: Option<String>,
//! }
//!
//! #[derive(Default)]
//! struct Person {
//!     address: Option<Address>,
//! }
//!
//! # fn main() -> MapperResult<()> {
//! let city = StaticAttribute::builder("city")
//!     .getter(|a: &Address| a.city.clone())
//!     .setter(|a: &mut Address, v| a.city = Some(v))
//!     .build()?
//!     .resolve(StringAttributeType)?;
//!
//! let person_city = city.transform(ComponentAccess::optional(
//!     |p: &Person| &p.address,
//!     |p: &mut Person| &mut p.address,
//! ));
//!
//! let mut person = Person::default();
//! assert_eq!(person_city.read(&person)?, AttributeValue::Null);
//!
//! person_city.write(&mut person, &AttributeValue::S("Oslo".into()))?;
//! assert_eq!(person_city.read(&person)?, AttributeValue::S("Oslo".into()));
//! # Ok(())
//! # }
//! ```

mod attribute;
pub mod attribute_types;
mod error;
mod metadata;
mod result_ext;
pub mod tags;
mod value;

use std::sync::Arc;

pub use attribute::{
    AttributeReader, AttributeWriter, ComponentAccess, ResolvedAttribute, StaticAttribute,
    StaticAttributeBuilder,
};
pub use attribute_types::AttributeType;
pub use error::{KeyKind, MapperError};
pub use metadata::{
    IndexMetadata, KeyAttribute, PRIMARY_INDEX_NAME, TableMetadata, TableMetadataBuilder,
};
pub use result_ext::MapperResultExt;
pub use tags::Tag;
pub use value::{AttributeValue, AttributeValueType};

/// Result type used throughout the crate. Errors are shared so descriptors
/// invoked from several threads can hand out the same failure cheaply.
pub type MapperResult<T> = Result<T, Arc<MapperError>>;
