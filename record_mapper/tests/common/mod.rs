//! Shared domain fixtures for integration tests.

use record_mapper::attribute_types::{NumberAttributeType, StringAttributeType};
use record_mapper::tags::{primary_partition_key, secondary_partition_key};
use record_mapper::{ComponentAccess, MapperResult, ResolvedAttribute, StaticAttribute};

/// Innermost component: a coordinate.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Geo {
    /// Latitude in degrees.
    pub lat: Option<f64>,
}

/// Component held by a [`Person`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Address {
    /// City name.
    pub city: Option<String>,
    /// Optional coordinate.
    pub geo: Option<Geo>,
}

/// Top-level record type.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    /// Identifier used as the partition key.
    pub id: Option<String>,
    /// Age in years.
    pub age: Option<u32>,
    /// Postal address.
    pub address: Option<Address>,
}

/// `id` attribute of a person, tagged as the primary partition key.
///
/// # Errors
///
/// Propagates resolution failures.
pub fn person_id() -> MapperResult<ResolvedAttribute<Person, String>> {
    StaticAttribute::builder("id")
        .getter(|p: &Person| p.id.clone())
        .setter(|p: &mut Person, v| p.id = Some(v))
        .tag(primary_partition_key())
        .build()?
        .resolve(StringAttributeType)
}

/// `age` attribute of a person.
///
/// # Errors
///
/// Propagates resolution failures.
pub fn person_age() -> MapperResult<ResolvedAttribute<Person, u32>> {
    StaticAttribute::builder("age")
        .getter(|p: &Person| p.age)
        .setter(|p: &mut Person, v| p.age = Some(v))
        .build()?
        .resolve(NumberAttributeType::<u32>::new())
}

/// `city` attribute declared on the address component.
///
/// # Errors
///
/// Propagates resolution failures.
pub fn address_city() -> MapperResult<ResolvedAttribute<Address, String>> {
    StaticAttribute::builder("city")
        .getter(|a: &Address| a.city.clone())
        .setter(|a: &mut Address, v| a.city = Some(v))
        .tag(secondary_partition_key(["by_city"]))
        .build()?
        .resolve(StringAttributeType)
}

/// `lat` attribute declared on the coordinate component.
///
/// # Errors
///
/// Propagates resolution failures.
pub fn geo_lat() -> MapperResult<ResolvedAttribute<Geo, f64>> {
    StaticAttribute::builder("lat")
        .getter(|g: &Geo| g.lat)
        .setter(|g: &mut Geo, v| g.lat = Some(v))
        .build()?
        .resolve(NumberAttributeType::<f64>::new())
}

/// Projection from a person to its address without a creation step.
#[must_use]
pub fn address_of_person() -> ComponentAccess<Person, Address> {
    ComponentAccess::new(
        |p: &Person| p.address.as_ref(),
        |p: &mut Person| p.address.as_mut(),
    )
}

/// Projection from an address to its coordinate, creating it on write.
#[must_use]
pub fn geo_of_address() -> ComponentAccess<Address, Geo> {
    ComponentAccess::optional(|a: &Address| &a.geo, |a: &mut Address| &mut a.geo)
}
