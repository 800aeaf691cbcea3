//! Unit tests for metadata accumulation and conflict detection.

use rstest::{fixture, rstest};

use super::{PRIMARY_INDEX_NAME, TableMetadata, TableMetadataBuilder};
use crate::value::{AttributeValue, AttributeValueType};
use crate::{KeyKind, MapperError};

#[fixture]
fn keyed() -> TableMetadata {
    let mut builder = TableMetadata::builder();
    builder
        .add_index_partition_key(PRIMARY_INDEX_NAME, "id", AttributeValueType::S)
        .expect("partition key")
        .add_index_sort_key(PRIMARY_INDEX_NAME, "created", AttributeValueType::N)
        .expect("sort key");
    builder.build()
}

#[rstest]
fn records_primary_keys(keyed: TableMetadata) {
    assert_eq!(keyed.primary_partition_key(), Some("id"));
    assert_eq!(keyed.primary_sort_key(), Some("created"));
    assert_eq!(keyed.index_keys(PRIMARY_INDEX_NAME), vec!["id", "created"]);
    assert!(keyed.is_key_attribute("id"));
    assert!(!keyed.is_key_attribute("name"));
    assert_eq!(
        keyed.key_attributes().get("created"),
        Some(&AttributeValueType::N)
    );
}

#[rstest]
fn unknown_index_has_no_keys(keyed: TableMetadata) {
    assert!(keyed.index_keys("by_email").is_empty());
    assert_eq!(keyed.index_partition_key("by_email"), None);
}

#[rstest]
fn empty_builder_builds_empty_metadata() {
    assert!(TableMetadataBuilder::new().build().is_empty());
}

#[rstest]
fn reapplying_identical_key_is_accepted() {
    let mut builder = TableMetadataBuilder::new();
    for _ in 0..2 {
        builder
            .add_index_partition_key("gsi", "email", AttributeValueType::S)
            .expect("same key twice is fine");
    }
    assert_eq!(builder.build().index_partition_key("gsi"), Some("email"));
}

#[rstest]
#[case::partition(KeyKind::Partition)]
#[case::sort(KeyKind::Sort)]
fn rejects_second_key_for_same_slot(#[case] kind: KeyKind) {
    let mut builder = TableMetadataBuilder::new();
    let add = |b: &mut TableMetadataBuilder, name: &str| match kind {
        KeyKind::Partition => b
            .add_index_partition_key("gsi", name, AttributeValueType::S)
            .map(|_| ()),
        KeyKind::Sort => b
            .add_index_sort_key("gsi", name, AttributeValueType::S)
            .map(|_| ()),
    };
    add(&mut builder, "first").expect("first key");
    let err = add(&mut builder, "second").expect_err("conflicting key");
    assert!(
        matches!(
            &*err,
            MapperError::KeyConflict { index, kind: k, existing, attempted }
                if index == "gsi" && *k == kind && existing == "first" && attempted == "second"
        ),
        "unexpected error: {err:?}"
    );
}

#[rstest]
#[case(AttributeValueType::Bool)]
#[case(AttributeValueType::L)]
#[case(AttributeValueType::M)]
#[case(AttributeValueType::Ss)]
fn rejects_non_scalar_keys(#[case] value_type: AttributeValueType) {
    let err = TableMetadataBuilder::new()
        .add_index_partition_key(PRIMARY_INDEX_NAME, "tags", value_type)
        .map(|_| ())
        .expect_err("non scalar key");
    assert!(matches!(&*err, MapperError::InvalidKeyType { .. }));
}

#[rstest]
fn rejects_key_declared_with_two_types() {
    let mut builder = TableMetadataBuilder::new();
    builder
        .mark_attribute_as_key("id", AttributeValueType::S)
        .expect("first type");
    let err = builder
        .mark_attribute_as_key("id", AttributeValueType::N)
        .map(|_| ())
        .expect_err("second type");
    assert!(matches!(&*err, MapperError::KeyTypeConflict { .. }));
}

#[rstest]
fn custom_metadata_conflicts_only_on_different_values() {
    let mut builder = TableMetadataBuilder::new();
    builder
        .add_custom_metadata("version", AttributeValue::S("v".into()))
        .expect("first value")
        .add_custom_metadata("version", AttributeValue::S("v".into()))
        .expect("identical value");
    let err = builder
        .add_custom_metadata("version", AttributeValue::S("w".into()))
        .map(|_| ())
        .expect_err("different value");
    assert!(matches!(&*err, MapperError::CustomMetadataConflict { key } if key == "version"));
}

#[rstest]
fn merges_fragments_into_document_metadata(keyed: TableMetadata) {
    let mut gsi = TableMetadataBuilder::new();
    gsi.add_index_partition_key("by_email", "email", AttributeValueType::S)
        .expect("gsi key");
    let gsi_fragment = gsi.build();

    let mut document = TableMetadataBuilder::new();
    document
        .merge_with(&keyed)
        .expect("primary fragment")
        .merge_with(&gsi_fragment)
        .expect("gsi fragment");
    let merged = document.build();

    assert_eq!(merged.primary_partition_key(), Some("id"));
    assert_eq!(merged.index_partition_key("by_email"), Some("email"));
    assert_eq!(merged.key_attributes().len(), 3);
}

#[rstest]
fn merge_reports_conflicting_fragments(keyed: TableMetadata) {
    let mut other = TableMetadataBuilder::new();
    other
        .add_index_partition_key(PRIMARY_INDEX_NAME, "other_id", AttributeValueType::S)
        .expect("other key");
    let other_fragment = other.build();

    let mut document = TableMetadataBuilder::new();
    document.merge_with(&keyed).expect("first fragment");
    let err = document
        .merge_with(&other_fragment)
        .map(|_| ())
        .expect_err("conflict");
    assert!(matches!(&*err, MapperError::KeyConflict { .. }));
}

#[rstest]
fn conflicting_key_leaves_builder_untouched() {
    let mut builder = TableMetadataBuilder::new();
    builder
        .add_index_partition_key(PRIMARY_INDEX_NAME, "a", AttributeValueType::S)
        .expect("first key");
    let err = builder
        .add_index_partition_key(PRIMARY_INDEX_NAME, "b", AttributeValueType::N)
        .map(|_| ())
        .expect_err("slot already taken");
    assert!(matches!(&*err, MapperError::KeyConflict { .. }));

    let built = builder.build();
    assert!(!built.is_key_attribute("b"));
    assert_eq!(built.key_attributes().len(), 1);
    assert_eq!(built.primary_partition_key(), Some("a"));
}

#[rstest]
fn key_type_conflict_does_not_claim_slot() {
    let mut builder = TableMetadataBuilder::new();
    builder
        .mark_attribute_as_key("id", AttributeValueType::S)
        .expect("marked");
    let err = builder
        .add_index_sort_key("gsi", "id", AttributeValueType::N)
        .map(|_| ())
        .expect_err("type conflict");
    assert!(matches!(&*err, MapperError::KeyTypeConflict { .. }));
    assert_eq!(builder.build().index_sort_key("gsi"), None);
}

#[rstest]
fn failed_merge_applies_nothing(keyed: TableMetadata) {
    let mut other = TableMetadataBuilder::new();
    other
        .add_index_partition_key("by_email", "email", AttributeValueType::S)
        .expect("gsi key")
        .add_index_partition_key(PRIMARY_INDEX_NAME, "other_id", AttributeValueType::S)
        .expect("conflicting primary key")
        .add_custom_metadata("version", AttributeValue::S("v".into()))
        .expect("custom");
    let other_fragment = other.build();

    let mut document = TableMetadataBuilder::new();
    document.merge_with(&keyed).expect("first fragment");
    document
        .merge_with(&other_fragment)
        .map(|_| ())
        .expect_err("conflict");

    let merged = document.build();
    assert_eq!(merged.index_partition_key("by_email"), None);
    assert!(!merged.is_key_attribute("email"));
    assert!(!merged.is_key_attribute("other_id"));
    assert_eq!(merged.custom_metadata("version"), None);
    assert_eq!(merged, keyed);
}

#[rstest]
fn serialises_for_inspection(keyed: TableMetadata) {
    let encoded = serde_json::to_value(&keyed).expect("metadata encodes");
    assert_eq!(
        encoded["indices"]["$PRIMARY_INDEX"]["partition_key"]["name"],
        serde_json::json!("id")
    );
    assert_eq!(encoded["key_attributes"]["created"], serde_json::json!("N"));
}
