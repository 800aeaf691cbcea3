//! Unit tests for the built-in tags.

use std::sync::Arc;

use rstest::rstest;

use super::{
    Tag, custom_metadata, primary_partition_key, primary_sort_key, secondary_partition_key,
    secondary_sort_key, tag_fn,
};
use crate::metadata::{PRIMARY_INDEX_NAME, TableMetadataBuilder};
use crate::value::{AttributeValue, AttributeValueType};
use crate::MapperError;

fn apply(tag: &dyn Tag, name: &str, kind: AttributeValueType) -> TableMetadataBuilder {
    let mut builder = TableMetadataBuilder::new();
    tag.modify_metadata(name, kind, &mut builder)
        .expect("tag applies cleanly");
    builder
}

#[rstest]
fn primary_keys_target_primary_index() {
    let mut builder = apply(&primary_partition_key(), "id", AttributeValueType::S);
    primary_sort_key()
        .modify_metadata("created", AttributeValueType::N, &mut builder)
        .expect("sort key applies");
    let metadata = builder.build();
    assert_eq!(metadata.primary_partition_key(), Some("id"));
    assert_eq!(metadata.primary_sort_key(), Some("created"));
    assert_eq!(metadata.indices().len(), 1);
    assert!(metadata.indices().contains_key(PRIMARY_INDEX_NAME));
}

#[rstest]
fn secondary_keys_cover_every_named_index() {
    let partition = secondary_partition_key(["by_email", "by_login"]);
    let metadata = apply(&partition, "email", AttributeValueType::S).build();
    assert_eq!(metadata.index_partition_key("by_email"), Some("email"));
    assert_eq!(metadata.index_partition_key("by_login"), Some("email"));
    assert_eq!(metadata.primary_partition_key(), None);

    let sort = secondary_sort_key(vec![String::from("by_email")]);
    let sorted = apply(&sort, "created", AttributeValueType::N).build();
    assert_eq!(sorted.index_sort_key("by_email"), Some("created"));
}

#[rstest]
fn key_tag_rejects_non_scalar_attribute() {
    let mut builder = TableMetadataBuilder::new();
    let err = primary_partition_key()
        .modify_metadata("flags", AttributeValueType::Ss, &mut builder)
        .expect_err("string sets cannot be keys");
    assert!(matches!(
        &*err,
        MapperError::InvalidKeyType { attribute, value_type: AttributeValueType::Ss }
            if attribute == "flags"
    ));
}

#[rstest]
fn custom_metadata_ignores_attribute_identity() {
    let tag = custom_metadata("version_attribute", AttributeValue::S("version".into()));
    let metadata = apply(&tag, "anything", AttributeValueType::Bool).build();
    assert_eq!(
        metadata.custom_metadata("version_attribute"),
        Some(&AttributeValue::S("version".into()))
    );
    assert!(metadata.key_attributes().is_empty());
}

#[rstest]
fn closure_tags_see_name_and_type() {
    let tag = tag_fn("echo", |name, kind, metadata| {
        metadata.add_custom_metadata(name, AttributeValue::S(kind.to_string()))?;
        Ok(())
    });
    let metadata = apply(&tag, "age", AttributeValueType::N).build();
    assert_eq!(
        metadata.custom_metadata("age"),
        Some(&AttributeValue::S("N".into()))
    );
    assert!(format!("{tag:?}").contains("echo"));
}

#[rstest]
fn shared_tags_delegate() {
    let shared: Arc<dyn Tag> = Arc::new(primary_partition_key());
    let metadata = apply(&shared, "id", AttributeValueType::B).build();
    assert_eq!(metadata.primary_partition_key(), Some("id"));
}
