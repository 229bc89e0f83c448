use pretty_assertions::assert_eq;
use std::sync::Arc;
use tagschema_core::row::{TaggedValues, Value};
use tagschema_core::schema::{Column, Tag, TypeInfo};
use tagschema_core::{Row, RowConverter, Schema, TagMapping};

fn id() -> Column {
    Column::new("id", Tag(0), TypeInfo::Int(8), true).not_null()
}

fn age() -> Column {
    Column::new("age", Tag(4), TypeInfo::Int(8), false)
}

fn rating() -> Column {
    Column::new("rating", Tag(6), TypeInfo::Float(8), false)
}

fn schema(columns: impl IntoIterator<Item = Column>) -> Arc<Schema> {
    Arc::new(Schema::from_columns(columns).unwrap())
}

fn values(pairs: impl IntoIterator<Item = (u64, Value)>) -> TaggedValues {
    pairs.into_iter().map(|(tag, value)| (Tag(tag), value)).collect()
}

#[test]
fn name_mapping_across_schema_versions() {
    let src = schema([id(), age()]);
    let dest = schema([id(), age(), rating()]);

    let mapping = TagMapping::by_name(src.clone(), dest.clone());
    let converter = RowConverter::new(mapping).unwrap();

    let row = Row::new(src, values([(0, 5.into()), (4, 40.into())])).unwrap();
    let converted = converter.convert(&row).unwrap();

    assert_eq!(converted.values(), &values([(0, 5.into()), (4, 40.into())]));
    assert_eq!(converted.get(Tag(6)), None);
    assert!(Arc::ptr_eq(converted.schema(), &dest));
}

#[test]
fn unmatched_source_columns_are_dropped() {
    let src = schema([id(), age(), rating()]);
    let dest = schema([id(), rating()]);

    let mapping = TagMapping::by_name(src.clone(), dest);
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get(Tag(4)), None);

    let row = Row::new(src, values([(0, 1.into()), (4, 38.into()), (6, 8.0.into())])).unwrap();
    let converted = RowConverter::new(mapping).unwrap().convert(&row).unwrap();

    assert_eq!(converted.values(), &values([(0, 1.into()), (6, 8.0.into())]));
}

#[test]
fn renamed_column_maps_by_tag_when_explicit() {
    let src = schema([id(), age()]);
    let dest = schema([id(), age().renamed("years")]);

    // A pure name match loses the renamed column
    assert_eq!(TagMapping::by_name(src.clone(), dest.clone()).len(), 1);

    let mapping = TagMapping::explicit(src.clone(), dest, [(Tag(0), Tag(0)), (Tag(4), Tag(4))]).unwrap();
    let row = Row::new(src, values([(0, 2.into()), (4, 10.into())])).unwrap();
    let converted = RowConverter::new(mapping).unwrap().convert(&row).unwrap();

    assert_eq!(converted.get_by_name("years").unwrap(), Some(&Value::Int(10)));
}

#[test]
fn explicit_mapping_rejects_unknown_tags() {
    let src = schema([id(), age()]);
    let dest = schema([id(), age()]);

    let err = TagMapping::explicit(src.clone(), dest.clone(), [(Tag(5), Tag(4))]).unwrap_err();
    assert!(err.is_unmappable_column());

    let err = TagMapping::explicit(src, dest, [(Tag(4), Tag(5))]).unwrap_err();
    assert!(err.is_unmappable_column());
}

#[test]
fn explicit_mapping_must_be_a_function() {
    let src = schema([id(), age()]);
    let dest = schema([id(), age(), Column::new("years", Tag(9), TypeInfo::Int(8), false)]);

    let err = TagMapping::explicit(
        src.clone(),
        dest.clone(),
        [(Tag(4), Tag(4)), (Tag(4), Tag(9))],
    )
    .unwrap_err();
    assert!(err.is_unmappable_column());

    let err = TagMapping::explicit(src, dest, [(Tag(0), Tag(4)), (Tag(4), Tag(4))]).unwrap_err();
    assert!(err.is_unmappable_column());
}

#[test]
fn explicit_pairs_override_name_matches() {
    let src = schema([id(), age(), Column::new("years", Tag(7), TypeInfo::Int(8), false)]);
    let dest = schema([id(), Column::new("age", Tag(9), TypeInfo::Int(8), false)]);

    // By name, source `age` would land on destination `age`; the override
    // routes `years` there instead and `age` is dropped.
    let mapping = TagMapping::by_name_with_overrides(src.clone(), dest, [(Tag(7), Tag(9))]).unwrap();

    assert_eq!(mapping.iter().collect::<Vec<_>>(), [(Tag(0), Tag(0)), (Tag(7), Tag(9))]);

    let row = Row::new(src, values([(0, 1.into()), (4, 40.into()), (7, 41.into())])).unwrap();
    let converted = RowConverter::new(mapping).unwrap().convert(&row).unwrap();
    assert_eq!(converted.get(Tag(9)), Some(&Value::Int(41)));
}

#[test]
fn complete_mapping_reports_uncovered_destination_column() {
    let src = schema([id(), age()]);
    let dest = schema([id(), age(), rating()]);

    let err = TagMapping::by_name_complete(src.clone(), dest.clone()).unwrap_err();
    assert!(err.is_unmappable_column());
    assert!(err.to_string().contains("<rating>"));

    assert!(TagMapping::by_name_complete(dest.clone(), src).is_ok());
}

#[test]
fn missing_non_nullable_destination_value_fails() {
    let src = schema([id(), age()]);
    let dest = schema([id(), age(), rating().not_null()]);

    let converter = RowConverter::new(TagMapping::by_name(src.clone(), dest)).unwrap();

    let row = Row::new(src, values([(0, 5.into()), (4, 40.into())])).unwrap();
    let err = converter.convert(&row).unwrap_err();
    assert!(err.is_non_nullable());
    assert_eq!(err.non_nullable_column(), Some("rating"));
}

#[test]
fn present_non_nullable_destination_value_succeeds() {
    let src = schema([id(), age().not_null()]);
    let dest = schema([id(), age().not_null()]);

    let converter = RowConverter::new(TagMapping::by_name(src.clone(), dest)).unwrap();

    let row = Row::new(src, values([(0, 5.into()), (4, 40.into())])).unwrap();
    assert!(converter.convert(&row).is_ok());
}

#[test]
fn incompatible_types_fail() {
    let src = schema([id(), age()]);
    let dest = schema([id(), Column::new("age", Tag(4), TypeInfo::Text(None), false)]);

    let err = RowConverter::new(TagMapping::by_name(src, dest)).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn narrower_destination_rejects_values_that_do_not_fit() {
    let src = schema([id(), age()]);
    let dest = schema([id(), Column::new("age", Tag(4), TypeInfo::Int(1), false)]);

    let converter = RowConverter::new(TagMapping::by_name(src.clone(), dest)).unwrap();

    let ok = Row::new(src.clone(), values([(0, 1.into()), (4, 100.into())])).unwrap();
    assert!(converter.convert(&ok).is_ok());

    let too_big = Row::new(src, values([(0, 1.into()), (4, 1000.into())])).unwrap();
    assert!(converter.convert(&too_big).unwrap_err().is_value_conversion());
}

#[test]
fn double_to_single_precision_rejects_inexact_values() {
    let src = schema([id(), rating()]);
    let dest = schema([id(), Column::new("rating", Tag(6), TypeInfo::Float(4), false)]);

    let converter = RowConverter::new(TagMapping::by_name(src.clone(), dest)).unwrap();

    let exact = Row::new(src.clone(), values([(0, 1.into()), (6, 0.5.into())])).unwrap();
    let converted = converter.convert(&exact).unwrap();
    assert_eq!(converted.get(Tag(6)), Some(&Value::Float(0.5)));

    let inexact = Row::new(src, values([(0, 1.into()), (6, 0.1.into())])).unwrap();
    let err = converter.convert(&inexact).unwrap_err();
    assert!(err.is_value_conversion());
    assert!(err.to_string().contains("<rating>"));
}

#[test]
fn identity_mapping_preserves_rows() {
    let people = schema([id(), age(), rating()]);

    let mapping = TagMapping::identity(people.clone());
    assert!(mapping.is_identity());

    let row = Row::new(people.clone(), values([(0, 3.into()), (6, 10.0.into())])).unwrap();
    let converted = RowConverter::new(mapping).unwrap().convert(&row).unwrap();
    assert_eq!(converted, row);

    let converted = RowConverter::identity(people).convert(&row).unwrap();
    assert_eq!(converted, row);
}

#[test]
fn rows_of_another_schema_are_rejected() {
    let src = schema([id(), age()]);
    let other = schema([id(), rating()]);

    let converter = RowConverter::new(TagMapping::by_name(src.clone(), src)).unwrap();

    let row = Row::new(other, values([(0, 1.into())])).unwrap();
    assert!(converter.convert(&row).is_err());
}
