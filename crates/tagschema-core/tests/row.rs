use pretty_assertions::assert_eq;
use std::sync::Arc;
use tagschema_core::row::{TaggedValues, Value};
use tagschema_core::schema::{Column, Tag, TypeInfo};
use tagschema_core::{Row, Schema};

fn people() -> Arc<Schema> {
    Arc::new(
        Schema::from_columns([
            Column::new("id", Tag(0), TypeInfo::Int(8), true).not_null(),
            Column::new("first", Tag(1), TypeInfo::Text(Some(16)), false).not_null(),
            Column::new("age", Tag(4), TypeInfo::Int(1), false),
        ])
        .unwrap(),
    )
}

fn values(pairs: impl IntoIterator<Item = (u64, Value)>) -> TaggedValues {
    pairs.into_iter().map(|(tag, value)| (Tag(tag), value)).collect()
}

#[test]
fn absent_tags_are_null() {
    let row = Row::new(people(), values([(0, 1.into()), (1, "Homer".into())])).unwrap();

    assert_eq!(row.get(Tag(0)), Some(&Value::Int(1)));
    assert_eq!(row.get(Tag(4)), None);
    assert_eq!(row.get_by_name("age").unwrap(), None);
    assert_eq!(row.get_by_name("first").unwrap(), Some(&Value::from("Homer")));
}

#[test]
fn unknown_column_name_fails() {
    let row = Row::new(people(), values([(0, 1.into()), (1, "Homer".into())])).unwrap();

    let err = row.get_by_name("rating").unwrap_err();
    assert!(err.is_column_not_found());
}

#[test]
fn missing_non_nullable_value_fails() {
    let err = Row::new(people(), values([(0, 1.into())])).unwrap_err();

    assert!(err.is_non_nullable());
    assert_eq!(err.non_nullable_column(), Some("first"));
}

#[test]
fn tag_outside_schema_fails() {
    let err = Row::new(
        people(),
        values([(0, 1.into()), (1, "Homer".into()), (6, 8.5.into())]),
    )
    .unwrap_err();

    assert!(err.is_column_not_found());
}

#[test]
fn value_of_wrong_kind_fails() {
    let err = Row::new(people(), values([(0, "one".into()), (1, "Homer".into())])).unwrap_err();

    assert!(err.is_type_mismatch());
}

#[test]
fn value_out_of_declared_range_fails() {
    let err = Row::new(
        people(),
        values([(0, 1.into()), (1, "Homer".into()), (4, 400.into())]),
    )
    .unwrap_err();

    assert!(err.is_value_conversion());
    assert!(err.to_string().contains("<age>"));
}

#[test]
fn single_precision_column_rejects_inexact_doubles() {
    let schema = Arc::new(
        Schema::from_columns([
            Column::new("id", Tag(0), TypeInfo::Int(8), true).not_null(),
            Column::new("ratio", Tag(1), TypeInfo::Float(4), false),
        ])
        .unwrap(),
    );

    let err = Row::new(schema.clone(), values([(0, 1.into()), (1, 0.1.into())])).unwrap_err();
    assert!(err.is_value_conversion());
    assert!(err.to_string().contains("<ratio>"));

    let row = Row::new(schema, values([(0, 1.into()), (1, 0.25.into())])).unwrap();
    assert_eq!(row.get(Tag(1)), Some(&Value::Float(0.25)));
}

#[test]
fn key_holds_primary_key_values_only() {
    let row = Row::new(
        people(),
        values([(0, 7.into()), (1, "Bart".into()), (4, 10.into())]),
    )
    .unwrap();

    assert_eq!(row.key(), values([(0, 7.into())]));
}

#[test]
fn tagged_values_iterate_in_tag_order() {
    let mut values = TaggedValues::new();
    values.insert(Tag(4), 40);
    values.insert(Tag(0), 5);
    assert_eq!(values.insert(Tag(4), 41), Some(Value::Int(40)));

    let tags: Vec<_> = values.tags().collect();
    assert_eq!(tags, [Tag(0), Tag(4)]);
    assert_eq!(values.len(), 2);
}
