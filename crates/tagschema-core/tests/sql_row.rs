use pretty_assertions::assert_eq;
use std::sync::Arc;
use tagschema_core::row::{TaggedValues, Value};
use tagschema_core::schema::{Column, Tag, TypeInfo};
use tagschema_core::{sql, Row, RowConverter, Schema, TagMapping};
use uuid::Uuid;

fn id_name(name_nullable: bool) -> Arc<Schema> {
    let name = Column::new("name", Tag(1), TypeInfo::Text(None), false);
    let name = if name_nullable { name } else { name.not_null() };

    Arc::new(
        Schema::from_columns([
            Column::new("id", Tag(0), TypeInfo::Int(8), true).not_null(),
            name,
        ])
        .unwrap(),
    )
}

fn every_type() -> Arc<Schema> {
    Arc::new(
        Schema::from_columns([
            Column::new("id", Tag(10), TypeInfo::Uint(4), true).not_null(),
            Column::new("flag", Tag(3), TypeInfo::Bool, false),
            Column::new("tiny", Tag(7), TypeInfo::Int(1), false),
            Column::new("small", Tag(2), TypeInfo::Int(2), false),
            Column::new("big", Tag(5), TypeInfo::Int(8), false),
            Column::new("ratio", Tag(8), TypeInfo::Float(4), false),
            Column::new("score", Tag(1), TypeInfo::Float(8), false),
            Column::new("label", Tag(4), TypeInfo::Text(Some(12)), false),
            Column::new("uid", Tag(6), TypeInfo::Uuid, false),
            Column::new("payload", Tag(9), TypeInfo::Blob(None), false),
        ])
        .unwrap(),
    )
}

#[test]
fn null_becomes_an_absent_tag() {
    let schema = id_name(true);

    let row = sql::from_sql_row(&schema, vec![sql::Value::I64(7), sql::Value::Null]).unwrap();

    let expected: TaggedValues = [(Tag(0), Value::Int(7))].into_iter().collect();
    assert_eq!(row.values(), &expected);
    assert!(row.get(Tag(1)).is_none());

    assert_eq!(
        sql::to_sql_row(&row).unwrap(),
        vec![sql::Value::I64(7), sql::Value::Null]
    );
}

#[test]
fn null_for_non_nullable_column_fails() {
    let schema = id_name(false);

    let err = sql::from_sql_row(&schema, vec![sql::Value::I64(7), sql::Value::Null]).unwrap_err();
    assert!(err.is_non_nullable());
    assert_eq!(err.non_nullable_column(), Some("name"));
    assert_eq!(
        err.to_string(),
        "column <name> received null but is non-nullable"
    );

    let row = sql::from_sql_row(&schema, vec![sql::Value::I64(7), sql::Value::from("Moe")]);
    assert!(row.is_ok());
}

#[test]
fn values_round_trip_through_identity_mapping() {
    let schema = every_type();
    let uid = Uuid::new_v4();

    let rows = vec![
        vec![
            sql::Value::U32(1),
            sql::Value::Bool(true),
            sql::Value::I8(-128),
            sql::Value::I16(300),
            sql::Value::I64(i64::MAX),
            sql::Value::F32(0.25),
            sql::Value::F64(8.5),
            sql::Value::from("Homer"),
            sql::Value::Uuid(uid),
            sql::Value::Bytes(vec![0, 1, 255]),
        ],
        vec![
            sql::Value::U32(2),
            sql::Value::Null,
            sql::Value::I8(1),
            sql::Value::Null,
            sql::Value::Null,
            sql::Value::Null,
            sql::Value::F64(-0.0),
            sql::Value::Null,
            sql::Value::Null,
            sql::Value::Bytes(vec![]),
        ],
    ];

    let converter = RowConverter::new(TagMapping::identity(schema.clone())).unwrap();

    for external in rows {
        let row = sql::from_sql_row(&schema, external.clone()).unwrap();
        let projected = converter.convert(&row).unwrap();
        assert_eq!(sql::to_sql_row(&projected).unwrap(), external);
    }
}

#[test]
fn narrower_external_integers_widen_on_import() {
    let schema = every_type();
    let mut external = vec![sql::Value::Null; schema.len()];
    external[0] = sql::Value::U8(9);
    external[4] = sql::Value::I16(-3);

    let row = sql::from_sql_row(&schema, external).unwrap();
    assert_eq!(row.get(Tag(10)), Some(&Value::Uint(9)));
    assert_eq!(row.get(Tag(5)), Some(&Value::Int(-3)));

    // Exported at the declared width
    let exported = sql::to_sql_row(&row).unwrap();
    assert_eq!(exported[0], sql::Value::U32(9));
    assert_eq!(exported[4], sql::Value::I64(-3));
}

#[test]
fn mismatched_scalar_fails_with_column_name() {
    let schema = id_name(true);

    let err = sql::from_sql_row(&schema, vec![sql::Value::from("seven"), sql::Value::Null]).unwrap_err();
    assert!(err.is_value_conversion());
    assert_eq!(
        err.to_string(),
        "cannot convert value for column <id>: cannot convert String to INTEGER(8)"
    );
}

#[test]
fn scalar_out_of_range_fails() {
    let schema = every_type();
    let mut external = vec![sql::Value::Null; schema.len()];
    external[0] = sql::Value::U32(1);
    external[2] = sql::Value::I64(1000);

    let err = sql::from_sql_row(&schema, external).unwrap_err();
    assert!(err.is_value_conversion());
    assert!(err.to_string().contains("<tiny>"));
}

#[test]
fn single_precision_values_are_never_narrowed() {
    let schema = every_type();
    let mut external = vec![sql::Value::Null; schema.len()];
    external[0] = sql::Value::U32(1);
    external[5] = sql::Value::F64(0.1);

    let err = sql::from_sql_row(&schema, external.clone()).unwrap_err();
    assert!(err.is_value_conversion());
    assert!(err.to_string().contains("<ratio>"));

    // Exact doubles import and export as the same single precision value
    external[5] = sql::Value::F64(0.375);
    let row = sql::from_sql_row(&schema, external).unwrap();
    assert_eq!(sql::to_sql_row(&row).unwrap()[5], sql::Value::F32(0.375));

    let mut values = row.into_values();
    values.insert(Tag(8), 0.1);
    assert!(Row::new(schema, values).unwrap_err().is_value_conversion());
}

#[test]
fn text_longer_than_declared_fails() {
    let schema = every_type();
    let mut external = vec![sql::Value::Null; schema.len()];
    external[0] = sql::Value::U32(1);
    external[7] = sql::Value::from("far too long a label");

    let err = sql::from_sql_row(&schema, external).unwrap_err();
    assert!(err.is_value_conversion());
}

#[test]
fn row_length_must_match_schema() {
    let schema = id_name(true);

    assert!(sql::from_sql_row(&schema, vec![sql::Value::I64(7)]).is_err());
}

#[test]
fn export_follows_declared_order_not_tag_order() {
    let schema = Arc::new(
        Schema::from_columns([
            Column::new("id", Tag(5), TypeInfo::Int(8), true).not_null(),
            Column::new("a", Tag(9), TypeInfo::Text(None), false),
            Column::new("b", Tag(1), TypeInfo::Text(None), false),
        ])
        .unwrap(),
    );

    let values: TaggedValues = [
        (Tag(1), Value::from("b")),
        (Tag(5), Value::Int(1)),
        (Tag(9), Value::from("a")),
    ]
    .into_iter()
    .collect();
    let row = Row::new(schema, values).unwrap();

    assert_eq!(
        sql::to_sql_row(&row).unwrap(),
        vec![sql::Value::I64(1), sql::Value::from("a"), sql::Value::from("b")]
    );
}
