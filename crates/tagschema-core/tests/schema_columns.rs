use pretty_assertions::assert_eq;
use tagschema_core::schema::{Column, Columns, Tag, TypeInfo};

fn people_columns() -> Vec<Column> {
    vec![
        Column::new("id", Tag(0), TypeInfo::Int(8), true).not_null(),
        Column::new("first", Tag(1), TypeInfo::Text(None), false).not_null(),
        Column::new("last", Tag(2), TypeInfo::Text(None), false).not_null(),
        Column::new("is_married", Tag(3), TypeInfo::Bool, false),
        Column::new("age", Tag(4), TypeInfo::Int(8), false),
        Column::new("rating", Tag(6), TypeInfo::Float(8), false),
    ]
}

#[test]
fn distinct_tags_and_names_succeed() {
    let columns = Columns::new(people_columns()).unwrap();

    assert_eq!(columns.len(), 6);
    assert!(!columns.is_empty());
}

#[test]
fn duplicate_tag_fails() {
    let mut columns = people_columns();
    columns.push(Column::new("years", Tag(4), TypeInfo::Int(8), false));

    let err = Columns::new(columns).unwrap_err();
    assert!(err.is_duplicate_identity());
    assert!(err.is_duplicate_tag());
    assert_eq!(err.to_string(), "duplicate tag 4: columns <age> and <years>");
}

#[test]
fn duplicate_name_fails() {
    let mut columns = people_columns();
    columns.push(Column::new("age", Tag(9), TypeInfo::Int(8), false));

    let err = Columns::new(columns).unwrap_err();
    assert!(err.is_duplicate_identity());
    assert!(err.is_duplicate_name());
}

#[test]
fn names_are_case_sensitive() {
    let mut columns = people_columns();
    columns.push(Column::new("Age", Tag(9), TypeInfo::Int(8), false));

    let columns = Columns::new(columns).unwrap();
    assert_eq!(columns.by_name("Age").unwrap().tag, Tag(9));
    assert_eq!(columns.by_name("age").unwrap().tag, Tag(4));
}

#[test]
fn iteration_follows_declared_order() {
    let columns = Columns::new(people_columns()).unwrap();

    let names: Vec<_> = columns.iter().map(|column| column.name.as_str()).collect();
    assert_eq!(
        names,
        ["id", "first", "last", "is_married", "age", "rating"]
    );

    let tags: Vec<_> = columns.tags().collect();
    assert_eq!(tags, [Tag(0), Tag(1), Tag(2), Tag(3), Tag(4), Tag(6)]);
}

#[test]
fn iteration_can_stop_early() {
    let columns = Columns::new(people_columns()).unwrap();

    let first_nullable = columns.iter().find(|column| column.is_nullable()).unwrap();
    assert_eq!(first_nullable.name, "is_married");
}

#[test]
fn lookups_return_none_when_missing() {
    let columns = Columns::new(people_columns()).unwrap();

    assert_eq!(columns.by_tag(Tag(6)).unwrap().name, "rating");
    assert_eq!(columns.by_name("last").unwrap().tag, Tag(2));
    assert!(columns.by_tag(Tag(5)).is_none());
    assert!(columns.by_name("empty").is_none());
    assert!(!columns.contains_tag(Tag(5)));
}

#[test]
fn positions_and_max_tag() {
    let columns = Columns::new(people_columns()).unwrap();

    assert_eq!(columns.position(Tag(6)), Some(5));
    assert_eq!(columns.position(Tag(5)), None);
    assert_eq!(columns.max_tag(), Some(Tag(6)));
    assert_eq!(Columns::empty().max_tag(), None);
}

#[test]
fn equality_is_order_sensitive() {
    let forward = Columns::new(people_columns()).unwrap();
    let backward = Columns::new(people_columns().into_iter().rev()).unwrap();

    assert_ne!(forward, backward);
    assert_eq!(forward, Columns::new(people_columns()).unwrap());
}

#[test]
fn renamed_column_keeps_its_tag() {
    let age = Column::new("age", Tag(4), TypeInfo::Int(8), false);
    let years = age.renamed("years");

    assert_eq!(years.tag, Tag(4));
    assert_eq!(years.name, "years");
    assert_eq!(age.name, "age");
}
