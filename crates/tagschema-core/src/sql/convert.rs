use super::{Column as SqlColumn, Row as SqlRow, Value as SqlValue};
use crate::{
    row::{Row, TaggedValues},
    schema::{Column, Columns, Constraint, Tag, TagAllocator, TagHistory, TypeInfo},
    Error, Result, Schema,
};

use std::sync::Arc;
use tracing::debug;

/// Returns the ordinal SQL representation of `row`, one value per column of
/// its schema in declared order. Absent tags become `NULL`.
pub fn to_sql_row(row: &Row) -> Result<SqlRow> {
    row.schema()
        .columns()
        .iter()
        .map(|column| match row.get(column.tag) {
            Some(value) => column
                .ty
                .to_sql(value)
                .map_err(|err| err.with_column(&column.name)),
            None => Ok(SqlValue::Null),
        })
        .collect()
}

/// Returns the tagged representation of an ordinal SQL row.
///
/// `schema`'s columns match the values of `row` positionally. `NULL` values
/// are left out of the tagged row, which fails if the column is
/// non-nullable.
pub fn from_sql_row(schema: &Arc<Schema>, row: SqlRow) -> Result<Row> {
    if row.len() != schema.len() {
        crate::bail!(
            "row has {} values but the schema has {} columns",
            row.len(),
            schema.len()
        );
    }

    let mut values = TaggedValues::new();

    for (column, value) in schema.columns().iter().zip(row) {
        if value.is_null() {
            if !column.is_nullable() {
                return Err(Error::non_nullable(&column.name));
            }
            continue;
        }

        let value = column
            .ty
            .from_sql(value)
            .map_err(|err| err.with_column(&column.name))?;
        values.insert(column.tag, value);
    }

    Ok(Row::from_parts(schema.clone(), values))
}

/// Returns the column corresponding to the SQL column given, under `tag`.
pub fn to_column(tag: Tag, column: &SqlColumn) -> Result<Column> {
    let ty = TypeInfo::from_sql_type(&column.ty).map_err(|err| {
        err.context(crate::err!("column <{}>", column.name))
    })?;

    let mut constraints = vec![];
    if !column.nullable {
        constraints.push(Constraint::NotNull);
    }

    Ok(Column {
        tag,
        name: column.name.clone(),
        ty,
        primary_key: column.primary_key,
        default: column.default.clone(),
        auto_increment: column.auto_increment,
        comment: column.comment.clone(),
        constraints,
    })
}

/// Returns a schema for the SQL columns given, suitable for creating the
/// table `table`. For result set schemas, see [`to_result_schema`].
///
/// Columns annotated with a tag keep it. Every other column gets a fresh tag
/// from `allocator`, avoiding `history` and the annotated tags.
pub fn to_schema(
    table: &str,
    history: &TagHistory,
    allocator: &TagAllocator,
    columns: &[SqlColumn],
) -> Result<Schema> {
    let columns = assign_tags(table, history, allocator, columns)?;
    let schema = Schema::new(Columns::new(columns)?)?;

    debug!(table, columns = schema.len(), "imported table schema");
    Ok(schema)
}

/// Returns a schema for a query result with the SQL columns given.
///
/// The schema has no primary key, and tags are the columns' ordinal
/// positions.
pub fn to_result_schema(columns: &[SqlColumn]) -> Result<Schema> {
    let columns = columns
        .iter()
        .enumerate()
        .map(|(i, column)| to_column(Tag(i as u64), column))
        .collect::<Result<Vec<_>>>()?;

    Schema::unkeyed(Columns::new(columns)?)
}

/// Returns the SQL columns describing `schema`, in declared order.
///
/// Each column is annotated with its tag so that re-importing the columns
/// recovers tag identity.
pub fn from_schema(table: &str, schema: &Schema) -> Vec<SqlColumn> {
    schema
        .columns()
        .iter()
        .map(|column| SqlColumn {
            name: column.name.clone(),
            ty: column.ty.to_sql_type(),
            nullable: column.is_nullable(),
            primary_key: column.primary_key,
            default: column.default.clone(),
            auto_increment: column.auto_increment,
            comment: column.comment.clone(),
            source: table.to_string(),
            extra: Some(column.tag.to_annotation()),
        })
        .collect()
}

/// Returns `schema` with `new_columns` appended.
///
/// New columns without a tag annotation get fresh tags that avoid `history`
/// and every tag of `schema`. An annotated new column must carry a tag the
/// table never used: tags of current columns and retired tags are rejected.
pub fn add_columns(
    table: &str,
    schema: &Schema,
    history: &TagHistory,
    allocator: &TagAllocator,
    new_columns: &[SqlColumn],
) -> Result<Schema> {
    let mut history = history.clone();
    history.add_schema(schema);

    for column in new_columns {
        let Some(tag) = column.tag()? else {
            continue;
        };

        if let Some(existing) = schema.column_by_tag(tag) {
            return Err(Error::duplicate_tag(tag, &existing.name, &column.name));
        }

        if history.contains(tag) {
            return Err(Error::unmappable_column(format!(
                "new column <{}> is annotated with retired tag {tag}",
                column.name
            )));
        }
    }

    let added = assign_tags(table, &history, allocator, new_columns)?;
    let columns = Columns::new(schema.columns().iter().cloned().chain(added))?;
    let schema = Schema::new(columns)?;

    debug!(
        table,
        added = new_columns.len(),
        columns = schema.len(),
        "altered table schema"
    );
    Ok(schema)
}

fn assign_tags(
    table: &str,
    history: &TagHistory,
    allocator: &TagAllocator,
    columns: &[SqlColumn],
) -> Result<Vec<Column>> {
    let annotated = columns
        .iter()
        .map(SqlColumn::tag)
        .collect::<Result<Vec<_>>>()?;

    let mut reserved = history.clone();
    reserved.extend(annotated.iter().flatten().copied());

    let names: Vec<_> = columns
        .iter()
        .zip(&annotated)
        .filter(|(_, tag)| tag.is_none())
        .map(|(column, _)| column.name.as_str())
        .collect();

    let mut fresh = allocator.allocate(table, &reserved, &names)?.into_iter();

    let tags: Vec<_> = annotated
        .into_iter()
        .filter_map(|tag| tag.or_else(|| fresh.next()))
        .collect();

    if tags.len() != columns.len() {
        crate::bail!("number of tags should equal number of columns");
    }

    columns
        .iter()
        .zip(tags)
        .map(|(column, tag)| to_column(tag, column))
        .collect()
}
