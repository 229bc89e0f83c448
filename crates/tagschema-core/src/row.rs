mod tagged_values;
pub use tagged_values::TaggedValues;

mod value;
pub use value::Value;

use crate::{schema::Tag, Error, Result, Schema};

use std::sync::Arc;

/// A row of a table, keyed by column tag.
///
/// A row is always interpreted against the schema it carries. Columns whose
/// tag is absent from the row are `NULL`; there is no stored null value.
/// Rows are immutable: conversion and projection produce new rows.
#[derive(Debug, Clone)]
pub struct Row {
    schema: Arc<Schema>,
    values: TaggedValues,
}

impl Row {
    /// Builds a row, checking it against `schema`.
    ///
    /// Every tag must belong to a column of the schema, every value must
    /// match its column's type, and every non-nullable column must have a
    /// value.
    pub fn new(schema: Arc<Schema>, values: TaggedValues) -> Result<Row> {
        for (tag, value) in values.iter() {
            let Some(column) = schema.column_by_tag(tag) else {
                return Err(Error::column_not_found(format!("tag {tag}")));
            };

            if value.kind() != column.kind() {
                return Err(Error::type_mismatch(
                    &column.name,
                    column.kind(),
                    value.kind(),
                ));
            }

            column
                .ty
                .check(value)
                .map_err(|err| err.with_column(&column.name))?;
        }

        if let Some(column) = schema
            .columns()
            .iter()
            .find(|column| !column.is_nullable() && !values.contains(column.tag))
        {
            return Err(Error::non_nullable(&column.name));
        }

        Ok(Row { schema, values })
    }

    /// Pairs values with a schema without checking them. The caller has
    /// already validated every value against `schema`.
    pub(crate) fn from_parts(schema: Arc<Schema>, values: TaggedValues) -> Row {
        Row { schema, values }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Returns the value of the column with `tag`, or `None` if it is `NULL`.
    pub fn get(&self, tag: Tag) -> Option<&Value> {
        self.values.get(tag)
    }

    /// Returns the value of the column named `name`, or `None` if it is
    /// `NULL`. Fails if the schema has no such column.
    pub fn get_by_name(&self, name: &str) -> Result<Option<&Value>> {
        match self.schema.column_by_name(name) {
            Some(column) => Ok(self.values.get(column.tag)),
            None => Err(Error::column_not_found(name)),
        }
    }

    pub fn values(&self) -> &TaggedValues {
        &self.values
    }

    pub fn into_values(self) -> TaggedValues {
        self.values
    }

    /// The primary key values of the row, identifying it within its table.
    pub fn key(&self) -> TaggedValues {
        self.schema
            .primary_key_columns()
            .tags()
            .filter_map(|tag| Some((tag, self.values.get(tag)?.clone())))
            .collect()
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.schema, &other.schema) || self.schema == other.schema)
            && self.values == other.values
    }
}
