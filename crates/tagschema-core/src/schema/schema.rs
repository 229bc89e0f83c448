use super::{Column, Columns, Result, Tag};

/// The shape of one version of a table.
///
/// A schema is a [`Columns`] collection plus a cached partition into primary
/// key columns (in declared order, defining row identity) and non-key
/// columns. Schemas are immutable: evolving a table produces a new schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    columns: Columns,
    pk_columns: Columns,
    non_pk_columns: Columns,
}

impl Schema {
    /// Builds the schema of a storable table.
    ///
    /// Fails if there is no primary key, if a primary key column is nullable,
    /// or if the auto-increment configuration is invalid.
    pub fn new(columns: Columns) -> Result<Schema> {
        super::verify::verify_keyed(&columns)?;
        Ok(Schema::from_verified(columns))
    }

    /// Builds a keyed schema from columns in declared order.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Result<Schema> {
        Schema::new(Columns::new(columns)?)
    }

    /// Builds a schema without a primary key.
    ///
    /// Used for shapes that are not storable tables, such as query results
    /// and exported views. The primary key flag is cleared on every column and
    /// no primary key validation takes place.
    pub fn unkeyed(columns: Columns) -> Result<Schema> {
        let columns = columns.map(|column| Column {
            primary_key: false,
            ..column.clone()
        });
        super::verify::verify_auto_increment(&columns)?;
        Ok(Schema::from_verified(columns))
    }

    fn from_verified(columns: Columns) -> Schema {
        let pk_columns = columns.filter(|column| column.primary_key);
        let non_pk_columns = columns.filter(|column| !column.primary_key);

        Schema {
            columns,
            pk_columns,
            non_pk_columns,
        }
    }

    /// All columns, in declared order.
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn primary_key_columns(&self) -> &Columns {
        &self.pk_columns
    }

    pub fn non_primary_key_columns(&self) -> &Columns {
        &self.non_pk_columns
    }

    pub fn is_keyless(&self) -> bool {
        self.pk_columns.is_empty()
    }

    pub fn column_by_tag(&self, tag: Tag) -> Option<&Column> {
        self.columns.by_tag(tag)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.by_name(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
