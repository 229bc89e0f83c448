use super::TagMapping;
use crate::{
    row::{Row, TaggedValues},
    Error, Result, Schema,
};

use std::sync::Arc;

/// Projects rows of one schema onto another through a [`TagMapping`].
///
/// Values are copied verbatim. Coercing values across types is the caller's
/// job, before conversion.
#[derive(Debug, Clone)]
pub struct RowConverter {
    mapping: TagMapping,
    identity: bool,
}

impl RowConverter {
    /// Creates a converter, checking that every mapped pair of columns has
    /// the same storage kind.
    pub fn new(mapping: TagMapping) -> Result<RowConverter> {
        for (src_tag, dest_tag) in mapping.iter() {
            let (Some(src), Some(dest)) = (
                mapping.src().column_by_tag(src_tag),
                mapping.dest().column_by_tag(dest_tag),
            ) else {
                crate::bail!("tag mapping {src_tag} -> {dest_tag} refers to a missing column");
            };

            if src.kind() != dest.kind() {
                return Err(Error::type_mismatch(&dest.name, dest.kind(), src.kind()));
            }
        }

        let identity = mapping.is_identity();
        Ok(RowConverter { mapping, identity })
    }

    /// A converter that returns rows of `schema` unchanged.
    pub fn identity(schema: Arc<Schema>) -> RowConverter {
        RowConverter {
            mapping: TagMapping::identity(schema),
            identity: true,
        }
    }

    pub fn mapping(&self) -> &TagMapping {
        &self.mapping
    }

    /// Converts a row of the source schema into a row of the destination
    /// schema.
    ///
    /// Fails if a non-nullable destination column ends up without a value,
    /// or if a copied value does not fit the destination column's type.
    pub fn convert(&self, row: &Row) -> Result<Row> {
        let src = self.mapping.src();
        let dest = self.mapping.dest();

        if !Arc::ptr_eq(row.schema(), src) && **row.schema() != **src {
            crate::bail!("row schema does not match the source schema of the tag mapping");
        }

        if self.identity {
            return Ok(Row::from_parts(dest.clone(), row.values().clone()));
        }

        let mut values = TaggedValues::new();

        for (src_tag, dest_tag) in self.mapping.iter() {
            let Some(value) = row.get(src_tag) else {
                continue;
            };

            if let Some(column) = dest.column_by_tag(dest_tag) {
                column
                    .ty
                    .check(value)
                    .map_err(|err| err.with_column(&column.name))?;
            }

            values.insert(dest_tag, value.clone());
        }

        if let Some(column) = dest
            .columns()
            .iter()
            .find(|column| !column.is_nullable() && !values.contains(column.tag))
        {
            return Err(Error::non_nullable(&column.name));
        }

        Ok(Row::from_parts(dest.clone(), values))
    }
}
