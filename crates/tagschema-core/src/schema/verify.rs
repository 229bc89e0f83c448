use super::{Columns, Kind, Result};
use crate::Error;

/// Rules every storable table schema satisfies.
pub(super) fn verify_keyed(columns: &Columns) -> Result<()> {
    verify_has_primary_key(columns)?;
    verify_primary_key_not_nullable(columns)?;
    verify_auto_increment(columns)
}

fn verify_has_primary_key(columns: &Columns) -> Result<()> {
    if !columns.iter().any(|column| column.primary_key) {
        return Err(Error::invalid_schema("table has no primary key columns"));
    }
    Ok(())
}

fn verify_primary_key_not_nullable(columns: &Columns) -> Result<()> {
    match columns
        .iter()
        .find(|column| column.primary_key && column.is_nullable())
    {
        Some(column) => Err(Error::invalid_schema(format!(
            "primary key column <{}> is nullable",
            column.name
        ))),
        None => Ok(()),
    }
}

/// At most one auto-increment column, and it must hold integers.
pub(super) fn verify_auto_increment(columns: &Columns) -> Result<()> {
    let mut auto_increment = columns.iter().filter(|column| column.auto_increment);

    if let Some(first) = auto_increment.next() {
        if let Some(second) = auto_increment.next() {
            return Err(Error::invalid_schema(format!(
                "multiple auto-increment columns: <{}> and <{}>",
                first.name, second.name
            )));
        }

        if !matches!(first.kind(), Kind::Int | Kind::Uint) {
            return Err(Error::invalid_schema(format!(
                "auto-increment column <{}> has non-integer type {}",
                first.name, first.ty
            )));
        }
    }

    Ok(())
}
