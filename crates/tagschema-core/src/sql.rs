//! The seam with a SQL engine.
//!
//! The engine works with ordinal rows ([`Row`]) described by an ordered list
//! of [`Column`] descriptors, and knows nothing about tags. This module
//! converts rows and schemas in both directions, allocating tags for new
//! columns on the way in and annotating exported columns with their tag on
//! the way out.

mod annotation;
pub use annotation::TAG_ANNOTATION_PREFIX;

mod column;
pub use column::Column;

mod convert;
pub use convert::{
    add_columns, from_schema, from_sql_row, to_column, to_result_schema, to_schema, to_sql_row,
};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

/// An ordinal row: one value per column of the accompanying column list.
pub type Row = Vec<Value>;
