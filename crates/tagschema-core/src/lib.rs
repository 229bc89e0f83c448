//! Tag-keyed schemas and rows.
//!
//! Every column of a table is identified by a permanent numeric [`Tag`]
//! assigned once and never reused, not by its position or its name. Rows are
//! stored as maps from tag to value, which lets two versions of a table with
//! diverged schemas be diffed, merged and projected onto each other without
//! corrupting historical data.
//!
//! The [`sql`] module is the seam with a SQL engine: it converts between
//! ordinal rows/column lists and the tag-keyed representation.
//!
//! [`Tag`]: schema::Tag

mod error;
pub use error::{Error, IntoError};

pub mod row;
pub use row::Row;

pub mod rowconv;
pub use rowconv::{RowConverter, TagMapping};

pub mod schema;
pub use schema::Schema;

pub mod sql;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
