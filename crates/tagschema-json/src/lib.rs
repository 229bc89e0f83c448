//! Streaming JSON export of finished rows.
//!
//! Rows are written as `{"rows": [{...},{...}]}`, one object per row keyed by
//! column name. The document is streamed: nothing but the current row is held
//! in memory, so exporting a large table costs no more than exporting a small
//! one.

mod value;

mod writer;
pub use writer::{Builder, JsonWriter};

pub use tagschema_core::{Error, Result};
