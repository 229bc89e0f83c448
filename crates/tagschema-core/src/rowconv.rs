//! Converting rows between two tagged schemas.
//!
//! A [`TagMapping`] pairs source tags with destination tags, and a
//! [`RowConverter`] uses it to project rows of the source schema onto the
//! destination schema. Merges, migrations and format projections all go
//! through this.

mod converter;
pub use converter::RowConverter;

mod mapping;
pub use mapping::TagMapping;
