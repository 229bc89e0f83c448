mod allocator;
pub use allocator::{TagAllocator, TagHistory};

mod column;
pub use column::{Column, Constraint};

mod columns;
pub use columns::Columns;

#[allow(clippy::module_inception)]
mod schema;
pub use schema::Schema;

mod tag;
pub use tag::{Tag, RESERVED_TAG_MIN};

mod ty;
pub use ty::{Kind, TypeInfo};

mod verify;

use crate::Result;
