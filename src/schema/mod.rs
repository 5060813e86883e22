//! Table catalog and SQL generation.

mod catalog;
mod column;
mod database;
mod dialect;
mod table_schema;
mod types;

pub use catalog::describe;
pub use column::{ColumnDef, DefaultValue, KEY_COLUMN};
pub use database::DatabaseSchema;
pub use dialect::Dialect;
pub use table_schema::TableSchema;
pub use types::{ColumnType, map_type};
