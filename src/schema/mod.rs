pub mod schema_allowlist;
pub use schema_allowlist::*;

pub mod schema_error;
pub use schema_error::*;

pub mod plan_config;
pub use plan_config::*;

pub mod identifier;
pub use identifier::*;

/// Read-only view of the tables and columns a compiled statement may reference.
pub trait SchemaProvider: Send + Sync {
    /// True when `table` is an allowed table.
    fn has_table(&self, table: &str) -> bool;

    /// True when `column` is an allowed column of `table`. Unknown tables have no columns.
    fn has_column(&self, table: &str, column: &str) -> bool;
}
