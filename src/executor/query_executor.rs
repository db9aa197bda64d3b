use std::future::Future;

use crate::{
    compiler::CompiledQuery,
    executor::{ExecutionError, RowSet},
};

/// A database engine able to run a compiled, parameterized statement.
///
/// Implementations bind `query.params` by name to the `:name` placeholders in
/// `query.sql`; the statement text must never be re-assembled from values.
pub trait QueryExecutor: Send + Sync {
    /// Dialect or engine name reported with every result, e.g. `"sqlite"`.
    fn engine_name(&self) -> &str;

    fn execute(&self, query: &CompiledQuery) -> impl Future<Output = Result<RowSet, ExecutionError>> + Send;
}
