use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    compiler::CompiledQuery,
    executor::ExecutionError,
    plan::Literal,
};

/// Raw result of one statement, rows in engine order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl RowSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, ExecutionError> {
        let expected = columns.len();
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, values)| values.len() != expected) {
            return Err(ExecutionError::RowShape { row, expected, found: values.len() });
        }
        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What a run hands back to callers: the rows plus the exact statement and
/// parameters that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub row_count: usize,
    pub sql: String,
    pub params: IndexMap<String, Literal>,
    pub engine: String,
}

impl ExecutionResult {
    pub fn new(query: CompiledQuery, rows: RowSet, engine: &str) -> Self {
        Self {
            row_count: rows.rows.len(),
            columns: rows.columns,
            rows: rows.rows,
            sql: query.sql,
            params: query.params,
            engine: engine.to_string(),
        }
    }

    /// `{columns, rows, row_count, sql}` for the summarizer. Parameter values
    /// are left out.
    pub fn narration_payload(&self) -> Value {
        json!({
            "columns": self.columns,
            "rows": self.rows,
            "row_count": self.row_count,
            "sql": self.sql,
        })
    }
}
