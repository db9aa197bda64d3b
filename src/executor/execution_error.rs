use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The engine refused or failed the statement.
    #[error("{engine} failed to execute query: {message}")]
    Engine { engine: String, message: String },

    #[error("row {row} has {found} values but the result has {expected} columns")]
    RowShape { row: usize, expected: usize, found: usize },
}

impl ExecutionError {
    pub fn engine(engine: impl Into<String>, message: impl Into<String>) -> Self {
        ExecutionError::Engine { engine: engine.into(), message: message.into() }
    }
}
