use thiserror::Error;

/// Failures while building a [`SchemaAllowlist`](crate::SchemaAllowlist).
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("schema allowlist has no tables")]
    Empty,

    #[error("table {0:?} has no columns")]
    EmptyTable(String),

    #[error("{0:?} is not a plain SQL identifier")]
    InvalidIdentifier(String),

    #[error("allowlist must be a JSON object of table -> [columns]: {0}")]
    InvalidShape(String),

    #[error("could not read allowlist file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("allowlist file {path} does not contain valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
