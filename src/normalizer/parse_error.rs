use thiserror::Error;

/// The producer's output could not be read as a key/value plan at all.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("plan is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plan must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}
