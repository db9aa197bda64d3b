use thiserror::Error;

use crate::{compiler::CompileError, executor::ExecutionError, normalizer::ParseError, validator::ValidationErrors};

/// The first stage that turned a raw plan down.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("plan rejected: {0}")]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl PipelineError {
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Parse(_) => "parse",
            PipelineError::Validation(_) => "validation",
            PipelineError::Compile(_) => "compile",
            PipelineError::Execution(_) => "execution",
        }
    }
}
