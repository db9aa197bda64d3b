use thiserror::Error;

use crate::plan::PlanError;

/// Why a typed plan could not be compiled. Each variant names the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("invalid table: {0:?}")]
    InvalidTable(String),

    #[error("invalid dimension: {0:?}")]
    InvalidDimension(String),

    #[error("at least one measure is required")]
    NoMeasures,

    #[error("invalid aggregation: {0:?}")]
    InvalidAggregation(String),

    #[error("invalid column in measure: {0:?}")]
    InvalidMeasureColumn(String),

    #[error("invalid measure alias: {0:?}")]
    InvalidAlias(String),

    #[error("invalid column in filter: {0:?}")]
    InvalidFilterColumn(String),

    #[error("invalid operator: {0:?}")]
    InvalidOperator(String),

    #[error("invalid value for {column} {op}: {reason}")]
    InvalidFilterValue { column: String, op: String, reason: String },

    #[error("invalid order key {key:?}, must be one of {allowed:?}")]
    InvalidOrderKey { key: String, allowed: Vec<String> },

    #[error("order direction must be asc or desc, got {0:?}")]
    InvalidOrderDirection(String),
}

impl From<PlanError> for CompileError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::UnknownAggregation(text) => CompileError::InvalidAggregation(text),
            PlanError::UnknownOperator(text) => CompileError::InvalidOperator(text),
        }
    }
}
