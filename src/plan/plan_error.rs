use thiserror::Error;

/// A plan keyword that names no known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("{0:?} is not one of sum, avg, min, max, count, count_distinct")]
    UnknownAggregation(String),

    #[error("{0:?} is not one of =, !=, <, >, <=, >=, LIKE, IN, BETWEEN, IS NULL, IS NOT NULL")]
    UnknownOperator(String),
}
