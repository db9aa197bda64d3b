use thiserror::Error;

/// A single reason a normalized plan could not become a [`QueryPlan`](crate::QueryPlan).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Missing field, wrong type, or a value outside its enum.
    #[error("{field}: {reason}")]
    Field { field: String, reason: String },

    /// A rule spanning several fields, such as "at least one measure".
    #[error("{0}")]
    Structural(String),
}

impl ValidationError {
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Field { field: field.into(), reason: reason.into() }
    }
}

/// Every violation found in one plan, in document order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid plan: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Field paths of the field-level errors, e.g. `filters[0].op`.
    pub fn fields(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter_map(|e| match e {
                ValidationError::Field { field, .. } => Some(field.as_str()),
                ValidationError::Structural(_) => None,
            })
            .collect()
    }
}
