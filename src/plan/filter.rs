use serde::{Serialize, Serializer};

use crate::plan::{FilterOp, Literal};

/// Right-hand side of a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// No value, as for `IS NULL` / `IS NOT NULL`
    Absent,
    Scalar(Literal),
    List(Vec<Literal>),
}

impl FilterValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FilterValue::Absent)
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterValue::Absent => serializer.serialize_none(),
            FilterValue::Scalar(literal) => literal.serialize(serializer),
            FilterValue::List(items) => items.serialize(serializer),
        }
    }
}

/// One `column op value` condition; conditions are ANDed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    #[serde(skip_serializing_if = "FilterValue::is_absent")]
    pub value: FilterValue,
}

impl Filter {
    pub fn new(column: &str, op: FilterOp, value: FilterValue) -> Self {
        Self { column: column.to_string(), op, value }
    }
}
