use std::fmt;

use serde::Serialize;

use crate::plan::PlanError;

/// Aggregate function applied by a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Sum,
    Avg,
    Min,
    Max,
    Count,
    /// Accepted from producers but downgraded to `Count` by the normalizer; the compiler refuses it.
    CountDistinct,
}

impl Aggregation {
    pub fn name(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Avg => "avg",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
            Aggregation::Count => "count",
            Aggregation::CountDistinct => "count_distinct",
        }
    }

    /// SQL function name, or `None` for aggregations the compiler cannot emit.
    pub fn sql_function(&self) -> Option<&'static str> {
        match self {
            Aggregation::Sum => Some("SUM"),
            Aggregation::Avg => Some("AVG"),
            Aggregation::Min => Some("MIN"),
            Aggregation::Max => Some("MAX"),
            Aggregation::Count => Some("COUNT"),
            Aggregation::CountDistinct => None,
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Aggregation {
    type Error = PlanError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        match text.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Aggregation::Sum),
            "avg" => Ok(Aggregation::Avg),
            "min" => Ok(Aggregation::Min),
            "max" => Ok(Aggregation::Max),
            "count" => Ok(Aggregation::Count),
            "count_distinct" => Ok(Aggregation::CountDistinct),
            _ => Err(PlanError::UnknownAggregation(text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_in_any_case() {
        assert_eq!(Aggregation::try_from("AVG").unwrap(), Aggregation::Avg);
        assert_eq!(Aggregation::try_from("count_distinct").unwrap(), Aggregation::CountDistinct);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = Aggregation::try_from("median").unwrap_err();
        assert_eq!(err, PlanError::UnknownAggregation("median".into()));
        assert!(err.to_string().starts_with("\"median\" is not one of sum, avg"));
    }

    #[test]
    fn count_distinct_has_no_sql_function() {
        assert_eq!(Aggregation::CountDistinct.sql_function(), None);
        assert_eq!(Aggregation::Count.sql_function(), Some("COUNT"));
    }
}
