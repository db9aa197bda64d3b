use std::fmt;

use serde::Serialize;

use crate::plan::PlanError;

/// Comparison operators a filter may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FilterOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "BETWEEN")]
    Between,
    #[serde(rename = "IS NULL")]
    IsNull,
    #[serde(rename = "IS NOT NULL")]
    IsNotNull,
}

impl FilterOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::NotEq => "!=",
            FilterOp::Lt => "<",
            FilterOp::Gt => ">",
            FilterOp::LtEq => "<=",
            FilterOp::GtEq => ">=",
            FilterOp::Like => "LIKE",
            FilterOp::In => "IN",
            FilterOp::Between => "BETWEEN",
            FilterOp::IsNull => "IS NULL",
            FilterOp::IsNotNull => "IS NOT NULL",
        }
    }

    pub fn is_null_check(&self) -> bool {
        matches!(self, FilterOp::IsNull | FilterOp::IsNotNull)
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl TryFrom<&str> for FilterOp {
    type Error = PlanError;

    /// Case-insensitive; runs of whitespace inside `IS NOT NULL` count as one space.
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let folded = text.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_uppercase();
        match folded.as_str() {
            "=" => Ok(FilterOp::Eq),
            "!=" => Ok(FilterOp::NotEq),
            "<" => Ok(FilterOp::Lt),
            ">" => Ok(FilterOp::Gt),
            "<=" => Ok(FilterOp::LtEq),
            ">=" => Ok(FilterOp::GtEq),
            "LIKE" => Ok(FilterOp::Like),
            "IN" => Ok(FilterOp::In),
            "BETWEEN" => Ok(FilterOp::Between),
            "IS NULL" => Ok(FilterOp::IsNull),
            "IS NOT NULL" => Ok(FilterOp::IsNotNull),
            _ => Err(PlanError::UnknownOperator(text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_spelling() {
        let cases = [
            ("=", FilterOp::Eq),
            ("!=", FilterOp::NotEq),
            ("<", FilterOp::Lt),
            (">", FilterOp::Gt),
            ("<=", FilterOp::LtEq),
            (">=", FilterOp::GtEq),
            ("like", FilterOp::Like),
            ("In", FilterOp::In),
            ("BETWEEN", FilterOp::Between),
            ("is null", FilterOp::IsNull),
            ("IS  NOT   NULL", FilterOp::IsNotNull),
        ];
        for (text, op) in cases {
            assert_eq!(FilterOp::try_from(text).unwrap(), op, "{text}");
        }
    }

    #[test]
    fn rejects_unknown_operators() {
        assert_eq!(FilterOp::try_from("GTE"), Err(PlanError::UnknownOperator("GTE".into())));
        assert_eq!(FilterOp::try_from("<>"), Err(PlanError::UnknownOperator("<>".into())));
        assert_eq!(FilterOp::try_from("; DROP"), Err(PlanError::UnknownOperator("; DROP".into())));
    }

    #[test]
    fn serializes_as_sql_text() {
        assert_eq!(serde_json::to_value(FilterOp::IsNotNull).unwrap(), "IS NOT NULL");
        assert_eq!(serde_json::to_value(FilterOp::GtEq).unwrap(), ">=");
    }
}
