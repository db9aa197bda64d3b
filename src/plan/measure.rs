use serde::{Serialize, Serializer};

use crate::plan::Aggregation;

/// Marker a producer uses for "all rows" in a measure column.
pub const WILDCARD: &str = "*";

/// Column a measure aggregates over.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MeasureColumn {
    /// `*`, only meaningful for `count`
    All,
    Named(String),
}

impl MeasureColumn {
    pub fn parse(text: &str) -> MeasureColumn {
        if text.trim() == WILDCARD {
            MeasureColumn::All
        } else {
            MeasureColumn::Named(text.to_string())
        }
    }

    /// Name used when deriving aliases: the column itself, or `all` for the wildcard.
    pub fn alias_part(&self) -> &str {
        match self {
            MeasureColumn::All => "all",
            MeasureColumn::Named(name) => name,
        }
    }
}

impl Serialize for MeasureColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MeasureColumn::All => serializer.serialize_str(WILDCARD),
            MeasureColumn::Named(name) => serializer.serialize_str(name),
        }
    }
}

/// One aggregate in the select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub agg: Aggregation,
    pub column: MeasureColumn,
}

impl Measure {
    pub fn new(name: Option<&str>, agg: Aggregation, column: MeasureColumn) -> Self {
        Self { name: name.map(str::to_string), agg, column }
    }

    /// Output name: the explicit name when given, otherwise `{agg}_{column}` (`{agg}_all` for `*`).
    pub fn alias(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("{}_{}", self.agg.name(), self.column.alias_part()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_prefers_explicit_name() {
        let m = Measure::new(Some("avg_rating"), Aggregation::Avg, MeasureColumn::parse("Rating"));
        assert_eq!(m.alias(), "avg_rating");
    }

    #[test]
    fn alias_is_derived_when_missing() {
        let m = Measure::new(None, Aggregation::Sum, MeasureColumn::parse("PayRate"));
        assert_eq!(m.alias(), "sum_PayRate");

        let all = Measure::new(None, Aggregation::Count, MeasureColumn::parse("*"));
        assert_eq!(all.alias(), "count_all");

        let blank = Measure::new(Some(""), Aggregation::Max, MeasureColumn::parse("Year"));
        assert_eq!(blank.alias(), "max_Year");
    }

    #[test]
    fn wildcard_round_trips_as_star() {
        assert_eq!(MeasureColumn::parse(" * "), MeasureColumn::All);
        assert_eq!(serde_json::to_value(MeasureColumn::All).unwrap(), "*");
    }
}
