use serde::Serialize;

use crate::plan::{Filter, Intent, Measure, OrderItem};

/// A strongly-typed query plan.
///
/// Produced by [`PlanValidator`](crate::PlanValidator) for each request and
/// consumed by [`SqlCompiler`](crate::SqlCompiler); it is never mutated in
/// between. Serializing it yields the canonical wire shape the validator
/// accepts, so `validate(to_value(plan))` reproduces the same plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryPlan {
    pub table: String,
    pub intent: Intent,
    pub dimensions: Vec<String>,
    pub measures: Vec<Measure>,
    pub filters: Vec<Filter>,
    pub order_by: Vec<OrderItem>,
    pub limit: i64,
}

impl QueryPlan {
    /// Alias of the first measure, the default sort key.
    pub fn first_alias(&self) -> Option<String> {
        self.measures.first().map(Measure::alias)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::plan::{Aggregation, FilterOp, FilterValue, Literal, MeasureColumn};

    #[test]
    fn serializes_to_canonical_shape() {
        let plan = QueryPlan {
            table: "join_emp_action".into(),
            intent: Intent::Aggregate,
            dimensions: vec!["Department".into()],
            measures: vec![Measure::new(Some("promotions"), Aggregation::Count, MeasureColumn::All)],
            filters: vec![
                Filter::new("ActionID", FilterOp::In, FilterValue::List(vec![Literal::from("promotion")])),
                Filter::new("ActionDate", FilterOp::IsNotNull, FilterValue::Absent),
            ],
            order_by: vec![OrderItem::by_expr("promotions", "desc")],
            limit: 100,
        };

        assert_eq!(
            serde_json::to_value(&plan).unwrap(),
            json!({
                "table": "join_emp_action",
                "intent": "aggregate",
                "dimensions": ["Department"],
                "measures": [{"name": "promotions", "agg": "count", "column": "*"}],
                "filters": [
                    {"column": "ActionID", "op": "IN", "value": ["promotion"]},
                    {"column": "ActionDate", "op": "IS NOT NULL"}
                ],
                "order_by": [{"expr": "promotions", "dir": "desc"}],
                "limit": 100
            })
        );
        assert_eq!(plan.first_alias().as_deref(), Some("promotions"));
    }
}
