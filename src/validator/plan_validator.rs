use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    plan::{Aggregation, Filter, FilterOp, FilterValue, Intent, Literal, Measure, MeasureColumn, OrderItem, QueryPlan},
    schema::PlanConfig,
    validator::{coerce_limit, ValidationError, ValidationErrors},
};

const DEFAULT_DIRECTION: &str = "desc";

/// Turns a normalized plan into a typed [`QueryPlan`].
///
/// Checks required fields and enum membership, coerces the limit, folds
/// order directions to lower case, requires at least one measure and
/// fills in the default ordering. Table and column names are not checked
/// against the allowlist here; [`SqlCompiler`](crate::SqlCompiler) is the
/// single place that enforces it.
pub struct PlanValidator<'a> {
    config: &'a PlanConfig,
}

impl<'a> PlanValidator<'a> {
    pub fn new(config: &'a PlanConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, value: &Value) -> Result<QueryPlan, ValidationErrors> {
        let Some(root) = value.as_object() else {
            return Err(ValidationErrors(vec![ValidationError::field("$", "plan must be an object")]));
        };

        let mut errors = Vec::new();

        let table = Self::table(root, &mut errors);
        let intent = Self::intent(root, &mut errors);
        let dimensions = Self::dimensions(root, &mut errors);
        let measures = Self::measures(root, &mut errors);
        let filters = Self::filters(root, &mut errors);
        let order_by = Self::order_by(root, &mut errors);
        let limit = coerce_limit(root.get("limit"), self.config);

        if !errors.is_empty() {
            warn!(errors = errors.len(), "plan rejected by validator");
            return Err(ValidationErrors(errors));
        }

        if measures.is_empty() {
            warn!("plan rejected by validator: no measures");
            return Err(ValidationErrors(vec![ValidationError::Structural(
                "at least one measure is required".to_string(),
            )]));
        }

        let order_by = Self::default_order_by(order_by, &measures[0].alias());

        let plan = QueryPlan { table, intent, dimensions, measures, filters, order_by, limit };
        debug!(table = %plan.table, measures = plan.measures.len(), filters = plan.filters.len(), limit = plan.limit, "plan validated");
        Ok(plan)
    }

    /// An empty ordering becomes "first measure, descending"; items that name no key point at the first measure.
    fn default_order_by(order_by: Vec<OrderItem>, first_alias: &str) -> Vec<OrderItem> {
        if order_by.is_empty() {
            return vec![OrderItem::by_expr(first_alias, DEFAULT_DIRECTION)];
        }

        order_by
            .into_iter()
            .map(|item| {
                if item.has_reference() {
                    item
                } else {
                    OrderItem { expr: Some(first_alias.to_string()), ..item }
                }
            })
            .collect()
    }

    fn table(root: &Map<String, Value>, errors: &mut Vec<ValidationError>) -> String {
        match root.get("table") {
            Some(Value::String(table)) if !table.trim().is_empty() => table.trim().to_string(),
            Some(Value::String(_)) => {
                errors.push(ValidationError::field("table", "must not be empty"));
                String::new()
            }
            None | Some(Value::Null) => {
                errors.push(ValidationError::field("table", "is required"));
                String::new()
            }
            Some(_) => {
                errors.push(ValidationError::field("table", "must be a string"));
                String::new()
            }
        }
    }

    fn intent(root: &Map<String, Value>, errors: &mut Vec<ValidationError>) -> Intent {
        match root.get("intent") {
            None | Some(Value::Null) => Intent::default(),
            Some(Value::String(text)) => Intent::parse(text).unwrap_or_else(|| {
                errors.push(ValidationError::field("intent", format!("{text:?} is not one of aggregate, select, topk")));
                Intent::default()
            }),
            Some(_) => {
                errors.push(ValidationError::field("intent", "must be a string"));
                Intent::default()
            }
        }
    }

    fn dimensions(root: &Map<String, Value>, errors: &mut Vec<ValidationError>) -> Vec<String> {
        let Some(items) = Self::optional_array(root, "dimensions", errors) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(name) => out.push(name.clone()),
                _ => errors.push(ValidationError::field(format!("dimensions[{i}]"), "must be a string")),
            }
        }
        out
    }

    fn measures(root: &Map<String, Value>, errors: &mut Vec<ValidationError>) -> Vec<Measure> {
        let items = match root.get("measures") {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => {
                errors.push(ValidationError::field("measures", "is required"));
                return Vec::new();
            }
            Some(_) => {
                errors.push(ValidationError::field("measures", "must be an array"));
                return Vec::new();
            }
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let path = format!("measures[{i}]");
            let Some(obj) = item.as_object() else {
                errors.push(ValidationError::field(path, "must be an object"));
                continue;
            };

            let name = Self::optional_string(obj, &path, "name", errors);
            let agg = match obj.get("agg") {
                Some(Value::String(text)) => match Aggregation::try_from(text.as_str()) {
                    Ok(agg) => Some(agg),
                    Err(err) => {
                        errors.push(ValidationError::field(format!("{path}.agg"), err.to_string()));
                        None
                    }
                },
                _ => {
                    errors.push(ValidationError::field(format!("{path}.agg"), "is required and must be a string"));
                    None
                }
            };
            let column = match obj.get("column") {
                Some(Value::String(column)) if !column.trim().is_empty() => Some(MeasureColumn::parse(column)),
                _ => {
                    errors.push(ValidationError::field(format!("{path}.column"), "is required and must be a non-empty string"));
                    None
                }
            };

            if let (Some(agg), Some(column)) = (agg, column) {
                out.push(Measure { name, agg, column });
            }
        }
        out
    }

    fn filters(root: &Map<String, Value>, errors: &mut Vec<ValidationError>) -> Vec<Filter> {
        let Some(items) = Self::optional_array(root, "filters", errors) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let path = format!("filters[{i}]");
            let Some(obj) = item.as_object() else {
                errors.push(ValidationError::field(path, "must be an object"));
                continue;
            };

            let column = match obj.get("column") {
                Some(Value::String(column)) => Some(column.clone()),
                _ => {
                    errors.push(ValidationError::field(format!("{path}.column"), "is required and must be a string"));
                    None
                }
            };
            let op = match obj.get("op") {
                Some(Value::String(text)) => match FilterOp::try_from(text.as_str()) {
                    Ok(op) => Some(op),
                    Err(err) => {
                        errors.push(ValidationError::field(format!("{path}.op"), err.to_string()));
                        None
                    }
                },
                _ => {
                    errors.push(ValidationError::field(format!("{path}.op"), "is required and must be a string"));
                    None
                }
            };
            let value = match Self::filter_value(obj.get("value")) {
                Ok(value) => Some(value),
                Err(reason) => {
                    errors.push(ValidationError::field(format!("{path}.value"), reason));
                    None
                }
            };

            if let (Some(column), Some(op), Some(value)) = (column, op, value) {
                out.push(Filter { column, op, value });
            }
        }
        out
    }

    fn filter_value(value: Option<&Value>) -> Result<FilterValue, &'static str> {
        match value {
            None | Some(Value::Null) => Ok(FilterValue::Absent),
            Some(Value::Array(items)) => items
                .iter()
                .map(Literal::from_json)
                .collect::<Option<Vec<_>>>()
                .map(FilterValue::List)
                .ok_or("list elements must be scalars"),
            Some(Value::Object(_)) => Err("must be a scalar or a list of scalars"),
            Some(scalar) => Literal::from_json(scalar).map(FilterValue::Scalar).ok_or("is not a bindable value"),
        }
    }

    fn order_by(root: &Map<String, Value>, errors: &mut Vec<ValidationError>) -> Vec<OrderItem> {
        let Some(items) = Self::optional_array(root, "order_by", errors) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let path = format!("order_by[{i}]");
            match item {
                Value::Null => out.push(OrderItem { dir: DEFAULT_DIRECTION.to_string(), ..Default::default() }),
                Value::String(expr) => out.push(OrderItem::by_expr(expr, DEFAULT_DIRECTION)),
                Value::Object(obj) => {
                    let dir = match obj.get("dir") {
                        None | Some(Value::Null) => DEFAULT_DIRECTION.to_string(),
                        Some(Value::String(dir)) if dir.trim().is_empty() => DEFAULT_DIRECTION.to_string(),
                        Some(Value::String(dir)) => dir.trim().to_lowercase(),
                        Some(_) => {
                            errors.push(ValidationError::field(format!("{path}.dir"), "must be a string"));
                            continue;
                        }
                    };
                    out.push(OrderItem {
                        name: Self::optional_string(obj, &path, "name", errors),
                        expr: Self::optional_string(obj, &path, "expr", errors),
                        column: Self::optional_string(obj, &path, "column", errors),
                        agg: Self::optional_string(obj, &path, "agg", errors),
                        index: obj.get("index").and_then(Self::read_index),
                        dir,
                    });
                }
                _ => errors.push(ValidationError::field(path, "must be an object")),
            }
        }
        out
    }

    /// Integers and integer strings; anything else is treated as absent.
    fn read_index(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    fn optional_array<'v>(
        root: &'v Map<String, Value>,
        key: &str,
        errors: &mut Vec<ValidationError>,
    ) -> Option<&'v Vec<Value>> {
        match root.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(items),
            Some(_) => {
                errors.push(ValidationError::field(key, "must be an array"));
                None
            }
        }
    }

    fn optional_string(
        obj: &Map<String, Value>,
        path: &str,
        key: &str,
        errors: &mut Vec<ValidationError>,
    ) -> Option<String> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                errors.push(ValidationError::field(format!("{path}.{key}"), "must be a string"));
                None
            }
        }
    }
}
