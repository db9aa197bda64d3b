use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    normalizer::{canonical_plan_key, looks_like_conditional, repair_operator, ParseError},
    schema::PlanConfig,
};

/// Best-effort repair of a producer's raw plan into the shape the validator expects.
///
/// Only shape and vocabulary are fixed here: key spellings, operator
/// spellings, `count_distinct`, conditional measure columns and a missing
/// limit. Nothing is checked against the schema allowlist, and anything
/// that cannot be repaired is passed through for the validator to reject.
pub struct PlanNormalizer<'a> {
    config: &'a PlanConfig,
}

impl<'a> PlanNormalizer<'a> {
    pub fn new(config: &'a PlanConfig) -> Self {
        Self { config }
    }

    /// Parse the producer's text and repair it.
    pub fn normalize(&self, raw: &str) -> Result<Value, ParseError> {
        let value = serde_json::from_str::<Value>(raw)?;
        self.normalize_value(value)
    }

    /// Repair an already-parsed plan. The root must be an object.
    pub fn normalize_value(&self, value: Value) -> Result<Value, ParseError> {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(ParseError::NotAnObject(kind_of(&other))),
        };

        let mut plan = Self::repair_plan_keys(map);

        if let Some(Value::Array(measures)) = plan.get_mut("measures") {
            for measure in measures.iter_mut().filter_map(Value::as_object_mut) {
                self.repair_measure(measure);
            }
        }

        if let Some(Value::Array(filters)) = plan.get_mut("filters") {
            for filter in filters.iter_mut().filter_map(Value::as_object_mut) {
                Self::repair_filter(filter);
            }
        }

        if plan.get("limit").is_none_or(Value::is_null) {
            debug!(default = self.config.default_limit(), "plan has no limit, using default");
            plan.insert("limit".to_string(), Value::from(self.config.default_limit()));
        }

        Ok(Value::Object(plan))
    }

    fn repair_plan_keys(map: Map<String, Value>) -> Map<String, Value> {
        let mut out = Map::with_capacity(map.len());
        let mut renamed = Vec::new();

        for (key, value) in map {
            match canonical_plan_key(&key) {
                Some(canonical) if canonical != key => renamed.push((key, canonical, value)),
                _ => {
                    out.insert(key, value);
                }
            }
        }

        // exact spellings win over repaired ones
        for (key, canonical, value) in renamed {
            if out.contains_key(canonical) {
                debug!(key = %key, "dropping duplicate plan key");
                continue;
            }
            debug!(from = %key, to = canonical, "renamed plan key");
            out.insert(canonical.to_string(), value);
        }

        out
    }

    fn repair_measure(&self, measure: &mut Map<String, Value>) {
        if let Some(Value::String(agg)) = measure.get_mut("agg") {
            let lower = agg.to_ascii_lowercase();
            if lower == "count_distinct" {
                debug!("downgrading count_distinct to count");
                *agg = "count".to_string();
            } else {
                *agg = lower;
            }
        }

        if let Some(Value::String(column)) = measure.get_mut("column") {
            if looks_like_conditional(column) {
                debug!(column = %column, fallback = %self.config.fallback_measure_column(), "replacing conditional measure column");
                *column = self.config.fallback_measure_column().to_string();
            }
        }
    }

    fn repair_filter(filter: &mut Map<String, Value>) {
        for alias in ["col", "expr"] {
            if let Some(value) = filter.remove(alias) {
                debug!(alias, "renamed filter key to column");
                filter.insert("column".to_string(), value);
            }
        }
        if let Some(value) = filter.remove("val") {
            filter.insert("value".to_string(), value);
        }
        if !filter.contains_key("op") {
            if let Some(value) = filter.remove("operator") {
                filter.insert("op".to_string(), value);
            }
        }

        match filter.get_mut("op") {
            Some(Value::String(op)) => {
                let repaired = repair_operator(op);
                if repaired != *op {
                    debug!(from = %op, to = %repaired, "repaired filter operator");
                }
                *op = repaired;
            }
            None => {
                filter.insert("op".to_string(), Value::String(String::new()));
            }
            Some(_) => {}
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
