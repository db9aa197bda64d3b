use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    compiler::{non_blank, OutputScope, StageResult},
    plan::{Aggregation, MeasureColumn, OrderItem},
};

static AGG_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z_]+)\s*\(\s*([\w*]+)\s*\)\s*$").expect("aggregate call pattern is valid")
});

/// A free-form `expr`: an output name as-is, or `agg(column)` mapped to the alias of the matching measure.
///
/// The expression text itself never reaches the statement.
pub struct ExprStage;

impl ExprStage {
    pub fn resolve(item: &OrderItem, scope: &OutputScope) -> StageResult {
        let Some(expr) = non_blank(&item.expr) else {
            return Ok(None);
        };
        if scope.is_allowed(expr) {
            return Ok(Some(expr.to_string()));
        }

        let Some(caps) = AGG_CALL.captures(expr) else {
            return Ok(None);
        };
        let Ok(agg) = Aggregation::try_from(&caps[1]) else {
            return Ok(None);
        };
        let column = MeasureColumn::parse(&caps[2]);

        Ok(scope.alias_for(agg, &column).map(str::to_string))
    }
}
