use crate::{
    compiler::{non_blank, OutputScope, StageResult},
    plan::{Aggregation, MeasureColumn, OrderItem},
};

/// A `{column, agg}` pair mapped to the alias of the matching measure.
pub struct PairStage;

impl PairStage {
    pub fn resolve(item: &OrderItem, scope: &OutputScope) -> StageResult {
        let (Some(column), Some(agg)) = (non_blank(&item.column), non_blank(&item.agg)) else {
            return Ok(None);
        };
        let Ok(agg) = Aggregation::try_from(agg) else {
            return Ok(None);
        };

        Ok(scope.alias_for(agg, &MeasureColumn::parse(column)).map(str::to_string))
    }
}
