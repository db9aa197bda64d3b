use crate::{
    compiler::{OutputScope, StageResult},
    plan::OrderItem,
};

/// Last resort: the first measure.
pub struct FallbackStage;

impl FallbackStage {
    pub fn resolve(_item: &OrderItem, scope: &OutputScope) -> StageResult {
        Ok(scope.first_alias().map(str::to_string))
    }
}
