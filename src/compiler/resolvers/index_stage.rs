use crate::{
    compiler::{OutputScope, StageResult},
    plan::OrderItem,
};

/// A zero-based `index` into the measures; out-of-range indexes fall through.
pub struct IndexStage;

impl IndexStage {
    pub fn resolve(item: &OrderItem, scope: &OutputScope) -> StageResult {
        Ok(item.index.and_then(|i| scope.alias_at(i)).map(str::to_string))
    }
}
