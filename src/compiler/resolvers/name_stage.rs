use crate::{
    compiler::{non_blank, CompileError, OutputScope, StageResult},
    plan::OrderItem,
};

/// An explicit `name` must already be an output name. It is never replaced by a guess.
pub struct NameStage;

impl NameStage {
    pub fn resolve(item: &OrderItem, scope: &OutputScope) -> StageResult {
        let Some(name) = non_blank(&item.name) else {
            return Ok(None);
        };
        if scope.is_allowed(name) {
            Ok(Some(name.to_string()))
        } else {
            Err(CompileError::InvalidOrderKey { key: name.to_string(), allowed: scope.allowed() })
        }
    }
}
