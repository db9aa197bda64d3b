pub mod order_by_resolver;
pub use order_by_resolver::*;

pub mod name_stage;
pub use name_stage::*;

pub mod expr_stage;
pub use expr_stage::*;

pub mod pair_stage;
pub use pair_stage::*;

pub mod index_stage;
pub use index_stage::*;

pub mod fallback_stage;
pub use fallback_stage::*;

use crate::{compiler::{CompileError, OutputScope}, plan::OrderItem};

/// Outcome of one resolution stage: a resolved output name, `None` to try the next stage, or a hard failure.
pub type StageResult = Result<Option<String>, CompileError>;

/// Signature shared by every stage of the order-key cascade.
pub type StageFn = fn(&OrderItem, &OutputScope) -> StageResult;

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
