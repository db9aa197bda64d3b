use std::fmt;

use tracing::debug;

use crate::{
    compiler::{CompileError, ExprStage, FallbackStage, IndexStage, NameStage, OutputScope, PairStage, StageFn},
    plan::OrderItem,
};

/// Stages tried for every order item, first success wins.
pub const ORDER_KEY_STAGES: [(&str, StageFn); 5] = [
    ("name", NameStage::resolve),
    ("expr", ExprStage::resolve),
    ("pair", PairStage::resolve),
    ("index", IndexStage::resolve),
    ("fallback", FallbackStage::resolve),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive; an empty direction means descending.
    pub fn parse(text: &str) -> Result<SortDirection, CompileError> {
        match text.trim().to_ascii_uppercase().as_str() {
            "" | "DESC" => Ok(SortDirection::Desc),
            "ASC" => Ok(SortDirection::Asc),
            _ => Err(CompileError::InvalidOrderDirection(text.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("ASC"),
            SortDirection::Desc => f.write_str("DESC"),
        }
    }
}

/// An `ORDER BY` term whose key is guaranteed to be an output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOrder {
    pub key: String,
    pub direction: SortDirection,
}

impl fmt::Display for ResolvedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.direction)
    }
}

pub struct OrderByResolver;

impl OrderByResolver {
    pub fn resolve_all(items: &[OrderItem], scope: &OutputScope) -> Result<Vec<ResolvedOrder>, CompileError> {
        items.iter().map(|item| Self::resolve(item, scope)).collect()
    }

    pub fn resolve(item: &OrderItem, scope: &OutputScope) -> Result<ResolvedOrder, CompileError> {
        let mut key = None;
        for (stage, resolve) in ORDER_KEY_STAGES {
            if let Some(found) = resolve(item, scope)? {
                debug!(stage, key = %found, "resolved order key");
                key = Some(found);
                break;
            }
        }

        let key = key.unwrap_or_default();
        if !scope.is_allowed(&key) {
            return Err(CompileError::InvalidOrderKey { key, allowed: scope.allowed() });
        }

        let direction = SortDirection::parse(&item.dir)?;
        Ok(ResolvedOrder { key, direction })
    }
}
