use indexmap::IndexMap;
use serde::Serialize;

use crate::plan::Literal;

/// Parameterized statement text plus the values bound to its `:name` placeholders.
///
/// `params` iterates in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: IndexMap<String, Literal>,
}

impl CompiledQuery {
    pub fn param(&self, name: &str) -> Option<&Literal> {
        self.params.get(name)
    }

    pub fn param_names(&self) -> Vec<&str> {
        self.params.keys().map(String::as_str).collect()
    }
}
