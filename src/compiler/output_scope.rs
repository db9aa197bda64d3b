use indexmap::IndexSet;

use crate::{compiler::CompiledMeasure, plan::{Aggregation, MeasureColumn}};

/// Names an `ORDER BY` may use: the dimensions and the measure aliases.
#[derive(Debug, Clone)]
pub struct OutputScope {
    allowed: IndexSet<String>,
    measures: Vec<(Aggregation, MeasureColumn, String)>,
}

impl OutputScope {
    pub fn new(dimensions: &[String], measures: &[CompiledMeasure]) -> Self {
        let mut allowed: IndexSet<String> = dimensions.iter().cloned().collect();
        allowed.extend(measures.iter().map(|m| m.alias.clone()));

        let measures = measures
            .iter()
            .map(|m| (m.agg, m.column.clone(), m.alias.clone()))
            .collect();

        Self { allowed, measures }
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed.contains(name)
    }

    pub fn allowed(&self) -> Vec<String> {
        self.allowed.iter().cloned().collect()
    }

    /// Alias of the first measure computing `agg` over `column`.
    pub fn alias_for(&self, agg: Aggregation, column: &MeasureColumn) -> Option<&str> {
        self.measures
            .iter()
            .find(|(a, c, _)| *a == agg && c == column)
            .map(|(_, _, alias)| alias.as_str())
    }

    /// Alias of the measure at a zero-based position.
    pub fn alias_at(&self, index: i64) -> Option<&str> {
        let index = usize::try_from(index).ok()?;
        self.measures.get(index).map(|(_, _, alias)| alias.as_str())
    }

    pub fn first_alias(&self) -> Option<&str> {
        self.alias_at(0)
    }
}
