use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::{
    compiler::{CompileError, CompiledQuery, FilterCompiler, MeasureCompiler, OrderByResolver, OutputScope, ResolvedOrder, SortDirection},
    plan::QueryPlan,
    schema::{PlanConfig, SchemaProvider},
};

/// Compiles a typed plan into
/// `SELECT dims, AGG(col) AS alias FROM table [WHERE ...] [GROUP BY dims] ORDER BY ... LIMIT n`.
///
/// This is the allowlist's enforcement point: the table and every column
/// are checked here even when the plan came from the validator. Compilation
/// is pure and deterministic; the first violated rule aborts it and nothing
/// partial is returned.
pub struct SqlCompiler<'a> {
    schema: &'a dyn SchemaProvider,
    config: &'a PlanConfig,
}

impl<'a> SqlCompiler<'a> {
    pub fn new(schema: &'a dyn SchemaProvider, config: &'a PlanConfig) -> Self {
        Self { schema, config }
    }

    pub fn compile(&self, plan: &QueryPlan) -> Result<CompiledQuery, CompileError> {
        match self.compile_plan(plan) {
            Ok(query) => {
                debug!(sql = %query.sql, params = query.params.len(), "plan compiled");
                Ok(query)
            }
            Err(err) => {
                warn!(table = %plan.table, error = %err, "plan rejected by compiler");
                Err(err)
            }
        }
    }

    fn compile_plan(&self, plan: &QueryPlan) -> Result<CompiledQuery, CompileError> {
        let table = plan.table.as_str();
        if !self.schema.has_table(table) {
            return Err(CompileError::InvalidTable(plan.table.clone()));
        }

        let dimensions = self.dimensions(table, &plan.dimensions)?;
        let measures = MeasureCompiler::compile(self.schema, table, &dimensions, &plan.measures)?;
        let scope = OutputScope::new(&dimensions, &measures);
        let filters = FilterCompiler::compile(self.schema, table, &plan.filters)?;
        let order_by = self.order_by(plan, &scope)?;
        let limit = self.config.clamp_limit(plan.limit);

        let mut select: Vec<String> = dimensions.clone();
        select.extend(measures.iter().map(|m| m.select_item()));

        let mut sql = format!("SELECT {} FROM {}", select.join(", "), table);
        if !filters.fragments.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&filters.fragments.join(" AND "));
        }
        if !dimensions.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&dimensions.join(", "));
        }
        if !order_by.is_empty() {
            let terms: Vec<String> = order_by.iter().map(ToString::to_string).collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&terms.join(", "));
        }
        sql.push_str(&format!(" LIMIT {limit}"));

        Ok(CompiledQuery { sql, params: filters.params })
    }

    /// Allowed dimensions, first occurrence kept.
    fn dimensions(&self, table: &str, dimensions: &[String]) -> Result<Vec<String>, CompileError> {
        let mut out: IndexSet<String> = IndexSet::with_capacity(dimensions.len());
        for dimension in dimensions {
            if !self.schema.has_column(table, dimension) {
                return Err(CompileError::InvalidDimension(dimension.clone()));
            }
            out.insert(dimension.clone());
        }
        Ok(out.into_iter().collect())
    }

    fn order_by(&self, plan: &QueryPlan, scope: &OutputScope) -> Result<Vec<ResolvedOrder>, CompileError> {
        if plan.order_by.is_empty() {
            // same default the validator applies
            return Ok(scope
                .first_alias()
                .map(|key| ResolvedOrder { key: key.to_string(), direction: SortDirection::Desc })
                .into_iter()
                .collect());
        }
        OrderByResolver::resolve_all(&plan.order_by, scope)
    }
}
