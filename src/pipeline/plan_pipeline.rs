use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    compiler::{CompiledQuery, SqlCompiler},
    executor::{ExecutionResult, QueryExecutor},
    normalizer::PlanNormalizer,
    pipeline::PipelineError,
    plan::QueryPlan,
    schema::{PlanConfig, SchemaAllowlist},
    validator::PlanValidator,
};

/// A plan that made it through every check, and the statement compiled from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedQuery {
    pub plan: QueryPlan,
    pub query: CompiledQuery,
}

/// normalize -> validate -> compile, and optionally execute.
///
/// Holds only read-only state, so one pipeline can be shared across tasks.
#[derive(Debug, Clone)]
pub struct PlanPipeline {
    allowlist: Arc<SchemaAllowlist>,
    config: PlanConfig,
}

impl PlanPipeline {
    pub fn new(allowlist: Arc<SchemaAllowlist>, config: PlanConfig) -> Self {
        Self { allowlist, config }
    }

    /// The HR reporting allowlist with default limits.
    pub fn hr() -> Self {
        Self::new(Arc::new(SchemaAllowlist::hr()), PlanConfig::default())
    }

    pub fn allowlist(&self) -> &SchemaAllowlist {
        &self.allowlist
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn prepare(&self, raw: &str) -> Result<PreparedQuery, PipelineError> {
        let normalized = PlanNormalizer::new(&self.config).normalize(raw)?;
        let plan = PlanValidator::new(&self.config).validate(&normalized)?;
        let query = SqlCompiler::new(self.allowlist.as_ref(), &self.config).compile(&plan)?;
        Ok(PreparedQuery { plan, query })
    }

    /// Prepare `raw` and run it. The executor is only called with a statement
    /// that compiled.
    pub async fn run<E: QueryExecutor>(&self, raw: &str, executor: &E) -> Result<ExecutionResult, PipelineError> {
        let prepared = match self.prepare(raw) {
            Ok(prepared) => prepared,
            Err(err) => {
                warn!(stage = err.stage(), error = %err, "plan not executed");
                return Err(err);
            }
        };

        let engine = executor.engine_name();
        let rows = executor.execute(&prepared.query).await?;
        debug!(engine, rows = rows.len(), "query executed");

        Ok(ExecutionResult::new(prepared.query, rows, engine))
    }
}
