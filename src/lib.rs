pub mod schema;
pub use schema::{PlanConfig, SchemaAllowlist, SchemaError, SchemaProvider};

pub mod plan;
pub use plan::{Aggregation, Filter, FilterOp, FilterValue, Intent, Literal, Measure, MeasureColumn, OrderItem, PlanError, QueryPlan};

pub mod normalizer;
pub use normalizer::{ParseError, PlanNormalizer};

pub mod validator;
pub use validator::{PlanValidator, ValidationError, ValidationErrors};

pub mod compiler;
pub use compiler::{CompileError, CompiledQuery, SqlCompiler};

pub mod executor;
pub use executor::{ExecutionError, ExecutionResult, QueryExecutor, RowSet};

pub mod pipeline;
pub use pipeline::{PipelineError, PlanPipeline, PreparedQuery};
