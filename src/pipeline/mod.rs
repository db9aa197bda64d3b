pub mod plan_pipeline;
pub use plan_pipeline::*;

pub mod pipeline_error;
pub use pipeline_error::*;
