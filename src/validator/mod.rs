pub mod plan_validator;
pub use plan_validator::*;

pub mod validation_error;
pub use validation_error::*;

pub mod limit_coercion;
pub use limit_coercion::*;
