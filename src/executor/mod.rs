pub mod query_executor;
pub use query_executor::*;

pub mod execution_error;
pub use execution_error::*;

pub mod execution_result;
pub use execution_result::*;
