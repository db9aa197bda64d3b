pub mod sql_compiler;
pub use sql_compiler::*;

pub mod compile_error;
pub use compile_error::*;

pub mod compiled_query;
pub use compiled_query::*;

pub mod output_scope;
pub use output_scope::*;

pub mod measure_compiler;
pub use measure_compiler::*;

pub mod filter_compiler;
pub use filter_compiler::*;

pub mod resolvers;
pub use resolvers::*;
