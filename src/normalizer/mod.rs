pub mod plan_normalizer;
pub use plan_normalizer::*;

pub mod parse_error;
pub use parse_error::*;

pub mod repairs;
pub use repairs::*;
