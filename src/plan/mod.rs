pub mod query_plan;
pub use query_plan::*;

pub mod intent;
pub use intent::*;

pub mod aggregation;
pub use aggregation::*;

pub mod measure;
pub use measure::*;

pub mod literal;
pub use literal::*;

pub mod filter_op;
pub use filter_op::*;

pub mod filter;
pub use filter::*;

pub mod order_item;
pub use order_item::*;

pub mod plan_error;
pub use plan_error::*;
