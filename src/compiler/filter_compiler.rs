use indexmap::IndexMap;

use crate::{
    compiler::CompileError,
    plan::{Filter, FilterOp, FilterValue, Literal},
    schema::SchemaProvider,
};

/// `WHERE` fragments, in filter order, and the parameters they bind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompiledFilters {
    pub fragments: Vec<String>,
    pub params: IndexMap<String, Literal>,
}

/// Compiles filters into placeholder fragments.
///
/// Placeholder names come from the filter's position: `p{i}` for scalar
/// operators, `p{i}_{j}` for the `j`-th `IN` element and `p{i}a`/`p{i}b` for
/// `BETWEEN`. Positions are unique, so names never collide within a statement.
pub struct FilterCompiler;

impl FilterCompiler {
    pub fn compile(schema: &dyn SchemaProvider, table: &str, filters: &[Filter]) -> Result<CompiledFilters, CompileError> {
        let mut out = CompiledFilters::default();

        for (i, filter) in filters.iter().enumerate() {
            if !schema.has_column(table, &filter.column) {
                return Err(CompileError::InvalidFilterColumn(filter.column.clone()));
            }
            let column = filter.column.as_str();

            let fragment = match filter.op {
                FilterOp::IsNull | FilterOp::IsNotNull => format!("{column} {}", filter.op),
                FilterOp::In => {
                    let items = match &filter.value {
                        FilterValue::List(items) if !items.is_empty() => items,
                        _ => return Err(Self::invalid_value(filter, "IN requires a non-empty list")),
                    };
                    let mut placeholders = Vec::with_capacity(items.len());
                    for (j, item) in items.iter().enumerate() {
                        let key = format!("p{i}_{j}");
                        placeholders.push(format!(":{key}"));
                        Self::bind(&mut out.params, key, item.clone());
                    }
                    format!("{column} IN ({})", placeholders.join(", "))
                }
                FilterOp::Between => {
                    let (low, high) = match &filter.value {
                        FilterValue::List(items) if items.len() == 2 => (&items[0], &items[1]),
                        _ => return Err(Self::invalid_value(filter, "BETWEEN requires [low, high]")),
                    };
                    let (low_key, high_key) = (format!("p{i}a"), format!("p{i}b"));
                    let fragment = format!("{column} BETWEEN :{low_key} AND :{high_key}");
                    Self::bind(&mut out.params, low_key, low.clone());
                    Self::bind(&mut out.params, high_key, high.clone());
                    fragment
                }
                op => {
                    let value = match &filter.value {
                        FilterValue::Scalar(value) => value,
                        FilterValue::Absent => return Err(Self::invalid_value(filter, "a value is required")),
                        FilterValue::List(_) => return Err(Self::invalid_value(filter, "a single value is required")),
                    };
                    let key = format!("p{i}");
                    let fragment = format!("{column} {op} :{key}");
                    Self::bind(&mut out.params, key, value.clone());
                    fragment
                }
            };

            out.fragments.push(fragment);
        }

        Ok(out)
    }

    fn bind(params: &mut IndexMap<String, Literal>, key: String, value: Literal) {
        let previous = params.insert(key, value);
        debug_assert!(previous.is_none(), "placeholder names are position-scoped and must not repeat");
    }

    fn invalid_value(filter: &Filter, reason: &str) -> CompileError {
        CompileError::InvalidFilterValue {
            column: filter.column.clone(),
            op: filter.op.to_string(),
            reason: reason.to_string(),
        }
    }
}
