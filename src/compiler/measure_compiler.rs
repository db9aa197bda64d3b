use std::collections::HashSet;

use crate::{
    compiler::CompileError,
    plan::{Aggregation, Measure, MeasureColumn},
    schema::{is_plain_identifier, SchemaProvider},
};

/// A measure that passed every check, with its select-list expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMeasure {
    pub agg: Aggregation,
    pub column: MeasureColumn,
    pub alias: String,
    /// `AGG(column)` or `COUNT(*)`
    pub expr: String,
}

impl CompiledMeasure {
    pub fn select_item(&self) -> String {
        format!("{} AS {}", self.expr, self.alias)
    }
}

pub struct MeasureCompiler;

impl MeasureCompiler {
    /// Check every measure against `table` and build its aggregate expression.
    ///
    /// Aliases are written into the statement, so they must be plain
    /// identifiers and must not repeat each other or a dimension name.
    pub fn compile(
        schema: &dyn SchemaProvider,
        table: &str,
        dimensions: &[String],
        measures: &[Measure],
    ) -> Result<Vec<CompiledMeasure>, CompileError> {
        if measures.is_empty() {
            return Err(CompileError::NoMeasures);
        }

        let mut seen: HashSet<&str> = dimensions.iter().map(String::as_str).collect();
        let mut out: Vec<CompiledMeasure> = Vec::with_capacity(measures.len());

        for measure in measures {
            let function = measure
                .agg
                .sql_function()
                .ok_or_else(|| CompileError::InvalidAggregation(measure.agg.name().to_string()))?;

            let expr = match &measure.column {
                MeasureColumn::All if measure.agg == Aggregation::Count => format!("{function}(*)"),
                MeasureColumn::All => {
                    return Err(CompileError::InvalidMeasureColumn(format!("{}(*)", measure.agg)));
                }
                MeasureColumn::Named(column) if schema.has_column(table, column) => format!("{function}({column})"),
                MeasureColumn::Named(column) => return Err(CompileError::InvalidMeasureColumn(column.clone())),
            };

            let alias = measure.alias();
            if !is_plain_identifier(&alias) {
                return Err(CompileError::InvalidAlias(alias));
            }

            out.push(CompiledMeasure { agg: measure.agg, column: measure.column.clone(), alias, expr });
        }

        for m in &out {
            if !seen.insert(m.alias.as_str()) {
                return Err(CompileError::InvalidAlias(m.alias.clone()));
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaAllowlist;

    fn compile(dimensions: &[&str], measures: &[Measure]) -> Result<Vec<CompiledMeasure>, CompileError> {
        let schema = SchemaAllowlist::hr();
        let dims: Vec<String> = dimensions.iter().map(|d| d.to_string()).collect();
        MeasureCompiler::compile(&schema, "join_emp_perf", &dims, measures)
    }

    #[test]
    fn builds_expressions_and_aliases() {
        let out = compile(
            &["Year"],
            &[
                Measure::new(Some("avg_rating"), Aggregation::Avg, MeasureColumn::parse("Rating")),
                Measure::new(None, Aggregation::Count, MeasureColumn::All),
            ],
        )
        .unwrap();
        assert_eq!(out[0].select_item(), "AVG(Rating) AS avg_rating");
        assert_eq!(out[1].select_item(), "COUNT(*) AS count_all");
    }

    #[test]
    fn empty_measures_are_rejected() {
        assert_eq!(compile(&[], &[]), Err(CompileError::NoMeasures));
    }

    #[test]
    fn count_distinct_is_not_compiled() {
        let err = compile(&[], &[Measure::new(None, Aggregation::CountDistinct, MeasureColumn::parse("EmpID"))]);
        assert_eq!(err, Err(CompileError::InvalidAggregation("count_distinct".into())));
    }

    #[test]
    fn wildcard_only_with_count() {
        let err = compile(&[], &[Measure::new(None, Aggregation::Sum, MeasureColumn::All)]);
        assert_eq!(err, Err(CompileError::InvalidMeasureColumn("sum(*)".into())));
    }

    #[test]
    fn columns_outside_the_table_are_rejected() {
        let err = compile(&[], &[Measure::new(None, Aggregation::Sum, MeasureColumn::parse("PayRate"))]);
        assert_eq!(err, Err(CompileError::InvalidMeasureColumn("PayRate".into())));

        let err = compile(&[], &[Measure::new(None, Aggregation::Sum, MeasureColumn::parse("Rating); DROP TABLE perf; --"))]);
        assert!(matches!(err, Err(CompileError::InvalidMeasureColumn(_))));
    }

    #[test]
    fn aliases_must_be_identifiers() {
        let err = compile(&[], &[Measure::new(Some("x FROM perf; --"), Aggregation::Avg, MeasureColumn::parse("Rating"))]);
        assert_eq!(err, Err(CompileError::InvalidAlias("x FROM perf; --".into())));
    }

    #[test]
    fn aliases_must_be_unique() {
        let dup = [
            Measure::new(Some("r"), Aggregation::Avg, MeasureColumn::parse("Rating")),
            Measure::new(Some("r"), Aggregation::Max, MeasureColumn::parse("Rating")),
        ];
        assert_eq!(compile(&[], &dup), Err(CompileError::InvalidAlias("r".into())));

        let shadow = [Measure::new(Some("Year"), Aggregation::Max, MeasureColumn::parse("Rating"))];
        assert_eq!(compile(&["Year"], &shadow), Err(CompileError::InvalidAlias("Year".into())));
    }
}
