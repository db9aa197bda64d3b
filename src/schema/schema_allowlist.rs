use std::{fs, path::Path};

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::schema::{is_plain_identifier, SchemaError, SchemaProvider};

const HR_TABLES: &[(&str, &[&str])] = &[
    ("employee", &["EmpID", "EmpName", "EngDt", "TermDt", "DepID", "GenderID", "RaceID", "MgrID", "DOB", "PayRate"]),
    ("action", &["ActID", "ActionID", "EmpID", "EffectiveDt"]),
    ("perf", &["PerfID", "EmpID", "Rating", "PerfDate"]),
    ("join_emp_perf", &["EmpID", "Department", "GenderID", "RaceID", "PerfDate", "Year", "Rating"]),
    ("join_emp_action", &["EmpID", "Department", "GenderID", "RaceID", "ActionDate", "ActionID"]),
];

/// The closed set of tables and columns that compiled statements may reference.
///
/// Built once, then only read. Every name is checked to be a plain SQL
/// identifier at construction time because the compiler writes table and
/// column names into statement text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaAllowlist {
    tables: IndexMap<String, IndexSet<String>>,
}

impl SchemaAllowlist {
    /// Build an allowlist from `(table, columns)` pairs. Duplicate columns collapse, first one wins.
    pub fn new<T, C, I, S>(tables: T) -> Result<Self, SchemaError>
    where
        T: IntoIterator<Item = (S, C)>,
        C: IntoIterator<Item = I>,
        I: Into<String>,
        S: Into<String>,
    {
        let mut out: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for (table, columns) in tables {
            let table = table.into();
            if !is_plain_identifier(&table) {
                return Err(SchemaError::InvalidIdentifier(table));
            }

            let mut set = IndexSet::new();
            for column in columns {
                let column = column.into();
                if !is_plain_identifier(&column) {
                    return Err(SchemaError::InvalidIdentifier(column));
                }
                set.insert(column);
            }
            if set.is_empty() {
                return Err(SchemaError::EmptyTable(table));
            }

            out.entry(table).or_default().extend(set);
        }

        if out.is_empty() {
            return Err(SchemaError::Empty);
        }

        Ok(Self { tables: out })
    }

    /// The built-in HR reporting schema.
    pub fn hr() -> Self {
        let tables = HR_TABLES
            .iter()
            .map(|(table, columns)| {
                let set = columns.iter().map(|c| c.to_string()).collect::<IndexSet<_>>();
                (table.to_string(), set)
            })
            .collect();
        Self { tables }
    }

    /// Parse `{ "table": ["col", ...], ... }`.
    pub fn from_json(value: Value) -> Result<Self, SchemaError> {
        let Value::Object(map) = value else {
            return Err(SchemaError::InvalidShape("root is not an object".to_string()));
        };

        let mut tables = Vec::with_capacity(map.len());
        for (table, columns) in map {
            let Value::Array(columns) = columns else {
                return Err(SchemaError::InvalidShape(format!("columns of {table:?} are not an array")));
            };
            let mut names = Vec::with_capacity(columns.len());
            for column in columns {
                match column {
                    Value::String(name) => names.push(name),
                    other => {
                        return Err(SchemaError::InvalidShape(format!("column {other} of {table:?} is not a string")));
                    }
                }
            }
            tables.push((table, names));
        }

        Self::new(tables)
    }

    /// Read and parse an allowlist file in the [`from_json`](Self::from_json) format.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let display = path.to_string_lossy().into_owned();

        let content = fs::read_to_string(path)
            .map_err(|source| SchemaError::Io { path: display.clone(), source })?;
        let value = serde_json::from_str::<Value>(&content)
            .map_err(|source| SchemaError::Json { path: display, source })?;

        Self::from_json(value)
    }

    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn columns_of(&self, table: &str) -> Option<impl Iterator<Item = &str>> {
        self.tables.get(table).map(|cols| cols.iter().map(String::as_str))
    }
}

impl SchemaProvider for SchemaAllowlist {
    fn has_table(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    fn has_column(&self, table: &str, column: &str) -> bool {
        self.tables.get(table).is_some_and(|cols| cols.contains(column))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn hr_schema_has_the_five_reporting_tables() {
        let schema = SchemaAllowlist::hr();
        let tables: Vec<_> = schema.tables().collect();
        assert_eq!(tables, vec!["employee", "action", "perf", "join_emp_perf", "join_emp_action"]);
        assert!(schema.has_column("join_emp_perf", "Rating"));
        assert!(!schema.has_column("employee", "Rating"));
        assert!(!schema.has_column("users", "EmpID"));
    }

    #[test]
    fn columns_keep_declaration_order() {
        let schema = SchemaAllowlist::new([("t", ["b", "a", "b", "c"])]).unwrap();
        let cols: Vec<_> = schema.columns_of("t").unwrap().collect();
        assert_eq!(cols, vec!["b", "a", "c"]);
    }

    #[test]
    fn rejects_names_that_are_not_identifiers() {
        let err = SchemaAllowlist::new([("t", ["ok", "bad name"])]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidIdentifier(name) if name == "bad name"));

        let err = SchemaAllowlist::new([("t;--", ["a"])]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidIdentifier(_)));
    }

    #[test]
    fn rejects_empty_schemas_and_tables() {
        let none: Vec<(String, Vec<String>)> = vec![];
        assert!(matches!(SchemaAllowlist::new(none), Err(SchemaError::Empty)));

        let empty_cols: Vec<&str> = vec![];
        let err = SchemaAllowlist::new([("t", empty_cols)]).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyTable(t) if t == "t"));
    }

    #[test]
    fn from_json_reads_table_column_map() {
        let schema = SchemaAllowlist::from_json(json!({
            "sales": ["Region", "Amount"],
            "stores": ["StoreID"]
        }))
        .unwrap();
        assert!(schema.has_table("sales"));
        assert!(schema.has_column("stores", "StoreID"));
    }

    #[test]
    fn from_json_rejects_wrong_shapes() {
        assert!(matches!(SchemaAllowlist::from_json(json!([])), Err(SchemaError::InvalidShape(_))));
        assert!(matches!(SchemaAllowlist::from_json(json!({"t": "a"})), Err(SchemaError::InvalidShape(_))));
        assert!(matches!(SchemaAllowlist::from_json(json!({"t": [1]})), Err(SchemaError::InvalidShape(_))));
    }

    #[test]
    fn load_from_file_valid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("allowlist.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", json!({"perf": ["PerfID", "Rating"]})).unwrap();

        let schema = SchemaAllowlist::load_from_file(&path).unwrap();
        assert!(schema.has_column("perf", "Rating"));
    }

    #[test]
    fn load_from_file_keeps_file_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("allowlist.json");
        std::fs::write(&path, r#"{ "zeta": ["b", "a"], "alpha": ["y", "x"], "mid": ["m"] }"#).unwrap();

        let schema = SchemaAllowlist::load_from_file(&path).unwrap();
        let tables: Vec<_> = schema.tables().collect();
        assert_eq!(tables, vec!["zeta", "alpha", "mid"]);
        let cols: Vec<_> = schema.columns_of("zeta").unwrap().collect();
        assert_eq!(cols, vec!["b", "a"]);
    }

    #[test]
    fn load_from_file_missing_and_invalid() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.json");
        assert!(matches!(SchemaAllowlist::load_from_file(&missing), Err(SchemaError::Io { .. })));

        let broken = tmp.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(SchemaAllowlist::load_from_file(&broken), Err(SchemaError::Json { .. })));
    }
}
