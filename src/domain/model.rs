use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// One row of a table: column name -> cell value. Absent and empty cells are
/// stored as `Value::Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, Value>,
}

impl Record {
    pub fn new(data: HashMap<String, Value>) -> Self {
        Self { data }
    }

    /// Cell lookup that treats a missing entry the same as an explicit null.
    pub fn cell(&self, column: &str) -> &Value {
        self.data.get(column).unwrap_or(&Value::Null)
    }
}

/// How every cell of a column is interpreted. Fixed for the whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl ColumnKind {
    /// Classifies a column from its loaded values: numeric when every non-null
    /// cell is a number. A column with no non-null cells counts as numeric,
    /// matching how pandas types an all-NaN column.
    pub fn infer(name: &str, rows: &[Record]) -> ColumnKind {
        let all_numeric = rows
            .iter()
            .map(|row| row.cell(name))
            .all(|value| value.is_null() || value.is_number());
        if all_numeric {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// In-memory tabular data: an ordered column list plus ordered rows.
/// Invariant: rows only carry entries for the declared columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Record>,
}

impl Table {
    /// Builds a table from column names and rows, inferring each column's kind
    /// from the data.
    pub fn new(names: Vec<String>, rows: Vec<Record>) -> Self {
        let columns = names
            .into_iter()
            .map(|name| {
                let kind = ColumnKind::infer(&name, &rows);
                Column { name, kind }
            })
            .collect();
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of null (or absent) cells across the whole table.
    pub fn null_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| self.columns.iter().map(|column| row.cell(&column.name)))
            .filter(|value| value.is_null())
            .count()
    }
}

/// What the cleaner did to a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub duplicates_removed: usize,
    pub missing_filled: usize,
}

/// Output of the transform stage: the cleaned table plus its report.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    pub table: Table,
    pub report: CleanReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Excel,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Excel => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Excel => write!(f, "Excel"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// One emitted output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub format: OutputFormat,
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> Record {
        Record::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_infer_numeric_column_with_nulls() {
        let rows = vec![
            row(&[("sales", json!(10))]),
            row(&[("sales", Value::Null)]),
            row(&[("sales", json!(2.5))]),
        ];
        assert_eq!(ColumnKind::infer("sales", &rows), ColumnKind::Numeric);
    }

    #[test]
    fn test_infer_text_column_on_any_non_numeric_cell() {
        let rows = vec![
            row(&[("code", json!(10))]),
            row(&[("code", json!("A-7"))]),
        ];
        assert_eq!(ColumnKind::infer("code", &rows), ColumnKind::Text);
    }

    #[test]
    fn test_infer_all_null_column_is_numeric() {
        let rows = vec![row(&[("empty", Value::Null)]), row(&[])];
        assert_eq!(ColumnKind::infer("empty", &rows), ColumnKind::Numeric);
    }

    #[test]
    fn test_null_count_includes_absent_cells() {
        let table = Table::new(
            vec!["name".to_string(), "sales".to_string()],
            vec![row(&[("name", json!("Bob"))]), row(&[("sales", Value::Null)])],
        );
        // row 1 is missing "sales", row 2 is missing "name" and has a null.
        assert_eq!(table.null_count(), 3);
    }
}
