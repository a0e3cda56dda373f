use crate::core::{Table, TableSource};
use crate::domain::model::Record;
use crate::utils::error::{PipelineError, Result};
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::path::Path;

/// Reads a comma-delimited file into a [`Table`], inferring per-column kinds
/// from the cell values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLoader;

impl CsvLoader {
    pub fn new() -> Self {
        Self
    }
}

impl TableSource for CsvLoader {
    fn load(&self, path: &Path) -> Result<Table> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| PipelineError::load(path, e))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| PipelineError::load(path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| PipelineError::load(path, e))?;
            let mut data = HashMap::with_capacity(headers.len());
            for (name, cell) in headers.iter().zip(record.iter()) {
                data.insert(name.clone(), parse_cell(cell));
            }
            rows.push(Record::new(data));
        }

        Ok(Table::new(headers, rows))
    }
}

/// Empty cells become null; cells that parse as a number become numbers;
/// everything else stays a string.
fn parse_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(integer) = cell.parse::<i64>() {
        return Value::Number(integer.into());
    }
    if let Ok(float) = cell.parse::<f64>() {
        // NaN and infinities have no JSON representation; keep them as text.
        if let Some(number) = Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(cell.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ColumnKind;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_infers_column_kinds() {
        let file = csv_file("name,sales,score\nAlice,10,1.5\nBob,,2.5\n");
        let table = CsvLoader::new().load(file.path()).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.columns[0].kind, ColumnKind::Text);
        assert_eq!(table.columns[1].kind, ColumnKind::Numeric);
        assert_eq!(table.columns[2].kind, ColumnKind::Numeric);

        assert_eq!(table.rows[0].cell("sales"), &json!(10));
        assert_eq!(table.rows[1].cell("sales"), &Value::Null);
        assert_eq!(table.rows[1].cell("score"), &json!(2.5));
    }

    #[test]
    fn test_load_header_only_file_yields_empty_table() {
        let file = csv_file("name,sales\n");
        let table = CsvLoader::new().load(file.path()).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_load_missing_file_is_a_load_error() {
        let err = CsvLoader::new()
            .load(Path::new("/nonexistent/sales.csv"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Load { .. }));
    }

    #[test]
    fn test_load_ragged_row_is_a_load_error() {
        let file = csv_file("name,sales\nAlice,10,extra\n");
        let err = CsvLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Load { .. }));
    }

    #[test]
    fn test_parse_cell_keeps_non_finite_numbers_as_text() {
        assert_eq!(parse_cell("NaN"), json!("NaN"));
        assert_eq!(parse_cell("inf"), json!("inf"));
        assert_eq!(parse_cell("-3"), json!(-3));
        assert_eq!(parse_cell(""), Value::Null);
    }
}
