use crate::config::OutputConfig;
use crate::core::Table;
use crate::domain::model::{Artifact, OutputFormat};
use crate::utils::error::{PipelineError, Result};
use chrono::Local;
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Derives the output stem from an input filename by stripping the final
/// `.`-delimited extension. A filename without `.` is used verbatim.
pub fn base_name(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    }
}

/// Serializes a table to JSON, Excel and CSV under the configured output
/// directories. All three files of one invocation share a single
/// second-granularity timestamp so they form a matched set.
///
/// Two invocations within the same second for the same base name produce
/// identical paths and the later write overwrites the earlier one; the naming
/// scheme does not disambiguate below one second.
pub struct MultiFormatWriter {
    config: OutputConfig,
}

impl MultiFormatWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn write(&self, table: &Table, base_name: &str) -> Result<Vec<Artifact>> {
        self.ensure_directories()?;
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        Ok(vec![
            self.write_json(table, base_name, &timestamp)?,
            self.write_excel(table, base_name, &timestamp)?,
            self.write_csv(table, base_name, &timestamp)?,
        ])
    }

    fn ensure_directories(&self) -> Result<()> {
        for format in [OutputFormat::Json, OutputFormat::Excel, OutputFormat::Csv] {
            let dir = self.config.dir_for(format);
            fs::create_dir_all(dir).map_err(|e| PipelineError::write(format, dir, e))?;
        }
        Ok(())
    }

    fn artifact_path(&self, format: OutputFormat, base_name: &str, timestamp: &str) -> PathBuf {
        self.config
            .dir_for(format)
            .join(format!("{}_{}.{}", base_name, timestamp, format.extension()))
    }

    fn write_json(&self, table: &Table, base_name: &str, timestamp: &str) -> Result<Artifact> {
        tracing::info!("Generating JSON file...");
        let format = OutputFormat::Json;
        let path = self.artifact_path(format, base_name, timestamp);

        let records: Vec<Value> = table
            .rows
            .iter()
            .map(|row| {
                let mut object = serde_json::Map::new();
                for column in &table.columns {
                    object.insert(column.name.clone(), row.cell(&column.name).clone());
                }
                Value::Object(object)
            })
            .collect();

        // serde_json leaves non-ASCII characters unescaped.
        let body =
            serde_json::to_string_pretty(&records).map_err(|e| PipelineError::write(format, &path, e))?;
        fs::write(&path, body).map_err(|e| PipelineError::write(format, &path, e))?;

        tracing::info!("JSON saved: {}", path.display());
        Ok(Artifact { format, path })
    }

    fn write_excel(&self, table: &Table, base_name: &str, timestamp: &str) -> Result<Artifact> {
        tracing::info!("Generating Excel file...");
        let format = OutputFormat::Excel;
        let path = self.artifact_path(format, base_name, timestamp);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, column) in table.columns.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, &column.name)
                .map_err(|e| PipelineError::write(format, &path, e))?;
        }
        for (row_index, row) in table.rows.iter().enumerate() {
            for (col, column) in table.columns.iter().enumerate() {
                let cell = row.cell(&column.name);
                let (row_index, col) = (row_index as u32 + 1, col as u16);
                match cell {
                    Value::Null => {}
                    Value::Number(number) => {
                        worksheet
                            .write_number(row_index, col, number.as_f64().unwrap_or_default())
                            .map_err(|e| PipelineError::write(format, &path, e))?;
                    }
                    Value::String(text) => {
                        worksheet
                            .write_string(row_index, col, text)
                            .map_err(|e| PipelineError::write(format, &path, e))?;
                    }
                    other => {
                        worksheet
                            .write_string(row_index, col, other.to_string())
                            .map_err(|e| PipelineError::write(format, &path, e))?;
                    }
                }
            }
        }

        workbook
            .save(&path)
            .map_err(|e| PipelineError::write(format, &path, e))?;

        tracing::info!("Excel saved: {}", path.display());
        Ok(Artifact { format, path })
    }

    fn write_csv(&self, table: &Table, base_name: &str, timestamp: &str) -> Result<Artifact> {
        tracing::info!("Generating csv file...");
        let format = OutputFormat::Csv;
        let path = self.artifact_path(format, base_name, timestamp);

        let mut writer =
            csv::Writer::from_path(&path).map_err(|e| PipelineError::write(format, &path, e))?;
        writer
            .write_record(table.columns.iter().map(|column| column.name.as_str()))
            .map_err(|e| PipelineError::write(format, &path, e))?;
        for row in &table.rows {
            let fields: Vec<String> = table
                .columns
                .iter()
                .map(|column| csv_field(row.cell(&column.name)))
                .collect();
            writer
                .write_record(&fields)
                .map_err(|e| PipelineError::write(format, &path, e))?;
        }
        writer
            .flush()
            .map_err(|e| PipelineError::write(format, &path, e))?;

        tracing::info!("CSV saved: {}", path.display());
        Ok(Artifact { format, path })
    }
}

fn csv_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
