use crate::core::cleaner::TableCleaner;
use crate::core::writer::{self, MultiFormatWriter};
use crate::core::{Artifact, CleanOutcome, Pipeline, Table, TableSource};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Wires loader, cleaner and writer together for one input file.
pub struct RefineryPipeline<S: TableSource> {
    source: S,
    cleaner: TableCleaner,
    writer: MultiFormatWriter,
    input_path: PathBuf,
    base_name: String,
}

impl<S: TableSource> RefineryPipeline<S> {
    pub fn new(source: S, writer: MultiFormatWriter, input_path: PathBuf) -> Self {
        let filename = input_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let base_name = writer::base_name(&filename).to_string();
        Self {
            source,
            cleaner: TableCleaner::new(),
            writer,
            input_path,
            base_name,
        }
    }
}

impl<S: TableSource> Pipeline for RefineryPipeline<S> {
    fn extract(&self) -> Result<Table> {
        tracing::info!("Processing file {}", self.input_path.display());
        let table = self.source.load(&self.input_path)?;
        tracing::info!(
            "Loaded {} rows, {} columns",
            table.row_count(),
            table.column_count()
        );
        for row in table.rows.iter().take(5) {
            tracing::debug!("Row: {:?}", row.data);
        }
        Ok(table)
    }

    fn transform(&self, table: Table) -> Result<CleanOutcome> {
        let (cleaned, report) = self.cleaner.clean(table);
        tracing::info!("Cleaned data: {} rows remaining", cleaned.row_count());
        Ok(CleanOutcome {
            table: cleaned,
            report,
        })
    }

    fn load(&self, outcome: CleanOutcome) -> Result<Vec<Artifact>> {
        self.writer.write(&outcome.table, &self.base_name)
    }
}
