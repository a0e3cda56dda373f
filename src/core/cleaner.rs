use crate::core::Table;
use crate::domain::model::{CleanReport, ColumnKind};
use serde_json::{json, Value};
use std::collections::HashSet;

/// Deduplicates rows, fills missing values per column kind and normalizes
/// whitespace in text columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableCleaner;

impl TableCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Cleans a table and reports what was done. Never fails: an empty table
    /// passes through unchanged with a zero report.
    ///
    /// `missing_filled` is the null count of the input (duplicate rows
    /// included) minus the null count of the result, so nulls that disappear
    /// with a dropped duplicate are counted too.
    pub fn clean(&self, table: Table) -> (Table, CleanReport) {
        tracing::info!("Starting data cleaning...");

        let nulls_before = table.null_count();
        let Table { columns, rows } = table;

        // Drop exact duplicates, keeping the first occurrence in order.
        let original_count = rows.len();
        let mut seen = HashSet::new();
        let mut survivors = Vec::with_capacity(original_count);
        for row in rows {
            let key: Vec<String> = columns
                .iter()
                .map(|column| row.cell(&column.name).to_string())
                .collect();
            if seen.insert(key) {
                survivors.push(row);
            }
        }
        let duplicates_removed = original_count - survivors.len();
        if duplicates_removed > 0 {
            tracing::info!("🗑️  Removed {} duplicate rows", duplicates_removed);
        }

        for row in &mut survivors {
            for column in &columns {
                let cell = row
                    .data
                    .entry(column.name.clone())
                    .or_insert(Value::Null);
                if cell.is_null() {
                    *cell = match column.kind {
                        ColumnKind::Numeric => json!(0),
                        ColumnKind::Text => json!("Unknown"),
                    };
                }
                // Text columns are coerced to trimmed strings, including
                // cells that were never missing.
                if column.kind == ColumnKind::Text {
                    *cell = Value::String(trimmed_text(cell));
                }
            }
        }

        let cleaned = Table {
            columns,
            rows: survivors,
        };
        let missing_filled = nulls_before.saturating_sub(cleaned.null_count());
        if missing_filled > 0 {
            tracing::info!("🔧 Filled {} missing values", missing_filled);
        }

        (
            cleaned,
            CleanReport {
                duplicates_removed,
                missing_filled,
            },
        )
    }
}

fn trimmed_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
