pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, OutputConfig};
pub use core::cleaner::TableCleaner;
pub use core::etl::EtlEngine;
pub use core::loader::CsvLoader;
pub use core::pipeline::RefineryPipeline;
pub use core::writer::MultiFormatWriter;
pub use domain::model::{
    Artifact, CleanOutcome, CleanReport, Column, ColumnKind, OutputFormat, Record, Table,
};
pub use utils::error::{PipelineError, Result};
