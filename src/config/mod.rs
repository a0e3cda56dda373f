use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "csv-refinery")]
#[command(about = "Cleans a tabular data file and exports it as JSON, Excel and CSV")]
pub struct CliConfig {
    /// Delimited-text file to process
    pub input_file: PathBuf,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_file.display().to_string())?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

/// Where each output format lands. Passed to the writer at construction
/// instead of living in process-wide constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json_dir: PathBuf,
    pub excel_dir: PathBuf,
    pub csv_dir: PathBuf,
}

impl OutputConfig {
    /// One subdirectory per format under a common root.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            json_dir: root.join("json"),
            excel_dir: root.join("excel"),
            csv_dir: root.join("csv"),
        }
    }

    pub fn dir_for(&self, format: OutputFormat) -> &Path {
        match format {
            OutputFormat::Json => &self.json_dir,
            OutputFormat::Excel => &self.excel_dir,
            OutputFormat::Csv => &self.csv_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_under_root() {
        let config = OutputConfig::under("./output");
        assert_eq!(config.dir_for(OutputFormat::Json), Path::new("./output/json"));
        assert_eq!(
            config.dir_for(OutputFormat::Excel),
            Path::new("./output/excel")
        );
        assert_eq!(config.dir_for(OutputFormat::Csv), Path::new("./output/csv"));
    }

    #[test]
    fn test_cli_config_rejects_empty_output_path() {
        let config = CliConfig {
            input_file: PathBuf::from("sales.csv"),
            output_path: String::new(),
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
