use crate::domain::model::OutputFormat;
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to load {path}: {message}")]
    Load { path: String, message: String },

    #[error("Data cleaning failed: {message}")]
    Clean { message: String },

    #[error("Failed to write {format} file {path}: {message}")]
    Write {
        format: OutputFormat,
        path: String,
        message: String,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl PipelineError {
    pub fn load(path: &Path, source: impl fmt::Display) -> Self {
        PipelineError::Load {
            path: path.display().to_string(),
            message: source.to_string(),
        }
    }

    pub fn write(format: OutputFormat, path: &Path, source: impl fmt::Display) -> Self {
        PipelineError::Write {
            format,
            path: path.display().to_string(),
            message: source.to_string(),
        }
    }

    /// Which pipeline stage produced the error, for reporting.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Load { .. } => Stage::Load,
            PipelineError::Clean { .. } => Stage::Clean,
            PipelineError::Write { .. } => Stage::Write,
            PipelineError::InvalidConfigValue { .. } => Stage::Config,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Load,
    Clean,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Config => write!(f, "config"),
            Stage::Load => write!(f, "load"),
            Stage::Clean => write!(f, "clean"),
            Stage::Write => write!(f, "write"),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_every_variant_maps_to_its_stage() {
        let load = PipelineError::load(Path::new("sales.csv"), "No such file");
        assert_eq!(load.stage(), Stage::Load);

        let clean = PipelineError::Clean {
            message: "bad table".to_string(),
        };
        assert_eq!(clean.stage(), Stage::Clean);
        assert_eq!(clean.to_string(), "Data cleaning failed: bad table");

        let write = PipelineError::write(
            OutputFormat::Json,
            Path::new("output/json/sales_20250101_120000.json"),
            "Permission denied",
        );
        assert_eq!(write.stage(), Stage::Write);

        let config = PipelineError::InvalidConfigValue {
            field: "output_path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(config.stage(), Stage::Config);
    }
}
