pub mod cleaner;
pub mod etl;
pub mod loader;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{Artifact, CleanOutcome, CleanReport, Table};
pub use crate::domain::ports::{Pipeline, TableSource};
pub use crate::utils::error::Result;
