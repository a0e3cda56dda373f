use crate::domain::model::{Artifact, CleanOutcome, Table};
use crate::utils::error::Result;
use std::path::Path;

/// Reads a tabular file into an in-memory table.
pub trait TableSource {
    fn load(&self, path: &Path) -> Result<Table>;
}

/// The three pipeline stages. Synchronous: every stage is an in-memory
/// transformation or a blocking file write.
pub trait Pipeline {
    fn extract(&self) -> Result<Table>;
    fn transform(&self, table: Table) -> Result<CleanOutcome>;
    fn load(&self, outcome: CleanOutcome) -> Result<Vec<Artifact>>;
}
