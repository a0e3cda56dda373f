use crate::core::{Artifact, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load to completion for one file. Any stage
    /// failure propagates to the caller; nothing below this retries.
    pub fn run(&self) -> Result<Vec<Artifact>> {
        tracing::info!("Starting processing...");

        let table = self.pipeline.extract()?;

        let outcome = self.pipeline.transform(table)?;
        tracing::info!(
            "Removed {} duplicates, filled {} missing values",
            outcome.report.duplicates_removed,
            outcome.report.missing_filled
        );

        let artifacts = self.pipeline.load(outcome)?;
        tracing::info!("Generated {} output files", artifacts.len());

        Ok(artifacts)
    }
}
