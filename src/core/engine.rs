use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs a pipeline's three stages in order. Both modes of the tool go
/// through here; only the pipeline implementation differs.
pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Option<String>> {
        tracing::info!("Extracting records");
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        tracing::info!("Transforming records");
        let rendered = self.pipeline.transform(records)?;

        tracing::info!("Loading output");
        let written = self.pipeline.load(rendered)?;
        match &written {
            Some(path) => tracing::info!("Output saved to {}", path),
            None => tracing::info!("No output requested"),
        }

        Ok(written)
    }
}
