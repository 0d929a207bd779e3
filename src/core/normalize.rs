use crate::core::parser::{self, flexible_strategies};
use crate::core::{sink, ConfigProvider, ParseStrategy, Pipeline, Record, Rendered, Storage};
use crate::utils::error::{RenormError, Result};

/// Generic mode: read one file, normalize whatever JSON shape it holds into
/// an ordered record sequence, and re-emit it as pretty-printed JSON.
pub struct NormalizePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    strategies: Vec<Box<dyn ParseStrategy>>,
}

impl<S: Storage, C: ConfigProvider> NormalizePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            strategies: flexible_strategies(),
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for NormalizePipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path().ok_or(RenormError::MissingInput)?;
        tracing::debug!("Reading input from {}", path.display());
        let raw = self.storage.read_to_string(path)?;
        parser::parse_records(&self.strategies, &raw)
    }

    fn transform(&self, records: Vec<Record>) -> Result<Rendered> {
        // serde_json pretty printing is the 2-space indent the output contract asks for
        let document = serde_json::to_string_pretty(&records)?;
        Ok(Rendered::Document(document))
    }

    fn load(&self, rendered: Rendered) -> Result<Option<String>> {
        sink::deliver(&self.storage, &self.config, &rendered)
    }
}
