use crate::domain::model::{Record, Rendered};
use crate::utils::error::Result;
use std::path::Path;

/// File access seam so pipeline tests can run against in-memory storage.
pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Immutable view of the resolved configuration, built once at startup.
pub trait ConfigProvider {
    fn input_path(&self) -> Option<&Path>;
    fn output_path(&self) -> Option<&Path>;
    fn display(&self) -> bool;
    fn survived_only(&self) -> bool;
    fn include_age(&self) -> bool;
}

/// One way of decoding raw text into records.
pub trait ParseStrategy {
    fn name(&self) -> &'static str;
    fn parse(&self, raw: &str) -> Result<Vec<Record>>;
}

/// The three pipeline stages. Each mode of the tool is one implementation,
/// run by the same engine.
pub trait Pipeline {
    /// Read and decode the input into an ordered record sequence.
    fn extract(&self) -> Result<Vec<Record>>;
    /// Filter/project the records into their output form.
    fn transform(&self, records: Vec<Record>) -> Result<Rendered>;
    /// Write and/or display; returns the output path when a file was written.
    fn load(&self, rendered: Rendered) -> Result<Option<String>>;
}
