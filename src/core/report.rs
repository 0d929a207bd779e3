use crate::core::parser::StrictLines;
use crate::core::{sink, ConfigProvider, ParseStrategy, Pipeline, Record, Rendered, Storage};
use crate::utils::error::{RenormError, Result};
use serde_json::Value;

/// Report mode: passenger-style records in, one human-readable line per
/// retained record out. Parsing is the strict per-line variant so a bad line
/// is echoed back instead of collapsing into a generic format error.
pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    parser: StrictLines,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            parser: StrictLines,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path().ok_or(RenormError::MissingInput)?;
        tracing::debug!("Reading input from {}", path.display());
        let raw = self.storage.read_to_string(path)?;
        self.parser.parse(&raw)
    }

    fn transform(&self, records: Vec<Record>) -> Result<Rendered> {
        let mut lines = Vec::new();
        for record in &records {
            if self.config.survived_only() && !survived(record) {
                continue;
            }
            lines.push(report_line(record, self.config.include_age()));
        }
        tracing::debug!("Retained {} of {} records", lines.len(), records.len());
        Ok(Rendered::Lines(lines))
    }

    fn load(&self, rendered: Rendered) -> Result<Option<String>> {
        sink::deliver(&self.storage, &self.config, &rendered)
    }
}

// Survived is encoded inconsistently across source files: some emit the
// number 1, some the string "1".
fn survived(record: &Record) -> bool {
    match record.get("Survived") {
        Some(Value::String(s)) => s == "1",
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    }
}

fn report_line(record: &Record, include_age: bool) -> String {
    let mut parts = vec![field_text(record.get("Name"))];
    if include_age {
        parts.push(field_text(record.get("Age")));
    }
    parts.push(field_text(record.get("Ticket")));
    parts.join(" ")
}

/// Plain-text rendering of a field: strings stay unquoted, other values use
/// their JSON form, anything absent or null becomes N/A.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
