use crate::domain::model::Record;
use crate::domain::ports::ParseStrategy;
use crate::utils::error::{RenormError, Result};
use serde_json::{Map, Value};

/// Parses the whole trimmed text as one JSON document. An array of objects is
/// used verbatim; a single object becomes a singleton sequence.
pub struct WholeDocument;

impl ParseStrategy for WholeDocument {
    fn name(&self) -> &'static str {
        "whole-document"
    }

    fn parse(&self, raw: &str) -> Result<Vec<Record>> {
        let value: Value =
            serde_json::from_str(raw.trim()).map_err(|_| RenormError::InvalidFormat)?;

        match value {
            Value::Array(items) => items.into_iter().map(into_record).collect(),
            Value::Object(fields) => Ok(vec![Record { fields }]),
            _ => Err(RenormError::InvalidFormat),
        }
    }
}

fn into_record(value: Value) -> Result<Record> {
    match value {
        Value::Object(fields) => Ok(Record { fields }),
        _ => Err(RenormError::InvalidFormat),
    }
}

/// Line-oriented recovery for NDJSON and bracket-wrapped pseudo-arrays: one
/// object per non-empty line, tolerating `[`/`]` wrapper lines and a single
/// trailing comma per line. Every logical record must fit on one line; there
/// is no multi-line object reconstruction.
pub struct LooseLines;

impl ParseStrategy for LooseLines {
    fn name(&self) -> &'static str {
        "loose-lines"
    }

    fn parse(&self, raw: &str) -> Result<Vec<Record>> {
        let mut lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(RenormError::InvalidFormat);
        }

        // A lone "[" line is dropped; otherwise leading brackets are shaved
        // off the first line. Same for "]" on the last line.
        if lines[0] == "[" {
            lines.remove(0);
        } else {
            lines[0] = lines[0].trim_start_matches('[');
        }

        if lines.last() == Some(&"]") {
            lines.pop();
        } else if let Some(last) = lines.last_mut() {
            let trimmed = (*last).trim_end_matches(']');
            *last = trimmed;
        }

        let mut records = Vec::new();
        for line in lines {
            let line = line.strip_suffix(',').unwrap_or(line).trim();
            if line.is_empty() {
                continue;
            }
            let fields: Map<String, Value> =
                serde_json::from_str(line).map_err(|_| RenormError::InvalidFormat)?;
            records.push(Record { fields });
        }

        if records.is_empty() {
            return Err(RenormError::InvalidFormat);
        }
        Ok(records)
    }
}

/// Report-mode parsing: every non-empty line must be a standalone JSON
/// object. The first offending line aborts the run and is echoed back in the
/// error, so this variant is never chained behind a whole-document attempt.
pub struct StrictLines;

impl ParseStrategy for StrictLines {
    fn name(&self) -> &'static str {
        "strict-lines"
    }

    fn parse(&self, raw: &str) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let fields: Map<String, Value> =
                serde_json::from_str(line).map_err(|_| RenormError::InvalidLine {
                    line: line.to_string(),
                })?;
            records.push(Record { fields });
        }
        Ok(records)
    }
}

/// Tries each strategy in order and surfaces the first success. When every
/// strategy rejects the input the caller gets the generic format error;
/// individual rejections are only logged.
pub fn parse_records(strategies: &[Box<dyn ParseStrategy>], raw: &str) -> Result<Vec<Record>> {
    for strategy in strategies {
        match strategy.parse(raw) {
            Ok(records) => {
                tracing::debug!(
                    "{} strategy parsed {} records",
                    strategy.name(),
                    records.len()
                );
                return Ok(records);
            }
            Err(err) => {
                tracing::debug!("{} strategy rejected input: {}", strategy.name(), err);
            }
        }
    }
    Err(RenormError::InvalidFormat)
}

/// Strategy chain for generic mode: whole document first, then line recovery.
pub fn flexible_strategies() -> Vec<Box<dyn ParseStrategy>> {
    vec![Box::new(WholeDocument), Box::new(LooseLines)]
}
