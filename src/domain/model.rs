use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One decoded JSON object from the input file. Field order is preserved so
/// re-serialization reproduces the source layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// What the transform stage hands to the sink: a whole document in generic
/// mode, one text line per retained record in report mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Document(String),
    Lines(Vec<String>),
}

impl Rendered {
    /// File representation: lines are newline-joined, a document is verbatim.
    pub fn file_contents(&self) -> String {
        match self {
            Rendered::Document(doc) => doc.clone(),
            Rendered::Lines(lines) => lines.join("\n"),
        }
    }
}
