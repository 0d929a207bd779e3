use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenormError {
    #[error("Please, specify input file")]
    MissingInput,

    #[error("Cannot find input file")]
    InputNotFound,

    // Same user-facing text as InputNotFound; the io::Error is kept for the log.
    #[error("Cannot find input file")]
    ReadFailed(#[source] std::io::Error),

    #[error("Invalid JSON format")]
    InvalidFormat,

    #[error("Invalid JSON format in line: {line}")]
    InvalidLine { line: String },

    #[error("Error writing to output file: {source}")]
    OutputWrite { source: std::io::Error },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenormError>;
