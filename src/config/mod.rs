pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "renorm")]
#[command(about = "Normalize JSON/NDJSON record files into JSON or passenger report lines")]
pub struct CliConfig {
    /// Input file (JSON array, NDJSON, or a bracket-wrapped hybrid)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (optional)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Display result in console
    #[arg(short, long)]
    pub display: bool,

    /// Report mode: emit one text line per passenger record instead of JSON
    #[arg(short, long)]
    pub report: bool,

    /// Report mode: keep only records with Survived = 1
    #[arg(short, long)]
    pub survived: bool,

    /// Report mode: include the Age field (N/A when missing)
    #[arg(short, long)]
    pub age: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validation::require_input_path(&self.input)?;
        validation::validate_input_exists(input)
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    fn display(&self) -> bool {
        self.display
    }

    fn survived_only(&self) -> bool {
        self.survived
    }

    fn include_age(&self) -> bool {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RenormError;

    #[test]
    fn test_short_and_long_flags() {
        let config =
            CliConfig::try_parse_from(["renorm", "-i", "in.json", "-o", "out.json", "-d"]).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("in.json")));
        assert_eq!(config.output, Some(PathBuf::from("out.json")));
        assert!(config.display);
        assert!(!config.report);

        let config = CliConfig::try_parse_from([
            "renorm", "--input", "in.json", "--report", "--survived", "--age",
        ])
        .unwrap();
        assert!(config.report);
        assert!(config.survived);
        assert!(config.age);
        assert!(!config.display);
    }

    #[test]
    fn test_validate_requires_input_flag() {
        let config = CliConfig::try_parse_from(["renorm"]).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RenormError::MissingInput));
        assert_eq!(err.to_string(), "Please, specify input file");
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let config = CliConfig::try_parse_from(["renorm", "-i", "no/such/input.json"]).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RenormError::InputNotFound));
        assert_eq!(err.to_string(), "Cannot find input file");
    }
}
