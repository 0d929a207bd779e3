use anyhow::Result;
use renorm::utils::validation::Validate;
use renorm::{CliConfig, Engine, LocalStorage, NormalizePipeline, RenormError};
use std::path::PathBuf;
use tempfile::TempDir;

fn config(input: PathBuf, output: Option<PathBuf>) -> CliConfig {
    CliConfig {
        input: Some(input),
        output,
        display: false,
        report: false,
        survived: false,
        age: false,
        verbose: false,
    }
}

fn run_to_file(temp: &TempDir, raw: &str) -> Result<String> {
    let input = temp.path().join("input.json");
    let output = temp.path().join("output.json");
    std::fs::write(&input, raw)?;

    let engine = Engine::new(NormalizePipeline::new(
        LocalStorage::new(),
        config(input, Some(output.clone())),
    ));
    let written = engine.run()?;

    assert_eq!(written, Some(output.display().to_string()));
    Ok(std::fs::read_to_string(output)?)
}

#[test]
fn test_array_input_roundtrips_as_pretty_json() -> Result<()> {
    let temp = TempDir::new()?;
    let raw = r#"[{"id": 1, "name": "Item 1"}, {"id": 2, "name": "Item 2"}]"#;

    let written = run_to_file(&temp, raw)?;

    let expected = serde_json::to_string_pretty(&serde_json::from_str::<serde_json::Value>(raw)?)?;
    assert_eq!(written, expected);
    Ok(())
}

#[test]
fn test_single_object_is_wrapped_in_array() -> Result<()> {
    let temp = TempDir::new()?;
    let written = run_to_file(&temp, r#"{"id": 1}"#)?;
    assert_eq!(written, "[\n  {\n    \"id\": 1\n  }\n]");
    Ok(())
}

#[test]
fn test_ndjson_variants_produce_identical_output() -> Result<()> {
    let temp = TempDir::new()?;
    let plain = "{\"id\": 1}\n{\"id\": 2}\n";
    let wrapped = "[\n{\"id\": 1},\n{\"id\": 2},\n]\n";

    let from_plain = run_to_file(&temp, plain)?;
    let from_wrapped = run_to_file(&temp, wrapped)?;

    assert_eq!(from_plain, from_wrapped);
    assert_eq!(from_plain, "[\n  {\n    \"id\": 1\n  },\n  {\n    \"id\": 2\n  }\n]");
    Ok(())
}

#[test]
fn test_no_output_and_no_display_is_a_successful_noop() -> Result<()> {
    let temp = TempDir::new()?;
    let input = temp.path().join("input.json");
    std::fs::write(&input, "[{\"id\": 1}]")?;

    let engine = Engine::new(NormalizePipeline::new(
        LocalStorage::new(),
        config(input, None),
    ));
    let written = engine.run()?;

    assert_eq!(written, None);
    // nothing but the input file in the directory
    assert_eq!(std::fs::read_dir(temp.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_unparsable_input_reports_invalid_format() -> Result<()> {
    let temp = TempDir::new()?;
    let input = temp.path().join("input.json");
    std::fs::write(&input, "this is not json\nat all")?;

    let engine = Engine::new(NormalizePipeline::new(
        LocalStorage::new(),
        config(input, None),
    ));
    let err = engine.run().unwrap_err();

    assert!(matches!(err, RenormError::InvalidFormat));
    assert_eq!(err.to_string(), "Invalid JSON format");
    Ok(())
}

#[test]
fn test_validation_error_messages() {
    let missing = CliConfig {
        input: None,
        output: None,
        display: false,
        report: false,
        survived: false,
        age: false,
        verbose: false,
    };
    assert_eq!(
        missing.validate().unwrap_err().to_string(),
        "Please, specify input file"
    );

    let nonexistent = config(PathBuf::from("does/not/exist.json"), None);
    assert_eq!(
        nonexistent.validate().unwrap_err().to_string(),
        "Cannot find input file"
    );
}

#[test]
fn test_write_failure_reports_output_error() -> Result<()> {
    let temp = TempDir::new()?;
    let input = temp.path().join("input.json");
    std::fs::write(&input, "[{\"id\": 1}]")?;

    // parent directory of the output path does not exist
    let output = temp.path().join("missing-dir").join("out.json");
    let engine = Engine::new(NormalizePipeline::new(
        LocalStorage::new(),
        config(input, Some(output)),
    ));
    let err = engine.run().unwrap_err();

    assert!(matches!(err, RenormError::OutputWrite { .. }));
    assert!(err.to_string().starts_with("Error writing to output file:"));
    Ok(())
}
