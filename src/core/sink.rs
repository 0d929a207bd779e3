use crate::core::{ConfigProvider, Rendered, Storage};
use crate::utils::error::Result;

/// Load stage shared by both modes: write to the configured output path,
/// echo to stdout when display is on, and report the written path (if any).
/// With neither output nor display configured this is a successful no-op.
pub fn deliver<S: Storage, C: ConfigProvider>(
    storage: &S,
    config: &C,
    rendered: &Rendered,
) -> Result<Option<String>> {
    let mut written = None;
    if let Some(path) = config.output_path() {
        storage.write(path, &rendered.file_contents())?;
        tracing::debug!("Wrote output to {}", path.display());
        written = Some(path.display().to_string());
    }

    if config.display() {
        match rendered {
            Rendered::Document(doc) => println!("{doc}"),
            Rendered::Lines(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
        }
    }

    Ok(written)
}
