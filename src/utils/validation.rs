use crate::utils::error::{RenormError, Result};
use std::path::{Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn require_input_path(path: &Option<PathBuf>) -> Result<&Path> {
    path.as_deref().ok_or(RenormError::MissingInput)
}

pub fn validate_input_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(RenormError::InputNotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_input_path() {
        let missing: Option<PathBuf> = None;
        assert!(matches!(
            require_input_path(&missing),
            Err(RenormError::MissingInput)
        ));

        let present = Some(PathBuf::from("data.json"));
        assert_eq!(
            require_input_path(&present).unwrap(),
            Path::new("data.json")
        );
    }

    #[test]
    fn test_validate_input_exists() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_input_exists(file.path()).is_ok());

        assert!(matches!(
            validate_input_exists(Path::new("no/such/file.json")),
            Err(RenormError::InputNotFound)
        ));
    }
}
