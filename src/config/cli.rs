use crate::core::Storage;
use crate::utils::error::{RenormError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(RenormError::ReadFailed)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        // No implicit directory creation: a missing parent surfaces as a write error.
        fs::write(path, contents).map_err(|source| RenormError::OutputWrite { source })
    }
}
