use std::path::Path;

use crate::error::ScanError;
use crate::models::Manifest;

pub const MANIFEST_FILE: &str = "package.json";

/// Read and parse `<dir>/package.json`.
pub fn read_manifest(dir: &Path) -> Result<Manifest, ScanError> {
    let path = dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| ScanError::io(&path, e))?;
    serde_json::from_str(&content).map_err(|source| ScanError::Manifest { path, source })
}
