use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::ScanError;
use crate::logger::Logger;

/// Case-insensitive matcher over the accepted license file names.
#[derive(Debug, Clone)]
pub struct LicenseMatcher {
    pattern: Regex,
}

impl LicenseMatcher {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = names.iter().map(|n| regex::escape(n.as_ref())).collect();
        let pattern = Regex::new(&format!("(?i)^(?:{})$", alternatives.join("|")))?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }
}

/// Find the license file among the immediate entries of `dir`.
///
/// Returns the first candidate in directory-listing order. Several
/// candidates produce a warning; the first one is still used.
pub fn find_license_file(
    dir: &Path,
    matcher: &LicenseMatcher,
    logger: &dyn Logger,
) -> Result<Option<PathBuf>, ScanError> {
    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))? {
        let entry = entry.map_err(|e| ScanError::io(dir, e))?;
        if matcher.is_match(&entry.file_name().to_string_lossy()) {
            candidates.push(entry.path());
        }
    }

    if candidates.len() > 1 {
        let names: Vec<String> = candidates
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        logger.warning(&format!(
            "Multiple license files found in {}: {}; using {}",
            dir.display(),
            names.join(", "),
            names[0]
        ));
    }

    Ok(candidates.into_iter().next())
}
