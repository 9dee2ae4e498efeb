//! Discovery of installed packages under a `node_modules` directory.
//!
//! - [`manifest`] — reads `package.json` for the repository URL.
//! - [`license`] — locates the license file of a package directory.
//!
//! [`PackageScanner`] walks one module root lazily, descending one level
//! into `@scope` namespaces, and yields a [`PackageRecord`] per package in
//! directory-listing order.

pub mod license;
pub mod manifest;

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::logger::Logger;
use crate::models::{PackageRecord, NO_LICENSE_FOUND};

use license::{find_license_file, LicenseMatcher};
use manifest::read_manifest;

/// npm's executable-shim directory.
const BIN_DIR: &str = ".bin";

struct Frame {
    dir: PathBuf,
    scope: Option<String>,
    entries: ReadDir,
}

/// Lazy, non-restartable walk over one module root.
///
/// The root is opened on the first call to `next`. After an error has been
/// yielded the iterator returns `None`.
pub struct PackageScanner<'a> {
    root: Option<PathBuf>,
    stack: Vec<Frame>,
    matcher: &'a LicenseMatcher,
    logger: &'a dyn Logger,
    finished: bool,
}

impl<'a> PackageScanner<'a> {
    pub fn new(root: impl Into<PathBuf>, matcher: &'a LicenseMatcher, logger: &'a dyn Logger) -> Self {
        Self {
            root: Some(root.into()),
            stack: Vec::new(),
            matcher,
            logger,
            finished: false,
        }
    }

    fn advance(&mut self) -> Result<Option<PackageRecord>, ScanError> {
        if let Some(root) = self.root.take() {
            let entries = fs::read_dir(&root).map_err(|e| ScanError::io(&root, e))?;
            self.stack.push(Frame {
                dir: root,
                scope: None,
                entries,
            });
        }

        while let Some(frame) = self.stack.last_mut() {
            let entry = match frame.entries.next() {
                Some(entry) => entry.map_err(|e| ScanError::io(&frame.dir, e))?,
                None => {
                    self.stack.pop();
                    continue;
                }
            };
            let scope = frame.scope.clone();
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();

            if file_name.starts_with('@') {
                let entries = fs::read_dir(&path).map_err(|e| ScanError::io(&path, e))?;
                self.stack.push(Frame {
                    dir: path,
                    scope: Some(file_name),
                    entries,
                });
                continue;
            }

            if file_name == BIN_DIR || !path.is_dir() {
                continue;
            }

            let name = match scope {
                Some(scope) => format!("{}/{}", scope, file_name),
                None => file_name,
            };
            return read_package(&path, name, self.matcher, self.logger).map(Some);
        }

        Ok(None)
    }
}

impl Iterator for PackageScanner<'_> {
    type Item = Result<PackageRecord, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.advance() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Build the record for a single package directory.
fn read_package(
    dir: &Path,
    name: String,
    matcher: &LicenseMatcher,
    logger: &dyn Logger,
) -> Result<PackageRecord, ScanError> {
    let manifest = read_manifest(dir)?;
    if let Some(declared) = manifest.name.as_deref().filter(|d| *d != name) {
        logger.info(&format!("{} is installed under an alias of {}", name, declared));
    }

    let (license_text, has_license_file) = match find_license_file(dir, matcher, logger)? {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|e| ScanError::io(&path, e))?;
            (text, true)
        }
        None => {
            logger.info(&format!("No license file found for {}", name));
            (NO_LICENSE_FOUND.to_string(), false)
        }
    };

    let url = manifest.repository_url(&name)?.map(str::to_string);

    Ok(PackageRecord {
        name,
        url,
        license_text,
        has_license_file,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::logger::MemoryLogger;
    use tempfile::TempDir;

    /// Create `<root>/<rel>/package.json` with an optional repository URL and license body.
    pub(crate) fn add_package(root: &Path, rel: &str, url: Option<&str>, license: Option<&str>) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        let manifest = match url {
            Some(url) => format!(r#"{{"name":"{}","repository":{{"type":"git","url":"{}"}}}}"#, rel, url),
            None => format!(r#"{{"name":"{}"}}"#, rel),
        };
        fs::write(dir.join("package.json"), manifest).unwrap();
        if let Some(text) = license {
            fs::write(dir.join("LICENSE"), text).unwrap();
        }
    }

    fn matcher() -> LicenseMatcher {
        LicenseMatcher::new(&["LICENSE", "LICENSE.md", "LICENSE.txt"]).unwrap()
    }

    fn scan_sorted(root: &Path, logger: &dyn Logger) -> Vec<PackageRecord> {
        let m = matcher();
        let mut records: Vec<PackageRecord> = PackageScanner::new(root, &m, logger)
            .collect::<Result<_, _>>()
            .unwrap();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    #[test]
    fn test_plain_and_scoped_packages() {
        let dir = TempDir::new().unwrap();
        add_package(dir.path(), "foo", Some("http://x"), Some("hello\n"));
        add_package(dir.path(), "@scope/bar", Some("http://y"), None);
        add_package(dir.path(), "@scope/baz", Some("http://z"), Some("MIT"));
        let logger = MemoryLogger::new();

        let records = scan_sorted(dir.path(), &logger);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["@scope/bar", "@scope/baz", "foo"]);

        assert_eq!(records[0].url.as_deref(), Some("http://y"));
        assert_eq!(records[0].license_text, NO_LICENSE_FOUND);
        assert!(!records[0].has_license_file);
        assert_eq!(records[2].license_text, "hello\n");
        assert!(records[2].has_license_file);
    }

    #[test]
    fn test_missing_license_logs_info() {
        let dir = TempDir::new().unwrap();
        add_package(dir.path(), "nolicense", Some("http://x"), None);
        let logger = MemoryLogger::new();

        let records = scan_sorted(dir.path(), &logger);
        assert_eq!(records[0].license_text, "NO LICENSE FOUND");
        assert!(logger.infos().iter().any(|m| m.contains("nolicense")));
    }

    #[test]
    fn test_alias_uses_directory_name() {
        let dir = TempDir::new().unwrap();
        let pkg = dir.path().join("lodash-v3");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(
            pkg.join("package.json"),
            r#"{"name":"lodash","repository":{"url":"http://l"}}"#,
        )
        .unwrap();
        let logger = MemoryLogger::new();

        let records = scan_sorted(dir.path(), &logger);
        assert_eq!(records[0].name, "lodash-v3");
        assert!(logger.infos().iter().any(|m| m.contains("alias of lodash")));
    }

    #[test]
    fn test_bin_directory_skipped() {
        let dir = TempDir::new().unwrap();
        add_package(dir.path(), "foo", Some("http://x"), Some("MIT"));
        fs::create_dir_all(dir.path().join(".bin")).unwrap();
        fs::write(dir.path().join(".bin").join("foo"), "#!/bin/sh").unwrap();
        let logger = MemoryLogger::new();

        let records = scan_sorted(dir.path(), &logger);
        assert_eq!(records.len(), 1);
        assert!(records.iter().all(|r| r.name != ".bin"));
    }

    #[test]
    fn test_loose_files_skipped() {
        let dir = TempDir::new().unwrap();
        add_package(dir.path(), "foo", Some("http://x"), Some("MIT"));
        fs::write(dir.path().join(".package-lock.json"), "{}").unwrap();
        let logger = MemoryLogger::new();

        let records = scan_sorted(dir.path(), &logger);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_scoped_name_uses_parent_scope() {
        let dir = TempDir::new().unwrap();
        add_package(dir.path(), "@types/node", Some("http://n"), Some("MIT"));
        add_package(dir.path(), "@babel/core", Some("http://b"), Some("MIT"));
        let logger = MemoryLogger::new();

        for record in scan_sorted(dir.path(), &logger) {
            let (scope, base) = record.name.split_once('/').unwrap();
            assert!(scope.starts_with('@'));
            assert!(dir.path().join(scope).join(base).is_dir());
        }
    }

    #[test]
    fn test_missing_repository_fails_scan() {
        let dir = TempDir::new().unwrap();
        add_package(dir.path(), "norepo", None, Some("MIT"));
        let m = matcher();
        let logger = MemoryLogger::new();

        let mut scanner = PackageScanner::new(dir.path(), &m, &logger);
        let err = scanner.next().unwrap().unwrap_err();
        assert!(matches!(err, ScanError::MissingRepositoryUrl { ref package } if package == "norepo"));
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let m = matcher();
        let logger = MemoryLogger::new();

        let results: Vec<_> = PackageScanner::new(dir.path().join("node_modules"), &m, &logger).collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(ScanError::Io { .. })));
    }

    #[test]
    fn test_empty_root() {
        let dir = TempDir::new().unwrap();
        let m = matcher();
        let logger = MemoryLogger::new();

        assert_eq!(PackageScanner::new(dir.path(), &m, &logger).count(), 0);
    }
}
