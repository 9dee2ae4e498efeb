//! Scan both module roots of a task and write its notice file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::error::DriverError;
use crate::logger::Logger;
use crate::models::PackageRecord;
use crate::notice::compose;
use crate::scanner::license::LicenseMatcher;
use crate::scanner::PackageScanner;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    /// Records in the order they were written.
    pub records: Vec<PackageRecord>,
}

impl RunSummary {
    pub fn missing_licenses(&self) -> usize {
        self.records.iter().filter(|r| !r.has_license_file).count()
    }
}

/// Directory of `task` under the configured tasks directory.
pub fn task_dir(base: &Path, config: &Config, task: &str) -> PathBuf {
    base.join(&config.tasks_dir).join(task)
}

/// The primary and test-dependency module roots, in scan order.
pub fn module_roots(task_dir: &Path) -> [PathBuf; 2] {
    [
        task_dir.join("node_modules"),
        task_dir.join("Tests").join("node_modules"),
    ]
}

/// Stable ordinal sort by package name.
pub fn sort_records(records: &mut [PackageRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Scan, sort, and write the notice for `task`.
///
/// Every record is collected before the output file is created, so a scan
/// failure leaves any existing notice untouched.
pub fn run(base: &Path, task: Option<&str>, config: &Config, logger: &dyn Logger) -> Result<RunSummary> {
    let task = task.ok_or(DriverError::MissingTask)?;
    let matcher = LicenseMatcher::new(config.license_files.as_slice()).context("invalid license_files entry")?;
    let dir = task_dir(base, config, task);

    let mut records = Vec::new();
    for root in module_roots(&dir) {
        logger.info(&format!("Scanning {}", root.display()));
        for record in PackageScanner::new(&root, &matcher, logger) {
            records.push(record?);
        }
    }
    sort_records(&mut records);

    let output = dir.join(&config.output_file);
    write_notice(&output, config.preamble_for(task), &records)
        .with_context(|| format!("writing {}", output.display()))?;

    logger.info(&format!(
        "Wrote {} packages to {}",
        records.len(),
        output.display()
    ));

    Ok(RunSummary { output, records })
}

fn write_notice(path: &Path, preamble: String, records: &[PackageRecord]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in compose(preamble, records) {
        write!(writer, "{}{}", line, LINE_ENDING)?;
    }
    writer.flush()
}
