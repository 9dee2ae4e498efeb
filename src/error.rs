use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while walking a module-installation tree.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package {package} has no repository URL in its manifest")]
    MissingRepositoryUrl { package: String },
}

/// Failures detected by the driver before any scanning starts.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("missing task name (usage: notice-checkr <TASK>)")]
    MissingTask,
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}
