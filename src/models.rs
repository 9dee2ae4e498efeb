use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::error::ScanError;

/// Placeholder body used when a package ships no license file.
pub const NO_LICENSE_FOUND: &str = "NO LICENSE FOUND";

/// One installed package, as it appears in the notice document.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    /// Directory name, or `@scope/name` for scoped packages.
    pub name: String,
    pub url: Option<String>,
    pub license_text: String,
    /// `false` when `license_text` is the [`NO_LICENSE_FOUND`] placeholder.
    pub has_license_file: bool,
}

impl PackageRecord {
    /// Repository URL, if present and non-empty.
    pub fn display_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

/// The subset of `package.json` the scanner consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Declared name; records are named after the install directory instead.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

/// `repository` is either `{ "type": "git", "url": "..." }` or a
/// shorthand such as `github:user/repo`, which carries no `url`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Repository {
    Detailed {
        #[serde(default)]
        url: Option<String>,
    },
    Shorthand(IgnoredAny),
}

impl Manifest {
    /// Extract `repository.url`.
    ///
    /// A manifest without a `repository` entry fails with
    /// [`ScanError::MissingRepositoryUrl`]. A shorthand string (or any other
    /// non-object value) has no `url` property and yields `Ok(None)`.
    pub fn repository_url(&self, package: &str) -> Result<Option<&str>, ScanError> {
        match &self.repository {
            None => Err(ScanError::MissingRepositoryUrl {
                package: package.to_string(),
            }),
            Some(Repository::Detailed { url }) => Ok(url.as_deref()),
            Some(Repository::Shorthand(_)) => Ok(None),
        }
    }
}
