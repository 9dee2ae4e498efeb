use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default paragraph following the title block; `{task}` is replaced with the task name.
pub const DEFAULT_PREAMBLE: &str = "This Azure DevOps extension ({task}) is based on or incorporates \
material from the projects listed below (Third Party IP). The original copyright notice and the \
license under which Microsoft received such Third Party IP, are set forth below. Such licenses and \
notices are provided for informational purposes only. Microsoft licenses the Third Party IP to you \
under the licensing terms for the Microsoft product. Microsoft reserves all other rights not \
expressly granted under this agreement, whether by implication, estoppel or otherwise.";

/// Root configuration structure, deserialized from `.notice-checkr/config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory (relative to the base path) holding one sub-directory per task.
    pub tasks_dir: String,
    /// File name of the generated notice, written inside the task directory.
    pub output_file: String,
    /// Accepted license file names, compared case-insensitively.
    pub license_files: Vec<String>,
    /// Boilerplate paragraph; `{task}` is substituted.
    pub preamble: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_dir: "Tasks".to_string(),
            output_file: "ThirdPartyNotice.txt".to_string(),
            license_files: vec![
                "LICENSE".to_string(),
                "LICENSE.md".to_string(),
                "LICENSE.txt".to_string(),
            ],
            preamble: DEFAULT_PREAMBLE.to_string(),
        }
    }
}

impl Config {
    pub fn preamble_for(&self, task: &str) -> String {
        self.preamble.replace("{task}", task)
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<base_path>/.notice-checkr/config.toml`
/// 3. `~/.config/notice-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = base_path.join(".notice-checkr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("notice-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}
