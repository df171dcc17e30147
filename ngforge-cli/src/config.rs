//! Optional per-project settings read from `ngforge.yaml`.
//!
//! ```yaml
//! app_dir: src/app
//! environments_dir: src/environments
//! indent: "  "
//! ng_bin: ng
//! ```
//!
//! Every key is optional. `NGFORGE_NG_BIN` overrides `ng_bin`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::files;

pub const CONFIG_FILE: &str = "ngforge.yaml";
pub const NG_BIN_ENV: &str = "NGFORGE_NG_BIN";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Application source directory, relative to the project root.
    pub app_dir: PathBuf,
    /// Directory holding `environment.ts` files, relative to the project root.
    pub environments_dir: PathBuf,
    /// Indentation unit for entries added to empty route arrays.
    pub indent: String,
    /// Angular CLI executable used by `service`.
    pub ng_bin: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_dir: PathBuf::from("src/app"),
            environments_dir: PathBuf::from("src/environments"),
            indent: "  ".into(),
            ng_bin: "ng".into(),
        }
    }
}

impl Config {
    /// Load `ngforge.yaml` from `root` if present, then apply environment overrides.
    pub fn load(root: &Path) -> ScaffoldResult<Self> {
        let path = root.join(CONFIG_FILE);
        let mut config = if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Config::from_yaml_str(&files::read(&path)?)?
        } else {
            Config::default()
        };

        if let Ok(bin) = std::env::var(NG_BIN_ENV) {
            if !bin.trim().is_empty() {
                config.ng_bin = bin;
            }
        }

        Ok(config)
    }

    /// Parse a config document (useful for testing). An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> ScaffoldResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config =
            serde_yaml::from_str(yaml).map_err(|e| ScaffoldError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ScaffoldResult<()> {
        if self.indent.is_empty() || !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ScaffoldError::Config(format!(
                "indent must be spaces or tabs, got {:?}",
                self.indent
            )));
        }
        if self.ng_bin.trim().is_empty() {
            return Err(ScaffoldError::Config("ng_bin must not be empty".into()));
        }
        if self.app_dir.is_absolute() || self.environments_dir.is_absolute() {
            return Err(ScaffoldError::Config(
                "app_dir and environments_dir must be relative to the project root".into(),
            ));
        }
        Ok(())
    }
}
