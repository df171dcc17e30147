//! The Angular project a command operates on.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::files;

/// An Angular workspace root together with its `ngforge` settings.
///
/// Commands build every path from here; nothing consults the process working
/// directory.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Verify that `root` is an Angular project and load its config.
    pub fn open(root: impl Into<PathBuf>) -> ScaffoldResult<Self> {
        let root = root.into();
        if !is_angular_project(&root)? {
            return Err(ScaffoldError::NotAngularProject(root));
        }
        let config = Config::load(&root)?;
        Ok(Project { root, config })
    }

    /// Use an explicit config instead of `ngforge.yaml`. The root is still checked.
    pub fn with_config(root: impl Into<PathBuf>, config: Config) -> ScaffoldResult<Self> {
        let root = root.into();
        if !is_angular_project(&root)? {
            return Err(ScaffoldError::NotAngularProject(root));
        }
        Ok(Project { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn app_dir(&self) -> PathBuf {
        self.root.join(&self.config.app_dir)
    }

    pub fn environments_dir(&self) -> PathBuf {
        self.root.join(&self.config.environments_dir)
    }

    pub fn features_dir(&self) -> PathBuf {
        self.app_dir().join("features")
    }

    pub fn module_dir(&self, module: &str) -> PathBuf {
        self.features_dir().join(module)
    }

    /// `app.routes.ts`, the central route registry.
    pub fn app_routes(&self) -> PathBuf {
        self.app_dir().join("app.routes.ts")
    }

    /// Directory of an existing feature module.
    pub fn require_module(&self, module: &str) -> ScaffoldResult<PathBuf> {
        let dir = self.module_dir(module);
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(ScaffoldError::ModuleNotFound {
                module: module.to_string(),
                path: self.features_dir(),
            })
        }
    }

    /// `path` relative to the project root, for display.
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// `angular.json` must exist; when a `package.json` is present it must list
/// `@angular/core` under `dependencies`.
pub fn is_angular_project(root: &Path) -> ScaffoldResult<bool> {
    if !root.join("angular.json").is_file() {
        return Ok(false);
    }

    let package_json = root.join("package.json");
    if !package_json.is_file() {
        return Ok(true);
    }

    let manifest: serde_json::Value =
        serde_json::from_str(&files::read(&package_json)?).map_err(|source| ScaffoldError::Json {
            path: package_json.clone(),
            source,
        })?;

    let core = &manifest["dependencies"]["@angular/core"];
    Ok(match core {
        serde_json::Value::Null | serde_json::Value::Bool(false) => false,
        serde_json::Value::String(version) => !version.is_empty(),
        _ => true,
    })
}
