#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use ngforge_cli::config::Config;
use ngforge_cli::error::{ScaffoldError, ScaffoldResult};
use ngforge_cli::project::Project;
use ngforge_cli::runner::{describe, CommandRunner};
use tempfile::TempDir;

pub const ANGULAR_JSON: &str = r#"{
  "version": 1,
  "projects": {
    "demo": {
      "projectType": "application",
      "architect": {
        "build": {
          "builder": "@angular/build:application",
          "configurations": {
            "production": {
              "outputHashing": "none"
            }
          }
        },
        "serve": {
          "builder": "@angular/build:dev-server"
        }
      }
    }
  }
}
"#;

pub const PACKAGE_JSON: &str = r#"{
  "name": "demo",
  "dependencies": {
    "@angular/core": "^20.0.0",
    "@angular/router": "^20.0.0"
  }
}
"#;

pub const APP_ROUTES: &str = "import { Routes } from '@angular/router';\n\nexport const routes: Routes = [];\n";

// ── Fixtures ────────────────────────────────────────────────────────

/// A freshly generated Angular workspace: `angular.json`, `package.json`
/// and an empty `app.routes.ts`.
pub fn angular_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "angular.json", ANGULAR_JSON);
    write(tmp.path(), "package.json", PACKAGE_JSON);
    write(tmp.path(), "src/app/app.routes.ts", APP_ROUTES);
    tmp
}

/// Open the workspace with default settings, independent of the environment.
pub fn open(tmp: &TempDir) -> Project {
    Project::with_config(tmp.path(), Config::default()).unwrap()
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

pub fn exists(root: &Path, relative: &str) -> bool {
    root.join(relative).exists()
}

// ── Recording runner ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Records every command instead of spawning it; optionally fails with an exit code.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Call>>,
    pub exit_code: Option<i32>,
}

impl RecordingRunner {
    pub fn failing(code: i32) -> Self {
        RecordingRunner {
            calls: RefCell::new(Vec::new()),
            exit_code: Some(code),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> ScaffoldResult<()> {
        self.calls.borrow_mut().push(Call {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });
        match self.exit_code {
            Some(code) => Err(ScaffoldError::Subprocess {
                command: describe(program, args),
                status: Some(code),
            }),
            None => Ok(()),
        }
    }
}
