use std::path::PathBuf;

/// Error type for every `ngforge` command.
#[derive(Debug)]
pub enum ScaffoldError {
    /// The project root has no `angular.json`, or its `package.json` does not
    /// depend on `@angular/core`.
    NotAngularProject(PathBuf),
    /// A command targeted a feature module that does not exist.
    ModuleNotFound { module: String, path: PathBuf },
    /// `package` was asked to create a module that already exists.
    ModuleExists { module: String, path: PathBuf },
    /// A generated file would overwrite an existing one.
    ArtifactExists(PathBuf),
    /// A name answer failed validation.
    InvalidName { input: String, reason: String },
    /// The terminal prompt failed or was interrupted.
    Prompt(String),
    /// An external command exited unsuccessfully. `status` is `None` when it
    /// was terminated by a signal.
    Subprocess { command: String, status: Option<i32> },
    /// `ngforge.yaml` could not be parsed or holds an invalid value.
    Config(String),
    Io { path: PathBuf, source: std::io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::NotAngularProject(root) => write!(
                f,
                "'{}' is not an Angular project root (angular.json missing or @angular/core not a dependency)",
                root.display()
            ),
            ScaffoldError::ModuleNotFound { module, path } => {
                write!(f, "Module '{module}' does not exist in {}", path.display())
            }
            ScaffoldError::ModuleExists { module, path } => {
                write!(f, "Module '{module}' already exists in {}", path.display())
            }
            ScaffoldError::ArtifactExists(path) => {
                write!(f, "File '{}' already exists", path.display())
            }
            ScaffoldError::InvalidName { input, reason } => {
                write!(f, "Invalid name '{input}': {reason}")
            }
            ScaffoldError::Prompt(msg) => write!(f, "Prompt failed: {msg}"),
            ScaffoldError::Subprocess { command, status } => match status {
                Some(code) => write!(f, "Command '{command}' exited with status {code}"),
                None => write!(f, "Command '{command}' was terminated by a signal"),
            },
            ScaffoldError::Config(msg) => write!(f, "Config error: {msg}"),
            ScaffoldError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            ScaffoldError::Json { path, source } => {
                write!(f, "Invalid JSON in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io { source, .. } => Some(source),
            ScaffoldError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<dialoguer::Error> for ScaffoldError {
    fn from(err: dialoguer::Error) -> Self {
        ScaffoldError::Prompt(err.to_string())
    }
}

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
