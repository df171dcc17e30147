//! External commands such as the Angular CLI.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ScaffoldError, ScaffoldResult};

pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, failing on a non-zero exit.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> ScaffoldResult<()>;
}

/// Spawns real processes that inherit the terminal.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> ScaffoldResult<()> {
        let command = describe(program, args);
        tracing::debug!(%command, cwd = %cwd.display(), "spawning");

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|source| ScaffoldError::Io {
                path: PathBuf::from(program),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            tracing::warn!(%command, ?status, "command failed");
            Err(ScaffoldError::Subprocess {
                command,
                status: status.code(),
            })
        }
    }
}

/// `program arg1 arg2`, for messages.
pub fn describe(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
