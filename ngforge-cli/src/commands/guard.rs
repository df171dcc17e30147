use std::path::PathBuf;

use super::templates::{artifacts, Names};
use super::{create_all, prompt_name};
use crate::error::ScaffoldResult;
use crate::project::Project;
use crate::prompt::Prompter;

pub struct GuardRequest {
    pub name: Names,
}

impl GuardRequest {
    pub fn prompt(prompter: &dyn Prompter) -> ScaffoldResult<Self> {
        Ok(GuardRequest {
            name: prompt_name(prompter, "Guard name")?,
        })
    }
}

pub fn run(project: &Project, prompter: &dyn Prompter) -> ScaffoldResult<()> {
    let request = GuardRequest::prompt(prompter)?;
    generate(project, &request)?;
    Ok(())
}

/// `core/guards/<name>.guard.ts` exporting a `CanActivateFn`.
pub fn generate(project: &Project, request: &GuardRequest) -> ScaffoldResult<PathBuf> {
    let path = project
        .app_dir()
        .join("core")
        .join("guards")
        .join(format!("{}.guard.ts", request.name.kebab));
    create_all(project, &[(path.as_path(), artifacts::guard(&request.name))])?;
    Ok(path)
}
