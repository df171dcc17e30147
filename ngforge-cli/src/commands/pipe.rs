use std::path::PathBuf;

use super::templates::{artifacts, Names};
use super::{create_all, prompt_name};
use crate::error::ScaffoldResult;
use crate::project::Project;
use crate::prompt::Prompter;

pub struct PipeRequest {
    pub name: Names,
}

impl PipeRequest {
    pub fn prompt(prompter: &dyn Prompter) -> ScaffoldResult<Self> {
        Ok(PipeRequest {
            name: prompt_name(prompter, "Pipe name")?,
        })
    }
}

pub fn run(project: &Project, prompter: &dyn Prompter) -> ScaffoldResult<()> {
    let request = PipeRequest::prompt(prompter)?;
    generate(project, &request)?;
    Ok(())
}

/// `shared/pipes/<name>.pipe.ts`; the pipe is registered under its camelCase name.
pub fn generate(project: &Project, request: &PipeRequest) -> ScaffoldResult<PathBuf> {
    let path = project
        .app_dir()
        .join("shared")
        .join("pipes")
        .join(format!("{}.pipe.ts", request.name.kebab));
    create_all(project, &[(path.as_path(), artifacts::pipe(&request.name))])?;
    Ok(path)
}
