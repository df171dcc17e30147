use std::path::PathBuf;

use super::templates::{artifacts, Names};
use super::{create_all, prompt_name};
use crate::error::ScaffoldResult;
use crate::project::Project;
use crate::prompt::Prompter;

pub struct DirectiveRequest {
    pub name: Names,
}

impl DirectiveRequest {
    pub fn prompt(prompter: &dyn Prompter) -> ScaffoldResult<Self> {
        Ok(DirectiveRequest {
            name: prompt_name(prompter, "Directive name")?,
        })
    }
}

pub fn run(project: &Project, prompter: &dyn Prompter) -> ScaffoldResult<()> {
    let request = DirectiveRequest::prompt(prompter)?;
    generate(project, &request)?;
    Ok(())
}

pub fn generate(project: &Project, request: &DirectiveRequest) -> ScaffoldResult<PathBuf> {
    let path = project
        .app_dir()
        .join("shared")
        .join("directives")
        .join(format!("{}.directive.ts", request.name.kebab));
    create_all(project, &[(path.as_path(), artifacts::directive(&request.name))])?;
    Ok(path)
}
