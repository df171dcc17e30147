use std::path::PathBuf;

use colored::Colorize;

use super::templates::{artifacts, Names};
use super::{create_all, prompt_module, prompt_name};
use crate::error::ScaffoldResult;
use crate::project::Project;
use crate::prompt::Prompter;

pub struct ModelRequest {
    pub name: Names,
    pub module: String,
}

impl ModelRequest {
    pub fn prompt(prompter: &dyn Prompter) -> ScaffoldResult<Self> {
        Ok(ModelRequest {
            name: prompt_name(prompter, "Model name")?,
            module: prompt_module(prompter)?,
        })
    }
}

pub fn run(project: &Project, prompter: &dyn Prompter) -> ScaffoldResult<()> {
    let request = ModelRequest::prompt(prompter)?;
    generate(project, &request)?;
    Ok(())
}

/// Write `features/<module>/models/<name>.ts` with an empty interface.
pub fn generate(project: &Project, request: &ModelRequest) -> ScaffoldResult<PathBuf> {
    let module_dir = project.require_module(&request.module)?;
    let names = &request.name;
    let path = module_dir.join("models").join(format!("{}.ts", names.kebab));

    create_all(project, &[(path.as_path(), artifacts::model(names))])?;

    println!("  Usage:");
    println!(
        "    {}",
        format!("import {{ {} }} from './models/{}';", names.pascal, names.kebab).cyan()
    );
    Ok(path)
}
