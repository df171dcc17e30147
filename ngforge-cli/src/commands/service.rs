use colored::Colorize;

use super::prompt_name;
use super::templates::Names;
use crate::error::ScaffoldResult;
use crate::files;
use crate::project::Project;
use crate::prompt::Prompter;
use crate::runner::CommandRunner;

pub struct ServiceRequest {
    pub name: Names,
}

impl ServiceRequest {
    pub fn prompt(prompter: &dyn Prompter) -> ScaffoldResult<Self> {
        Ok(ServiceRequest {
            name: prompt_name(prompter, "Service name")?,
        })
    }
}

pub fn run(project: &Project, prompter: &dyn Prompter, runner: &dyn CommandRunner) -> ScaffoldResult<()> {
    let request = ServiceRequest::prompt(prompter)?;
    generate(project, runner, &request)
}

/// Run `<ng_bin> g s core/services/<name>` in the project root.
pub fn generate(project: &Project, runner: &dyn CommandRunner, request: &ServiceRequest) -> ScaffoldResult<()> {
    files::ensure_dir(&project.app_dir().join("core").join("services"))?;

    let target = format!("core/services/{}", request.name.kebab);
    runner.run(&project.config().ng_bin, &["g", "s", target.as_str()], project.root())?;

    println!("{} Generated service {}", "✓".green(), target.cyan());
    Ok(())
}
