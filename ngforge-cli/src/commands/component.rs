use std::path::PathBuf;

use super::templates::{artifacts, Names};
use super::{create_all, prompt_module, prompt_name};
use crate::error::ScaffoldResult;
use crate::project::Project;
use crate::prompt::Prompter;

/// Where a component lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentScope {
    /// `shared/components`
    Shared,
    /// `features/<module>/components`
    Feature(String),
}

pub struct ComponentRequest {
    pub name: Names,
    pub scope: ComponentScope,
}

impl ComponentRequest {
    pub fn prompt(prompter: &dyn Prompter) -> ScaffoldResult<Self> {
        let name = prompt_name(prompter, "Component name")?;
        let scope = if prompter.confirm("Global (shared) component?", false)? {
            ComponentScope::Shared
        } else {
            ComponentScope::Feature(prompt_module(prompter)?)
        };
        Ok(ComponentRequest { name, scope })
    }
}

pub fn run(project: &Project, prompter: &dyn Prompter) -> ScaffoldResult<()> {
    let request = ComponentRequest::prompt(prompter)?;
    generate(project, &request)?;
    Ok(())
}

/// Write `<name>.component.{ts,html,scss}` and return their folder.
pub fn generate(project: &Project, request: &ComponentRequest) -> ScaffoldResult<PathBuf> {
    let names = &request.name;
    let parent = match &request.scope {
        ComponentScope::Shared => project.app_dir().join("shared"),
        ComponentScope::Feature(module) => project.require_module(module)?,
    };
    let dir = parent.join("components").join(&names.kebab);

    let ts = dir.join(format!("{}.component.ts", names.kebab));
    let html = dir.join(format!("{}.component.html", names.kebab));
    let scss = dir.join(format!("{}.component.scss", names.kebab));
    create_all(
        project,
        &[
            (ts.as_path(), artifacts::component_ts(names)),
            (html.as_path(), artifacts::component_html(names)),
            (scss.as_path(), artifacts::component_scss(names)),
        ],
    )?;

    Ok(dir)
}
