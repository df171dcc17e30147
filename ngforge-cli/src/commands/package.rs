use std::path::Path;

use colored::Colorize;
use ngforge_core::{RouteEntry, RouteTable};

use super::templates::{feature, Names};
use super::{created, prompt_name, register_route, scaffold_file, Registration};
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::files;
use crate::project::Project;
use crate::prompt::Prompter;

/// Sub-folders of every feature module.
pub const MODULE_FOLDERS: [&str; 3] = ["views", "models", "components"];

pub struct PackageRequest {
    pub module: Names,
}

impl PackageRequest {
    pub fn prompt(prompter: &dyn Prompter) -> ScaffoldResult<Self> {
        Ok(PackageRequest {
            module: prompt_name(prompter, "Module name")?,
        })
    }
}

pub fn run(project: &Project, prompter: &dyn Prompter) -> ScaffoldResult<()> {
    let request = PackageRequest::prompt(prompter)?;
    generate(project, &request)?;
    Ok(())
}

/// Create `features/<module>` and register it in `app.routes.ts`.
///
/// Fails if the module folder exists. A registry that cannot be patched is
/// not an error: the lines to add are printed instead.
pub fn generate(project: &Project, request: &PackageRequest) -> ScaffoldResult<Registration> {
    let names = &request.module;
    let dir = project.module_dir(&names.kebab);
    if dir.exists() {
        return Err(ScaffoldError::ModuleExists {
            module: names.kebab.clone(),
            path: project.features_dir(),
        });
    }

    println!("{} Creating module {}", "->".blue(), names.kebab.green());
    create_module_folders(project, &dir)?;
    scaffold_file(project, &dir.join("routes.ts"), &feature::routes(names))?;
    scaffold_file(project, &dir.join("README.md"), &feature::readme(names))?;

    let entry = RouteEntry::spread(
        &names.routes_const(),
        &format!("./features/{}/routes", names.kebab),
    );
    let registration = register_route(project, &project.app_routes(), &RouteTable::app_routes(), &entry)?;

    println!();
    println!("Next steps:");
    println!("  ngforge page        add a page to {}", names.kebab);
    println!("  ngforge component   add a component");
    println!("  The module is served under /{}", names.kebab);

    Ok(registration)
}

/// `views/`, `models/` and `components/`, each with a `.gitkeep`.
pub(crate) fn create_module_folders(project: &Project, dir: &Path) -> ScaffoldResult<()> {
    for folder in MODULE_FOLDERS {
        let path = dir.join(folder);
        if files::ensure_kept_dir(&path)? {
            created(project, &path);
        }
    }
    Ok(())
}
