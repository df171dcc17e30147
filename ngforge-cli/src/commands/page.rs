use ngforge_core::{RouteEntry, RouteTable};

use super::templates::{feature, Names};
use super::{create_all, created, prompt_module, prompt_name, register_route, Registration};
use crate::error::ScaffoldResult;
use crate::files;
use crate::project::Project;
use crate::prompt::Prompter;

pub struct PageRequest {
    pub page: Names,
    pub module: String,
}

impl PageRequest {
    pub fn prompt(prompter: &dyn Prompter) -> ScaffoldResult<Self> {
        Ok(PageRequest {
            page: prompt_name(prompter, "Page name")?,
            module: prompt_module(prompter)?,
        })
    }
}

pub fn run(project: &Project, prompter: &dyn Prompter) -> ScaffoldResult<()> {
    let request = PageRequest::prompt(prompter)?;
    generate(project, &request)?;
    Ok(())
}

/// Write `views/<page>-page/<page>.page.*` and route it inside the module.
pub fn generate(project: &Project, request: &PageRequest) -> ScaffoldResult<Registration> {
    let module_dir = project.require_module(&request.module)?;
    let names = &request.page;
    let folder = format!("{}-page", names.kebab);
    let dir = module_dir.join("views").join(&folder);

    let ts = dir.join(format!("{}.page.ts", names.kebab));
    let html = dir.join(format!("{}.page.html", names.kebab));
    let scss = dir.join(format!("{}.page.scss", names.kebab));
    create_all(
        project,
        &[
            (ts.as_path(), feature::page_ts(names)),
            (html.as_path(), feature::page_html(names)),
            (scss.as_path(), feature::page_scss(names)),
        ],
    )?;

    let routes = module_dir.join("routes.ts");
    if !routes.is_file() {
        files::write(&routes, &feature::bare_routes(&Names::new(&request.module)))?;
        created(project, &routes);
    }

    let entry = RouteEntry::component(
        &names.kebab,
        &format!("{}Page", names.pascal),
        &format!("./views/{folder}/{}.page", names.kebab),
    );
    register_route(project, &routes, &RouteTable::feature_routes(), &entry)
}
