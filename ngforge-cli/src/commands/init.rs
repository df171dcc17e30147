use std::path::Path;

use colored::Colorize;
use ngforge_core::{RouteEntry, RouteTable};
use serde_json::{json, Map, Value};

use super::package::create_module_folders;
use super::templates::{feature, project as tpl, Names};
use super::{created, register_route, scaffold_file};
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::files;
use crate::project::Project;

/// Folder layout under the app directory. Children of entries flagged `true`
/// get a `.gitkeep`.
const LAYOUT: &[(&str, &[&str], bool)] = &[
    ("core", &["services", "guards", "interceptors"], false),
    ("shared", &["components", "directives", "pipes"], true),
    ("layout", &["main-layout"], false),
    ("features", &[], false),
];

/// Root component files replaced by the single-file `app.ts`.
pub const STALE_APP_FILES: &[&str] = &[
    "app.component.html",
    "app.html",
    "app.spec.ts",
    "app.component.css",
    "app.css",
    "app.scss",
    "app.component.scss",
    "app.component.sass",
    "app.component.less",
    "app.component.spec.ts",
];

/// A module created by `init`: name, route path, guard class and guard file.
struct DefaultModule {
    name: &'static str,
    path: &'static str,
    guard_class: &'static str,
    guard_file: &'static str,
}

const DEFAULT_MODULES: [DefaultModule; 2] = [
    DefaultModule {
        name: "auth",
        path: "",
        guard_class: "GuestGuard",
        guard_file: "guest.guard",
    },
    DefaultModule {
        name: "dashboard",
        path: "dashboard",
        guard_class: "AuthGuard",
        guard_file: "auth.guard",
    },
];

/// Initialise the project structure.
///
/// Existing services, guards, environment files and modules are kept;
/// `app.config.ts` and `app.ts` are always rewritten.
pub fn run(project: &Project) -> ScaffoldResult<()> {
    println!(
        "{} Initialising {}",
        "->".blue(),
        project.root().display().to_string().green()
    );

    let app = project.app_dir();
    create_layout(project, &app)?;
    create_environments(project)?;

    let angular_json = project.root().join("angular.json");
    if update_angular_json(&angular_json)? {
        println!("{} Updated angular.json", "✓".green());
    } else {
        println!("{} angular.json has no build target; left unchanged", "!".yellow());
    }

    let core = app.join("core");
    scaffold_file(project, &core.join("services/core.service.ts"), tpl::core_service())?;
    scaffold_file(project, &core.join("services/api.service.ts"), tpl::api_service())?;
    scaffold_file(
        project,
        &core.join("guards/auth.guard.ts"),
        &tpl::session_guard("AuthGuard", true, "/login"),
    )?;
    scaffold_file(
        project,
        &core.join("guards/guest.guard.ts"),
        &tpl::session_guard("GuestGuard", false, "/dashboard"),
    )?;
    scaffold_file(
        project,
        &core.join("interceptors/http.interceptor.ts"),
        tpl::http_interceptor(),
    )?;

    let app_config = app.join("app.config.ts");
    files::write(&app_config, tpl::app_config())?;
    created(project, &app_config);

    create_main_layout(project, &app.join("layout").join("main-layout"))?;
    replace_root_component(project, &app)?;
    scaffold_file(project, &project.app_routes(), tpl::app_routes())?;

    for module in &DEFAULT_MODULES {
        create_default_module(project, module)?;
    }

    println!();
    println!("{} Project initialised", "✓".green());
    println!("  Modules 'auth' and 'dashboard' were created");
    println!("  ngforge package     add another module");
    println!("  ngforge page        add a page to a module");
    Ok(())
}

fn create_layout(project: &Project, app: &Path) -> ScaffoldResult<()> {
    for (parent, children, keep) in LAYOUT {
        let parent_dir = app.join(parent);
        if files::ensure_dir(&parent_dir)? {
            created(project, &parent_dir);
        }
        for child in children.iter() {
            let dir = parent_dir.join(child);
            let new = if *keep {
                files::ensure_kept_dir(&dir)?
            } else {
                files::ensure_dir(&dir)?
            };
            if new {
                created(project, &dir);
            }
        }
    }
    Ok(())
}

fn create_environments(project: &Project) -> ScaffoldResult<()> {
    let dir = project.environments_dir();
    scaffold_file(project, &dir.join("environment.ts"), &tpl::environment(false))?;
    scaffold_file(project, &dir.join("environment.prod.ts"), &tpl::environment(true))?;
    Ok(())
}

fn create_main_layout(project: &Project, dir: &Path) -> ScaffoldResult<()> {
    let ts = dir.join("main-layout.ts");
    if ts.exists() {
        super::kept(project, &ts);
        return Ok(());
    }
    scaffold_file(project, &ts, tpl::main_layout_ts())?;
    scaffold_file(project, &dir.join("main-layout.html"), tpl::main_layout_html())?;
    scaffold_file(project, &dir.join("main-layout.scss"), tpl::main_layout_scss())?;
    Ok(())
}

fn replace_root_component(project: &Project, app: &Path) -> ScaffoldResult<()> {
    for file in STALE_APP_FILES {
        let path = app.join(file);
        if files::remove(&path)? {
            println!("{} Removed {}", "-".dimmed(), project.display(&path));
        }
    }
    let app_ts = app.join("app.ts");
    files::write(&app_ts, tpl::app_component())?;
    created(project, &app_ts);
    Ok(())
}

fn create_default_module(project: &Project, module: &DefaultModule) -> ScaffoldResult<()> {
    let names = Names::new(module.name);
    let dir = project.module_dir(&names.kebab);

    if dir.exists() {
        super::kept(project, &dir);
    } else {
        create_module_folders(project, &dir)?;
        scaffold_file(
            project,
            &dir.join("routes.ts"),
            &feature::guarded_routes(&names, module.guard_class, module.guard_file),
        )?;
    }

    let entry = RouteEntry::lazy_children(
        module.path,
        &names.routes_const(),
        &format!("./features/{}/routes", names.kebab),
    );
    register_route(project, &project.app_routes(), &RouteTable::app_routes(), &entry)?;
    Ok(())
}

/// Add production file replacements and development defaults to the first
/// project's build target.
///
/// Existing values are kept except `fileReplacements`, which is always set.
/// Returns `false` when the file has no project or no build target.
pub fn update_angular_json(path: &Path) -> ScaffoldResult<bool> {
    let json_error = |source| ScaffoldError::Json {
        path: path.to_path_buf(),
        source,
    };

    let mut doc: Value = serde_json::from_str(&files::read(path)?).map_err(json_error)?;

    let Some(architect) = doc
        .get_mut("projects")
        .and_then(Value::as_object_mut)
        .and_then(|projects| projects.values_mut().next())
        .and_then(|project| project.get_mut("architect"))
        .and_then(Value::as_object_mut)
    else {
        tracing::warn!(path = %path.display(), "no project with an architect section");
        return Ok(false);
    };

    let Some(build) = architect.get_mut("build").and_then(Value::as_object_mut) else {
        tracing::warn!(path = %path.display(), "no build target");
        return Ok(false);
    };

    let Some(configurations) = object_entry(build, "configurations") else {
        return Ok(false);
    };
    if let Some(production) = object_entry(configurations, "production") {
        production.insert(
            "fileReplacements".into(),
            json!([{
                "replace": "src/environments/environment.ts",
                "with": "src/environments/environment.prod.ts"
            }]),
        );
        production.entry("optimization").or_insert(json!(true));
        production.entry("outputHashing").or_insert(json!("all"));
        production.entry("sourceMap").or_insert(json!(false));
    }
    configurations.entry("development").or_insert_with(|| {
        json!({
            "optimization": false,
            "extractLicenses": false,
            "sourceMap": true,
            "namedChunks": true
        })
    });

    if let Some(serve) = architect.get_mut("serve").and_then(Value::as_object_mut) {
        serve
            .entry("defaultConfiguration")
            .or_insert(json!("development"));
    }

    let mut out = serde_json::to_string_pretty(&doc).map_err(json_error)?;
    out.push('\n');
    files::write(path, &out)?;
    Ok(true)
}

/// The object under `key`, created (or replacing a non-object) when needed.
fn object_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Map<String, Value>> {
    let value = map.entry(key).or_insert_with(|| Value::Object(Map::new()));
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut()
}
