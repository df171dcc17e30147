//! Command implementations for the `ngforge` CLI.
//!
//! Each submodule corresponds to one subcommand. Commands that take input
//! expose a typed request with a `prompt` constructor and a `generate`
//! function that does the work, so tests can skip the terminal.

/// Project initialisation: `ngforge init`.
///
/// Creates the `core`/`shared`/`layout`/`features` layout, environment files,
/// core services, guards, the HTTP interceptor and the main layout, patches
/// `angular.json`, and registers the default `auth` and `dashboard` modules.
pub mod init;

/// Feature modules: `ngforge package`.
///
/// Creates `features/<module>` with its `routes.ts` and registers the
/// module's route constant in `app.routes.ts`.
pub mod package;

/// Routed pages: `ngforge page`.
///
/// Writes the page component and adds it to the module's `children` routes.
pub mod page;

/// Standalone components: `ngforge component`.
pub mod component;

/// Services: `ngforge service`, delegated to the Angular CLI.
pub mod service;

/// Model interfaces: `ngforge model`.
pub mod model;

/// Functional route guards: `ngforge guard`.
pub mod guard;

/// Attribute directives: `ngforge directive`.
pub mod directive;

/// Pipes: `ngforge pipe`.
pub mod pipe;

/// Code templates and the [`templates::Names`] helper.
pub mod templates;

use std::path::Path;

use colored::Colorize;
use ngforge_core::{ManualEdit, PatchOutcome, RouteEntry, RouteTable};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::files;
use crate::project::Project;
use crate::prompt::{artifact_name, Prompter};
use templates::Names;

/// What happened to a route registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Added,
    AlreadyPresent,
    /// The file could not be patched; the lines were printed for the user.
    Manual(ManualEdit),
}

/// Register `entry` in `file`, printing what the user has to do by hand when
/// the file is missing or its route array cannot be found.
pub(crate) fn register_route(
    project: &Project,
    file: &Path,
    table: &RouteTable,
    entry: &RouteEntry,
) -> ScaffoldResult<Registration> {
    let shown = project.display(file);

    if !file.is_file() {
        let edit = entry.manual_edit(format!("{shown} does not exist"));
        print_manual_edit(&shown, &edit);
        return Ok(Registration::Manual(edit));
    }

    let text = files::read(file)?;
    match table.register(&text, entry, &project.config().indent) {
        PatchOutcome::Patched(updated) => {
            files::write(file, &updated)?;
            println!("{} Registered {} in {}", "✓".green(), entry.symbol.cyan(), shown);
            Ok(Registration::Added)
        }
        PatchOutcome::AlreadyPresent => {
            println!("{} {} is already registered in {}", "-".dimmed(), entry.symbol, shown);
            Ok(Registration::AlreadyPresent)
        }
        PatchOutcome::ManualEdit(edit) => {
            print_manual_edit(&shown, &edit);
            Ok(Registration::Manual(edit))
        }
    }
}

fn print_manual_edit(shown: &str, edit: &ManualEdit) {
    tracing::warn!(file = %shown, reason = %edit.reason, "falling back to manual edit");
    println!("{} Could not update {}: {}", "!".yellow(), shown, edit.reason);
    println!("  Add manually:");
    for line in &edit.lines {
        println!("    {}", line.cyan());
    }
}

pub(crate) fn created(project: &Project, path: &Path) {
    println!("{} Created {}", "✓".green(), project.display(path).cyan());
}

pub(crate) fn kept(project: &Project, path: &Path) {
    println!("{} Kept existing {}", "-".dimmed(), project.display(path));
}

/// Write a file unless it exists, reporting either way.
pub(crate) fn scaffold_file(project: &Project, path: &Path, content: &str) -> ScaffoldResult<bool> {
    let written = files::write_if_absent(path, content)?;
    if written {
        created(project, path);
    } else {
        kept(project, path);
    }
    Ok(written)
}

/// Write several new files, failing before any write if one already exists.
pub(crate) fn create_all(project: &Project, outputs: &[(&Path, String)]) -> ScaffoldResult<()> {
    if let Some((path, _)) = outputs.iter().find(|(path, _)| path.exists()) {
        return Err(ScaffoldError::ArtifactExists(path.to_path_buf()));
    }
    for (path, content) in outputs {
        files::create_new(path, content)?;
        created(project, path);
    }
    Ok(())
}

pub(crate) fn prompt_name(prompter: &dyn Prompter, label: &str) -> ScaffoldResult<Names> {
    let raw = prompter.input(label, artifact_name)?;
    Ok(Names::new(&raw))
}

/// Module answers are normalised to the kebab-case folder name.
pub(crate) fn prompt_module(prompter: &dyn Prompter) -> ScaffoldResult<String> {
    Ok(prompt_name(prompter, "Module")?.kebab)
}
