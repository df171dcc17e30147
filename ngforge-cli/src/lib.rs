//! # ngforge-cli
//!
//! Interactive scaffolding for Angular standalone projects.
//!
//! This crate provides the `ngforge` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ngforge init` | Core services, guards, interceptor, layout, default `auth`/`dashboard` modules |
//! | `ngforge package` | Feature module under `features/`, registered in `app.routes.ts` |
//! | `ngforge page` | Routed page inside a module |
//! | `ngforge component` | Standalone component, shared or module-local |
//! | `ngforge service` | Service through `ng generate service` |
//! | `ngforge model` | Interface under a module's `models/` |
//! | `ngforge guard` | Functional `CanActivateFn` guard |
//! | `ngforge directive` | Attribute directive |
//! | `ngforge pipe` | Standalone pipe |
//!
//! Every command takes the global `--project-root <DIR>` (default `.`) and
//! `--verbose` flags and asks for its inputs interactively.
//!
//! ## Architecture
//!
//! - [`cli`]: clap definition, dispatch, tracing and panic setup
//! - [`commands`]: one module per subcommand plus the code templates
//! - [`project`]: project root check and path layout
//! - [`config`]: optional `ngforge.yaml`
//! - [`prompt`]: [`prompt::Prompter`] over `dialoguer`, and a scripted stand-in
//! - [`runner`]: [`runner::CommandRunner`] for the Angular CLI
//! - [`files`]: filesystem helpers with path-aware errors
//! - [`error`]: [`error::ScaffoldError`]
//!
//! Route registry edits go through `ngforge-core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod files;
pub mod project;
pub mod prompt;
pub mod runner;
