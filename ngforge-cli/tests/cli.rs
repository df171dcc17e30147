mod common;

use clap::{CommandFactory, Parser};
use common::{angular_workspace, RecordingRunner};
use ngforge_cli::cli::{execute, Cli, Commands};
use ngforge_cli::error::ScaffoldError;
use ngforge_cli::prompt::ScriptedPrompter;
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

// ── Definition ──────────────────────────────────────────────────────

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parses_subcommand_with_defaults() {
    let cli = Cli::try_parse_from(["ngforge", "page"]).unwrap();
    assert_eq!(cli.command, Commands::Page);
    assert_eq!(cli.project_root, PathBuf::from("."));
    assert!(!cli.verbose);
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["ngforge", "package", "--project-root", "web", "-v"]).unwrap();
    assert_eq!(cli.command, Commands::Package);
    assert_eq!(cli.project_root, PathBuf::from("web"));
    assert!(cli.verbose);
}

#[test]
fn every_subcommand_parses() {
    let names = ["init", "package", "page", "component", "service", "model", "guard", "directive", "pipe"];
    for name in names {
        assert!(Cli::try_parse_from(["ngforge", name]).is_ok(), "{name} should parse");
    }
}

#[test]
fn subcommands_take_no_arguments() {
    assert!(Cli::try_parse_from(["ngforge", "page", "home"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["ngforge"]).is_err());
}

// ── Dispatch ────────────────────────────────────────────────────────

#[test]
#[serial]
fn refuses_non_angular_root_before_prompting() {
    let tmp = TempDir::new().unwrap();
    let cli = Cli::try_parse_from(["ngforge", "--project-root", tmp.path().to_str().unwrap(), "guard"]).unwrap();
    let prompter = ScriptedPrompter::default().text("admin");

    let err = execute(&cli, &prompter, &RecordingRunner::default()).unwrap_err();
    assert!(matches!(err, ScaffoldError::NotAngularProject(_)));
    assert_eq!(prompter.remaining(), 1);
}

#[test]
#[serial]
fn dispatches_to_generator() {
    let tmp = angular_workspace();
    let cli = Cli::try_parse_from(["ngforge", "guard", "--project-root", tmp.path().to_str().unwrap()]).unwrap();
    let prompter = ScriptedPrompter::default().text("admin");

    execute(&cli, &prompter, &RecordingRunner::default()).unwrap();
    assert!(common::exists(tmp.path(), "src/app/core/guards/admin.guard.ts"));
    assert_eq!(prompter.remaining(), 0);
}

#[test]
#[serial]
fn dispatches_service_to_runner() {
    let tmp = angular_workspace();
    let cli = Cli::try_parse_from(["ngforge", "service", "--project-root", tmp.path().to_str().unwrap()]).unwrap();
    let prompter = ScriptedPrompter::default().text("Auth Token");
    let runner = RecordingRunner::default();

    execute(&cli, &prompter, &runner).unwrap();
    let calls = runner.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args, vec!["g", "s", "core/services/auth-token"]);
}
