mod common;

use common::{angular_workspace, exists, open, read, write};
use ngforge_cli::commands::init::{self, update_angular_json, STALE_APP_FILES};
use serde_json::Value;
use tempfile::TempDir;

fn angular_json(tmp: &TempDir) -> Value {
    serde_json::from_str(&read(tmp.path(), "angular.json")).unwrap()
}

// ── Layout ──────────────────────────────────────────────────────────

#[test]
fn creates_project_layout() {
    let tmp = angular_workspace();
    init::run(&open(&tmp)).unwrap();

    let root = tmp.path();
    for dir in ["core/services", "core/guards", "core/interceptors", "layout/main-layout", "features"] {
        assert!(root.join("src/app").join(dir).is_dir(), "{dir} should exist");
    }
    for dir in ["components", "directives", "pipes"] {
        assert!(exists(root, &format!("src/app/shared/{dir}/.gitkeep")));
    }
    for file in [
        "src/environments/environment.ts",
        "src/environments/environment.prod.ts",
        "src/app/core/services/core.service.ts",
        "src/app/core/services/api.service.ts",
        "src/app/core/interceptors/http.interceptor.ts",
        "src/app/layout/main-layout/main-layout.ts",
        "src/app/layout/main-layout/main-layout.html",
        "src/app/layout/main-layout/main-layout.scss",
        "src/app/app.config.ts",
        "src/app/app.ts",
    ] {
        assert!(exists(root, file), "{file} should exist");
    }
    assert!(read(root, "src/environments/environment.prod.ts").contains("production: true"));
}

#[test]
fn session_guards_point_at_each_other() {
    let tmp = angular_workspace();
    init::run(&open(&tmp)).unwrap();

    let auth = read(tmp.path(), "src/app/core/guards/auth.guard.ts");
    assert!(auth.contains("export class AuthGuard implements CanActivate"));
    assert!(auth.contains("if (!this.coreService.isAuthenticated())"));
    assert!(auth.contains("navigate(['/login'])"));

    let guest = read(tmp.path(), "src/app/core/guards/guest.guard.ts");
    assert!(guest.contains("export class GuestGuard implements CanActivate"));
    assert!(guest.contains("if (this.coreService.isAuthenticated())"));
    assert!(guest.contains("navigate(['/dashboard'])"));
}

#[test]
fn stale_root_component_files_are_removed() {
    let tmp = angular_workspace();
    for file in STALE_APP_FILES {
        write(tmp.path(), &format!("src/app/{file}"), "stale");
    }
    write(tmp.path(), "src/app/app.ts", "stale");

    init::run(&open(&tmp)).unwrap();

    for file in STALE_APP_FILES {
        assert!(!exists(tmp.path(), &format!("src/app/{file}")), "{file} should be removed");
    }
    assert!(read(tmp.path(), "src/app/app.ts").contains("export class App {}"));
}

#[test]
fn existing_files_are_kept() {
    let tmp = angular_workspace();
    write(tmp.path(), "src/app/core/services/api.service.ts", "// mine\n");
    write(tmp.path(), "src/app/layout/main-layout/main-layout.ts", "// mine\n");

    init::run(&open(&tmp)).unwrap();

    assert_eq!(read(tmp.path(), "src/app/core/services/api.service.ts"), "// mine\n");
    assert_eq!(read(tmp.path(), "src/app/layout/main-layout/main-layout.ts"), "// mine\n");
    assert!(!exists(tmp.path(), "src/app/layout/main-layout/main-layout.html"));
}

// ── Default modules ─────────────────────────────────────────────────

#[test]
fn default_modules_are_created_and_lazy_loaded() {
    let tmp = angular_workspace();
    init::run(&open(&tmp)).unwrap();

    let auth = read(tmp.path(), "src/app/features/auth/routes.ts");
    assert!(auth.contains("export const AUTH_ROUTES: Routes = ["));
    assert!(auth.contains("canActivate: [GuestGuard]"));
    assert!(auth.contains("from '../../core/guards/guest.guard'"));
    let dashboard = read(tmp.path(), "src/app/features/dashboard/routes.ts");
    assert!(dashboard.contains("canActivate: [AuthGuard]"));
    assert!(exists(tmp.path(), "src/app/features/dashboard/views/.gitkeep"));

    assert_eq!(
        read(tmp.path(), "src/app/app.routes.ts"),
        "import { Routes } from '@angular/router';\n\n\
         export const routes: Routes = [\n\
         \x20 { path: '', loadChildren: () => import('./features/auth/routes').then(m => m.AUTH_ROUTES) },\n\
         \x20 { path: 'dashboard', loadChildren: () => import('./features/dashboard/routes').then(m => m.DASHBOARD_ROUTES) }\n\
         ];\n"
    );
}

#[test]
fn rerun_is_idempotent_for_routes() {
    let tmp = angular_workspace();
    let project = open(&tmp);
    init::run(&project).unwrap();
    let routes = read(tmp.path(), "src/app/app.routes.ts");
    let auth = read(tmp.path(), "src/app/features/auth/routes.ts");
    let config = read(tmp.path(), "angular.json");

    init::run(&project).unwrap();

    assert_eq!(read(tmp.path(), "src/app/app.routes.ts"), routes);
    assert_eq!(read(tmp.path(), "src/app/features/auth/routes.ts"), auth);
    assert_eq!(read(tmp.path(), "angular.json"), config);
}

#[test]
fn missing_registry_is_created() {
    let tmp = angular_workspace();
    std::fs::remove_file(tmp.path().join("src/app/app.routes.ts")).unwrap();

    init::run(&open(&tmp)).unwrap();

    let routes = read(tmp.path(), "src/app/app.routes.ts");
    assert!(routes.contains("m.AUTH_ROUTES"));
    assert!(routes.contains("m.DASHBOARD_ROUTES"));
}

// ── angular.json ────────────────────────────────────────────────────

#[test]
fn angular_json_gets_production_replacements() {
    let tmp = angular_workspace();
    assert!(update_angular_json(&tmp.path().join("angular.json")).unwrap());

    let doc = angular_json(&tmp);
    let build = &doc["projects"]["demo"]["architect"]["build"];
    let production = &build["configurations"]["production"];
    assert_eq!(
        production["fileReplacements"][0]["with"],
        "src/environments/environment.prod.ts"
    );
    assert_eq!(production["outputHashing"], "none");
    assert_eq!(production["optimization"], true);
    assert_eq!(build["configurations"]["development"]["sourceMap"], true);
    assert_eq!(doc["projects"]["demo"]["architect"]["serve"]["defaultConfiguration"], "development");
}

#[test]
fn angular_json_key_order_is_preserved() {
    let tmp = angular_workspace();
    update_angular_json(&tmp.path().join("angular.json")).unwrap();

    let text = read(tmp.path(), "angular.json");
    let version = text.find("\"version\"").unwrap();
    let projects = text.find("\"projects\"").unwrap();
    let builder = text.find("\"builder\"").unwrap();
    let configurations = text.find("\"configurations\"").unwrap();
    assert!(version < projects);
    assert!(builder < configurations);
    assert!(text.ends_with("}\n"));
}

#[test]
fn angular_json_without_build_target() {
    let tmp = angular_workspace();
    let original = r#"{ "projects": { "lib": { "architect": { "test": {} } } } }"#;
    write(tmp.path(), "angular.json", original);

    assert!(!update_angular_json(&tmp.path().join("angular.json")).unwrap());
    assert_eq!(read(tmp.path(), "angular.json"), original);
}

#[test]
fn angular_json_creates_missing_configurations() {
    let tmp = angular_workspace();
    write(
        tmp.path(),
        "angular.json",
        r#"{ "projects": { "demo": { "architect": { "build": { "builder": "x" } } } } }"#,
    );

    assert!(update_angular_json(&tmp.path().join("angular.json")).unwrap());

    let doc = angular_json(&tmp);
    let configurations = &doc["projects"]["demo"]["architect"]["build"]["configurations"];
    assert_eq!(configurations["production"]["outputHashing"], "all");
    assert!(configurations["development"].is_object());
    assert!(doc["projects"]["demo"]["architect"].get("serve").is_none());
}

#[test]
fn malformed_angular_json_is_an_error() {
    let tmp = angular_workspace();
    write(tmp.path(), "angular.json", "{");
    let err = update_angular_json(&tmp.path().join("angular.json")).unwrap_err();
    assert!(matches!(err, ngforge_cli::error::ScaffoldError::Json { .. }));
}
