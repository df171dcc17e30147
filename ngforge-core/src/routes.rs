//! Route registry patching.
//!
//! Two kinds of file are patched:
//!
//! - the central registry (`app.routes.ts`), one exported `routes` array whose
//!   entries are spreads of per-module constants or inline route objects;
//! - a feature's `routes.ts`, whose exported constant holds a layout route
//!   with a nested `children` array that receives new pages.
//!
//! In both, a catch-all `{ path: '**' }` entry must stay last.

use std::sync::LazyLock;

use regex::Regex;

use crate::imports::{contains_identifier, ensure_import};
use crate::inserter::{entry_indent, insert};
use crate::scanner::{locate_array, locate_array_from};
use crate::sentinel::{locate_sentinel, Sentinel};
use crate::span::{Located, Span};

static APP_ROUTES_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+const\s+routes\s*:\s*(?:Routes|Route\s*\[\s*\])\s*=\s*\[")
        .expect("static pattern")
});

static FEATURE_ROUTES_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+const\s+[A-Za-z_$][\w$]*\s*:\s*(?:Routes|Route\s*\[\s*\])\s*=\s*\[")
        .expect("static pattern")
});

static CHILDREN_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bchildren\s*:\s*\[").expect("static pattern"));

/// Result of a registry patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The updated file content.
    Patched(String),
    /// The entry's symbol already occurs in the file; nothing to do.
    AlreadyPresent,
    /// The route array could not be located; the user must edit by hand.
    ManualEdit(ManualEdit),
}

/// Lines a user has to add themselves when a file cannot be patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualEdit {
    pub reason: String,
    pub lines: Vec<String>,
}

/// One route to register, together with what it needs imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Identifier whose presence means the route is already registered.
    pub symbol: String,
    /// Import statement required by `text`, if any.
    pub import: Option<String>,
    /// The array element itself.
    pub text: String,
}

impl RouteEntry {
    /// `...USERS_ROUTES`, importing the constant from `module_path`.
    pub fn spread(const_name: &str, module_path: &str) -> Self {
        RouteEntry {
            symbol: const_name.to_string(),
            import: Some(format!("import {{ {const_name} }} from '{module_path}';")),
            text: format!("...{const_name}"),
        }
    }

    /// `{ path: '...', component: Class }`, importing `Class` from `class_path`.
    pub fn component(path: &str, class_name: &str, class_path: &str) -> Self {
        RouteEntry {
            symbol: class_name.to_string(),
            import: Some(format!("import {{ {class_name} }} from '{class_path}';")),
            text: format!("{{ path: '{path}', component: {class_name} }}"),
        }
    }

    /// A lazily loaded feature: `{ path, loadChildren: () => import(...) }`.
    pub fn lazy_children(path: &str, const_name: &str, module_path: &str) -> Self {
        RouteEntry {
            symbol: const_name.to_string(),
            import: None,
            text: format!(
                "{{ path: '{path}', loadChildren: () => import('{module_path}').then(m => m.{const_name}) }}"
            ),
        }
    }

    /// The lines a user must add by hand when `reason` prevents patching.
    pub fn manual_edit(&self, reason: impl Into<String>) -> ManualEdit {
        let reason = reason.into();
        let mut lines = Vec::with_capacity(2);
        if let Some(import) = &self.import {
            lines.push(import.clone());
        }
        lines.push(format!("{},", self.text));
        ManualEdit { reason, lines }
    }
}

/// A route array inside a registry file: how its declaration reads, an
/// optional nested array that actually receives entries, and the entry that
/// must stay last.
#[derive(Debug, Clone)]
pub struct RouteTable {
    declaration: Regex,
    nested: Option<Regex>,
    sentinel: Sentinel,
}

impl RouteTable {
    pub fn new(declaration: Regex) -> Self {
        RouteTable {
            declaration,
            nested: None,
            sentinel: Sentinel::wildcard_route(),
        }
    }

    /// `export const routes: Routes = [...]` in `app.routes.ts`.
    pub fn app_routes() -> Self {
        RouteTable::new(APP_ROUTES_DECLARATION.clone())
    }

    /// The first exported route constant of a feature's `routes.ts`,
    /// descending into its `children` array when there is one.
    pub fn feature_routes() -> Self {
        RouteTable::new(FEATURE_ROUTES_DECLARATION.clone()).with_nested(CHILDREN_DECLARATION.clone())
    }

    pub fn with_nested(mut self, nested: Regex) -> Self {
        self.nested = Some(nested);
        self
    }

    pub fn with_sentinel(mut self, sentinel: Sentinel) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Span of the array that receives new entries.
    pub fn locate(&self, text: &str) -> Located {
        let Some(outer) = locate_array(text, &self.declaration).span() else {
            return Located::NotFound;
        };

        let nested = self
            .nested
            .as_ref()
            .and_then(|nested| locate_array_from(text, nested, outer.start + 1).span())
            .filter(|inner| inner.end < outer.end);

        Located::Found(nested.unwrap_or(outer))
    }

    /// Register `entry` in `text`.
    ///
    /// The import (if any) is added first, then the array is located again in
    /// the updated text and the entry is inserted before the sentinel, or
    /// last when the array has none. `indent_unit` is used to indent entries
    /// of an array that is still empty.
    pub fn register(&self, text: &str, entry: &RouteEntry, indent_unit: &str) -> PatchOutcome {
        if contains_identifier(text, &entry.symbol) {
            tracing::debug!(symbol = %entry.symbol, "route already registered");
            return PatchOutcome::AlreadyPresent;
        }

        if !self.locate(text).is_found() {
            return PatchOutcome::ManualEdit(entry.manual_edit(format!(
                "no route array matching `{}` was found",
                self.declaration.as_str()
            )));
        }

        let with_import = match &entry.import {
            Some(import) => ensure_import(text, &entry.symbol, import),
            None => text.to_string(),
        };

        let Some(array) = self.locate(&with_import).span() else {
            return PatchOutcome::ManualEdit(
                entry.manual_edit("the route array could not be located after adding the import"),
            );
        };

        let sentinel = self.sentinel_in(&with_import, array);
        let indent = entry_indent(&with_import, array, indent_unit);
        tracing::debug!(
            symbol = %entry.symbol,
            before_sentinel = sentinel.is_some(),
            "inserting route entry"
        );

        PatchOutcome::Patched(insert(&with_import, array, sentinel, &entry.text, &indent))
    }

    fn sentinel_in(&self, text: &str, array: Span) -> Option<Span> {
        locate_sentinel(array.body_text(text), &self.sentinel)
            .shift(array.start + 1)
            .span()
    }
}
