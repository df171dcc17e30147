//! # ngforge-core
//!
//! Text patching primitives used by the `ngforge` scaffolding CLI.
//!
//! Generated Angular projects keep their routing in plain TypeScript files
//! (`app.routes.ts`, `features/<module>/routes.ts`). Wiring a new artifact in
//! means splicing an entry into an exported array literal, ahead of the
//! catch-all `**` route if there is one, and adding the matching `import`.
//! This crate does that with depth-counting scans over the raw text. It does
//! not parse TypeScript.
//!
//! | Module | Role |
//! |--------|------|
//! | [`case`] | kebab / Pascal / camel / CONSTANT case formatters |
//! | [`span`] | [`Span`] and the [`Located`] lookup result |
//! | [`scanner`] | locate a declared array literal and its matching `]` |
//! | [`sentinel`] | locate a top-level entry (e.g. the wildcard route) inside an array |
//! | [`inserter`] | plan and apply an insertion with correct commas and indentation |
//! | [`imports`] | add an `import` statement unless the symbol is already there |
//! | [`routes`] | route-registry operations composed from the above |
//!
//! Every locate function returns [`Located::NotFound`] instead of failing, so
//! callers can fall back to printing the lines a user should paste by hand.

pub mod case;
pub mod imports;
pub mod inserter;
mod lexical;
pub mod routes;
pub mod scanner;
pub mod sentinel;
pub mod span;

pub use imports::{contains_identifier, ensure_import};
pub use inserter::{detect_indent, entry_indent, insert, line_indent, plan_insertion, InsertionPlan};
pub use routes::{ManualEdit, PatchOutcome, RouteEntry, RouteTable};
pub use scanner::{locate_array, locate_array_from};
pub use sentinel::{locate_sentinel, Sentinel};
pub use span::{Located, Span};
