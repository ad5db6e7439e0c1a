//! scandiff: section-aware comparison of configuration-hardening scan logs.
//!
//! A scan log is split into titled sections by one of two header grammars,
//! and two logs are compared section by section: titles are matched across
//! the documents, classified as added/removed/modified/unchanged, and
//! modified bodies get a line-level shortest edit script (Myers O(ND)).
//!
//! The crate is layered so the analytical core stays pure:
//!
//! - `artifacts`: the pure core (grammars, tokenizer, diff engine, aligner),
//!   total functions over in-memory strings, no I/O
//! - `areas`: the shell, file intake (with HTML text extraction) and the
//!   output session (stdout or pager)
//! - `commands`: the CLI surface wiring the two together

pub mod areas;
pub mod artifacts;
pub mod commands;
