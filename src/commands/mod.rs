//! Command implementations
//!
//! Commands come in two flavors, mirroring the porcelain/plumbing split of
//! version-control tooling:
//!
//! - `porcelain`: the user-facing reports (`outline`, `compare`)
//! - `plumbing`: raw structure access for scripting (`detect`, `tokenize`)
//!
//! Every command is a method on [`Session`](crate::areas::session::Session)
//! and writes through its sink.

pub mod plumbing;
pub mod porcelain;

use crate::artifacts::document::grammar::Grammar;

/// Grammar resolution shared by every command: an explicit `--grammar`
/// override wins, otherwise the text is inspected.
pub(crate) fn resolve_grammar(requested: Option<&str>, text: &str) -> anyhow::Result<Grammar> {
    match requested {
        Some(name) => Grammar::try_parse(name),
        None => Grammar::detect(text),
    }
}
