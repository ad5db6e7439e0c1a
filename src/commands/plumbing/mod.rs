//! Plumbing commands (raw structure access)
//!
//! - `detect`: print the grammar a file's text resolves to
//! - `tokenize`: dump the tokenized section list as JSON

pub mod detect;
pub mod tokenize;
