//! Core data structures and algorithms
//!
//! This module contains the pure comparison core:
//!
//! - `document`: header grammars, format detection, and section tokenization
//! - `diff`: Myers' shortest-edit-script engine over line sequences
//! - `align`: cross-document section matching and change classification

pub mod align;
pub mod diff;
pub mod document;
