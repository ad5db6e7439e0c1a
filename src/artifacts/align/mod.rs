//! Cross-document section alignment
//!
//! This module matches the sections of two documents by title and classifies
//! each title as added, removed, modified, or unchanged:
//!
//! - `section_change`: the per-title classification and its report filter
//! - `aligner`: title matching in first-seen order across both documents

pub mod aligner;
pub mod section_change;
