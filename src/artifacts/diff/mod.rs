//! Line-level diffing
//!
//! This module implements the shortest-edit-script machinery used to compare
//! two versions of a section body:
//!
//! - `edit`: edit operations (equal/insert/delete) carrying 1-based line
//!   numbers for the side(s) they touch
//! - `myers`: Myers' O(ND) diff over arbitrary `Eq` sequences
//!
//! The engine is pure and I/O-free; coloring and layout of a script belong
//! to the command layer.

pub mod edit;
pub mod myers;
