//! Porcelain commands (user-facing reports)
//!
//! - `outline`: single-document section outline
//! - `compare`: two-document aligned comparison report

pub mod compare;
pub mod outline;
