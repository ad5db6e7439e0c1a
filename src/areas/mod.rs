//! Command shell plumbing
//!
//! This module holds the pieces that connect the pure comparison core to the
//! outside world:
//!
//! - `intake`: file reading and HTML-report text extraction
//! - `session`: the output sink (stdout or pager) commands write through

pub mod intake;
pub mod session;
