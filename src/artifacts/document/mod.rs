//! Structured-log decomposition
//!
//! This module recovers the title/content structure of a hardening scan log:
//!
//! - `grammar`: the two recognized header-delimiter grammars and detection
//! - `section`: the titled, delimiter-bounded block value object
//! - `tokenizer`: the scan loop turning raw text into an ordered section list

pub mod grammar;
pub mod section;
pub mod tokenizer;

/// Bracketed grammar header: a ruler of `=`, a `[ SECTION ]` title line,
/// another ruler of `=`.
pub const BRACKETED_HEADER_REGEX: &str = r"={50,}\n\s*\[ SECTION \] (?P<title>.*?)\n={50,}\n";

/// Labelled grammar header: a ruler of `=`, a `說明:` title line, a `指令:`
/// command line, a ruler of `-`.
pub const LABELLED_HEADER_REGEX: &str =
    r"={50,}\n說明:\s*(?P<title>.*?)\n指令:\s*(?P<command>.*?)\n-{50,}\n";

/// Accepted grammar names on the command line, mapped to canonical names.
/// `diagnostic` and `static` are the names the scan tooling itself uses for
/// the two output formats.
pub const GRAMMAR_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "bracketed" => "bracketed",
    "diagnostic" => "bracketed",
    "labelled" => "labelled",
    "labeled" => "labelled",
    "static" => "labelled",
};

/// Title of the synthetic section holding any preamble text found before the
/// first recognized header.
pub const PREAMBLE_TITLE: &str = "File Header / Meta";
