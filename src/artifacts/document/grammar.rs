use crate::artifacts::document::{BRACKETED_HEADER_REGEX, GRAMMAR_ALIASES, LABELLED_HEADER_REGEX};
use anyhow::Context;
use regex::Regex;
use serde::Serialize;

/// One of the two recognized header-delimiter conventions of a scan log.
///
/// - `Bracketed`: a line of ≥50 `=`, a `[ SECTION ] <title>` line, another
///   line of ≥50 `=` (the "diagnostic" scan format).
/// - `Labelled`: a line of ≥50 `=`, a `說明: <title>` line, a
///   `指令: <command>` line, a line of ≥50 `-` (the "static" scan format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    Bracketed,
    Labelled,
}

impl Grammar {
    /// Decides which grammar applies to a raw text blob.
    ///
    /// The Labelled pattern is strictly more specific, so one match anywhere
    /// selects it; otherwise Bracketed is the default. Detection never fails
    /// on content; a text matching neither grammar surfaces later as the
    /// tokenizer's empty section list.
    pub fn detect(text: &str) -> anyhow::Result<Self> {
        let labelled = Regex::new(LABELLED_HEADER_REGEX)
            .with_context(|| format!("invalid header regex: {LABELLED_HEADER_REGEX}"))?;

        if labelled.is_match(text) {
            Ok(Grammar::Labelled)
        } else {
            Ok(Grammar::Bracketed)
        }
    }

    /// Parses a user-supplied grammar name, accepting the aliases of
    /// [`GRAMMAR_ALIASES`] case-insensitively.
    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        let normalized = name.to_ascii_lowercase();

        match GRAMMAR_ALIASES.get(normalized.as_str()) {
            Some(&"bracketed") => Ok(Grammar::Bracketed),
            Some(&"labelled") => Ok(Grammar::Labelled),
            _ => anyhow::bail!(
                "unknown grammar '{}': valid names are bracketed, diagnostic, labelled, labeled, static",
                name
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grammar::Bracketed => "bracketed",
            Grammar::Labelled => "labelled",
        }
    }

    /// Compiles the header-matching strategy used by the tokenizer.
    pub fn header_pattern(&self) -> anyhow::Result<Box<dyn HeaderPattern>> {
        match self {
            Grammar::Bracketed => Ok(Box::new(BracketedPattern::compile()?)),
            Grammar::Labelled => Ok(Box::new(LabelledPattern::compile()?)),
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A header occurrence in the source text.
///
/// `start`/`end` are byte offsets of the full header span; `title` is the
/// captured header text, trimmed. `command` is only produced by the Labelled
/// grammar, and an empty capture degrades to `None` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub start: usize,
    pub end: usize,
    pub title: String,
    pub command: Option<String>,
}

/// Header-matching strategy of one grammar.
///
/// `find_from` returns the leftmost header at or after `offset`, so callers
/// scan with an explicit `(match, next_offset)` loop instead of relying on
/// hidden cursor state inside a global pattern.
pub trait HeaderPattern {
    fn find_from(&self, text: &str, offset: usize) -> Option<HeaderMatch>;
}

pub struct BracketedPattern {
    regex: Regex,
}

impl BracketedPattern {
    pub fn compile() -> anyhow::Result<Self> {
        let regex = Regex::new(BRACKETED_HEADER_REGEX)
            .with_context(|| format!("invalid header regex: {BRACKETED_HEADER_REGEX}"))?;

        Ok(BracketedPattern { regex })
    }
}

impl HeaderPattern for BracketedPattern {
    fn find_from(&self, text: &str, offset: usize) -> Option<HeaderMatch> {
        let caps = self.regex.captures_at(text, offset)?;
        let span = caps.get(0)?;
        let title = caps.name("title")?.as_str().trim().to_string();

        Some(HeaderMatch {
            start: span.start(),
            end: span.end(),
            title,
            command: None,
        })
    }
}

pub struct LabelledPattern {
    regex: Regex,
}

impl LabelledPattern {
    pub fn compile() -> anyhow::Result<Self> {
        let regex = Regex::new(LABELLED_HEADER_REGEX)
            .with_context(|| format!("invalid header regex: {LABELLED_HEADER_REGEX}"))?;

        Ok(LabelledPattern { regex })
    }
}

impl HeaderPattern for LabelledPattern {
    fn find_from(&self, text: &str, offset: usize) -> Option<HeaderMatch> {
        let caps = self.regex.captures_at(text, offset)?;
        let span = caps.get(0)?;
        let title = caps.name("title")?.as_str().trim().to_string();
        let command = caps
            .name("command")
            .map(|capture| capture.as_str().trim())
            .filter(|command| !command.is_empty())
            .map(String::from);

        Some(HeaderMatch {
            start: span.start(),
            end: span.end(),
            title,
            command,
        })
    }
}
