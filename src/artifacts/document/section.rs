use derive_new::new;
use serde::Serialize;

/// A titled, delimiter-bounded block of a structured scan log.
///
/// `body` is the trimmed text between this section's header and the next one
/// (or end of input). `command` holds the audit command captured by the
/// Labelled grammar; when present, the tokenizer has already folded it into
/// `body` as a leading `Command:` line so it participates in comparison.
/// `ordinal` is first-seen order within the document, the natural
/// presentation order when no counterpart document exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Section {
    pub title: String,
    pub body: String,
    pub command: Option<String>,
    pub ordinal: usize,
}

impl Section {
    /// Lines of the body; an empty body has zero lines.
    pub fn body_lines(&self) -> Vec<&str> {
        if self.body.is_empty() {
            Vec::new()
        } else {
            self.body.split('\n').collect()
        }
    }
}
