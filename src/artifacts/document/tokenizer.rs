use crate::artifacts::document::PREAMBLE_TITLE;
use crate::artifacts::document::grammar::Grammar;
use crate::artifacts::document::section::Section;

/// Splits `text` into the ordered sections delimited by `grammar`'s headers.
///
/// Headers are located left to right with an explicit offset loop. The text
/// strictly between two headers is the body of the earlier section; text
/// before the first header becomes a synthetic preamble section when its
/// trimmed content is non-empty; text after the last header is the last
/// section's body. A header followed directly by the next header (or end of
/// input) yields an empty body, which is valid.
///
/// Returns an empty list when the grammar matches nowhere, the caller's
/// signal that the text has no recognizable structure. Malformed content
/// never fails; an empty Labelled command capture degrades to no command.
pub fn tokenize(text: &str, grammar: Grammar) -> anyhow::Result<Vec<Section>> {
    let pattern = grammar.header_pattern()?;

    let mut drafts: Vec<Draft> = Vec::new();
    let mut offset = 0;

    while let Some(header) = pattern.find_from(text, offset) {
        let gap = text[offset..header.start].trim();

        match drafts.last_mut() {
            Some(previous) => previous.body = gap.to_string(),
            None if !gap.is_empty() => drafts.push(Draft::preamble(gap)),
            None => {}
        }

        drafts.push(Draft::titled(header.title, header.command));
        offset = header.end;
    }

    if offset < text.len()
        && let Some(last) = drafts.last_mut()
    {
        last.body = text[offset..].trim().to_string();
    }

    Ok(drafts
        .into_iter()
        .enumerate()
        .map(|(ordinal, draft)| draft.into_section(ordinal))
        .collect())
}

struct Draft {
    title: String,
    body: String,
    command: Option<String>,
}

impl Draft {
    fn preamble(body: &str) -> Self {
        Draft {
            title: PREAMBLE_TITLE.to_string(),
            body: body.to_string(),
            command: None,
        }
    }

    fn titled(title: String, command: Option<String>) -> Self {
        Draft {
            title,
            body: String::new(),
            command,
        }
    }

    /// Folds the captured command into the comparable body so it takes part
    /// in diffing like any other content line.
    fn into_section(self, ordinal: usize) -> Section {
        let body = match &self.command {
            Some(command) => format!("Command: {command}\n\n{}", self.body),
            None => self.body,
        };

        Section::new(self.title, body, self.command, ordinal)
    }
}
