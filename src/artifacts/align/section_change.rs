use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::myers::{DiffAlgorithm, MyersDiff};
use bitflags::bitflags;
use colored::Colorize;
use serde::Serialize;

bitflags! {
    /// Which classifications a comparison report should include, parsed from
    /// `ARMU` characters (`--filter ARM` is the classic "differences only").
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChangeFilter: u32 {
        const ADDED = 0b0001;
        const REMOVED = 0b0010;
        const MODIFIED = 0b0100;
        const UNCHANGED = 0b1000;
    }
}

impl ChangeFilter {
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'R' => filter |= Self::REMOVED,
                'M' => filter |= Self::MODIFIED,
                'U' => filter |= Self::UNCHANGED,
                _ => return None,
            }
        }

        Some(filter)
    }
}

impl Default for ChangeFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Classification of one title across two documents.
///
/// The classification is a pure function of the two optional body strings:
/// `Added` when the title only exists in the new document, `Removed` when it
/// only exists in the old one, `Unchanged` when both bodies are trim-equal,
/// `Modified` otherwise. `Modified` carries the shortest edit script of the
/// two bodies' line sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum SectionChange {
    Added {
        body: String,
    },
    Removed {
        body: String,
    },
    Modified {
        body_a: String,
        body_b: String,
        script: Vec<Edit<String>>,
    },
    Unchanged {
        body: String,
    },
}

impl SectionChange {
    /// Classifies a title from its bodies on the old and new side. `None`
    /// means the title exists on neither side and has no entry.
    pub fn from_bodies(old: Option<&str>, new: Option<&str>) -> Option<Self> {
        match (old, new) {
            (None, Some(new)) => Some(SectionChange::Added {
                body: new.to_string(),
            }),
            (Some(old), None) => Some(SectionChange::Removed {
                body: old.to_string(),
            }),
            (Some(old), Some(new)) if old.trim() != new.trim() => {
                let lines_a = split_lines(old);
                let lines_b = split_lines(new);
                let script = MyersDiff::new(&lines_a, &lines_b).diff();

                Some(SectionChange::Modified {
                    body_a: old.to_string(),
                    body_b: new.to_string(),
                    script,
                })
            }
            (Some(old), Some(_)) => Some(SectionChange::Unchanged {
                body: old.to_string(),
            }),
            (None, None) => None,
        }
    }

    pub fn matches_filter(&self, filter: ChangeFilter) -> bool {
        match self {
            SectionChange::Added { .. } => filter.contains(ChangeFilter::ADDED),
            SectionChange::Removed { .. } => filter.contains(ChangeFilter::REMOVED),
            SectionChange::Modified { .. } => filter.contains(ChangeFilter::MODIFIED),
            SectionChange::Unchanged { .. } => filter.contains(ChangeFilter::UNCHANGED),
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            SectionChange::Added { .. } => 'A',
            SectionChange::Removed { .. } => 'R',
            SectionChange::Modified { .. } => 'M',
            SectionChange::Unchanged { .. } => 'U',
        }
    }
}

impl From<&SectionChange> for &str {
    fn from(change: &SectionChange) -> Self {
        match change {
            SectionChange::Added { .. } => "added",
            SectionChange::Removed { .. } => "removed",
            SectionChange::Modified { .. } => "modified",
            SectionChange::Unchanged { .. } => "unchanged",
        }
    }
}

impl std::fmt::Display for SectionChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let badge = format!("[{}]", self.status_char());
        let colored_badge = match self {
            SectionChange::Added { .. } => badge.green().bold(),
            SectionChange::Removed { .. } => badge.red().bold(),
            SectionChange::Modified { .. } => badge.yellow().bold(),
            SectionChange::Unchanged { .. } => badge.normal(),
        };
        write!(f, "{colored_badge}")
    }
}

fn split_lines(body: &str) -> Vec<String> {
    if body.is_empty() {
        Vec::new()
    } else {
        body.split('\n').map(String::from).collect()
    }
}
