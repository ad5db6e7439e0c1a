use crate::artifacts::align::section_change::SectionChange;
use crate::artifacts::document::section::Section;
use derive_new::new;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One title's classification in the aligned output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct AlignedEntry {
    pub title: String,
    #[serde(flatten)]
    pub change: SectionChange,
}

/// Matches two section lists by title and classifies every title present on
/// either side.
///
/// Output order is first-seen title order across A then B. The per-side
/// lookup is last-write-wins when a document repeats a title, matching the
/// scan reports this tool grew up on; every section still reaches
/// single-document consumers through the tokenizer, only cross-document
/// matching collapses duplicates.
pub fn align(sections_a: &[Section], sections_b: &[Section]) -> Vec<AlignedEntry> {
    let bodies_a = body_lookup(sections_a);
    let bodies_b = body_lookup(sections_b);

    discovery_order(sections_a, sections_b)
        .into_iter()
        .filter_map(|title| {
            SectionChange::from_bodies(
                bodies_a.get(title).copied(),
                bodies_b.get(title).copied(),
            )
            .map(|change| AlignedEntry::new(title.to_string(), change))
        })
        .collect()
}

fn body_lookup(sections: &[Section]) -> HashMap<&str, &str> {
    sections
        .iter()
        .map(|section| (section.title.as_str(), section.body.as_str()))
        .collect()
}

fn discovery_order<'a>(sections_a: &'a [Section], sections_b: &'a [Section]) -> Vec<&'a str> {
    let mut seen = HashSet::new();

    sections_a
        .iter()
        .chain(sections_b)
        .filter_map(|section| {
            seen.insert(section.title.as_str())
                .then_some(section.title.as_str())
        })
        .collect()
}
