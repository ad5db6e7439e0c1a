use crate::areas::intake;
use crate::areas::session::Session;
use crate::artifacts::align::aligner::{AlignedEntry, align};
use crate::artifacts::align::section_change::{ChangeFilter, SectionChange};
use crate::artifacts::diff::edit::Edit;
use crate::artifacts::document::tokenizer;
use crate::commands::resolve_grammar;
use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub filter: ChangeFilter,
    pub json: bool,
    pub grammar: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Summary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl Summary {
    fn tally(entries: &[AlignedEntry]) -> Self {
        let mut summary = Summary::default();

        for entry in entries {
            match entry.change {
                SectionChange::Added { .. } => summary.added += 1,
                SectionChange::Removed { .. } => summary.removed += 1,
                SectionChange::Modified { .. } => summary.modified += 1,
                SectionChange::Unchanged { .. } => summary.unchanged += 1,
            }
        }

        summary
    }

    fn total(&self) -> usize {
        self.added + self.removed + self.modified + self.unchanged
    }
}

#[derive(Serialize)]
struct CompareReport<'c> {
    generated_at: DateTime<Local>,
    file_a: &'c str,
    file_b: &'c str,
    summary: Summary,
    entries: Vec<&'c AlignedEntry>,
}

impl Session {
    /// Compares two scan logs section by section and renders every title's
    /// classification: added and removed bodies as all-`+`/all-`-` lines,
    /// modified bodies as the shortest edit script with line-number gutters
    /// for both sides. `--json` emits the aligned dataset instead of the
    /// text report; `--filter` limits the entries to the given classes while
    /// the summary keeps counting all of them.
    pub async fn compare(
        &self,
        file_a: &str,
        file_b: &str,
        opts: &CompareOptions,
    ) -> anyhow::Result<()> {
        let (text_a, text_b) = tokio::try_join!(
            intake::read_document(Path::new(file_a)),
            intake::read_document(Path::new(file_b)),
        )?;

        let grammar_a = resolve_grammar(opts.grammar.as_deref(), &text_a)?;
        let grammar_b = resolve_grammar(opts.grammar.as_deref(), &text_b)?;

        let sections_a = tokenizer::tokenize(&text_a, grammar_a)?;
        if sections_a.is_empty() {
            anyhow::bail!("unrecognized log structure in {file_a}: no {grammar_a} headers found");
        }
        let sections_b = tokenizer::tokenize(&text_b, grammar_b)?;
        if sections_b.is_empty() {
            anyhow::bail!("unrecognized log structure in {file_b}: no {grammar_b} headers found");
        }

        // Alignment of large logs is CPU-bound; keep it off the runtime's
        // reactor threads.
        let entries =
            tokio::task::spawn_blocking(move || align(&sections_a, &sections_b)).await?;
        let summary = Summary::tally(&entries);

        if opts.json {
            let report = CompareReport {
                generated_at: Local::now(),
                file_a,
                file_b,
                summary,
                entries: entries
                    .iter()
                    .filter(|entry| entry.change.matches_filter(opts.filter))
                    .collect(),
            };
            writeln!(self.writer(), "{}", serde_json::to_string_pretty(&report)?)?;

            return Ok(());
        }

        writeln!(
            self.writer(),
            "{}",
            format!("Comparing {file_a} ({grammar_a}) with {file_b} ({grammar_b})").bold()
        )?;
        writeln!(
            self.writer(),
            "Generated at: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(self.writer())?;

        for entry in entries
            .iter()
            .filter(|entry| entry.change.matches_filter(opts.filter))
        {
            self.print_entry(entry)?;
        }

        writeln!(
            self.writer(),
            "{} sections: {} added, {} removed, {} modified, {} unchanged",
            summary.total(),
            summary.added,
            summary.removed,
            summary.modified,
            summary.unchanged
        )?;

        Ok(())
    }

    fn print_entry(&self, entry: &AlignedEntry) -> anyhow::Result<()> {
        writeln!(self.writer(), "{} {}", entry.change, entry.title.bold())?;

        match &entry.change {
            SectionChange::Added { body } => {
                for line in body_lines(body) {
                    writeln!(self.writer(), "{:>4} {:>4} {}", "", "", format!("+{line}").green())?;
                }
            }
            SectionChange::Removed { body } => {
                for line in body_lines(body) {
                    writeln!(self.writer(), "{:>4} {:>4} {}", "", "", format!("-{line}").red())?;
                }
            }
            SectionChange::Modified { script, .. } => {
                for edit in script {
                    self.print_edit(edit)?;
                }
            }
            SectionChange::Unchanged { .. } => {}
        }

        writeln!(self.writer())?;

        Ok(())
    }

    fn print_edit(&self, edit: &Edit<String>) -> anyhow::Result<()> {
        let gutter_a = edit.index_a().map(|i| i.to_string()).unwrap_or_default();
        let gutter_b = edit.index_b().map(|i| i.to_string()).unwrap_or_default();
        let rendered = match edit {
            Edit::Delete { .. } => edit.as_string().red(),
            Edit::Insert { .. } => edit.as_string().green(),
            Edit::Equal { .. } => edit.as_string().normal(),
        };

        writeln!(self.writer(), "{gutter_a:>4} {gutter_b:>4} {rendered}")?;

        Ok(())
    }
}

fn body_lines(body: &str) -> Vec<&str> {
    if body.is_empty() {
        Vec::new()
    } else {
        body.split('\n').collect()
    }
}
