use crate::areas::intake;
use crate::areas::session::Session;
use crate::artifacts::document::tokenizer;
use crate::commands::resolve_grammar;
use chrono::Local;
use colored::Colorize;
use std::path::Path;

impl Session {
    /// Prints the ordered section outline of a single scan log: one line per
    /// section with its ordinal, title, body size, and a marker for sections
    /// that carry an audit command.
    pub async fn outline(&self, file: &str, grammar: Option<&str>) -> anyhow::Result<()> {
        let text = intake::read_document(Path::new(file)).await?;
        let grammar = resolve_grammar(grammar, &text)?;
        let sections = tokenizer::tokenize(&text, grammar)?;

        if sections.is_empty() {
            anyhow::bail!("unrecognized log structure in {file}: no {grammar} headers found");
        }

        writeln!(self.writer(), "{}", format!("Report: {file}").bold())?;
        writeln!(self.writer(), "Grammar: {grammar}")?;
        writeln!(
            self.writer(),
            "Generated at: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(self.writer())?;

        for section in &sections {
            let marker = if section.command.is_some() { "  [cmd]" } else { "" };
            writeln!(
                self.writer(),
                "{:>4}  {} ({} lines){}",
                section.ordinal + 1,
                section.title.cyan(),
                section.body_lines().len(),
                marker
            )?;
        }

        writeln!(self.writer())?;
        writeln!(self.writer(), "{} sections", sections.len())?;

        Ok(())
    }
}
