use crate::areas::intake;
use crate::areas::session::Session;
use crate::artifacts::document::tokenizer;
use crate::commands::resolve_grammar;
use std::path::Path;

impl Session {
    /// Dumps the section list as pretty JSON, the dataset the HTML report
    /// layer embeds. Unlike the porcelain reports, an unrecognized file is
    /// not an error here: it dumps as the empty list it tokenizes to.
    pub async fn tokenize(&self, file: &str, grammar: Option<&str>) -> anyhow::Result<()> {
        let text = intake::read_document(Path::new(file)).await?;
        let grammar = resolve_grammar(grammar, &text)?;
        let sections = tokenizer::tokenize(&text, grammar)?;

        writeln!(self.writer(), "{}", serde_json::to_string_pretty(&sections)?)?;

        Ok(())
    }
}
