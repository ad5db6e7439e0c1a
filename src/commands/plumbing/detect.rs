use crate::areas::intake;
use crate::areas::session::Session;
use crate::artifacts::document::grammar::Grammar;
use std::path::Path;

impl Session {
    pub async fn detect(&self, file: &str) -> anyhow::Result<()> {
        let text = intake::read_document(Path::new(file)).await?;

        writeln!(self.writer(), "{}", Grammar::detect(&text)?)?;

        Ok(())
    }
}
