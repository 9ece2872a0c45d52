// file: src/console/actions.rs
// description: write, read and search actions driven from the console
// reference: one manager and at most one remote call per action

use crate::console::menu::RULE;
use crate::console::session::ConsoleSession;
use crate::database::{Connection, DocumentReader, DocumentWriter, Searcher};
use crate::error::{ClientError, Result};
use crate::models::{GenericDocument, SearchResult};
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

const NO_FILE: &str = "No file specified.";
const NO_URI: &str =
    "You must supply a document URI to save a document to the MarkLogic database.";
const NO_QUERY: &str = "You must enter a search term to search the MarkLogic database.";

impl<C, R, W> ConsoleSession<'_, C, R, W>
where
    C: Connection,
    R: BufRead,
    W: Write,
{
    pub(super) async fn write_document(&mut self) -> Result<()> {
        let filename = self
            .prompt("Document path and filename to store: ")?
            .unwrap_or_default();
        if filename.is_empty() {
            writeln!(self.output, "{}", NO_FILE)?;
            return Ok(());
        }

        let content = fs::read_to_string(&filename).map_err(|source| ClientError::FileRead {
            path: PathBuf::from(&filename),
            source,
        })?;

        let uri = self.prompt("Document URI: ")?.unwrap_or_default();
        if uri.is_empty() {
            writeln!(self.output, "{}", NO_URI)?;
            return Ok(());
        }

        // No mimetype: the server infers the format from the URI extension.
        let mut document = GenericDocument::default();
        document.set_content(content);

        let connection = self.connection;
        let ack = connection
            .new_document_manager()
            .write(&uri, &document)
            .await?;
        info!(
            "Wrote {} to {} ({})",
            filename,
            ack.uri,
            if ack.created() { "created" } else { "replaced" }
        );

        writeln!(self.output, " ")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "Write results: {}", ack)?;
        Ok(())
    }

    pub(super) async fn read_document(&mut self) -> Result<()> {
        let Some(uri) = self.prompt("Document URI: ")? else {
            return Ok(());
        };

        let connection = self.connection;
        let document = connection.new_document_manager().read(&uri).await?;

        writeln!(self.output, " ")?;
        writeln!(self.output, "---Results----------")?;
        writeln!(self.output, "Mime type: {}", document.mimetype())?;
        writeln!(self.output, "Content: {}", document.content())?;
        Ok(())
    }

    pub(super) async fn search_database(&mut self) -> Result<()> {
        let query = self
            .prompt("Enter a search term: ")?
            .unwrap_or_default();
        if query.is_empty() {
            writeln!(self.output, "{}", NO_QUERY)?;
            return Ok(());
        }

        let connection = self.connection;
        let result = connection
            .new_query_manager()
            .search(&query, &self.search_options)
            .await?;

        self.print_search_result(&result)?;
        Ok(())
    }

    fn print_search_result(&mut self, result: &SearchResult) -> Result<()> {
        let out = &mut self.output;

        writeln!(out, " ")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Search total: {}", result.total)?;
        writeln!(out, "Search results per page: {}", result.page_length)?;
        writeln!(out, "Starting at item: {}", result.start)?;
        writeln!(out, "Search Results:")?;

        for (position, summary) in result.match_results().iter().enumerate() {
            writeln!(out, " ")?;
            writeln!(out, "---Result {}---------", position + 1)?;
            writeln!(out, "URI: {}", summary.uri)?;
            writeln!(out, "Relevance Score: {}", summary.score)?;
            writeln!(out, "Mimetype: {}", summary.mimetype)?;
            writeln!(out, "Text: {}", summary.first_snippet_text())?;
        }

        Ok(())
    }
}
