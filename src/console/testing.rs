// file: src/console/testing.rs
// description: in-memory connection that records every remote call, for console tests

use crate::console::ConsoleSession;
use crate::database::{Connection, DocumentReader, DocumentWriter, Searcher};
use crate::error::{ClientError, Result};
use crate::models::{
    GenericDocument, MatchSummary, SearchOptions, SearchResult, WriteAck,
    search_result::{MatchText, Snippet},
};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Write {
        uri: String,
        document: GenericDocument,
    },
    Read(String),
    Search(String),
}

#[derive(Default)]
pub struct StubStore {
    documents: RefCell<HashMap<String, GenericDocument>>,
    search_result: SearchResult,
    calls: RefCell<Vec<Call>>,
    unreachable: bool,
}

impl StubStore {
    pub fn failing() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn with_document(uri: &str, document: GenericDocument) -> Self {
        let store = Self::default();
        store.documents.borrow_mut().insert(uri.to_string(), document);
        store
    }

    pub fn with_search_result(search_result: SearchResult) -> Self {
        Self {
            search_result,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.unreachable {
            return Err(ClientError::Connection("connection refused".to_string()));
        }
        Ok(())
    }
}

impl Connection for StubStore {
    type Documents<'a> = &'a StubStore;
    type Queries<'a> = &'a StubStore;

    fn new_document_manager(&self) -> &StubStore {
        self
    }

    fn new_query_manager(&self) -> &StubStore {
        self
    }
}

impl DocumentWriter for &StubStore {
    async fn write(&self, uri: &str, document: &GenericDocument) -> Result<WriteAck> {
        self.record(Call::Write {
            uri: uri.to_string(),
            document: document.clone(),
        })?;

        let replaced = self
            .documents
            .borrow_mut()
            .insert(uri.to_string(), document.clone());

        Ok(match replaced {
            Some(_) => WriteAck::new(uri, 204, "No Content"),
            None => WriteAck::new(uri, 201, "Created"),
        })
    }
}

impl DocumentReader for &StubStore {
    async fn read(&self, uri: &str) -> Result<GenericDocument> {
        self.record(Call::Read(uri.to_string()))?;

        self.documents
            .borrow()
            .get(uri)
            .cloned()
            .ok_or_else(|| ClientError::DocumentNotFound(uri.to_string()))
    }
}

impl Searcher for &StubStore {
    async fn search(&self, query: &str, _options: &SearchOptions) -> Result<SearchResult> {
        self.record(Call::Search(query.to_string()))?;
        Ok(self.search_result.clone())
    }
}

/// Build a one-page result whose matches appear in the given order.
pub fn search_result(matches: &[(&str, f64, &str, &str)]) -> SearchResult {
    SearchResult {
        total: matches.len() as u64,
        page_length: 10,
        start: 1,
        matches: matches
            .iter()
            .enumerate()
            .map(|(i, (uri, score, mimetype, text))| MatchSummary {
                index: i as u64 + 1,
                uri: uri.to_string(),
                score: *score,
                mimetype: mimetype.to_string(),
                matches: vec![Snippet {
                    path: String::new(),
                    match_text: vec![MatchText::Plain(text.to_string())],
                }],
            })
            .collect(),
    }
}

/// Drive a whole session over `input` and return everything printed.
pub async fn run_session(store: &StubStore, input: &str) -> String {
    let mut output = Vec::new();
    let mut session =
        ConsoleSession::new(store, SearchOptions::default(), input.as_bytes(), &mut output);
    session.run().await.unwrap();
    drop(session);
    String::from_utf8(output).unwrap()
}
