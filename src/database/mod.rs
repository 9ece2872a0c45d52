// file: src/database/mod.rs
// description: database operations module exports and capability traits
// reference: internal module structure

pub mod client;
pub mod documents;
pub mod query;
#[cfg(test)]
mod testing;

pub use client::DatabaseClient;
pub use documents::DocumentManager;
pub use query::QueryManager;

use crate::error::Result;
use crate::models::{GenericDocument, SearchOptions, SearchResult, WriteAck};

/// A session against a document store that hands out per-operation managers.
///
/// Managers borrow the connection, so they are cheap to create for every action
/// and can never outlive the session they came from.
pub trait Connection {
    type Documents<'a>: DocumentReader + DocumentWriter
    where
        Self: 'a;

    type Queries<'a>: Searcher
    where
        Self: 'a;

    fn new_document_manager(&self) -> Self::Documents<'_>;

    fn new_query_manager(&self) -> Self::Queries<'_>;
}

#[allow(async_fn_in_trait)]
pub trait DocumentWriter {
    async fn write(&self, uri: &str, document: &GenericDocument) -> Result<WriteAck>;
}

#[allow(async_fn_in_trait)]
pub trait DocumentReader {
    async fn read(&self, uri: &str) -> Result<GenericDocument>;
}

#[allow(async_fn_in_trait)]
pub trait Searcher {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResult>;
}
