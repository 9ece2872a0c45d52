// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod search_result;

pub use document::{GenericDocument, WriteAck};
pub use search_result::{MatchSummary, SearchOptions, SearchResult};
