// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod console;
pub mod database;
pub mod error;
pub mod models;
pub mod utils;

pub use config::{AuthType, Config, ConnectionConfig, SearchConfig};
pub use console::{Command, ConsoleSession};
pub use database::{
    Connection, DatabaseClient, DocumentManager, DocumentReader, DocumentWriter, QueryManager,
    Searcher,
};
pub use error::{ClientError, Result};
pub use models::{GenericDocument, MatchSummary, SearchOptions, SearchResult, WriteAck};
pub use utils::OperationTimer;
