// file: src/models/document.rs
// description: document payload and write acknowledgment models
// reference: MarkLogic REST /v1/documents

use serde::{Deserialize, Serialize};
use std::fmt;

/// A document as stored in the database: an opaque mimetype and text content.
///
/// An empty mimetype means "unset"; the server then infers the format from the URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericDocument {
    mimetype: String,
    content: String,
}

impl GenericDocument {
    pub fn new(mimetype: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            mimetype: mimetype.into(),
            content: content.into(),
        }
    }

    pub fn mimetype(&self) -> &str {
        &self.mimetype
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn has_mimetype(&self) -> bool {
        !self.mimetype.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAck {
    pub uri: String,
    pub status: u16,
    pub reason: String,
}

impl WriteAck {
    pub fn new(uri: impl Into<String>, status: u16, reason: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            status,
            reason: reason.into(),
        }
    }

    /// 201 when the document was created, 204 when an existing one was replaced.
    pub fn created(&self) -> bool {
        self.status == 201
    }
}

impl fmt::Display for WriteAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.status, self.reason, self.uri)
    }
}
