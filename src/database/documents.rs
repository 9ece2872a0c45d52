// file: src/database/documents.rs
// description: document manager for reading and writing single documents
// reference: https://docs.marklogic.com/REST/PUT/v1/documents

use crate::database::client::{RemoteRequest, check_status};
use crate::database::{DatabaseClient, DocumentReader, DocumentWriter};
use crate::error::{ClientError, Result};
use crate::models::{GenericDocument, WriteAck};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

const DOCUMENTS_PATH: &str = "/v1/documents";

pub struct DocumentManager<'a> {
    client: &'a DatabaseClient,
}

impl<'a> DocumentManager<'a> {
    pub fn new(client: &'a DatabaseClient) -> Self {
        Self { client }
    }
}

impl DocumentWriter for DocumentManager<'_> {
    async fn write(&self, uri: &str, document: &GenericDocument) -> Result<WriteAck> {
        debug!(
            "Writing {} bytes to {} (mimetype {:?})",
            document.content().len(),
            uri,
            document.mimetype()
        );

        // Without a Content-Type the server picks the format from the URI extension.
        let content_type = document.has_mimetype().then(|| document.mimetype());
        let request = RemoteRequest::new(Method::PUT, DOCUMENTS_PATH)
            .param("uri", uri)
            .body(document.content().to_string(), content_type);

        let response = check_status(self.client.send(request).await?, Some(uri)).await?;
        let status = response.status();

        Ok(WriteAck::new(
            uri,
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
        ))
    }
}

impl DocumentReader for DocumentManager<'_> {
    async fn read(&self, uri: &str) -> Result<GenericDocument> {
        debug!("Reading {}", uri);

        let request = RemoteRequest::new(Method::GET, DOCUMENTS_PATH).param("uri", uri);
        let response = check_status(self.client.send(request).await?, Some(uri)).await?;

        let mimetype = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(mimetype_of)
            .unwrap_or_default();

        let content = response.text().await.map_err(|e| {
            ClientError::Protocol(format!("Failed to read body of {}: {}", uri, e))
        })?;

        Ok(GenericDocument::new(mimetype, content))
    }
}

/// Strip media type parameters, e.g. `text/xml; charset=utf-8` -> `text/xml`.
fn mimetype_of(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
