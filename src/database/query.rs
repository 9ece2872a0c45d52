// file: src/database/query.rs
// description: query manager for string search over the database
// reference: https://docs.marklogic.com/REST/GET/v1/search

use crate::database::client::{RemoteRequest, check_status};
use crate::database::{DatabaseClient, Searcher};
use crate::error::{ClientError, Result};
use crate::models::{SearchOptions, SearchResult};
use reqwest::Method;
use tracing::{debug, info};

const SEARCH_PATH: &str = "/v1/search";

pub struct QueryManager<'a> {
    client: &'a DatabaseClient,
}

impl<'a> QueryManager<'a> {
    pub fn new(client: &'a DatabaseClient) -> Self {
        Self { client }
    }
}

impl Searcher for QueryManager<'_> {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResult> {
        debug!(
            "Searching for {:?} (start {}, page length {})",
            query, options.start, options.page_length
        );

        let request = RemoteRequest::new(Method::GET, SEARCH_PATH)
            .param("q", query)
            .param("format", "json")
            .param("start", options.start)
            .param("pageLength", options.page_length);

        let response = check_status(self.client.send(request).await?, None).await?;

        let result: SearchResult = response.json().await.map_err(|e| {
            ClientError::Protocol(format!("Failed to parse search response: {}", e))
        })?;

        if result.is_empty() {
            info!("Search for {:?} returned no matches", query);
        } else {
            info!(
                "Search for {:?} matched {} documents ({} on this page)",
                query,
                result.total,
                result.matches.len()
            );
        }
        Ok(result)
    }
}
