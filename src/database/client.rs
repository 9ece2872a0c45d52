// file: src/database/client.rs
// description: MarkLogic REST client wrapper with connection and authentication management
// reference: https://docs.marklogic.com/guide/rest-dev

use crate::config::{AuthType, ConnectionConfig};
use crate::database::{Connection, DocumentManager, QueryManager};
use crate::error::{ClientError, Result};
use crate::utils::telemetry::OperationTimer;
use digest_auth::{AuthContext, HttpMethod, WwwAuthenticateHeader};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde_json::Value;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info, warn};

/// One request against the REST instance, relative to the server base URL.
pub(crate) struct RemoteRequest<'a> {
    pub method: Method,
    pub path: &'a str,
    pub query: Vec<(&'a str, String)>,
    pub body: Option<String>,
    pub content_type: Option<&'a str>,
}

impl<'a> RemoteRequest<'a> {
    pub fn new(method: Method, path: &'a str) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
            content_type: None,
        }
    }

    pub fn param(mut self, key: &'a str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn body(mut self, body: String, content_type: Option<&'a str>) -> Self {
        self.body = Some(body);
        self.content_type = content_type;
        self
    }
}

/// Long-lived session to a MarkLogic REST instance.
///
/// Holds the HTTP connection pool and the latest digest challenge. Every
/// document and query manager borrows it; dropping it releases the pool.
pub struct DatabaseClient {
    http: Client,
    base_url: Url,
    config: ConnectionConfig,
    challenge: Mutex<Option<WwwAuthenticateHeader>>,
}

impl DatabaseClient {
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        info!("Connecting to MarkLogic at {}", config.base_url());

        let base_url = Url::parse(&config.base_url()).map_err(|e| {
            ClientError::Config(format!(
                "Invalid server address {}: {}",
                config.base_url(),
                e
            ))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Connection(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            config: config.clone(),
            challenge: Mutex::new(None),
        })
    }

    /// Tell the client we are done with it. Equivalent to dropping it.
    pub fn release(self) {
        drop(self);
    }

    pub(crate) fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("Invalid endpoint {}: {}", path, e)))?;

        if !query.is_empty() || self.config.database.is_some() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            if let Some(database) = &self.config.database {
                pairs.append_pair("database", database);
            }
        }

        Ok(url)
    }

    pub(crate) async fn send(&self, request: RemoteRequest<'_>) -> Result<Response> {
        let url = self.endpoint(request.path, &request.query)?;
        let timer = OperationTimer::new(&format!("{} {}", request.method, request.path));

        let authorization = self.authorization(&request.method, &url)?;
        let mut response = self.dispatch(&request, &url, authorization).await?;

        if response.status() == StatusCode::UNAUTHORIZED && self.config.auth == AuthType::Digest {
            debug!("Server requested digest authentication, answering challenge");
            self.store_challenge(&response)?;

            let authorization = self.authorization(&request.method, &url)?;
            response = self.dispatch(&request, &url, authorization).await?;
        }

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Auth(format!(
                "{} rejected credentials for user {}",
                self.base_url, self.config.username
            )));
        }

        timer.finish();
        Ok(response)
    }

    async fn dispatch(
        &self,
        request: &RemoteRequest<'_>,
        url: &Url,
        authorization: Option<String>,
    ) -> Result<Response> {
        let mut builder = self.http.request(request.method.clone(), url.clone());

        builder = match (self.config.auth, authorization) {
            (AuthType::Basic, _) => {
                builder.basic_auth(&self.config.username, Some(&self.config.password))
            }
            (AuthType::Digest, Some(value)) => builder.header(AUTHORIZATION, value),
            (AuthType::Digest, None) => builder,
        };

        if let Some(content_type) = request.content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        builder.send().await.map_err(|e| {
            ClientError::Connection(format!("{} {} failed: {}", request.method, url, e))
        })
    }

    fn authorization(&self, method: &Method, url: &Url) -> Result<Option<String>> {
        if self.config.auth != AuthType::Digest {
            return Ok(None);
        }

        let mut guard = self
            .challenge
            .lock()
            .map_err(|_| ClientError::Auth("Digest state is poisoned".to_string()))?;

        let Some(prompt) = guard.as_mut() else {
            return Ok(None);
        };

        let uri = request_uri(url);
        let context = AuthContext::new_with_method(
            self.config.username.as_str(),
            self.config.password.as_str(),
            uri.as_str(),
            None::<&[u8]>,
            HttpMethod::from(method.as_str()),
        );

        let answer = prompt
            .respond(&context)
            .map_err(|e| ClientError::Auth(format!("Failed to answer digest challenge: {}", e)))?;

        Ok(Some(answer.to_header_string()))
    }

    fn store_challenge(&self, response: &Response) -> Result<()> {
        let header = response
            .headers()
            .get_all(WWW_AUTHENTICATE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| is_digest_challenge(value))
            .ok_or_else(|| {
                ClientError::Auth("Server did not offer a digest challenge".to_string())
            })?;

        let prompt = digest_auth::parse(header)
            .map_err(|e| ClientError::Auth(format!("Malformed digest challenge: {}", e)))?;

        if prompt.realm != self.config.realm {
            warn!(
                "Server realm {:?} differs from configured realm {:?}",
                prompt.realm, self.config.realm
            );
        }

        let mut guard = self
            .challenge
            .lock()
            .map_err(|_| ClientError::Auth("Digest state is poisoned".to_string()))?;
        *guard = Some(prompt);

        Ok(())
    }
}

impl Connection for DatabaseClient {
    type Documents<'a> = DocumentManager<'a>;
    type Queries<'a> = QueryManager<'a>;

    fn new_document_manager(&self) -> DocumentManager<'_> {
        DocumentManager::new(self)
    }

    fn new_query_manager(&self) -> QueryManager<'_> {
        QueryManager::new(self)
    }
}

impl Drop for DatabaseClient {
    fn drop(&mut self) {
        info!("Released connection to {}", self.base_url);
    }
}

/// Map non-success responses onto errors.
///
/// A 404 only means a missing document when `document` names one; anywhere
/// else it is reported like any other server error.
pub(crate) async fn check_status(response: Response, document: Option<&str>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if let (StatusCode::NOT_FOUND, Some(uri)) = (status, document) {
        return Err(ClientError::DocumentNotFound(uri.to_string()));
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(ClientError::Server {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pull the human-readable part out of a REST error body.
pub(crate) fn error_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    parsed
        .as_ref()
        .and_then(|v| v.get("errorResponse"))
        .and_then(|e| {
            let code = e.get("messageCode").and_then(Value::as_str);
            let message = e.get("message").and_then(Value::as_str)?;
            Some(match code {
                Some(code) => format!("{}: {}", code, message),
                None => message.to_string(),
            })
        })
        .unwrap_or_else(|| body.trim().to_string())
}

fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

fn is_digest_challenge(value: &str) -> bool {
    value
        .get(..6)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("digest"))
}
