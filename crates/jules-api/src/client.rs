use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    auth::API_KEY_HEADER,
    config::Config,
    error::JulesError,
    retry::{self, ATTEMPT_TIMEOUT, RETRY_INTERVAL},
    types,
    Result,
};

/// How long a single call may run.
///
/// Replaces the `-1` timeout sentinel some Jules clients use for "wait as
/// long as it takes".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeoutPolicy {
    /// One attempt, bounded by the client's configured default timeout.
    #[default]
    Default,
    /// One attempt, bounded by this duration instead.
    Bounded(Duration),
    /// Retry transport-level failures at a fixed interval until the server
    /// answers with a 2xx. A 404 is treated as "not yet available" rather
    /// than terminal. The loop suspends between attempts and is cancelled
    /// by dropping the future (`tokio::select!`, `tokio::time::timeout`);
    /// a caller that never does either waits indefinitely.
    UntilReady,
}

/// The main client for interacting with the Jules API.
#[derive(Debug, Clone)]
pub struct JulesClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    default_timeout: Duration,
    timeout_policy: TimeoutPolicy,
}

impl JulesClient {
    /// Creates a new `JulesClient` from a given configuration.
    ///
    /// Fails with [`JulesError::Configuration`] before any network I/O if
    /// the key is empty or the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(JulesError::Configuration("API key must not be empty".into()));
        }
        let http_client = Client::builder()
            .build()
            .map_err(|e| JulesError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            default_timeout: Duration::from_secs(config.request_timeout),
            timeout_policy: TimeoutPolicy::Default,
        })
    }

    /// Creates a client configured entirely from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Creates a new `JulesClient` with a custom `reqwest::Client`.
    pub fn with_http_client(http_client: Client, config: Config) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.http_client = http_client;
        Ok(client)
    }

    /// Returns a clone of this client whose calls run under `policy`.
    pub fn with_timeout_policy(&self, policy: TimeoutPolicy) -> Self {
        let mut client = self.clone();
        client.timeout_policy = policy;
        client
    }

    /// List all available sources.
    pub async fn list_sources(
        &self,
        page_token: Option<&str>,
    ) -> Result<types::ListSourcesResponse> {
        let mut query = Vec::new();
        if let Some(token) = page_token {
            query.push(("nextPageToken", token.to_string()));
        }
        self.request(Method::GET, "/sources", &query, None::<&()>)
            .await
    }

    /// Get details of a specific source.
    pub async fn get_source(&self, source_id: &str) -> Result<types::Source> {
        let path = format!("/sources/{source_id}");
        self.request(Method::GET, &path, &[], None::<&()>).await
    }

    /// Create a new session.
    pub async fn create_session(
        &self,
        request: &types::CreateSessionRequest,
    ) -> Result<types::Session> {
        self.request(Method::POST, "/sessions", &[], Some(request))
            .await
    }

    /// Get details of a specific session.
    pub async fn get_session(&self, session_id: &str) -> Result<types::Session> {
        let path = format!("/sessions/{session_id}");
        self.request(Method::GET, &path, &[], None::<&()>).await
    }

    /// List sessions.
    pub async fn list_sessions(
        &self,
        page_size: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<types::ListSessionsResponse> {
        let mut query = Vec::new();
        if let Some(size) = page_size {
            query.push(("pageSize", size.to_string()));
        }
        if let Some(token) = page_token {
            query.push(("nextPageToken", token.to_string()));
        }
        self.request(Method::GET, "/sessions", &query, None::<&()>)
            .await
    }

    /// Approve the latest plan for a session.
    pub async fn approve_plan(&self, session_id: &str) -> Result<()> {
        let path = format!("/sessions/{session_id}:approvePlan");
        self.request_empty(Method::POST, &path, &[], None::<&()>)
            .await
    }

    /// Send a message to the agent in a session.
    pub async fn send_message(
        &self,
        session_id: &str,
        request: &types::SendMessageRequest,
    ) -> Result<()> {
        let path = format!("/sessions/{session_id}:sendMessage");
        self.request_empty(Method::POST, &path, &[], Some(request))
            .await
    }

    /// List activities for a session.
    pub async fn list_activities(
        &self,
        session_id: &str,
        page_size: Option<u32>,
        page_token: Option<&str>,
    ) -> Result<types::ListActivitiesResponse> {
        let path = format!("/sessions/{session_id}/activities");
        let mut query = Vec::new();
        if let Some(size) = page_size {
            query.push(("pageSize", size.to_string()));
        }
        if let Some(token) = page_token {
            query.push(("nextPageToken", token.to_string()));
        }
        self.request(Method::GET, &path, &query, None::<&()>).await
    }

    /// Dispatch and decode into the expected type.
    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let raw = self.dispatch(method, path, query, body).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Dispatch and discard the response body. Some write operations answer
    /// with an empty body, so requiring parseable JSON here would fail
    /// successful calls.
    async fn request_empty<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, query, body).await.map(|_| ())
    }

    /// The single dispatch path every operation funnels through: applies the
    /// timeout policy, attaches the API-key header, and classifies failures.
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        match self.timeout_policy {
            TimeoutPolicy::Default => {
                self.attempt(&method, path, query, body, self.default_timeout)
                    .await
            }
            TimeoutPolicy::Bounded(timeout) => {
                self.attempt(&method, path, query, body, timeout).await
            }
            TimeoutPolicy::UntilReady => loop {
                match self
                    .attempt(&method, path, query, body, ATTEMPT_TIMEOUT)
                    .await
                {
                    Ok(raw) => return Ok(raw),
                    Err(err) if retry::is_retryable(&err) => {
                        if err.status() == Some(StatusCode::NOT_FOUND) {
                            debug!(path, "resource not found (404), retrying in {RETRY_INTERVAL:?}");
                        } else {
                            warn!(path, error = %err, "request failed, retrying in {RETRY_INTERVAL:?}");
                        }
                        tokio::time::sleep(RETRY_INTERVAL).await;
                    }
                    Err(err) => return Err(err),
                }
            },
        }
    }

    /// One bounded request/response round trip.
    async fn attempt<B>(
        &self,
        method: &Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        timeout: Duration,
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "dispatching request");

        let mut builder = self
            .http_client
            .request(method.clone(), &url)
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(timeout);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(JulesError::from_status(status, &raw));
        }
        Ok(raw)
    }
}
