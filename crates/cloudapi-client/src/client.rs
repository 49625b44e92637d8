//! CloudAPI client implementation

use crate::api::CloudApi;
use crate::error::{CloudApiError, Result};
use crate::models::*;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Client for the CloudAPI REST endpoints
#[derive(Debug, Clone)]
pub struct CloudApiClient {
    /// HTTP client
    client: Client,
    /// Base URL
    base_url: Url,
    /// Account login
    account: String,
    /// Key id
    key_id: String,
    /// Maximum retries for idempotent requests
    max_retries: u32,
}

impl CloudApiClient {
    /// Create a new client with custom configuration
    ///
    /// The private key file must exist and be non-empty. Request signing
    /// itself is handled outside this crate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cloudapi_client::{ClientConfig, CloudApiClient};
    ///
    /// let client = CloudApiClient::from_config(ClientConfig {
    ///     base_url: "https://us-east-1.api.example.com".to_string(),
    ///     key_id: "de:ad:be:ef".to_string(),
    ///     key_path: "/home/me/.ssh/id_rsa".into(),
    ///     ..Default::default()
    /// })?;
    /// # Ok::<(), cloudapi_client::CloudApiError>(())
    /// ```
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| CloudApiError::Configuration(format!("Invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CloudApiError::Configuration(format!(
                "Base URL cannot carry paths: {}",
                config.base_url
            )));
        }

        if config.account.is_empty() {
            return Err(CloudApiError::Configuration(
                "Account login must not be empty".to_string(),
            ));
        }

        check_key_file(&expand_home(&config.key_path))?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("cloudapi-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            account: config.account,
            key_id: config.key_id,
            max_retries: config.max_retries,
        })
    }

    /// Build the URL addressing `resource` under the configured account
    pub fn resource_url(&self, resource: Resource, filter: &Filter) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CloudApiError::Configuration("Base URL cannot carry paths".into()))?;
            segments
                .pop_if_empty()
                .push(&self.account)
                .push(resource.collection());

            if resource == Resource::Package {
                let key = filter.key().ok_or_else(|| {
                    CloudApiError::Configuration(
                        "package lookup requires an id or a name".to_string(),
                    )
                })?;
                segments.push(key);
            }
        }

        if resource != Resource::Package {
            let mut pairs = url.query_pairs_mut();
            if let Some(id) = &filter.id {
                pairs.append_pair("id", id);
            }
            if let Some(name) = &filter.name {
                pairs.append_pair("name", name);
            }
        }

        // `query_pairs_mut` leaves a dangling `?` when nothing was appended
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    /// Add the key id and content negotiation headers
    fn add_auth_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-Api-Key-Id", &self.key_id)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Execute request with retry logic
    async fn execute_with_retry(&self, builder: RequestBuilder) -> Result<Response> {
        let max_retries = self.max_retries;
        let mut attempt = 0;

        loop {
            let Some(cloned_builder) = builder.try_clone() else {
                // Streaming bodies cannot be replayed, send once
                return builder.send().await.map_err(map_transport_error);
            };

            match cloned_builder.send().await {
                Ok(response) => {
                    if response.status().is_server_error() && attempt < max_retries {
                        tracing::warn!(
                            "CloudAPI answered {} (attempt {}/{}), retrying",
                            response.status(),
                            attempt + 1,
                            max_retries + 1
                        );
                        backoff(attempt).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(response);
                }
                Err(e) => {
                    let is_retryable = e.is_timeout() || e.is_connect() || e.is_request();
                    if is_retryable && attempt < max_retries {
                        tracing::warn!(
                            "CloudAPI request failed (attempt {}/{}): {}",
                            attempt + 1,
                            max_retries + 1,
                            e
                        );
                        backoff(attempt).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(map_transport_error(e));
                }
            }
        }
    }

    /// Turn a response into a [`Fetched`] body or a typed error
    async fn handle_response(
        &self,
        resource: Resource,
        filter: &Filter,
        response: Response,
    ) -> Result<Fetched> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            StatusCode::NOT_FOUND => Err(CloudApiError::NotFound(match filter.key() {
                Some(key) => format!("{} {}", resource, key),
                None => resource.to_string(),
            })),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(CloudApiError::Authentication(error_text))
            }
            _ => Err(CloudApiError::Api {
                message: error_text,
                status: status.as_u16(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl CloudApi for CloudApiClient {
    async fn fetch(&self, resource: Resource, filter: &Filter) -> Result<Fetched> {
        let url = self.resource_url(resource, filter)?;
        tracing::debug!(%resource, %url, "fetching from CloudAPI");

        let request_builder = self.add_auth_headers(self.client.get(url));
        let response = self.execute_with_retry(request_builder).await?;
        self.handle_response(resource, filter, response).await
    }
}

/// Resolve a leading `~` against the user's home directory
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

fn check_key_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        CloudApiError::Configuration(format!("Cannot read key file {}: {}", path.display(), e))
    })?;

    if !metadata.is_file() || metadata.len() == 0 {
        return Err(CloudApiError::Configuration(format!(
            "Key file {} is empty or not a regular file",
            path.display()
        )));
    }

    Ok(())
}

fn map_transport_error(e: reqwest::Error) -> CloudApiError {
    if e.is_timeout() {
        CloudApiError::Timeout
    } else {
        CloudApiError::Http(e)
    }
}

async fn backoff(attempt: u32) {
    let delay_ms = 100u64 * (1u64 << attempt.min(5)); // Cap at 3.2s
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}
