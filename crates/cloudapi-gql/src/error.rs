//! Resolver error taxonomy and its GraphQL rendering

use async_graphql::ErrorExtensions;
use cloudapi_client::{CloudApiError, Resource};
use thiserror::Error;

/// Result type alias for resolver operations
pub type ResolverResult<T> = std::result::Result<T, ResolverError>;

/// Errors a resolver can surface to the GraphQL engine.
///
/// Upstream "not found" answers never reach this type; resolvers turn them
/// into `null` or an empty list before returning.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The caller omitted or misused arguments
    #[error("{0}")]
    InvalidArgument(String),

    /// Transport, authentication or server failure from CloudAPI
    #[error("upstream request failed: {0}")]
    Upstream(#[from] CloudApiError),

    /// CloudAPI answered with a payload that does not fit the GraphQL type
    #[error("unexpected {resource} payload from CloudAPI: {source}")]
    Shape {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl ResolverError {
    /// Machine-readable code placed in the GraphQL error extensions
    pub fn code(&self) -> &'static str {
        match self {
            ResolverError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ResolverError::Upstream(_) | ResolverError::Shape { .. } => "UPSTREAM_FAILURE",
        }
    }

    /// Message shown to GraphQL clients; upstream details stay in the logs
    pub fn public_message(&self) -> String {
        match self {
            ResolverError::InvalidArgument(message) => message.clone(),
            ResolverError::Upstream(_) | ResolverError::Shape { .. } => {
                "upstream request failed".to_string()
            }
        }
    }
}

impl ErrorExtensions for ResolverError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.public_message())
            .extend_with(|_, e| e.set("code", code.to_string()))
    }
}

/// Log the full cause and convert into the error the engine reports
pub fn into_graphql_error(err: ResolverError) -> async_graphql::Error {
    match &err {
        ResolverError::InvalidArgument(message) => {
            tracing::debug!("rejected query arguments: {}", message);
        }
        ResolverError::Upstream(_) | ResolverError::Shape { .. } => {
            tracing::error!(error = %err, "resolver failed");
        }
    }
    err.extend()
}
