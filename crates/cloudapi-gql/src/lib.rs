//! CloudAPI GraphQL - GraphQL facade over the CloudAPI REST API
//!
//! Provides:
//! - POST /graphql - Execute GraphQL queries
//! - GET /graphql - GraphQL playground
//! - GET /health - Liveness and version
//!
//! Root fields: `packages(id)`, `package(id, name)`, `rndName`,
//! `rndImageName`.

use cloudapi_client::{CloudApi, CloudApiClient, CloudApiError};
use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;

use api::graphql::{GraphQLSchema, Resolvers, create_schema};

/// Build the schema over an explicit CloudAPI implementation
pub fn schema_with(cloudapi: Arc<dyn CloudApi>) -> GraphQLSchema {
    create_schema(Arc::new(Resolvers::new(cloudapi)))
}

/// Build the schema over a REST client configured from `config`
pub fn schema_from_config(config: &config::Config) -> Result<GraphQLSchema, CloudApiError> {
    let client = CloudApiClient::from_config(config.cloudapi.client_config())?;
    Ok(schema_with(Arc::new(client)))
}
