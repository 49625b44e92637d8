//! GraphQL API module
//!
//! Exposes the CloudAPI package catalog and random naming helpers as a
//! GraphQL schema. Root fields delegate to [`Resolvers`], which talks to
//! CloudAPI through the [`cloudapi_client::CloudApi`] capability.

mod random;
mod resolver;
mod schema;
mod types;

pub use random::*;
pub use resolver::*;
pub use schema::*;
pub use types::*;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

/// GraphQL schema type
pub type GraphQLSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Create a new GraphQL schema around a resolver set
pub fn create_schema(resolvers: Arc<Resolvers>) -> GraphQLSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(resolvers)
        .finish()
}

/// GraphQL query handler
pub async fn graphql_handler(
    State(schema): State<GraphQLSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphQL playground handler
pub async fn graphql_playground() -> impl IntoResponse {
    use axum::response::Html;
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
