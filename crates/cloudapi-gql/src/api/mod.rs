//! API handlers

pub mod graphql;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// HTTP routes: `/graphql` (POST queries, GET playground) and `/health`
pub fn router(schema: graphql::GraphQLSchema) -> Router {
    Router::new()
        .route(
            "/graphql",
            post(graphql::graphql_handler).get(graphql::graphql_playground),
        )
        .with_state(schema)
        .route("/health", get(health::health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
