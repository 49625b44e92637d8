//! Root query type

use crate::api::graphql::resolver::Resolvers;
use crate::api::graphql::types::*;
use crate::error::into_graphql_error;
use async_graphql::{Context, Object, Result as GQLResult};
use std::sync::Arc;

/// Root query type for GraphQL
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List packages, optionally narrowed to a single id
    async fn packages(&self, ctx: &Context<'_>, id: Option<String>) -> GQLResult<Vec<Package>> {
        let resolvers = ctx.data::<Arc<Resolvers>>()?;
        resolvers
            .packages(id.as_deref())
            .await
            .map_err(into_graphql_error)
    }

    /// Get a package by id or by name; id wins when both are given
    async fn package(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
        name: Option<String>,
    ) -> GQLResult<Option<Package>> {
        let resolvers = ctx.data::<Arc<Resolvers>>()?;
        resolvers
            .package(non_empty(&id), non_empty(&name))
            .await
            .map_err(into_graphql_error)
    }

    /// A fresh machine name
    async fn rnd_name(&self, ctx: &Context<'_>) -> GQLResult<String> {
        let resolvers = ctx.data::<Arc<Resolvers>>()?;
        resolvers.rnd_name().await.map_err(into_graphql_error)
    }

    /// A fresh image name
    async fn rnd_image_name(&self, ctx: &Context<'_>) -> GQLResult<String> {
        let resolvers = ctx.data::<Arc<Resolvers>>()?;
        resolvers.rnd_image_name().await.map_err(into_graphql_error)
    }
}

// Empty string lookup keys count as absent
fn non_empty(arg: &Option<String>) -> Option<&str> {
    arg.as_deref().filter(|s| !s.is_empty())
}
