//! The capability the GraphQL layer consumes

use crate::error::Result;
use crate::models::{Fetched, Filter, Resource};

/// Read access to CloudAPI resources.
///
/// Implemented by [`crate::CloudApiClient`] for real traffic; tests provide
/// their own implementations and inject them wherever a `dyn CloudApi` is
/// expected.
#[async_trait::async_trait]
pub trait CloudApi: Send + Sync {
    /// Fetch a resource, narrowed by `filter`.
    ///
    /// Returns [`crate::CloudApiError::NotFound`] when the upstream has no
    /// matching resource.
    async fn fetch(&self, resource: Resource, filter: &Filter) -> Result<Fetched>;
}
