//! GraphQL query resolvers
//!
//! Translates root fields into CloudAPI fetches and shapes the heterogeneous
//! REST answers (one object or a collection) into GraphQL values.

use super::random::{self, NameConvention, WordConvention};
use super::types::Package;
use crate::error::{ResolverError, ResolverResult};
use async_graphql::{ID, Object};
use cloudapi_client::{CloudApi, Fetched, Filter, Resource};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// The resolver set behind the query root.
///
/// Holds only shared immutable state, so one instance serves every request
/// concurrently.
#[derive(Clone)]
pub struct Resolvers {
    cloudapi: Arc<dyn CloudApi>,
    machine_names: Arc<dyn NameConvention>,
    image_names: Arc<dyn NameConvention>,
}

impl Resolvers {
    /// Resolver set over `cloudapi` with the default naming conventions
    pub fn new(cloudapi: Arc<dyn CloudApi>) -> Self {
        Self::with_conventions(
            cloudapi,
            Arc::new(WordConvention::machine()),
            Arc::new(WordConvention::image()),
        )
    }

    /// Resolver set with custom machine and image naming conventions
    pub fn with_conventions(
        cloudapi: Arc<dyn CloudApi>,
        machine_names: Arc<dyn NameConvention>,
        image_names: Arc<dyn NameConvention>,
    ) -> Self {
        Self {
            cloudapi,
            machine_names,
            image_names,
        }
    }

    /// `packages(id)`: the whole catalog, or at most the one package with `id`
    pub async fn packages(&self, id: Option<&str>) -> ResolverResult<Vec<Package>> {
        let Some(id) = id else {
            let fetched = self
                .cloudapi
                .fetch(Resource::Packages, &Filter::default())
                .await?;
            return to_packages(Resource::Packages, fetched.into_vec());
        };
        if id.is_empty() {
            return Ok(Vec::new());
        }

        let package = match self.fetch_optional(Resource::Package, &Filter::by_id(id)).await? {
            None => None,
            Some(Fetched::One(value)) => to_package(Resource::Package, value)?,
            Some(Fetched::Many(values)) => to_packages(Resource::Package, values)?
                .into_iter()
                .find(|package| package.id == id),
        };

        Ok(package.into_iter().collect())
    }

    /// `package(id, name)`: lookup by id, falling back to name
    pub async fn package(
        &self,
        id: Option<&str>,
        name: Option<&str>,
    ) -> ResolverResult<Option<Package>> {
        let filter = match (id, name) {
            (Some(id), _) => Filter::by_id(id),
            (None, Some(name)) => Filter::by_name(name),
            (None, None) => {
                return Err(ResolverError::InvalidArgument(
                    "at least one of id or name required".to_string(),
                ));
            }
        };

        let Some(fetched) = self.fetch_optional(Resource::Package, &filter).await? else {
            return Ok(None);
        };

        let values = match fetched {
            Fetched::One(value) => return to_package(Resource::Package, value),
            Fetched::Many(values) => values,
        };

        let packages = to_packages(Resource::Package, values)?;
        Ok(match (id, name) {
            (Some(id), _) => packages.into_iter().find(|package| package.id == id),
            (None, Some(name)) => newest(packages.into_iter().filter(|p| p.name == name)),
            (None, None) => None,
        })
    }

    /// `rndName`: a machine name not used by any existing machine
    pub async fn rnd_name(&self) -> ResolverResult<String> {
        self.random_name(Resource::Machines, self.machine_names.as_ref())
            .await
    }

    /// `rndImageName`: an image name not used by any visible image
    pub async fn rnd_image_name(&self) -> ResolverResult<String> {
        self.random_name(Resource::Images, self.image_names.as_ref())
            .await
    }

    async fn random_name(
        &self,
        resource: Resource,
        convention: &dyn NameConvention,
    ) -> ResolverResult<String> {
        let taken = self
            .fetch_optional(resource, &Filter::default())
            .await?
            .map(name_pool)
            .unwrap_or_default();

        tracing::debug!(%resource, taken = taken.len(), "drawing random name");
        let mut rng = rand::thread_rng();
        Ok(random::unique_name(convention, &taken, &mut rng))
    }

    /// Fetch, mapping an upstream "not found" to `None`
    async fn fetch_optional(
        &self,
        resource: Resource,
        filter: &Filter,
    ) -> ResolverResult<Option<Fetched>> {
        match self.cloudapi.fetch(resource, filter).await {
            Ok(fetched) => Ok(Some(fetched)),
            Err(e) if e.is_not_found() => {
                tracing::debug!(%resource, "no match upstream: {}", e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Shape one REST object; a JSON `null` body means no match
fn to_package(resource: Resource, value: Value) -> ResolverResult<Option<Package>> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|source| ResolverError::Shape { resource, source })
}

fn to_packages(resource: Resource, values: Vec<Value>) -> ResolverResult<Vec<Package>> {
    values
        .into_iter()
        .map(|value| {
            serde_json::from_value(value).map_err(|source| ResolverError::Shape { resource, source })
        })
        .collect()
}

/// Highest version wins; ties keep the earliest entry
fn newest(packages: impl Iterator<Item = Package>) -> Option<Package> {
    packages.fold(None, |best: Option<Package>, package| match best {
        Some(best) if best.version_key() >= package.version_key() => Some(best),
        _ => Some(package),
    })
}

/// Names already taken in a machines or images listing
fn name_pool(fetched: Fetched) -> HashSet<String> {
    fetched
        .into_vec()
        .iter()
        .filter_map(|entry| entry.get("name").and_then(Value::as_str))
        .map(str::to_owned)
        .collect()
}

#[Object]
impl Package {
    /// Package id
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    /// Package name
    async fn name(&self) -> &str {
        &self.name
    }

    /// Memory in MB
    async fn memory(&self) -> i64 {
        self.memory
    }

    /// Disk in MB
    async fn disk(&self) -> i64 {
        self.disk
    }

    /// Swap in MB
    async fn swap(&self) -> i64 {
        self.swap
    }

    async fn vcpus(&self) -> i64 {
        self.vcpus
    }

    async fn lwps(&self) -> i64 {
        self.lwps
    }

    /// Whether this is the default package
    async fn default(&self) -> bool {
        self.default
    }

    async fn version(&self) -> &str {
        &self.version
    }
}
