//! CloudAPI client
//!
//! Read-only REST client for the CloudAPI cloud management API, plus the
//! [`CloudApi`] capability trait the GraphQL layer is written against.
//!
//! # Example
//!
//! ```no_run
//! use cloudapi_client::{ClientConfig, CloudApi, CloudApiClient, Filter, Resource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CloudApiClient::from_config(ClientConfig {
//!         base_url: "https://us-east-1.api.example.com".to_string(),
//!         key_id: "de:ad:be:ef".to_string(),
//!         key_path: "/home/me/.ssh/id_rsa".into(),
//!         ..Default::default()
//!     })?;
//!
//!     let packages = client.fetch(Resource::Packages, &Filter::default()).await?;
//!     println!("Found {} packages", packages.into_vec().len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use api::CloudApi;
pub use client::CloudApiClient;
pub use error::{CloudApiError, Result};
pub use models::*;
