//! Data models for the CloudAPI client

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Upstream resource kinds the client knows how to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// The full package catalog
    Packages,
    /// A single package, looked up by id or name
    Package,
    /// Machines owned by the account
    Machines,
    /// Images visible to the account
    Images,
}

impl Resource {
    /// Collection path segment under the account
    pub fn collection(&self) -> &'static str {
        match self {
            Resource::Packages | Resource::Package => "packages",
            Resource::Machines => "machines",
            Resource::Images => "images",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Packages => "packages",
            Resource::Package => "package",
            Resource::Machines => "machines",
            Resource::Images => "images",
        };
        f.write_str(name)
    }
}

/// Lookup filter passed along with a fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Resource id
    pub id: Option<String>,
    /// Resource name
    pub name: Option<String>,
}

impl Filter {
    /// Filter matching a single id
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    /// Filter matching a name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// The key used to address a single resource; id wins over name
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().or(self.name.as_deref())
    }
}

/// A REST response body: CloudAPI answers with either an object or an array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fetched {
    /// Collection response
    Many(Vec<Value>),
    /// Single object response
    One(Value),
}

impl Fetched {
    /// Flatten the response into a list, wrapping a single object
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Fetched::Many(values) => values,
            Fetched::One(value) => vec![value],
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the CloudAPI endpoint
    pub base_url: String,
    /// Account login used in resource paths
    pub account: String,
    /// Key id sent with every request
    pub key_id: String,
    /// Path to the private key file; a leading `~` is the home directory
    pub key_path: PathBuf,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of retries
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            account: "my".to_string(),
            key_id: String::new(),
            key_path: PathBuf::from("~/.ssh/id_rsa"),
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}
