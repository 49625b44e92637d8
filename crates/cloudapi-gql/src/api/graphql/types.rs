//! GraphQL type definitions

use serde::{Deserialize, Serialize};

/// A compute-instance sizing tier as reported by CloudAPI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Package id
    pub id: String,
    /// Package name, shared by every version of the package
    pub name: String,
    /// Memory in MB
    #[serde(default)]
    pub memory: i64,
    /// Disk in MB
    #[serde(default)]
    pub disk: i64,
    /// Swap in MB
    #[serde(default)]
    pub swap: i64,
    /// Virtual CPUs
    #[serde(default)]
    pub vcpus: i64,
    /// Lightweight process limit
    #[serde(default)]
    pub lwps: i64,
    /// Whether this is the default package
    #[serde(default)]
    pub default: bool,
    /// Package version
    #[serde(default)]
    pub version: String,
}

impl Package {
    /// Dotted version split into numeric parts; non-numeric parts count as 0
    pub fn version_key(&self) -> Vec<u64> {
        self.version
            .split('.')
            .map(|part| part.trim().parse().unwrap_or(0))
            .collect()
    }
}
