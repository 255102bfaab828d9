// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_NAMESPACE;
use crate::error::{LoadgenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Load test configuration loaded from a YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub load_test: LoadTest,
    pub randomization: Randomization,
    /// Plural resource name the objects are created under, e.g. `pods`
    pub resource: String,
    /// Namespace for objects that don't declare one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Object skeleton rendered on every iteration
    pub template: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadTest {
    /// Number of objects to create
    pub count: u32,
    /// Seconds to wait between two creations
    pub delay: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Randomization {
    pub name_prefix: String,
    pub suffix_length: usize,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoadgenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Namespace to create an object in: its own, else the configured one, else `default`
    pub fn target_namespace<'a>(&'a self, object_namespace: Option<&'a str>) -> &'a str {
        object_namespace
            .filter(|ns| !ns.is_empty())
            .or(self.namespace.as_deref().filter(|ns| !ns.is_empty()))
            .unwrap_or(DEFAULT_NAMESPACE)
    }
}
