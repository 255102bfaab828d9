// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadgenError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Invalid Kubernetes object: {0}")]
    InvalidObject(String),

    #[error("Failed to create Kubernetes client: {0}")]
    ClientInit(String),

    #[error("Failed to create object {kind}/{name}: {message}")]
    Submission {
        kind: String,
        name: String,
        message: String,
    },

    #[error("Failed to generate object {iteration}: {source}")]
    Generate {
        iteration: u32,
        #[source]
        source: Box<LoadgenError>,
    },

    #[error("Failed to create object {iteration}: {source}")]
    Create {
        iteration: u32,
        #[source]
        source: Box<LoadgenError>,
    },
}

impl LoadgenError {
    /// 1-based iteration the error occurred in, if it was raised inside the load loop
    pub fn iteration(&self) -> Option<u32> {
        match self {
            LoadgenError::Generate { iteration, .. } | LoadgenError::Create { iteration, .. } => {
                Some(*iteration)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadgenError>;
