// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation

use crate::error::{LoadgenError, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, info};

/// Create a Kubernetes client, preferring in-cluster service account credentials
/// and falling back to the local kubeconfig (`KUBECONFIG` or `~/.kube/config`).
pub async fn create_client() -> Result<Client> {
    let config = match KConfig::incluster() {
        Ok(config) => {
            info!("Using in-cluster configuration");
            config
        }
        Err(e) => {
            debug!("In-cluster configuration unavailable: {}", e);
            let config = KConfig::from_kubeconfig(&KubeConfigOptions::default())
                .await
                .map_err(|e| {
                    LoadgenError::ClientInit(format!("Failed to load kubeconfig: {}", e))
                })?;
            info!("Using kubeconfig for cluster {}", config.cluster_url);
            config
        }
    };

    Client::try_from(config)
        .map_err(|e| LoadgenError::ClientInit(format!("Failed to create client: {}", e)))
}
