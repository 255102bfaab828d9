// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Submission of rendered objects to the cluster.

use crate::error::{LoadgenError, Result};
use crate::generator::RenderedObject;
use async_trait::async_trait;
use kube::{
    api::PostParams,
    core::DynamicObject,
    discovery::ApiResource,
    Api, Client,
};
use tracing::{info, instrument};

/// Creates rendered objects somewhere
#[async_trait]
pub trait ObjectSubmitter: Send + Sync {
    /// Create `object` as `resource` in `namespace`
    async fn create(
        &self,
        resource: &ApiResource,
        namespace: &str,
        object: &RenderedObject,
    ) -> Result<()>;
}

/// Submits objects to the Kubernetes API server
pub struct KubeSubmitter {
    client: Client,
}

impl KubeSubmitter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectSubmitter for KubeSubmitter {
    #[instrument(
        skip(self, resource, object),
        fields(resource = %resource.plural, kind = %object.kind(), name = %object.name())
    )]
    async fn create(
        &self,
        resource: &ApiResource,
        namespace: &str,
        object: &RenderedObject,
    ) -> Result<()> {
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, resource);

        api.create(&PostParams::default(), object.as_dynamic())
            .await
            .map_err(|e| LoadgenError::Submission {
                kind: object.kind().to_string(),
                name: object.name().to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

/// Logs objects instead of creating them
#[derive(Debug, Default)]
pub struct DryRunSubmitter;

#[async_trait]
impl ObjectSubmitter for DryRunSubmitter {
    async fn create(
        &self,
        resource: &ApiResource,
        namespace: &str,
        object: &RenderedObject,
    ) -> Result<()> {
        let manifest = serde_yaml::to_string(object.as_dynamic())?;
        info!(
            "Dry run: would create {} {}/{}:\n{}",
            resource.plural,
            namespace,
            object.name(),
            manifest
        );
        Ok(())
    }
}
