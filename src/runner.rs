// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sequential load loop: render, submit, pause, repeat.

use crate::config::Config;
use crate::error::{LoadgenError, Result};
use crate::generator::RenderedObject;
use crate::kubernetes::ObjectSubmitter;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{info, instrument, warn};

/// Outcome of a completed load test
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub created: u32,
    pub elapsed: Duration,
}

/// Creates `loadTest.count` objects one after another through an [`ObjectSubmitter`].
pub struct LoadRunner<S> {
    config: Config,
    submitter: S,
}

impl<S: ObjectSubmitter> LoadRunner<S> {
    pub fn new(config: Config, submitter: S) -> Self {
        Self { config, submitter }
    }

    /// Run the load test, aborting on the first failed iteration
    pub async fn run(&self) -> Result<RunSummary> {
        let count = self.config.load_test.count;
        let delay = self.config.load_test.delay;

        info!(
            "Starting load test: creating {} {} with {}s delay",
            count, self.config.resource, delay
        );
        if matches!(self.config.references_random_name(), Ok(false)) {
            warn!("Template does not reference {{{{.RandomName}}}}, all objects will share the same name");
        }

        let start = Instant::now();
        for iteration in 1..=count {
            let object = self
                .config
                .generate_object()
                .map_err(|source| LoadgenError::Generate {
                    iteration,
                    source: Box::new(source),
                })?;

            let namespace = self
                .submit(&object)
                .await
                .map_err(|source| LoadgenError::Create {
                    iteration,
                    source: Box::new(source),
                })?;

            info!(
                index = iteration,
                kind = object.kind(),
                name = object.name(),
                namespace = %namespace,
                "Created object {}: {}/{}",
                iteration,
                object.kind(),
                object.name()
            );

            if iteration < count && delay > 0 {
                sleep(Duration::from_secs(delay)).await;
            }
        }

        let summary = RunSummary {
            created: count,
            elapsed: start.elapsed(),
        };
        info!(
            "Load test completed: {} objects created in {:.1}s",
            summary.created,
            summary.elapsed.as_secs_f64()
        );
        Ok(summary)
    }

    /// Submit one object and return the namespace it was created in
    #[instrument(skip(self, object), fields(kind = %object.kind(), name = %object.name()))]
    async fn submit(&self, object: &RenderedObject) -> Result<String> {
        let resource = object.api_resource(&self.config.resource)?;
        let namespace = self.config.target_namespace(object.namespace());
        self.submitter.create(&resource, namespace, object).await?;
        Ok(namespace.to_string())
    }
}
