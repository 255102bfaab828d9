// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses and recording submissions.

use crate::error::{LoadgenError, Result};
use crate::generator::RenderedObject;
use crate::kubernetes::ObjectSubmitter;
use async_trait::async_trait;
use http::{Request, Response};
use kube::client::Body;
use kube::discovery::ApiResource;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::time::Instant;
use tower::Service;

/// A mock HTTP service that returns predefined responses and records every request.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("POST".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Method and path of every request received so far
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        self.requests
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));
        let response = self.responses.lock().unwrap().get(&(method, path)).cloned();

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| {
                (404, status_json(404, "NotFound", "not found"))
            });
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a JSON response for a created object
pub fn object_json(api_version: &str, kind: &str, name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// Create a failure Status response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// A create call observed by [`FakeSubmitter`]
#[derive(Debug, Clone)]
pub struct Submission {
    pub group: String,
    pub version: String,
    pub resource: String,
    pub namespace: String,
    pub kind: String,
    pub name: String,
    pub at: Instant,
}

/// Records create calls, optionally failing the n-th one (1-based)
#[derive(Clone, Default)]
pub struct FakeSubmitter {
    calls: Arc<Mutex<Vec<Submission>>>,
    fail_on: Option<usize>,
}

impl FakeSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Submission> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectSubmitter for FakeSubmitter {
    async fn create(
        &self,
        resource: &ApiResource,
        namespace: &str,
        object: &RenderedObject,
    ) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(Submission {
            group: resource.group.clone(),
            version: resource.version.clone(),
            resource: resource.plural.clone(),
            namespace: namespace.to_string(),
            kind: object.kind().to_string(),
            name: object.name().to_string(),
            at: Instant::now(),
        });

        if self.fail_on == Some(calls.len()) {
            return Err(LoadgenError::Submission {
                kind: object.kind().to_string(),
                name: object.name().to_string(),
                message: "admission webhook denied the request".to_string(),
            });
        }
        Ok(())
    }
}
