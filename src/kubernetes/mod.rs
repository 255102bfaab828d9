// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client bootstrap and object submission.

pub mod client;
pub mod submitter;

pub use client::create_client;
pub use submitter::{DryRunSubmitter, KubeSubmitter, ObjectSubmitter};
