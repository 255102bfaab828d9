// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_loadgen::config::Config;
use kube_loadgen::constants::DEFAULT_CONFIG_PATH;
use kube_loadgen::kubernetes::{create_client, DryRunSubmitter, KubeSubmitter};
use kube_loadgen::runner::LoadRunner;

/// Create a stream of randomly named Kubernetes objects from a template
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to configuration file
    #[arg(long, short = 'c', env = "KUBE_LOADGEN_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Render and log objects without contacting the cluster
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    info!(
        "Configuration loaded: resource={}, count={}",
        config.resource, config.load_test.count
    );

    let summary = if args.dry_run {
        LoadRunner::new(config, DryRunSubmitter).run().await
    } else {
        let client = create_client()
            .await
            .context("Failed to create Kubernetes client")?;
        info!("Connected to Kubernetes cluster");
        LoadRunner::new(config, KubeSubmitter::new(client)).run().await
    }
    .context("Load test failed")?;

    info!("Created {} objects", summary.created);
    println!("Load test completed successfully!");
    Ok(())
}
