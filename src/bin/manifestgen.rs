// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Manifest Renderer
//!
//! Runs a configuration document through the full read pipeline of one
//! manifest kind and prints the rendered YAML manifest. Handy for checking
//! what a data source will produce without wiring up a provider.
//!
//! Usage:
//!   cargo run --bin manifestgen -- --kind component config.yaml
//!   cat config.yaml | cargo run --bin manifestgen -- --kind topology -

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use canopy::crd::{ComponentSpec, TopologySpec};
use canopy::datasource::ManifestDataSource;
use canopy::manifest::ManifestKind;

/// Render a manifest from a configuration document.
#[derive(Parser, Debug)]
#[command(name = "manifestgen", version, about)]
struct Args {
    /// Manifest kind to render
    #[arg(long, value_enum)]
    kind: Kind,

    /// Configuration file in YAML format, or `-` for stdin
    #[arg(default_value = "-")]
    file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Component,
    Topology,
}

fn main() -> Result<()> {
    // Respects RUST_LOG if set, defaults to info
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let config = if args.file.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read configuration from stdin")?;
        buffer
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("failed to read {}", args.file.display()))?
    };

    let yaml = match args.kind {
        Kind::Component => render::<ComponentSpec>(&config)?,
        Kind::Topology => render::<TopologySpec>(&config)?,
    };

    print!("{yaml}");

    Ok(())
}

fn render<S: ManifestKind>(config: &str) -> Result<String> {
    let source = ManifestDataSource::<S>::new();
    let state = source
        .read_yaml(config)
        .with_context(|| format!("invalid {} configuration", S::KIND))?;
    Ok(state.yaml)
}
