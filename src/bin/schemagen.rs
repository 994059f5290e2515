// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Schema Descriptor Generator
//!
//! Writes the schema descriptor of every manifest kind as pretty-printed
//! JSON. This keeps the artifacts in docs/schemas/ in sync with the Rust
//! types the descriptors are derived from.
//!
//! Usage:
//!   cargo run --bin schemagen
//!
//! Generated files are written to docs/schemas/.

use canopy::crd::{ComponentSpec, TopologySpec};
use canopy::manifest::ManifestKind;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("docs/schemas");

    fs::create_dir_all(output_dir)?;

    println!("Generating schema descriptors...");

    generate::<ComponentSpec>(output_dir)?;
    generate::<TopologySpec>(output_dir)?;

    println!("✓ Successfully generated schema descriptors in docs/schemas/");

    Ok(())
}

fn generate<S: ManifestKind>(output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let schema = S::schema();
    let json = serde_json::to_string_pretty(schema)?;

    let filename = format!("{}_{}.schema.json", S::KIND.to_lowercase(), S::VERSION);
    let output_path = output_dir.join(&filename);
    fs::write(&output_path, json)?;

    println!("  ✓ Generated {filename}");

    Ok(())
}
