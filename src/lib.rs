//! json-fixture library
//!
//! Orchestrates the fixture pipeline: generate a random root document,
//! expand it to the requested serialized size, sample one random deep path
//! through it, and write both the document and the path to disk.
//!
//! # Member Crates
//!
//! - `fixture-types` - JSON value sum type and deep-path locator types
//! - `fixture-generator` - random generation, size-bounded expansion, path
//!   sampling
//! - `fixture-writer` - pretty-JSON output and `.path` sidecar
//!
//! # CLI Usage
//!
//! ```bash
//! generate_json out.json 5000
//! ```

use anyhow::Context;
use std::path::Path;

pub use fixture_generator::{FixtureGenerator, DEFAULT_BREADTH, DEFAULT_DEPTH};
pub use fixture_types::{FixtureDocument, FixturePath, FixtureValue, PathSegment};
pub use fixture_writer::{sidecar_path, WriteMetrics};

/// Result of one fixture generation run.
#[derive(Debug)]
pub struct FixtureReport {
    /// The sampled deep path into the written document.
    pub deep_path: FixturePath,
    /// Write metrics for the document file.
    pub metrics: WriteMetrics,
}

/// Generate a fixture of at least `size_in_bytes` serialized bytes at
/// `path`, using OS entropy. Each run produces different output.
pub fn generate_fixture<P: AsRef<Path>>(
    path: P,
    size_in_bytes: u64,
) -> anyhow::Result<FixtureReport> {
    let mut generator = FixtureGenerator::from_os_rng();
    generate_fixture_with(&mut generator, path, size_in_bytes)
}

/// Generate a fixture with a caller-supplied generator, so tests can run
/// the full pipeline with a fixed seed.
pub fn generate_fixture_with<P: AsRef<Path>>(
    generator: &mut FixtureGenerator,
    path: P,
    size_in_bytes: u64,
) -> anyhow::Result<FixtureReport> {
    let path = path.as_ref();

    let mut document = generator.generate_document(DEFAULT_DEPTH, DEFAULT_BREADTH);
    generator
        .expand_to_size(&mut document, size_in_bytes)
        .context("Failed to serialize document during expansion")?;

    let deep_path = generator.sample_path(&document);

    let metrics = fixture_writer::write_fixture(path, &document, &deep_path.to_string())
        .with_context(|| format!("Failed to write fixture to {}", path.display()))?;

    Ok(FixtureReport { deep_path, metrics })
}
