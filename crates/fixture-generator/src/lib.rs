//! Random document generation for the json-fixture tool.
//!
//! This crate produces randomly shaped JSON documents. The low-level
//! generator functions are generic over any [`rand::Rng`], so tests can run
//! them with a seeded `StdRng`; the [`FixtureGenerator`] handle owns the RNG
//! for callers that just want a document.
//!
//! # Architecture
//!
//! ```text
//! FixtureGenerator { rng: StdRng }
//!        │
//!        ▼
//! generators::generate_document(depth, breadth)   random nested object
//!        │
//!        ▼
//! expander::expand_to_size(root, target_bytes)    grow until serialized
//!        │                                        form ≥ target_bytes
//!        ▼
//! sampler::sample_path(root)                      random descent to a leaf
//! ```
//!
//! # Example
//!
//! ```
//! use fixture_generator::FixtureGenerator;
//!
//! let mut generator = FixtureGenerator::from_seed(42);
//! let mut document = generator.generate_document(3, 3);
//! let size = generator.expand_to_size(&mut document, 500).unwrap();
//! assert!(size >= 500);
//!
//! let path = generator.sample_path(&document);
//! assert!(!path.is_empty());
//! ```

pub mod expander;
pub mod generator;
pub mod generators;
pub mod sampler;

pub use generator::{FixtureGenerator, DEFAULT_BREADTH, DEFAULT_DEPTH, KEY_LENGTH};
