//! Owning generator handle around a `StdRng`.

use crate::{expander, generators, sampler};
use fixture_types::{FixtureDocument, FixturePath, FixtureValue};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default nesting depth for generated subtrees.
pub const DEFAULT_DEPTH: u32 = 3;

/// Default number of sibling keys per object level.
pub const DEFAULT_BREADTH: usize = 3;

/// Length of random object keys and string leaves.
pub const KEY_LENGTH: usize = 10;

/// Random fixture generator owning its RNG.
///
/// The CLI constructs this from OS entropy so every run differs; tests use
/// [`FixtureGenerator::from_seed`] for reproducible output.
pub struct FixtureGenerator {
    rng: StdRng,
}

impl FixtureGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator with a fixed seed for reproducible output.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a random value. See [`generators::generate_value`].
    pub fn generate(&mut self, depth: u32, breadth: usize) -> FixtureValue {
        generators::generate_value(&mut self.rng, depth, breadth)
    }

    /// Generate a random root object. See [`generators::generate_document`].
    pub fn generate_document(&mut self, depth: u32, breadth: usize) -> FixtureDocument {
        generators::generate_document(&mut self.rng, depth, breadth)
    }

    /// Grow `root` until its serialized form is at least `target_bytes`
    /// long. See [`expander::expand_to_size`].
    pub fn expand_to_size(
        &mut self,
        root: &mut FixtureDocument,
        target_bytes: u64,
    ) -> serde_json::Result<u64> {
        expander::expand_to_size(&mut self.rng, root, target_bytes)
    }

    /// Sample one random deep path through `document`. See
    /// [`sampler::sample_path`].
    pub fn sample_path(&mut self, document: &FixtureDocument) -> FixturePath {
        sampler::sample_path(&mut self.rng, document)
    }
}
