//! Size-bounded document expansion.

use crate::generators::{generate_value, random_key};
use crate::{DEFAULT_BREADTH, DEFAULT_DEPTH};
use fixture_types::FixtureDocument;
use rand::Rng;
use tracing::debug;

/// Grow `root` until its pretty-printed serialization is at least
/// `target_bytes` long, returning the final serialized byte length.
///
/// Each iteration inserts one new top-level key holding a fresh
/// depth-3/breadth-3 subtree, then re-serializes and re-measures. There is
/// no upper bound: a single subtree can overshoot the target by an
/// arbitrary amount, so the result is only guaranteed to be >= target_bytes.
///
/// A target that the document already satisfies (including 0) returns on
/// the first size check without mutating `root`.
pub fn expand_to_size<R: Rng>(
    rng: &mut R,
    root: &mut FixtureDocument,
    target_bytes: u64,
) -> serde_json::Result<u64> {
    loop {
        let rendered = serde_json::to_string_pretty(root)?;
        let size = rendered.len() as u64;
        if size >= target_bytes {
            debug!(size, target_bytes, keys = root.len(), "expansion complete");
            return Ok(size);
        }
        root.insert(
            random_key(rng),
            generate_value(rng, DEFAULT_DEPTH, DEFAULT_BREADTH),
        );
    }
}
