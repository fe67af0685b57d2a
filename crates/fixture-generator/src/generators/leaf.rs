//! Leaf value generation.

use super::strings::random_string;
use crate::KEY_LENGTH;
use fixture_types::FixtureValue;
use rand::Rng;

/// Inclusive upper bound for integer leaves.
pub const LEAF_INT_MAX: i64 = 1000;

/// Inclusive upper bound for integers inside leaf arrays.
pub const LEAF_ARRAY_INT_MAX: i64 = 100;

/// Maximum number of elements in a leaf array.
pub const LEAF_ARRAY_MAX_LEN: usize = 5;

/// Generate a random leaf value.
///
/// Chooses uniformly among a random 10-character string, an integer in
/// `[0, 1000]`, and an array of 1 to 5 integers in `[0, 100]`.
pub fn random_leaf<R: Rng>(rng: &mut R) -> FixtureValue {
    match rng.random_range(0..3) {
        0 => FixtureValue::String(random_string(rng, KEY_LENGTH)),
        1 => FixtureValue::Integer(rng.random_range(0..=LEAF_INT_MAX)),
        _ => {
            let len = rng.random_range(1..=LEAF_ARRAY_MAX_LEN);
            let items = (0..len)
                .map(|_| FixtureValue::Integer(rng.random_range(0..=LEAF_ARRAY_INT_MAX)))
                .collect();
            FixtureValue::Array(items)
        }
    }
}
