//! Generator functions for random keys, leaves, and nested values.
//!
//! All functions are generic over [`rand::Rng`] so they can be driven by a
//! seeded `StdRng` in tests or an OS-entropy RNG in the CLI.

pub mod leaf;
pub mod strings;

pub use leaf::random_leaf;
pub use strings::random_key;

use fixture_types::{FixtureDocument, FixtureValue};
use rand::Rng;

/// Maximum number of elements in the optional extra array of an object.
pub const EXTRA_ARRAY_MAX_LEN: usize = 3;

/// Generate a random value of the given depth and breadth.
///
/// Depth 0 produces a leaf; otherwise an object level is produced via
/// [`generate_document`].
pub fn generate_value<R: Rng>(rng: &mut R, depth: u32, breadth: usize) -> FixtureValue {
    if depth == 0 {
        random_leaf(rng)
    } else {
        FixtureValue::Object(generate_document(rng, depth, breadth))
    }
}

/// Generate one object level with `breadth` randomly keyed children, each a
/// recursive [`generate_value`] call at `depth - 1`.
///
/// With probability 0.5 (a uniform f64 draw above 0.5) one extra key is
/// added whose value is an array of 1 to [`EXTRA_ARRAY_MAX_LEN`] values, each
/// generated at the same `depth - 1` / `breadth` parameters.
pub fn generate_document<R: Rng>(rng: &mut R, depth: u32, breadth: usize) -> FixtureDocument {
    let child_depth = depth.saturating_sub(1);
    let mut document = FixtureDocument::with_capacity(breadth + 1);

    for _ in 0..breadth {
        document.insert(random_key(rng), generate_value(rng, child_depth, breadth));
    }

    if rng.random::<f64>() > 0.5 {
        let len = rng.random_range(1..=EXTRA_ARRAY_MAX_LEN);
        let items = (0..len)
            .map(|_| generate_value(rng, child_depth, breadth))
            .collect();
        document.insert(random_key(rng), FixtureValue::Array(items));
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_value_depth_zero_is_leaf() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let value = generate_value(&mut rng, 0, 3);
            match value {
                FixtureValue::String(_) | FixtureValue::Integer(_) => {}
                FixtureValue::Array(items) => {
                    assert!(!items.is_empty());
                    assert!(items
                        .iter()
                        .all(|item| matches!(item, FixtureValue::Integer(_))));
                }
                FixtureValue::Object(_) => panic!("depth 0 must not produce an object"),
            }
        }
    }

    #[test]
    fn test_generate_value_positive_depth_is_object() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let value = generate_value(&mut rng, 2, 3);
            assert!(value.as_object().is_some());
        }
    }

    #[test]
    fn test_generate_document_breadth() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let document = generate_document(&mut rng, 1, 4);
            // breadth entries, plus at most one extra array-valued key
            assert!(document.len() == 4 || document.len() == 5);
            if document.len() == 5 {
                let (_, extra) = document.get_index(4).unwrap();
                let items = extra.as_array().expect("extra key must hold an array");
                assert!((1..=EXTRA_ARRAY_MAX_LEN).contains(&items.len()));
            }
        }
    }

    #[test]
    fn test_generate_document_keys_are_random_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(7);

        let document = generate_document(&mut rng, 2, 3);
        for key in document.keys() {
            assert_eq!(key.len(), crate::KEY_LENGTH);
            assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_nesting_stops_at_requested_depth() {
        fn max_object_depth(value: &FixtureValue) -> u32 {
            match value {
                FixtureValue::Object(map) => {
                    1 + map.values().map(max_object_depth).max().unwrap_or(0)
                }
                FixtureValue::Array(items) => {
                    items.iter().map(max_object_depth).max().unwrap_or(0)
                }
                _ => 0,
            }
        }

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let value = generate_value(&mut rng, 3, 3);
            assert!(max_object_depth(&value) <= 3);
        }
    }
}
