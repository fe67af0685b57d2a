//! Random string generation.

use crate::KEY_LENGTH;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Generate a random ASCII-alphanumeric string of the given length.
pub fn random_string<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Generate a random object key.
///
/// Keys carry no uniqueness guarantee: a colliding key silently overwrites
/// the previous value, which is acceptable for size/shape fixtures.
pub fn random_key<R: Rng>(rng: &mut R) -> String {
    random_string(rng, KEY_LENGTH)
}
