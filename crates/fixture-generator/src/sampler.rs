//! Random deep-path sampling.

use fixture_types::{FixtureDocument, FixturePath, FixtureValue, PathSegment};
use rand::Rng;

/// Walk one random descent from the document root, recording object keys
/// and array indices until a leaf or an empty container is reached.
///
/// Keys are chosen uniformly by insertion-order position, indices uniformly
/// over the array length. Repeated calls over the same document yield
/// different paths, which is the point: downstream consumers get varied
/// deep-access patterns.
pub fn sample_path<R: Rng>(rng: &mut R, document: &FixtureDocument) -> FixturePath {
    let mut path = FixturePath::default();

    let Some(mut current) = descend_object(rng, document, &mut path) else {
        return path;
    };

    loop {
        match current {
            FixtureValue::Object(map) => match descend_object(rng, map, &mut path) {
                Some(next) => current = next,
                None => break,
            },
            FixtureValue::Array(items) if !items.is_empty() => {
                let index = rng.random_range(0..items.len());
                path.push(PathSegment::Index(index));
                current = &items[index];
            }
            // leaf value or empty array
            _ => break,
        }
    }

    path
}

/// Pick a uniformly random entry of `map`, record its key, and return its
/// value. Returns `None` on an empty object, terminating the walk.
fn descend_object<'a, R: Rng>(
    rng: &mut R,
    map: &'a FixtureDocument,
    path: &mut FixturePath,
) -> Option<&'a FixtureValue> {
    if map.is_empty() {
        return None;
    }
    let (key, value) = map.get_index(rng.random_range(0..map.len()))?;
    path.push(PathSegment::Key(key.clone()));
    Some(value)
}
