//! The JSON value sum type produced by the generator.

use crate::path::{FixturePath, PathError, PathSegment};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered object map.
///
/// Insertion order matters to the path sampler (keys are chosen by position),
/// and inserting a duplicate key overwrites the value while keeping the
/// original position.
pub type FixtureDocument = IndexMap<String, FixtureValue>;

/// A generated JSON value.
///
/// By construction the generator only ever produces these four variants:
/// no floats, no booleans, no null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureValue {
    String(String),
    Integer(i64),
    Array(Vec<FixtureValue>),
    Object(FixtureDocument),
}

impl FixtureValue {
    /// Returns true for String and Integer values.
    pub fn is_leaf(&self) -> bool {
        matches!(self, FixtureValue::String(_) | FixtureValue::Integer(_))
    }

    /// Get the object map if this value is an Object.
    pub fn as_object(&self) -> Option<&FixtureDocument> {
        match self {
            FixtureValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get the element slice if this value is an Array.
    pub fn as_array(&self) -> Option<&[FixtureValue]> {
        match self {
            FixtureValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Resolve a deep path against this value.
    ///
    /// Key segments descend into objects, index segments into arrays. Fails
    /// with a [`PathError`] when a key is missing, an index is out of bounds,
    /// or a segment does not match the shape of the current value.
    pub fn lookup<'a>(&'a self, path: &FixturePath) -> Result<&'a FixtureValue, PathError> {
        let mut current = self;
        for segment in path.segments() {
            current = match (segment, current) {
                (PathSegment::Key(key), FixtureValue::Object(map)) => map
                    .get(key)
                    .ok_or_else(|| PathError::KeyNotFound(key.clone()))?,
                (PathSegment::Index(index), FixtureValue::Array(items)) => items
                    .get(*index)
                    .ok_or(PathError::IndexOutOfBounds(*index))?,
                (segment, _) => return Err(PathError::ShapeMismatch(segment.to_string())),
            };
        }
        Ok(current)
    }
}

impl From<&str> for FixtureValue {
    fn from(s: &str) -> Self {
        FixtureValue::String(s.to_string())
    }
}

impl From<i64> for FixtureValue {
    fn from(i: i64) -> Self {
        FixtureValue::Integer(i)
    }
}
