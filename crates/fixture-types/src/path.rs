//! Deep-path locator types.
//!
//! A deep path is a dot-joined sequence of object keys and bracketed array
//! indices locating one value inside a nested document, e.g.
//! `foo.bar.[2].baz`. Generated keys are alphanumeric, so `.` and `[` never
//! appear inside a key and the textual form parses back unambiguously.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from resolving or parsing a deep path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Key segment not present in the object.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Index segment out of bounds for the array.
    #[error("array index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Segment kind does not match the value shape at that position.
    #[error("segment '{0}' does not match the value shape")]
    ShapeMismatch(String),

    /// Textual segment that is neither a key nor a `[N]` index.
    #[error("invalid path segment: '{0}'")]
    InvalidSegment(String),
}

/// One step of a deep path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{key}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// An ordered sequence of path segments from a document root to one value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixturePath {
    segments: Vec<PathSegment>,
}

impl FixturePath {
    /// Create a path from a segment sequence.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// The ordered segments of this path.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Append one segment to the path.
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }
}

impl From<Vec<PathSegment>> for FixturePath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self::new(segments)
    }
}

impl fmt::Display for FixturePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for FixturePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(FixturePath::default());
        }

        let mut segments = Vec::new();
        for part in s.split('.') {
            if let Some(inner) = part.strip_prefix('[').and_then(|p| p.strip_suffix(']')) {
                let index = inner
                    .parse::<usize>()
                    .map_err(|_| PathError::InvalidSegment(part.to_string()))?;
                segments.push(PathSegment::Index(index));
            } else if part.is_empty() {
                return Err(PathError::InvalidSegment(part.to_string()));
            } else {
                segments.push(PathSegment::Key(part.to_string()));
            }
        }
        Ok(FixturePath::new(segments))
    }
}
