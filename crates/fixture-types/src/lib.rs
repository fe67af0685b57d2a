//! Core types for the json-fixture generator.
//!
//! This crate defines the JSON value sum type produced by the generator and
//! the deep-path locator types used to address a single value inside a
//! generated document.
//!
//! # Modules
//!
//! - [`value`] - `FixtureValue` and the insertion-ordered `FixtureDocument`
//! - [`path`] - `PathSegment`, `FixturePath`, and path resolution
//!
//! # Example
//!
//! ```
//! use fixture_types::{FixtureDocument, FixturePath, FixtureValue};
//!
//! let mut doc = FixtureDocument::new();
//! doc.insert("items".to_string(), FixtureValue::Array(vec![
//!     FixtureValue::Integer(7),
//! ]));
//!
//! let path: FixturePath = "items.[0]".parse().unwrap();
//! let value = FixtureValue::Object(doc).lookup(&path).unwrap().clone();
//! assert_eq!(value, FixtureValue::Integer(7));
//! ```

pub mod path;
pub mod value;

pub use path::{FixturePath, PathError, PathSegment};
pub use value::{FixtureDocument, FixtureValue};
