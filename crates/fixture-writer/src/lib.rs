//! File output for the json-fixture generator.
//!
//! Writes a generated document as pretty-printed JSON and its sampled deep
//! path to a `.path` sidecar next to it.

pub mod error;
pub mod writer;

pub use error::FixtureWriterError;
pub use writer::{sidecar_path, write_fixture, WriteMetrics, DEFAULT_BUFFER_SIZE};
