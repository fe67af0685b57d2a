//! Fixture file writer.

use crate::error::FixtureWriterError;
use fixture_types::FixtureDocument;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Buffer size for document writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Size of the written JSON document in bytes.
    pub document_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

/// Sidecar path for the deep-path file: the document path with `.path`
/// appended to the full file name, e.g. `out.json` -> `out.json.path`.
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".path");
    PathBuf::from(name)
}

/// Write `document` as pretty-printed JSON (2-space indent) to `path` and
/// `deep_path` to the `.path` sidecar next to it.
///
/// Existing files at either location are overwritten without confirmation.
/// Filesystem failures propagate as [`FixtureWriterError`].
pub fn write_fixture<P: AsRef<Path>>(
    path: P,
    document: &FixtureDocument,
    deep_path: &str,
) -> Result<WriteMetrics, FixtureWriterError> {
    let start = Instant::now();
    let path = path.as_ref();

    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;
    drop(writer);

    let document_bytes = std::fs::metadata(path)?.len();

    let sidecar = sidecar_path(path);
    std::fs::write(&sidecar, deep_path)?;
    debug!("Wrote deep path to '{}'", sidecar.display());

    let metrics = WriteMetrics {
        document_bytes,
        total_duration: start.elapsed(),
    };
    info!(
        "Fixture written: '{}', {} bytes in {:?}",
        path.display(),
        metrics.document_bytes,
        metrics.total_duration
    );

    Ok(metrics)
}
