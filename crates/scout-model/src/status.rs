//! Per-source ingest outcomes for the status report.

use std::path::PathBuf;

/// What happened to one configured source during ingestion.
///
/// Failures are local to their source: a missing or unreadable file is
/// reported here and the pipeline carries on with the remaining sources.
#[derive(Debug, Clone)]
pub enum SourceStatus {
    /// The file was found, decoded, and parsed.
    Loaded {
        source: String,
        path: PathBuf,
        rows: usize,
        columns: usize,
        /// Label of the text encoding that decoded the file.
        encoding: String,
        /// Field delimiter the sniffer settled on.
        delimiter: char,
    },
    /// The logical name did not resolve to a file.
    Missing { source: String, detail: String },
    /// The file existed but reading or parsing it failed.
    Failed { source: String, message: String },
}

impl SourceStatus {
    pub fn source(&self) -> &str {
        match self {
            SourceStatus::Loaded { source, .. }
            | SourceStatus::Missing { source, .. }
            | SourceStatus::Failed { source, .. } => source,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, SourceStatus::Loaded { .. })
    }
}
