pub mod catalog;
pub mod encoding;
pub mod error;
pub mod table;

pub use catalog::{ResolvedSource, SourceCatalog, SourceSpec, resolve_source_file};
pub use encoding::decode_bytes;
pub use error::{IngestError, Result};
pub use table::{DELIMITER_CANDIDATES, RawTable, ReadOutcome, parse_table, read_table, sniff_delimiter};
