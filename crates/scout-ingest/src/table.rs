//! CSV table reading with delimiter sniffing.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::encoding::decode_bytes;
use crate::error::{IngestError, Result};

/// Candidate field delimiters, in retry order.
pub const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// How much decoded text the sniffer looks at.
const SNIFF_SAMPLE_CHARS: usize = 5000;

/// A parsed CSV file: ordered headers plus row-major cells.
///
/// Headers keep their original text (trimmed) and are not guaranteed
/// unique. Rows are padded or truncated to the header width so every cell
/// lookup is in bounds.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Outcome of reading one file: the table plus what the detector settled on.
#[derive(Debug)]
pub struct ReadOutcome {
    pub table: RawTable,
    pub encoding: &'static str,
    pub delimiter: u8,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Pick a delimiter by counting candidate occurrences per sampled line and
/// preferring the candidate with a high, consistent count (mean divided by
/// one plus the standard deviation). Falls back to comma when no candidate
/// appears at all.
pub fn sniff_delimiter(sample: &str) -> u8 {
    let lines: Vec<&str> = sample.lines().take(10).collect();
    if lines.is_empty() {
        return b',';
    }
    let mut best = b',';
    let mut best_score = 0.0f64;
    for candidate in DELIMITER_CANDIDATES {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.bytes().filter(|b| *b == candidate).count())
            .collect();
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        if mean == 0.0 {
            continue;
        }
        let variance = counts
            .iter()
            .map(|count| (*count as f64 - mean).powi(2))
            .sum::<f64>()
            / counts.len() as f64;
        let score = mean / (1.0 + variance.sqrt());
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }
    best
}

fn parse_with_delimiter(text: &str, delimiter: u8) -> std::result::Result<RawTable, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let headers = raw_rows.remove(0);
    let mut rows = Vec::with_capacity(raw_rows.len());
    for record in raw_rows {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(RawTable { headers, rows })
}

/// Parse decoded CSV text, sniffing the delimiter first.
///
/// If the sniffed delimiter yields a single-column table, each remaining
/// candidate is retried and the first that produces more than one column
/// wins; a sniffer false-negative on a file that genuinely has one column
/// stays a one-column table, which downstream steps tolerate.
pub fn parse_table(text: &str) -> std::result::Result<(RawTable, u8), csv::Error> {
    let sample: String = text.chars().take(SNIFF_SAMPLE_CHARS).collect();
    let mut delimiter = sniff_delimiter(&sample);
    let mut table = parse_with_delimiter(text, delimiter)?;
    if table.column_count() == 1 {
        for candidate in DELIMITER_CANDIDATES {
            if candidate == delimiter {
                continue;
            }
            let retry = parse_with_delimiter(text, candidate)?;
            if retry.column_count() > 1 {
                table = retry;
                delimiter = candidate;
                break;
            }
        }
    }
    Ok((table, delimiter))
}

/// Read one buyer CSV file: bytes, encoding ladder, delimiter sniffing,
/// one-column retry.
pub fn read_table(path: &Path) -> Result<ReadOutcome> {
    let raw = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let (text, encoding) = decode_bytes(&raw);
    let (table, delimiter) = parse_table(&text).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(
        path = %path.display(),
        encoding,
        delimiter = %(delimiter as char),
        rows = table.row_count(),
        columns = table.column_count(),
        "read buyer csv"
    );
    Ok(ReadOutcome {
        table,
        encoding,
        delimiter,
    })
}
