//! Buyer search pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: resolve catalog sources and read their CSV files
//! 2. **Normalize**: infer columns and build canonical buyer records
//! 3. **Score**: rate every record against the query, drop sub-threshold
//! 4. **Dedupe**: one candidate per identity key, truncate to the cap
//! 5. **Project**: build display cards
//!
//! Every stage runs to completion within one call; failures while reading
//! a source are recorded in its [`SourceStatus`] and never abort the run.
//! An empty result list means "no results", not an error.

use std::cmp::Reverse;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use scout_ingest::{SourceCatalog, read_table};
use scout_map::normalize_table;
use scout_model::{BuyerCard, BuyerRecord, MatchQuery, ScoredCandidate, SourceStatus};

use crate::dedupe::dedupe_candidates;
use crate::display::build_card;
use crate::score::{score_record, score_threshold};

/// Default cap on the number of returned candidates.
pub const DEFAULT_MAX_RESULTS: usize = 60;

/// Result of the ingest + normalize stages.
#[derive(Debug)]
pub struct IngestOutcome {
    /// All records from every source that loaded, in catalog order.
    pub records: Vec<BuyerRecord>,
    /// One status per configured source, in catalog order.
    pub statuses: Vec<SourceStatus>,
}

/// Resolve every catalog source under `data_dir` and normalize the files
/// that load. A missing or unreadable source becomes a status entry and
/// processing continues with the rest.
pub fn ingest_catalog(catalog: &SourceCatalog, data_dir: &Path) -> IngestOutcome {
    let mut records = Vec::new();
    let mut statuses = Vec::new();
    for resolved in catalog.resolve(data_dir) {
        let source = resolved.spec.id.clone();
        let Some(path) = resolved.path else {
            debug!(%source, "source skipped: path not resolved");
            statuses.push(SourceStatus::Missing {
                source,
                detail: "path not resolved".to_string(),
            });
            continue;
        };
        match read_table(&path) {
            Ok(outcome) => {
                let normalized = normalize_table(&outcome.table, &source);
                statuses.push(SourceStatus::Loaded {
                    source,
                    path,
                    rows: outcome.table.row_count(),
                    columns: outcome.table.column_count(),
                    encoding: outcome.encoding.to_string(),
                    delimiter: outcome.delimiter as char,
                });
                records.extend(normalized);
            }
            Err(error) => {
                debug!(%source, %error, "source skipped: read failed");
                statuses.push(SourceStatus::Failed {
                    source,
                    message: error.to_string(),
                });
            }
        }
    }
    IngestOutcome { records, statuses }
}

/// Score every record, keep those at or above the query's threshold, and
/// order them by score descending (stable on ties).
pub fn score_candidates(
    records: &[BuyerRecord],
    query: &MatchQuery,
    now: NaiveDateTime,
) -> Vec<ScoredCandidate> {
    let threshold = score_threshold(query);
    let mut candidates: Vec<ScoredCandidate> = records
        .iter()
        .map(|record| ScoredCandidate {
            match_score: score_record(record, query, now),
            record: record.clone(),
        })
        .filter(|candidate| candidate.match_score >= threshold)
        .collect();
    candidates.sort_by_key(|candidate| Reverse(candidate.match_score));
    candidates
}

/// Final result of one search run.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Ranked, deduplicated display cards, at most `max_results` of them.
    pub buyers: Vec<BuyerCard>,
    /// Per-source ingest report.
    pub statuses: Vec<SourceStatus>,
    /// Records considered across all loaded sources.
    pub considered: usize,
    /// Candidates that cleared the score threshold, before deduplication.
    pub matched: usize,
}

/// Run the whole pipeline for one query.
///
/// `now` is the recency reference for scoring, captured once by the caller
/// so repeated runs over the same data are reproducible.
pub fn run_search(
    catalog: &SourceCatalog,
    data_dir: &Path,
    query: &MatchQuery,
    max_results: usize,
    now: NaiveDateTime,
) -> SearchOutcome {
    let ingest = ingest_catalog(catalog, data_dir);
    let considered = ingest.records.len();
    info!(
        sources = ingest.statuses.len(),
        loaded = ingest.statuses.iter().filter(|s| s.is_loaded()).count(),
        records = considered,
        "ingest complete"
    );

    let candidates = score_candidates(&ingest.records, query, now);
    let matched = candidates.len();
    info!(
        matched,
        threshold = score_threshold(query),
        "scoring complete"
    );

    let mut deduped = dedupe_candidates(candidates, &query.countries);
    deduped.truncate(max_results);
    let buyers = deduped
        .iter()
        .map(|candidate| build_card(candidate, query))
        .collect();

    SearchOutcome {
        buyers,
        statuses: ingest.statuses,
        considered,
        matched,
    }
}
