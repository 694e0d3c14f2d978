//! Buyer relevance scoring, deduplication, and the search pipeline.

pub mod dedupe;
pub mod display;
pub mod pipeline;
pub mod score;
pub mod session;

pub use dedupe::dedupe_candidates;
pub use display::{build_card, domain_guess};
pub use pipeline::{
    DEFAULT_MAX_RESULTS, IngestOutcome, SearchOutcome, ingest_catalog, run_search,
    score_candidates,
};
pub use score::{score_record, score_threshold};
pub use session::SearchSession;
