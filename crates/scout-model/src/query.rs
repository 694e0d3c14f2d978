//! Search queries against the normalized buyer pool.

use std::collections::BTreeMap;

use crate::industry::Industry;

/// One user search, immutable for the duration of a scoring pass.
#[derive(Debug, Clone)]
pub struct MatchQuery {
    pub industry: Industry,
    /// Optional HS code filter; empty means no HS signal. Spaces are
    /// stripped before substring comparison.
    pub hs_code: String,
    /// Target country names. Empty disables the country branch entirely.
    pub countries: Vec<String>,
    /// Exclude candidates without an email address.
    pub require_email: bool,
    /// Ranking-only bonus per source id. Missing sources score 0.
    pub source_weights: BTreeMap<String, i32>,
}

impl MatchQuery {
    pub fn new(industry: Industry) -> Self {
        Self {
            industry,
            hs_code: String::new(),
            countries: Vec::new(),
            require_email: false,
            source_weights: BTreeMap::new(),
        }
    }

    /// Query HS code with interior spaces removed; empty when no HS filter
    /// was supplied.
    pub fn hs_code_compact(&self) -> String {
        self.hs_code.replace(' ', "")
    }

    /// True when an HS code filter is active, which tightens the score
    /// threshold downstream.
    pub fn has_hs_filter(&self) -> bool {
        !self.hs_code_compact().is_empty()
    }
}
