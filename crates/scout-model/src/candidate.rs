//! Scored candidates and the display projection handed to presentation.

use serde::Serialize;

use crate::record::BuyerRecord;

/// Minimum possible match score; also the forced-exclusion penalty applied
/// when an email is required but absent.
pub const MIN_SCORE: i32 = -999;

/// Maximum possible match score.
pub const MAX_SCORE: i32 = 100;

/// Placeholder shown when no contact person could be extracted.
pub const UNEXTRACTED_CONTACT: &str = "미추출";

/// A buyer record with its relevance score for one query.
///
/// Transient: created per search, never persisted. The score exists for
/// ranking, filtering, and deduplication only and must not reach the
/// display boundary — [`BuyerCard`] deliberately has no score field.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub record: BuyerRecord,
    /// Relevance score, clamped to `[MIN_SCORE, MAX_SCORE]`.
    pub match_score: i32,
}

impl ScoredCandidate {
    /// Lowercased, trimmed email used as the deduplication identity key;
    /// empty when the record has no email.
    pub fn email_key(&self) -> String {
        self.record.email.trim().to_lowercase()
    }
}

/// Display projection of a matched buyer.
///
/// Raw source fields are serialized with a `_raw_` prefix to mark them as
/// unprocessed passthrough values. Internal ranking fields (match score,
/// source id) are intentionally absent.
#[derive(Debug, Clone, Serialize)]
pub struct BuyerCard {
    pub company_name: String,
    /// Best-effort web domain derived from the website or email.
    pub domain: String,
    /// Real website when present, otherwise `https://<domain>` when a
    /// domain could be guessed, otherwise empty.
    pub website: String,
    /// Industry label echoed from the query.
    pub industry: String,
    /// Target countries echoed from the query.
    pub country_targets: Vec<String>,
    /// Real email when present, otherwise a synthesized `info@<domain>`
    /// placeholder when only a domain is known, otherwise empty.
    pub email: String,
    /// Contact person, or [`UNEXTRACTED_CONTACT`] when none was found.
    pub contact_person: String,
    #[serde(rename = "_raw_country")]
    pub raw_country: String,
    #[serde(rename = "_raw_city")]
    pub raw_city: String,
    #[serde(rename = "_raw_product_text")]
    pub raw_product_text: String,
    #[serde(rename = "_raw_hs")]
    pub raw_hs: String,
    #[serde(rename = "_raw_phone")]
    pub raw_phone: String,
}

impl BuyerCard {
    /// True when the card carries an address at all (real or synthesized).
    pub fn has_email(&self) -> bool {
        self.email.contains('@')
    }

    /// True when a contact channel exists: an email address or an extracted
    /// contact person.
    pub fn has_contact(&self) -> bool {
        self.has_email()
            || (!self.contact_person.is_empty() && self.contact_person != UNEXTRACTED_CONTACT)
    }
}
