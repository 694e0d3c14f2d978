//! Canonical buyer records produced by normalization.

use chrono::NaiveDateTime;

/// Display fallback when a source row carries no usable company column.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// One buyer lead in canonical form, produced from exactly one source row.
///
/// All text fields are trimmed; absent values are empty strings rather than
/// options so downstream substring matching never has to unwrap. The one
/// exception is `company_name`, which falls back to [`UNKNOWN_COMPANY`] so
/// every record has a non-empty display name.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyerRecord {
    pub company_name: String,
    pub country: String,
    pub city: String,
    /// Free text describing the goods the buyer deals in or asked for.
    pub product_text: String,
    pub hs_code: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// Parsed registration/inquiry date, when the raw value matched one of
    /// the accepted formats.
    pub date: Option<NaiveDateTime>,
    /// Original date text, kept verbatim for display.
    pub date_raw: String,
    /// Identifier of the dataset this record came from. A record belongs to
    /// exactly one source; rows are never merged across sources here.
    pub source: String,
}

impl BuyerRecord {
    /// Record with every field empty except the company-name fallback.
    pub fn empty(source: &str) -> Self {
        Self {
            company_name: UNKNOWN_COMPANY.to_string(),
            country: String::new(),
            city: String::new(),
            product_text: String::new(),
            hs_code: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            date: None,
            date_raw: String::new(),
            source: source.to_string(),
        }
    }
}
