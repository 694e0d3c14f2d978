//! Candidate deduplication.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use scout_model::ScoredCandidate;

/// Collapse duplicate candidates, keeping the highest scorer per identity.
///
/// Identity is the lowercased email when one exists; otherwise the pair of
/// lowercased company name and the query's target-country list. The two
/// groups are deduplicated independently and never cross-merged: a
/// no-email duplicate of a with-email record survives as its own entry.
/// That asymmetry is intentional and preserved from the source policy.
///
/// The result is ordered by score descending; ties keep with-email
/// candidates ahead of no-email ones, then input order.
pub fn dedupe_candidates(
    candidates: Vec<ScoredCandidate>,
    target_countries: &[String],
) -> Vec<ScoredCandidate> {
    if candidates.is_empty() {
        return candidates;
    }
    let countries_key = target_countries
        .join(",")
        .to_lowercase()
        .trim()
        .to_string();

    let mut sorted = candidates;
    sorted.sort_by_key(|candidate| Reverse(candidate.match_score));

    let mut with_email = Vec::new();
    let mut without_email = Vec::new();
    let mut seen_emails = BTreeSet::new();
    let mut seen_companies = BTreeSet::new();
    for candidate in sorted {
        let email_key = candidate.email_key();
        if !email_key.is_empty() {
            if seen_emails.insert(email_key) {
                with_email.push(candidate);
            }
        } else {
            let company_key = format!(
                "{}|{}",
                candidate.record.company_name.trim().to_lowercase(),
                countries_key
            );
            if seen_companies.insert(company_key) {
                without_email.push(candidate);
            }
        }
    }

    let mut result = with_email;
    result.extend(without_email);
    result.sort_by_key(|candidate| Reverse(candidate.match_score));
    result
}
