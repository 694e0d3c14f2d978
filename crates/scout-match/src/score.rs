//! Additive relevance scoring of buyer records against a query.

use chrono::NaiveDateTime;

use scout_model::{BuyerRecord, MatchQuery, MAX_SCORE, MIN_SCORE};

/// Industry keyword found in the product text.
pub const INDUSTRY_PRODUCT_BONUS: i32 = 30;
/// Industry keyword found in the company name.
pub const INDUSTRY_COMPANY_BONUS: i32 = 10;
/// Query HS code is a substring of the record's HS code.
pub const HS_MATCH_BONUS: i32 = 45;
/// Record country matches one of the target countries.
pub const COUNTRY_HIT_BONUS: i32 = 20;
/// A country filter is active but the record missed every target.
pub const COUNTRY_MISS_PENALTY: i32 = 15;
pub const EMAIL_BONUS: i32 = 20;
pub const CONTACT_BONUS: i32 = 8;
pub const PHONE_BONUS: i32 = 6;
pub const WEBSITE_BONUS: i32 = 6;
/// Forces exclusion when an email is required but absent. Applied as a
/// plain additive term; the remaining terms still accumulate before the
/// final clamp.
pub const REQUIRED_EMAIL_PENALTY: i32 = 999;
/// Parsed date within 90 days of now (ranking-only, never displayed).
pub const RECENT_90D_BONUS: i32 = 10;
/// Parsed date within 365 days of now (ranking-only, never displayed).
pub const RECENT_365D_BONUS: i32 = 5;

/// Score floor to keep a candidate when the query carries an HS code.
pub const HS_SCORE_THRESHOLD: i32 = 35;
/// Looser floor when no HS signal is available.
pub const BASE_SCORE_THRESHOLD: i32 = 20;

/// Compute the relevance score of one record for one query.
///
/// Deterministic and pure: `now` is passed in (captured once per pipeline
/// run) so the recency bonus does not read the clock. All text comparisons
/// are case-insensitive substring checks. The result is clamped to
/// `[MIN_SCORE, MAX_SCORE]`.
pub fn score_record(record: &BuyerRecord, query: &MatchQuery, now: NaiveDateTime) -> i32 {
    let mut score = 0i32;
    let product = record.product_text.to_lowercase();
    let company = record.company_name.to_lowercase();
    let hs = record.hs_code.replace(' ', "");
    let country = record.country.to_lowercase();

    let keywords = query.industry.keywords();
    if keywords.iter().any(|kw| product.contains(kw)) {
        score += INDUSTRY_PRODUCT_BONUS;
    }
    if keywords.iter().any(|kw| company.contains(kw)) {
        score += INDUSTRY_COMPANY_BONUS;
    }

    let hs_query = query.hs_code_compact();
    if !hs_query.is_empty() && hs.contains(&hs_query) {
        score += HS_MATCH_BONUS;
    }

    if !query.countries.is_empty() {
        let hit = query
            .countries
            .iter()
            .filter(|target| !target.is_empty())
            .any(|target| country.contains(&target.to_lowercase()));
        if hit {
            score += COUNTRY_HIT_BONUS;
        } else {
            score -= COUNTRY_MISS_PENALTY;
        }
    }

    if !record.email.is_empty() {
        score += EMAIL_BONUS;
    }
    if !record.contact_person.is_empty() {
        score += CONTACT_BONUS;
    }
    if !record.phone.is_empty() {
        score += PHONE_BONUS;
    }
    if !record.website.is_empty() {
        score += WEBSITE_BONUS;
    }

    if query.require_email && record.email.is_empty() {
        score -= REQUIRED_EMAIL_PENALTY;
    }

    if let Some(date) = record.date {
        let days_ago = (now - date).num_days();
        if days_ago <= 90 {
            score += RECENT_90D_BONUS;
        } else if days_ago <= 365 {
            score += RECENT_365D_BONUS;
        }
    }

    score += query
        .source_weights
        .get(&record.source)
        .copied()
        .unwrap_or(0);

    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Score floor for keeping a candidate: stricter when the query carries an
/// HS code, looser otherwise to compensate for the missing top signal.
pub fn score_threshold(query: &MatchQuery) -> i32 {
    if query.has_hs_filter() {
        HS_SCORE_THRESHOLD
    } else {
        BASE_SCORE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use scout_model::{BuyerRecord, Industry};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn acme() -> BuyerRecord {
        let mut record = BuyerRecord::empty("kotra");
        record.company_name = "Acme Corp".to_string();
        record.product_text = "cosmetics packaging".to_string();
        record.hs_code = "330499".to_string();
        record.country = "United States".to_string();
        record.email = "a@acme.com".to_string();
        record
    }

    #[test]
    fn full_match_clamps_to_max() {
        let mut query = MatchQuery::new(Industry::Cosmetics);
        query.hs_code = "3304".to_string();
        query.countries = vec!["United States".to_string()];
        // 30 (product) + 45 (HS) + 20 (country) + 20 (email) = 115 -> 100.
        assert_eq!(score_record(&acme(), &query, now()), MAX_SCORE);
        assert!(score_record(&acme(), &query, now()) >= score_threshold(&query));
    }

    #[test]
    fn country_miss_still_passes_threshold() {
        let mut query = MatchQuery::new(Industry::Cosmetics);
        query.hs_code = "3304".to_string();
        query.countries = vec!["Germany".to_string()];
        // 30 + 45 - 15 + 20 = 80.
        assert_eq!(score_record(&acme(), &query, now()), 80);
    }

    #[test]
    fn required_email_forces_floor() {
        let mut query = MatchQuery::new(Industry::Cosmetics);
        query.hs_code = "3304".to_string();
        query.countries = vec!["United States".to_string()];
        query.require_email = true;
        let mut record = acme();
        record.email = String::new();
        let score = score_record(&record, &query, now());
        assert_eq!(score, MIN_SCORE);
        assert!(score < score_threshold(&query));
    }

    #[test]
    fn industry_keyword_in_product_adds_exactly_thirty() {
        let query = MatchQuery::new(Industry::Cosmetics);
        let with_keyword = acme();
        let mut without = acme();
        without.product_text = "packaging".to_string();
        let diff = score_record(&with_keyword, &query, now())
            - score_record(&without, &query, now());
        assert_eq!(diff, INDUSTRY_PRODUCT_BONUS);
    }

    #[test]
    fn company_keyword_counts_separately() {
        let query = MatchQuery::new(Industry::Cosmetics);
        let mut record = BuyerRecord::empty("src");
        record.company_name = "Seoul Beauty Trading".to_string();
        // 10 (company keyword) only: below both thresholds.
        assert_eq!(score_record(&record, &query, now()), INDUSTRY_COMPANY_BONUS);
    }

    #[test]
    fn hs_space_stripping_on_both_sides() {
        let mut query = MatchQuery::new(Industry::Other);
        query.hs_code = "33 04".to_string();
        let mut record = BuyerRecord::empty("src");
        record.hs_code = "3304 99".to_string();
        assert_eq!(score_record(&record, &query, now()), HS_MATCH_BONUS);
    }

    #[test]
    fn contact_completeness_bonuses_accumulate() {
        let query = MatchQuery::new(Industry::Other);
        let mut record = BuyerRecord::empty("src");
        record.email = "x@y.com".to_string();
        record.contact_person = "Kim".to_string();
        record.phone = "+82-2-000-0000".to_string();
        record.website = "https://y.com".to_string();
        assert_eq!(
            score_record(&record, &query, now()),
            EMAIL_BONUS + CONTACT_BONUS + PHONE_BONUS + WEBSITE_BONUS
        );
    }

    #[test]
    fn recency_bonus_tiers() {
        let query = MatchQuery::new(Industry::Other);
        let mut recent = BuyerRecord::empty("src");
        recent.date = NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0);
        let mut older = recent.clone();
        older.date = NaiveDate::from_ymd_opt(2024, 9, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0);
        let mut ancient = recent.clone();
        ancient.date = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0);
        let mut undated = recent.clone();
        undated.date = None;
        assert_eq!(score_record(&recent, &query, now()), RECENT_90D_BONUS);
        assert_eq!(score_record(&older, &query, now()), RECENT_365D_BONUS);
        assert_eq!(score_record(&ancient, &query, now()), 0);
        assert_eq!(score_record(&undated, &query, now()), 0);
    }

    #[test]
    fn source_weight_added_verbatim() {
        let mut query = MatchQuery::new(Industry::Other);
        query.source_weights.insert("kotra".to_string(), 4);
        let mut record = BuyerRecord::empty("kotra");
        record.product_text = "export goods".to_string();
        // 30 (keyword "export") + 4 (weight).
        assert_eq!(score_record(&record, &query, now()), 34);
    }

    #[test]
    fn scoring_is_deterministic() {
        let mut query = MatchQuery::new(Industry::Cosmetics);
        query.hs_code = "3304".to_string();
        query.countries = vec!["United States".to_string()];
        let record = acme();
        assert_eq!(
            score_record(&record, &query, now()),
            score_record(&record, &query, now())
        );
    }
}
