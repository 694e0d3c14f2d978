use chrono::NaiveDate;
use proptest::prelude::*;

use scout_match::{score_record, score_threshold};
use scout_model::{BuyerRecord, Industry, MatchQuery, MAX_SCORE, MIN_SCORE};

fn fixed_now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn industry_strategy() -> impl Strategy<Value = Industry> {
    (0..Industry::ALL.len()).prop_map(|idx| Industry::ALL[idx])
}

proptest! {
    // No combination of record and query ever produces a score outside the
    // clamp bounds, even with hostile source weights.
    #[test]
    fn score_never_leaves_bounds(
        industry in industry_strategy(),
        product in ".{0,40}",
        company in ".{0,30}",
        record_hs in "[0-9 ]{0,12}",
        country in ".{0,20}",
        email in "[a-z@.]{0,15}",
        contact in ".{0,10}",
        phone in "[0-9+-]{0,12}",
        website in "[a-z:/.]{0,20}",
        hs_query in "[0-9 ]{0,6}",
        target in ".{0,15}",
        require_email: bool,
        weight in -5000i32..5000,
        days_offset in proptest::option::of(-1000i64..1000),
    ) {
        let mut record = BuyerRecord::empty("src");
        record.company_name = company;
        record.product_text = product;
        record.hs_code = record_hs;
        record.country = country;
        record.email = email.trim().to_string();
        record.contact_person = contact.trim().to_string();
        record.phone = phone;
        record.website = website;
        record.date = days_offset.map(|days| {
            fixed_now() + chrono::Duration::days(days)
        });

        let mut query = MatchQuery::new(industry);
        query.hs_code = hs_query;
        if !target.is_empty() {
            query.countries = vec![target];
        }
        query.require_email = require_email;
        query.source_weights.insert("src".to_string(), weight);

        let score = score_record(&record, &query, fixed_now());
        prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
    }

    // Appending a matching industry keyword to an otherwise keyword-free
    // product text raises the score by exactly the product bonus.
    #[test]
    fn product_keyword_adds_exactly_thirty(
        base_product in "[0-9 ]{0,20}",
        record_hs in "[0-9]{0,8}",
    ) {
        let mut without = BuyerRecord::empty("src");
        without.company_name = "12345".to_string();
        without.product_text = base_product.clone();
        without.hs_code = record_hs;
        let mut with = without.clone();
        with.product_text = format!("{base_product} cosmetics");

        let query = MatchQuery::new(Industry::Cosmetics);
        let score_without = score_record(&without, &query, fixed_now());
        let score_with = score_record(&with, &query, fixed_now());
        prop_assert_eq!(score_with - score_without, 30);
    }
}

#[test]
fn thresholds_match_query_shape() {
    let mut query = MatchQuery::new(Industry::Food);
    assert_eq!(score_threshold(&query), 20);
    query.hs_code = "1902".to_string();
    assert_eq!(score_threshold(&query), 35);
}
