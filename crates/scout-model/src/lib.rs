pub mod candidate;
pub mod industry;
pub mod query;
pub mod record;
pub mod status;

pub use candidate::{BuyerCard, MAX_SCORE, MIN_SCORE, ScoredCandidate, UNEXTRACTED_CONTACT};
pub use industry::Industry;
pub use query::MatchQuery;
pub use record::{BuyerRecord, UNKNOWN_COMPANY};
pub use status::SourceStatus;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyer_card_serializes_raw_fields_with_prefix() {
        let card = BuyerCard {
            company_name: "Acme Corp".to_string(),
            domain: "acme.com".to_string(),
            website: "https://acme.com".to_string(),
            industry: Industry::Cosmetics.label().to_string(),
            country_targets: vec!["United States".to_string()],
            email: "a@acme.com".to_string(),
            contact_person: UNEXTRACTED_CONTACT.to_string(),
            raw_country: "United States".to_string(),
            raw_city: String::new(),
            raw_product_text: "cosmetics packaging".to_string(),
            raw_hs: "330499".to_string(),
            raw_phone: String::new(),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["_raw_country"], "United States");
        assert_eq!(json["_raw_hs"], "330499");
        assert!(json.get("match_score").is_none());
        assert!(json.get("source").is_none());
    }
}
