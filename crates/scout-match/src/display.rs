//! Projection of scored candidates into display cards.
//!
//! This is the presentation boundary: ranking internals (match score,
//! source id) stop here and do not appear on the card.

use scout_model::{BuyerCard, MatchQuery, ScoredCandidate, UNEXTRACTED_CONTACT};

/// Best-effort web domain from a website URL or an email address.
///
/// Used only for display when no canonical website field exists: the
/// website wins when present (scheme stripped, authority before the first
/// slash), otherwise the part after `@` in the email, otherwise empty.
pub fn domain_guess(website: &str, email: &str) -> String {
    let site = website.trim().to_lowercase();
    if !site.is_empty() {
        let without_scheme = site
            .strip_prefix("https://")
            .or_else(|| site.strip_prefix("http://"))
            .unwrap_or(&site);
        return without_scheme
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string();
    }
    match email.trim().rsplit_once('@') {
        Some((_, domain)) => domain.trim().to_lowercase(),
        None => String::new(),
    }
}

/// Build the display card for one candidate.
///
/// Missing website/email fall back to values synthesized from the domain
/// guess (`https://<domain>`, `info@<domain>`); a missing contact person
/// becomes the [`UNEXTRACTED_CONTACT`] placeholder.
pub fn build_card(candidate: &ScoredCandidate, query: &MatchQuery) -> BuyerCard {
    let record = &candidate.record;
    let domain = domain_guess(&record.website, &record.email);
    let website = if !record.website.is_empty() {
        record.website.clone()
    } else if !domain.is_empty() {
        format!("https://{domain}")
    } else {
        String::new()
    };
    let email = if !record.email.is_empty() {
        record.email.clone()
    } else if !domain.is_empty() {
        format!("info@{domain}")
    } else {
        String::new()
    };
    let contact_person = if record.contact_person.is_empty() {
        UNEXTRACTED_CONTACT.to_string()
    } else {
        record.contact_person.clone()
    };
    BuyerCard {
        company_name: record.company_name.clone(),
        domain,
        website,
        industry: query.industry.label().to_string(),
        country_targets: query.countries.clone(),
        email,
        contact_person,
        raw_country: record.country.clone(),
        raw_city: record.city.clone(),
        raw_product_text: record.product_text.clone(),
        raw_hs: record.hs_code.clone(),
        raw_phone: record.phone.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_model::{BuyerRecord, Industry};

    #[test]
    fn domain_from_website_strips_scheme_and_path() {
        assert_eq!(domain_guess("https://Acme.com/contact", ""), "acme.com");
        assert_eq!(domain_guess("http://acme.co.kr", ""), "acme.co.kr");
        assert_eq!(domain_guess("acme.com/about", ""), "acme.com");
    }

    #[test]
    fn domain_from_email_when_no_website() {
        assert_eq!(domain_guess("", "kim@Globex.COM"), "globex.com");
        assert_eq!(domain_guess("", "no-at-sign"), "");
    }

    #[test]
    fn synthesizes_email_and_website_from_domain() {
        let mut record = BuyerRecord::empty("src");
        record.company_name = "Globex".to_string();
        record.website = "globex.com".to_string();
        let candidate = ScoredCandidate {
            record,
            match_score: 50,
        };
        let query = MatchQuery::new(Industry::Machinery);
        let card = build_card(&candidate, &query);
        assert_eq!(card.domain, "globex.com");
        assert_eq!(card.website, "globex.com");
        assert_eq!(card.email, "info@globex.com");
        assert_eq!(card.contact_person, UNEXTRACTED_CONTACT);
    }

    #[test]
    fn card_echoes_query_and_raw_fields() {
        let mut record = BuyerRecord::empty("src");
        record.company_name = "Acme".to_string();
        record.country = "Germany".to_string();
        record.hs_code = "8517".to_string();
        let candidate = ScoredCandidate {
            record,
            match_score: 77,
        };
        let mut query = MatchQuery::new(Industry::Electronics);
        query.countries = vec!["Germany".to_string()];
        let card = build_card(&candidate, &query);
        assert_eq!(card.industry, Industry::Electronics.label());
        assert_eq!(card.country_targets, vec!["Germany".to_string()]);
        assert_eq!(card.raw_country, "Germany");
        assert_eq!(card.raw_hs, "8517");
        // No email, no website: nothing to synthesize from.
        assert!(card.email.is_empty());
        assert!(card.website.is_empty());
    }
}
