//! Semantic column roles and their header keyword tables.
//!
//! The buyer datasets never share a schema; columns are located by keyword
//! substring matches against normalized headers. The keyword tables are
//! data so they can be extended and tested independently of the matching
//! code. Korean and English keywords sit side by side because the agencies
//! publish both header styles.

use std::fmt;

/// The semantic roles a buyer dataset column can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldRole {
    Company,
    Country,
    City,
    Product,
    HsCode,
    Contact,
    Email,
    Phone,
    Website,
    Date,
}

impl FieldRole {
    /// Every role, in normalization order.
    pub const ALL: [FieldRole; 10] = [
        FieldRole::Company,
        FieldRole::Country,
        FieldRole::City,
        FieldRole::Product,
        FieldRole::HsCode,
        FieldRole::Contact,
        FieldRole::Email,
        FieldRole::Phone,
        FieldRole::Website,
        FieldRole::Date,
    ];

    /// Keywords matched as substrings of normalized headers.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            FieldRole::Company => &[
                "회사",
                "기업",
                "업체",
                "바이어",
                "buyer",
                "company",
                "corporation",
                "상호",
                "기관명",
                "조직",
            ],
            FieldRole::Country => &[
                "국가", "country", "nation", "소재국", "거주국", "지역", "state",
            ],
            FieldRole::City => &["도시", "city", "소재지", "소재도시", "지역"],
            FieldRole::Product => &[
                "품목",
                "제품",
                "item",
                "product",
                "오퍼",
                "inquiry",
                "관심",
                "수요",
                "구매",
                "구매품목",
            ],
            FieldRole::HsCode => &["hs", "hscode", "hs코드", "품목코드", "세번"],
            FieldRole::Contact => &["담당자", "contact", "name", "성명", "대표자", "buyername"],
            FieldRole::Email => &["이메일", "email", "e-mail", "메일"],
            FieldRole::Phone => &["전화", "phone", "tel", "연락처", "mobile", "핸드폰"],
            FieldRole::Website => &["웹", "홈페이지", "website", "url", "domain", "사이트"],
            FieldRole::Date => &[
                "일자", "날짜", "등록", "신청", "date", "created", "updated", "연도", "year",
            ],
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldRole::Company => "company",
            FieldRole::Country => "country",
            FieldRole::City => "city",
            FieldRole::Product => "product",
            FieldRole::HsCode => "hs_code",
            FieldRole::Contact => "contact",
            FieldRole::Email => "email",
            FieldRole::Phone => "phone",
            FieldRole::Website => "website",
            FieldRole::Date => "date",
        };
        write!(f, "{name}")
    }
}

/// Normalize a header for keyword comparison: lowercase, then drop all
/// whitespace, hyphens, and underscores.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '-' && *ch != '_')
        .collect()
}

/// Find the first header (original column order) whose normalized form
/// contains any of the keywords as a substring. `None` means the role is
/// unavailable in this dataset; callers treat that as empty values, not an
/// error.
pub fn infer_column(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let normalized = normalize_header(header);
        keywords.iter().any(|keyword| normalized.contains(keyword))
    })
}
