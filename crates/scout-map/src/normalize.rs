//! Row-to-record normalization.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use scout_ingest::RawTable;
use scout_model::{BuyerRecord, UNKNOWN_COMPANY};

use crate::roles::{FieldRole, infer_column};

/// Full-date formats tried first, then year-month variants (resolved to the
/// first of the month). First successful parse wins.
const FULL_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%Y%m%d"];
const YEAR_MONTH_SEPARATORS: [char; 3] = ['-', '.', '/'];

/// Inferred column index for each semantic role of one table.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    pub company: Option<usize>,
    pub country: Option<usize>,
    pub city: Option<usize>,
    pub product: Option<usize>,
    pub hs_code: Option<usize>,
    pub contact: Option<usize>,
    pub email: Option<usize>,
    pub phone: Option<usize>,
    pub website: Option<usize>,
    pub date: Option<usize>,
}

impl ColumnMap {
    /// Run keyword inference for every role over a header set.
    pub fn infer(headers: &[String]) -> Self {
        let find = |role: FieldRole| infer_column(headers, role.keywords());
        Self {
            company: find(FieldRole::Company),
            country: find(FieldRole::Country),
            city: find(FieldRole::City),
            product: find(FieldRole::Product),
            hs_code: find(FieldRole::HsCode),
            contact: find(FieldRole::Contact),
            email: find(FieldRole::Email),
            phone: find(FieldRole::Phone),
            website: find(FieldRole::Website),
            date: find(FieldRole::Date),
        }
    }
}

fn cell(row: &[String], index: Option<usize>) -> String {
    index
        .and_then(|idx| row.get(idx))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Parse a free-form date string against the accepted format ladder.
///
/// Unparseable input yields `None`; the caller keeps the raw text for
/// display instead of treating this as an error.
pub fn parse_date_any(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in FULL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    for sep in YEAR_MONTH_SEPARATORS {
        if let Some(date) = parse_year_month(trimmed, sep) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

fn parse_year_month(value: &str, sep: char) -> Option<NaiveDate> {
    let (year, month) = value.split_once(sep)?;
    if year.len() != 4
        || !year.bytes().all(|b| b.is_ascii_digit())
        || month.is_empty()
        || month.len() > 2
        || !month.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Convert every row of a table into a [`BuyerRecord`] tagged with its
/// source id.
///
/// Missing roles and empty cells become empty strings; only the company
/// name gets a fallback so every record stays displayable. Pure: the input
/// table is not modified and no state is kept between calls.
pub fn normalize_table(table: &RawTable, source_id: &str) -> Vec<BuyerRecord> {
    let columns = ColumnMap::infer(&table.headers);
    debug!(
        source = source_id,
        company = ?columns.company,
        email = ?columns.email,
        date = ?columns.date,
        "inferred buyer columns"
    );
    table
        .rows
        .iter()
        .map(|row| {
            let company = cell(row, columns.company);
            let date_raw = cell(row, columns.date);
            BuyerRecord {
                company_name: if company.is_empty() {
                    UNKNOWN_COMPANY.to_string()
                } else {
                    company
                },
                country: cell(row, columns.country),
                city: cell(row, columns.city),
                product_text: cell(row, columns.product),
                hs_code: cell(row, columns.hs_code),
                contact_person: cell(row, columns.contact),
                email: cell(row, columns.email),
                phone: cell(row, columns.phone),
                website: cell(row, columns.website),
                date: parse_date_any(&date_raw),
                date_raw,
                source: source_id.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn normalizes_a_full_row() {
        let table = table(
            &["회사명", "국가", "품목", "이메일", "등록일자"],
            &[&[
                "Acme Corp",
                "United States",
                "cosmetics packaging",
                "a@acme.com",
                "2024-08-29",
            ]],
        );
        let records = normalize_table(&table, "kotra");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.company_name, "Acme Corp");
        assert_eq!(record.country, "United States");
        assert_eq!(record.email, "a@acme.com");
        assert_eq!(record.source, "kotra");
        assert_eq!(record.date_raw, "2024-08-29");
        assert_eq!(
            record.date,
            NaiveDate::from_ymd_opt(2024, 8, 29).unwrap().and_hms_opt(0, 0, 0)
        );
    }

    #[test]
    fn missing_company_gets_fallback_name() {
        let table = table(&["국가"], &[&["Germany"]]);
        let records = normalize_table(&table, "src");
        assert_eq!(records[0].company_name, UNKNOWN_COMPANY);
        assert_eq!(records[0].country, "Germany");
    }

    #[test]
    fn one_column_table_yields_empty_fields() {
        let table = table(&["비고"], &[&["memo"]]);
        let records = normalize_table(&table, "src");
        assert_eq!(records[0].company_name, UNKNOWN_COMPANY);
        assert!(records[0].country.is_empty());
        assert!(records[0].email.is_empty());
    }

    #[test]
    fn date_format_ladder() {
        let expected = NaiveDate::from_ymd_opt(2024, 8, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0);
        for raw in ["2024-08-29", "2024.08.29", "2024/08/29", "20240829"] {
            assert_eq!(parse_date_any(raw), expected, "{raw}");
        }
        let month_only = NaiveDate::from_ymd_opt(2024, 8, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0);
        for raw in ["2024-08", "2024.08", "2024/08"] {
            assert_eq!(parse_date_any(raw), month_only, "{raw}");
        }
    }

    #[test]
    fn unparseable_dates_yield_none_and_keep_raw() {
        for raw in ["", "  ", "next week", "08/29/2024", "2024-13", "202408"] {
            assert_eq!(parse_date_any(raw), None, "{raw:?}");
        }
        let table = table(&["회사명", "등록일자"], &[&["Acme", "next week"]]);
        let records = normalize_table(&table, "src");
        assert_eq!(records[0].date, None);
        assert_eq!(records[0].date_raw, "next week");
    }
}
