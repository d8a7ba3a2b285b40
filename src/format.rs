//! Display formatting: id-ID currency grouping and human-readable dates.

use chrono::DateTime;

use crate::models::SalaryRange;

/// Group a whole amount with dots, id-ID style: 7000000 -> "7.000.000".
fn group_id(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let first = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format an amount in the id-ID convention: "Rp7.000.000" for IDR,
/// "<code> 7.000.000" for anything else.
pub fn format_currency(n: i64, currency: &str) -> String {
    if currency.eq_ignore_ascii_case("IDR") {
        format!("Rp{}", group_id(n))
    } else {
        format!("{} {}", currency, group_id(n))
    }
}

/// "Rp7.000.000 - Rp8.000.000"
pub fn salary_text(range: &SalaryRange) -> String {
    format!(
        "{} - {}",
        format_currency(range.min, &range.currency),
        format_currency(range.max, &range.currency)
    )
}

/// RFC 3339 timestamp to "26 Aug 2026 14:05". Falls back to the raw string
/// when the input does not parse.
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%d %b %Y %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(7_000_000, "IDR"), "Rp7.000.000");
        assert_eq!(format_currency(950, "IDR"), "Rp950");
        assert_eq!(format_currency(1_234, "IDR"), "Rp1.234");
        assert_eq!(format_currency(12_345_678, "USD"), "USD 12.345.678");
        assert_eq!(format_currency(0, "IDR"), "Rp0");
    }

    #[test]
    fn test_salary_text() {
        let range = SalaryRange {
            min: 7_000_000,
            max: 8_000_000,
            currency: "IDR".to_string(),
            display_text: None,
        };
        assert_eq!(salary_text(&range), "Rp7.000.000 - Rp8.000.000");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("2026-08-26T14:05:00+00:00"),
            "26 Aug 2026 14:05"
        );
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }
}
