use chrono::NaiveDate;

/// Parse a reported count. Thousands separators and stray whitespace are
/// stripped; empty or dash-only cells, and anything that still fails to
/// parse as a non-negative integer, are absent. Never zero on failure.
pub fn parse_count(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| matches!(c, '-' | '\u{2013}' | '\u{2014}')) {
        return None;
    }
    cleaned.parse().ok()
}

/// Date formats seen across the bulletin lineage, most common first.
const DATE_FORMATS: &[&str] = &[
    "%d-%b-%Y",
    "%d-%b-%y",
    "%d/%m/%Y",
    "%d/%m/%y",
    "%d-%m-%Y",
    "%Y-%m-%d",
];

/// Parse a reported date; unknown or garbled conventions are absent.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cleaned, fmt).ok())
}
