use crate::error::PipelineError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// `<prefix><2-digit week>_<digit run>` at the end of the stem. ASCII
/// digits only: `\d` would also match Unicode digits, which the fixed
/// offset decoding below cannot take.
static STEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2})_([0-9]+)\s*$").expect("stem pattern"));

/// Reporting week and date span decoded from a bulletin filename. The
/// convention is load-bearing: a stem that does not decode fails its whole
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    pub week: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingWindow {
    pub fn date_range(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%d %b %Y"),
            self.end.format("%d %b %Y")
        )
    }
}

/// Decode the reporting window from a filename stem.
///
/// The digit run after the underscore is either 8 digits (`ddmm` start and
/// `ddmm` end, both anchored to `anchor_year`) or 12/14 digits (leading
/// `ddmm` start, trailing `ddmmyyyy` end; the middle of the 14-digit form
/// is zero padding). When the naively anchored start postdates the end the
/// start's year rolls back by one, which is how year-boundary bulletins
/// (late December to early January) decode.
pub fn parse_reporting_window(
    stem: &str,
    anchor_year: i32,
) -> Result<ReportingWindow, PipelineError> {
    let fail = |reason: &str| PipelineError::FilenameConvention {
        name: stem.to_string(),
        reason: reason.to_string(),
    };

    let caps = STEM_PATTERN
        .captures(stem)
        .ok_or_else(|| fail("no `<week>_<digits>` suffix"))?;
    let week: u32 = caps[1].parse().expect("two digits");
    let digits = &caps[2];

    let (end, end_year) = match digits.len() {
        8 => {
            let end = date(anchor_year, two(digits, 6), two(digits, 4))
                .ok_or_else(|| fail("end day/month out of range"))?;
            (end, anchor_year)
        }
        12 | 14 => {
            let tail = &digits[digits.len() - 8..];
            let year: i32 = tail[4..].parse().expect("four digits");
            let end = date(year, two(tail, 2), two(tail, 0))
                .ok_or_else(|| fail("end date out of range"))?;
            (end, year)
        }
        _ => return Err(fail("date range must be 8, 12 or 14 digits")),
    };

    let (start_day, start_month) = (two(digits, 0), two(digits, 2));
    let mut start =
        date(end_year, start_month, start_day).ok_or_else(|| fail("start day/month out of range"))?;
    if start > end {
        start = date(end_year - 1, start_month, start_day)
            .ok_or_else(|| fail("start date invalid after year rollback"))?;
    }

    Ok(ReportingWindow { week, start, end })
}

fn two(digits: &str, at: usize) -> u32 {
    digits[at..at + 2].parse().expect("two digits")
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Anchor year for 8-digit ranges, taken once per run so a pipeline run
/// stays a pure function of its inputs.
pub fn current_anchor_year() -> i32 {
    chrono::Local::now().date_naive().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn twelve_digit_range_decodes() {
        let w = parse_reporting_window("OEW07_010112012025", 2026).unwrap();
        assert_eq!(w.week, 7);
        assert_eq!(w.start, d(2025, 1, 1));
        assert_eq!(w.end, d(2025, 1, 12));
        assert_eq!(w.date_range(), "01 Jan 2025 to 12 Jan 2025");
    }

    #[test]
    fn fourteen_digit_range_decodes_from_both_ends() {
        let w = parse_reporting_window("wk07_01010112012025", 2026).unwrap();
        assert_eq!(w.week, 7);
        assert_eq!(w.start, d(2025, 1, 1));
        assert_eq!(w.end, d(2025, 1, 12));
    }

    #[test]
    fn year_boundary_rolls_the_start_back() {
        // 29 Dec to 04 Jan 2025: naive start would be 29 Dec 2025
        let w = parse_reporting_window("OEW01_291204012025", 2026).unwrap();
        assert_eq!(w.start, d(2024, 12, 29));
        assert_eq!(w.end, d(2025, 1, 4));
    }

    #[test]
    fn eight_digit_range_anchors_to_the_given_year() {
        let w = parse_reporting_window("OEW11_10031603", 2025).unwrap();
        assert_eq!(w.start, d(2025, 3, 10));
        assert_eq!(w.end, d(2025, 3, 16));

        // rollback applies here too
        let w = parse_reporting_window("OEW01_30120501", 2025).unwrap();
        assert_eq!(w.start, d(2024, 12, 30));
        assert_eq!(w.end, d(2025, 1, 5));
    }

    #[test]
    fn convention_failures_are_typed_and_name_the_stem() {
        // the last entries carry non-ASCII digits, which must be a typed
        // failure like any other malformed stem, never a panic
        for stem in [
            "no_digits_here",
            "OEW07_123",
            "OEW07_9913169913",
            "OEW\u{660}\u{667}_010112012025",
            "OEW07_\u{660}\u{661}\u{660}\u{661}\u{661}\u{662}\u{660}\u{661}\u{662}\u{660}\u{662}\u{665}",
        ] {
            match parse_reporting_window(stem, 2025) {
                Err(PipelineError::FilenameConvention { name, .. }) => assert_eq!(name, stem),
                other => panic!("expected FilenameConvention for {stem}, got {other:?}"),
            }
        }
    }
}
