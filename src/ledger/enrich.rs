use crate::error::PipelineError;
use crate::ledger::normalize::CoreRecord;
use crate::ledger::registry::CountryLookup;
use crate::ledger::week::ReportingWindow;
use crate::ledger::NormalizedRecord;

/// Per-document fields shared by every record: the source identifier (the
/// filename stem) and the reporting window decoded from it.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    pub source_name: String,
    pub window: ReportingWindow,
}

impl DocumentContext {
    pub fn new(source_name: impl Into<String>, window: ReportingWindow) -> Self {
        Self {
            source_name: source_name.into(),
            window,
        }
    }
}

/// Attach derived fields and finish the record. This is also where a row
/// that reached the end without a section label is rejected: by now every
/// banner has been seen, so a missing label means the row preceded the
/// first banner.
pub fn finalize(
    core: CoreRecord,
    ctx: &DocumentContext,
    registry: &dyn CountryLookup,
) -> Result<NormalizedRecord, PipelineError> {
    let event_type = core.section.ok_or_else(|| PipelineError::UnlabeledRecord {
        doc: ctx.source_name.clone(),
        row: core.row,
    })?;

    Ok(NormalizedRecord {
        source_name: ctx.source_name.clone(),
        week: ctx.window.week,
        date_range: ctx.window.date_range(),
        event_type,
        country_iso3: registry.iso3(&core.country).map(str::to_string),
        country: core.country,
        event_name: core.event_name,
        grade: core.grade,
        date_notified: core.date_notified,
        date_start: core.date_start,
        date_end: core.date_end,
        cases_total: core.cases_total,
        cases_confirmed: core.cases_confirmed,
        deaths: core.deaths,
        cfr: core.cfr,
        description: core.description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::week::parse_reporting_window;
    use crate::ledger::registry::Iso3Registry;
    use crate::ledger::SectionLabel;

    fn core(section: Option<SectionLabel>, country: &str) -> CoreRecord {
        CoreRecord {
            section,
            row: 3,
            country: country.to_string(),
            event_name: "Cholera".to_string(),
            grade: "Grade 2".to_string(),
            date_notified: None,
            date_start: None,
            date_end: None,
            cases_total: Some(10),
            cases_confirmed: None,
            deaths: Some(1),
            cfr: "10%".to_string(),
            description: None,
        }
    }

    fn ctx() -> DocumentContext {
        let window = parse_reporting_window("OEW07_010112012025", 2026).unwrap();
        DocumentContext::new("OEW07_010112012025", window)
    }

    #[test]
    fn derived_fields_come_from_the_context() {
        let rec = finalize(core(Some(SectionLabel::New), "Kenya"), &ctx(), &Iso3Registry).unwrap();
        assert_eq!(rec.source_name, "OEW07_010112012025");
        assert_eq!(rec.week, 7);
        assert_eq!(rec.date_range, "01 Jan 2025 to 12 Jan 2025");
        assert_eq!(rec.country_iso3.as_deref(), Some("KEN"));
        assert_eq!(rec.event_type, SectionLabel::New);
    }

    #[test]
    fn lookup_miss_is_absent_not_an_error() {
        let rec = finalize(
            core(Some(SectionLabel::Ongoing), "Kenya and Uganda"),
            &ctx(),
            &Iso3Registry,
        )
        .unwrap();
        assert_eq!(rec.country_iso3, None);
    }

    #[test]
    fn unlabeled_row_is_rejected() {
        let err = finalize(core(None, "Kenya"), &ctx(), &Iso3Registry).unwrap_err();
        match err {
            PipelineError::UnlabeledRecord { row, .. } => assert_eq!(row, 3),
            other => panic!("expected UnlabeledRecord, got {other}"),
        }
    }
}
