use crate::clean::filter::RowClass;
use crate::ledger::SectionLabel;

/// A data row carrying the section label of the nearest preceding banner.
/// `section` stays `None` for rows that appeared before any banner; the
/// enrichment step turns that into a hard error rather than guessing.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedRow {
    pub cells: Vec<String>,
    pub section: Option<SectionLabel>,
}

/// Single forward pass over the merged, classified sequence. Banner rows
/// update the current label and are discarded; every kept row is stamped
/// with the label in force when it was seen. State starts at `None` for
/// each document and is never reset mid-sequence.
pub fn tag_sections(rows: impl IntoIterator<Item = (Vec<String>, RowClass)>) -> Vec<TaggedRow> {
    let mut current: Option<SectionLabel> = None;
    let mut tagged = Vec::new();

    for (cells, class) in rows {
        match class {
            RowClass::Banner(label) => current = Some(label),
            RowClass::Keep => tagged.push(TaggedRow {
                cells,
                section: current,
            }),
            RowClass::Drop => {}
        }
    }

    tagged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep(cells: &[&str]) -> (Vec<String>, RowClass) {
        (cells.iter().map(|s| s.to_string()).collect(), RowClass::Keep)
    }

    fn banner(label: SectionLabel) -> (Vec<String>, RowClass) {
        (vec![String::new()], RowClass::Banner(label))
    }

    #[test]
    fn labels_propagate_until_next_banner() {
        let tagged = tag_sections(vec![
            banner(SectionLabel::New),
            keep(&["Kenya"]),
            keep(&["Chad"]),
            banner(SectionLabel::Ongoing),
            keep(&["Mali"]),
            banner(SectionLabel::Closed),
            keep(&["Niger"]),
        ]);

        let labels: Vec<_> = tagged.iter().map(|r| r.section).collect();
        assert_eq!(
            labels,
            vec![
                Some(SectionLabel::New),
                Some(SectionLabel::New),
                Some(SectionLabel::Ongoing),
                Some(SectionLabel::Closed),
            ]
        );
    }

    #[test]
    fn banners_are_removed_and_order_is_preserved() {
        let tagged = tag_sections(vec![
            banner(SectionLabel::New),
            keep(&["a"]),
            banner(SectionLabel::Ongoing),
            keep(&["b"]),
        ]);
        let countries: Vec<_> = tagged.iter().map(|r| r.cells[0].as_str()).collect();
        assert_eq!(countries, vec!["a", "b"]);
    }

    #[test]
    fn rows_before_first_banner_stay_unlabeled() {
        let tagged = tag_sections(vec![keep(&["early"]), banner(SectionLabel::New), keep(&["ok"])]);
        assert_eq!(tagged[0].section, None);
        assert_eq!(tagged[1].section, Some(SectionLabel::New));
    }

    #[test]
    fn dropped_rows_never_surface() {
        let tagged = tag_sections(vec![
            banner(SectionLabel::New),
            (vec!["junk".to_string()], RowClass::Drop),
            keep(&["real"]),
        ]);
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].cells[0], "real");
    }
}
