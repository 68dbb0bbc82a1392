use crate::config::CleanConfig;
use crate::ledger::SectionLabel;

/// Verdict for one raw extracted row. First matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    /// Plausible data row, admitted for downstream reconstruction.
    Keep,
    /// Extraction noise; absorbed here, never reported.
    Drop,
    /// Section banner carrying no record data of its own.
    Banner(SectionLabel),
}

const BANNER_MARKERS: &[(&str, SectionLabel)] = &[
    ("New Events", SectionLabel::New),
    ("Ongoing Events", SectionLabel::Ongoing),
    ("Closed Events", SectionLabel::Closed),
];

/// Classify one raw row using cheap structural signals only. Upstream
/// extraction quality varies per page layout, so the rules lean on cell
/// counts, cell lengths, and substring containment rather than content.
pub fn classify(cells: &[String], cfg: &CleanConfig) -> RowClass {
    // 1) nothing but blanks
    if cells.iter().all(|c| c.trim().is_empty()) {
        return RowClass::Drop;
    }

    // 2) too fragmentary to be a data row
    if cells.len() < cfg.min_data_cells {
        return RowClass::Drop;
    }

    // 3) section banner
    if let Some(label) = banner_label(cells, cfg) {
        return RowClass::Banner(label);
    }

    // 4) merged-column artifact
    if cells.len() > cfg.max_data_cells {
        return RowClass::Drop;
    }

    if cells.len() > 3 {
        // 5) wrapped description bled into a data row; the stitcher handles
        // genuine continuation rows, this shape is just noise
        if cells[1..]
            .iter()
            .any(|c| c.chars().count() > cfg.max_cell_len)
        {
            return RowClass::Drop;
        }

        // 6) the extractor sometimes emits one logical row twice with
        // different wrapping; the repeated 2nd-3rd cell prefix gives it away
        if cfg.duplicate_prefix_check {
            let prefix = cells[1..3].join(" ");
            if !prefix.trim().is_empty() && cells[3..].iter().any(|c| c.contains(&prefix)) {
                return RowClass::Drop;
            }
        }
    }

    RowClass::Keep
}

fn banner_label(cells: &[String], cfg: &CleanConfig) -> Option<SectionLabel> {
    for &(marker, label) in BANNER_MARKERS {
        let hit = if cfg.banner_match_exact {
            cells.get(1).map(|c| c.trim() == marker).unwrap_or(false)
        } else {
            cells.iter().any(|c| c.contains(marker))
        };
        if hit {
            return Some(label);
        }
    }
    None
}
