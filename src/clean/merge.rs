use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit-run pattern"));

/// Ordering key for an extracted batch: the last digit run in its name
/// (`bulletin-table-12` → 12). The extractor preserves row order within a
/// batch but not across batches, so this suffix is the only link back to
/// the document's page order. Batches without a parseable suffix sort first.
pub fn batch_index(name: &str) -> u64 {
    DIGIT_RUN
        .find_iter(name)
        .last()
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Order batches by [`batch_index`] (stable, so unnumbered batches keep
/// their insertion order) and concatenate their rows.
pub fn merge_batches<T>(mut batches: Vec<(String, Vec<T>)>) -> Vec<T> {
    batches.sort_by_key(|(name, _)| batch_index(name));
    batches.into_iter().flat_map(|(_, rows)| rows).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_takes_last_digit_run() {
        assert_eq!(batch_index("OEW07_0101-table-3"), 3);
        assert_eq!(batch_index("table-12"), 12);
        assert_eq!(batch_index("no-digits"), 0);
    }

    #[test]
    fn batches_merge_in_suffix_order() {
        let merged = merge_batches(vec![
            ("doc-table-2".to_string(), vec!["c", "d"]),
            ("doc-table-10".to_string(), vec!["e"]),
            ("doc-table-1".to_string(), vec!["a", "b"]),
        ]);
        assert_eq!(merged, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn unnumbered_batches_sort_first_and_stay_stable() {
        let merged = merge_batches(vec![
            ("beta".to_string(), vec![1]),
            ("doc-table-1".to_string(), vec![3]),
            ("alpha".to_string(), vec![2]),
        ]);
        assert_eq!(merged, vec![1, 2, 3]);
    }
}
