//! Range compression for page-index sets.
//!
//! Turns a set of page indices into the shortest human-readable form:
//! consecutive runs collapse to `start-end`, isolated indices print alone,
//! runs join with commas (`"1-3,7,9-10"`). The aggregator guarantees
//! indices are unique; order of the input is irrelevant.

/// Placeholder emitted for an empty page set.
pub const NO_PAGES_PLACEHOLDER: &str = "-";

/// Compress page indices into a comma-separated list of singles and ranges.
///
/// With `group_ranges` disabled the indices are printed individually, in
/// ascending order. An empty input yields [`NO_PAGES_PLACEHOLDER`].
pub fn compress(pages: &[u32], group_ranges: bool) -> String {
    if pages.is_empty() {
        return NO_PAGES_PLACEHOLDER.to_string();
    }

    let mut ordered = pages.to_vec();
    ordered.sort_unstable();

    if !group_ranges {
        return ordered
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
    }

    let mut ranges: Vec<String> = Vec::new();
    let mut start = ordered[0];
    let mut prev = ordered[0];
    for &page in &ordered[1..] {
        if page - prev > 1 {
            ranges.push(format_run(start, prev));
            start = page;
        }
        prev = page;
    }
    ranges.push(format_run(start, prev));

    ranges.join(",")
}

fn format_run(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Expand a compressed string back into the set it encodes.
    fn expand(compressed: &str) -> BTreeSet<u32> {
        let mut pages = BTreeSet::new();
        if compressed == NO_PAGES_PLACEHOLDER {
            return pages;
        }
        for part in compressed.split(',') {
            match part.split_once('-') {
                Some((start, end)) => {
                    let start: u32 = start.parse().unwrap();
                    let end: u32 = end.parse().unwrap();
                    pages.extend(start..=end);
                }
                None => {
                    pages.insert(part.parse().unwrap());
                }
            }
        }
        pages
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(compress(&[], true), "-");
        assert_eq!(compress(&[], false), "-");
    }

    #[test]
    fn test_single_index() {
        assert_eq!(compress(&[5], true), "5");
    }

    #[test]
    fn test_mixed_runs_and_singles() {
        assert_eq!(compress(&[1, 2, 3, 7, 9, 10], true), "1-3,7,9-10");
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        assert_eq!(compress(&[9, 1, 10, 3, 7, 2], true), "1-3,7,9-10");
    }

    #[test]
    fn test_ungrouped_mode() {
        assert_eq!(compress(&[3, 1, 2], false), "1,2,3");
    }

    #[test]
    fn test_scattered_indices() {
        assert_eq!(compress(&[2, 4, 6, 8], true), "2,4,6,8");
    }

    #[test]
    fn test_single_long_run() {
        assert_eq!(compress(&[4, 5, 6, 7, 8], true), "4-8");
    }

    #[test]
    fn test_round_trip() {
        let cases: Vec<Vec<u32>> = vec![
            vec![],
            vec![5],
            vec![1, 2, 3, 7, 9, 10],
            vec![2, 4, 6, 8],
            vec![1],
            vec![1, 2],
            vec![100, 1, 50, 51, 52, 2, 3],
        ];
        for pages in cases {
            let expected: BTreeSet<u32> = pages.iter().copied().collect();
            assert_eq!(expand(&compress(&pages, true)), expected, "{:?}", pages);
        }
    }
}
