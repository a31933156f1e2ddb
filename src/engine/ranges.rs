//! Compression of line-number lists into closed ranges.

use crate::types::LineRange;

/// Collapse a list of line numbers into the minimal sorted list of closed ranges.
///
/// Input order and duplicates do not matter: the numbers are deduplicated
/// and sorted first. Consecutive numbers share a range; any gap starts a new
/// one.
pub fn pages_to_ranges(lines: &[u32]) -> Vec<LineRange> {
    let mut sorted = lines.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return ranges;
    };

    let mut current = LineRange::single(first);
    for line in iter {
        // checked: `end + 1` must not wrap at u32::MAX
        if current.end.checked_add(1) == Some(line) {
            current.end = line;
        } else {
            ranges.push(current);
            current = LineRange::single(line);
        }
    }
    ranges.push(current);

    ranges
}

/// Expand ranges back into the line numbers they cover, in order.
pub fn flatten_ranges(ranges: &[LineRange]) -> Vec<u32> {
    ranges.iter().flat_map(|r| r.lines()).collect()
}

/// Whether `ranges` is sorted, disjoint and has no two mergeable neighbours.
pub fn is_minimal(ranges: &[LineRange]) -> bool {
    ranges.iter().all(|r| r.start <= r.end)
        && ranges
            .windows(2)
            .all(|pair| u64::from(pair[1].start) > u64::from(pair[0].end) + 1)
}
