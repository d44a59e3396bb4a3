//! Name filter over the baseline snapshot

use crate::ViewRow;

/// Filter the baseline by account name, case-insensitively.
///
/// An empty query returns the full baseline in loaded order. A non-empty
/// query returns the rows whose name contains it as a substring. The
/// result is always derived from the baseline, never from a previously
/// filtered view, so successive queries do not compound.
pub fn filter_by_name(baseline: &[ViewRow], query: &str) -> Vec<ViewRow> {
    if query.is_empty() {
        return baseline.to_vec();
    }

    let query = query.to_lowercase();
    baseline
        .iter()
        .filter(|row| row.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
