//! Canonical record store behind the listing

use crate::{filter_by_name, Comparator, SortDirection, ViewRow};
use finlist_core::{AccountRecord, FieldKey};

/// Holds the baseline snapshot and the displayed view of the listing.
///
/// The baseline is the last-fetched, unfiltered, unsorted truth; the view
/// is the baseline with a sort and/or filter applied. Sorting and
/// filtering rebuild the view wholesale and never touch the baseline, so
/// the view's ids are always a subset of the baseline's.
#[derive(Debug, Default)]
pub struct RecordStore {
    baseline: Vec<ViewRow>,
    view: Vec<ViewRow>,
    sorted_by: Option<(FieldKey, SortDirection)>,
    filter_query: Option<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the baseline with freshly fetched records; the view resets
    /// to the baseline in loaded order and any sort/filter state is
    /// forgotten.
    pub fn load(&mut self, records: &[AccountRecord]) {
        self.baseline = records.iter().map(ViewRow::from_record).collect();
        self.view = self.baseline.clone();
        self.sorted_by = None;
        self.filter_query = None;
        tracing::debug!(rows = self.baseline.len(), "Loaded records into store");
    }

    /// Drop everything. Used when a fetch fails.
    pub fn clear(&mut self) {
        self.baseline.clear();
        self.view.clear();
        self.sorted_by = None;
        self.filter_query = None;
    }

    /// Stable-sort the current view by `field`; the baseline keeps its
    /// loaded order. Values compare raw, so text columns order by code
    /// point (uppercase before lowercase).
    pub fn sort(&mut self, field: FieldKey, direction: SortDirection) {
        let comparator = Comparator::new(field, direction);

        let mut sorted = self.view.clone();
        sorted.sort_by(|a, b| comparator.compare(a, b));
        self.view = sorted;
        self.sorted_by = Some((field, direction));
        tracing::debug!(field = %field, "Sorted view");
    }

    /// Re-derive the view from the baseline through the name filter.
    /// A sort applied before filtering is not reapplied.
    pub fn apply_filter(&mut self, query: &str) {
        self.view = filter_by_name(&self.baseline, query);
        self.filter_query = (!query.is_empty()).then(|| query.to_string());
        tracing::debug!(rows = self.view.len(), "Applied name filter");
    }

    /// The last-fetched canonical record set
    pub fn baseline(&self) -> &[ViewRow] {
        &self.baseline
    }

    /// The currently displayed subset/ordering of the baseline
    pub fn view(&self) -> &[ViewRow] {
        &self.view
    }

    pub fn sorted_by(&self) -> Option<(FieldKey, SortDirection)> {
        self.sorted_by
    }

    pub fn filter_query(&self) -> Option<&str> {
        self.filter_query.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.baseline.is_empty()
    }
}
