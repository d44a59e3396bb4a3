//! Top-level listing service
//!
//! Wires the store, the pending-edit collection and the orchestrator to
//! the remote backend and the notification sink. This is the explicit
//! replacement for the host platform's reactive bindings: fetch results
//! arrive through [`ListingService::load`], refreshes are requested
//! explicitly, and inline edits are staged as an explicit draft
//! collection.

use crate::{
    EditOrchestrator, PendingEdits, RecordStore, SaveOutcome, SortDirection, ViewRow,
};
use finlist_core::{AccountId, FieldKey, FieldValue, Notifier, RecordBackend, Result, Toast};
use std::sync::Arc;

/// The account listing's single entry point.
///
/// All state (baseline, view, pending drafts) is owned here and mutated
/// through `&mut self` from one logical thread; suspension happens only
/// at the backend await points.
pub struct ListingService {
    store: RecordStore,
    pending: PendingEdits,
    orchestrator: EditOrchestrator,
    backend: Arc<dyn RecordBackend>,
    notifier: Arc<dyn Notifier>,
}

impl ListingService {
    pub fn new(backend: Arc<dyn RecordBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store: RecordStore::new(),
            pending: PendingEdits::new(),
            orchestrator: EditOrchestrator::new(backend.clone(), notifier.clone()),
            backend,
            notifier,
        }
    }

    /// Populate the store from the remote source of truth.
    ///
    /// A fetch failure clears the displayed data and surfaces a
    /// dismissable error toast; it is never returned to the caller.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        match self.backend.fetch_accounts().await {
            Ok(records) => {
                tracing::info!(rows = records.len(), "Fetched account listing");
                self.store.load(&records);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Fetch failed; clearing listing");
                self.store.clear();
                self.notifier.notify(Toast::error("Error", err.to_string()));
            }
        }
    }

    /// Explicit re-fetch bound to the backend. Same failure path as
    /// [`ListingService::load`].
    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Sort the displayed view by one of the sortable columns
    pub fn sort(&mut self, field: FieldKey, direction: SortDirection) {
        self.store.sort(field, direction);
    }

    /// Filter the displayed view by account name
    pub fn apply_filter(&mut self, query: &str) {
        self.store.apply_filter(query);
    }

    /// Stage one inline cell edit. Staging errors are caller mistakes
    /// (non-editable field, malformed value), not I/O, so they surface
    /// directly.
    pub fn stage_edit(&mut self, id: AccountId, field: FieldKey, value: FieldValue) -> Result<()> {
        self.pending.stage(id, field, value)
    }

    /// Submit every staged draft as one concurrent batch.
    ///
    /// Pending drafts are drained up front and are therefore empty once
    /// the call settles, whatever the outcome. On full success the store
    /// is refreshed from the source of truth; the previously active
    /// sort/filter is deliberately not reapplied to the refreshed data.
    #[tracing::instrument(skip(self))]
    pub async fn save_pending(&mut self) -> SaveOutcome {
        if self.pending.is_empty() {
            return SaveOutcome::Saved;
        }

        let drafts = self.pending.take();
        let outcome = self.orchestrator.submit(drafts).await;
        if outcome == SaveOutcome::Saved {
            self.refresh().await;
        }
        outcome
    }

    pub fn view(&self) -> &[ViewRow] {
        self.store.view()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn has_pending_edits(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_edit_count(&self) -> usize {
        self.pending.len()
    }
}
