//! Batch persistence of draft edits

use finlist_core::{DraftEdit, Notifier, RecordBackend, Toast};
use futures::future::join_all;
use std::sync::Arc;
use uuid::Uuid;

/// Observable outcome of one save batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Every update in the batch succeeded; the caller should refresh
    /// from the source of truth
    Saved,
    /// At least one update failed; writes that already landed are not
    /// rolled back
    Failed,
}

/// Submits draft edits to the remote store and reports the outcome to the
/// user.
///
/// Each draft is an independent persistence operation; the whole batch is
/// dispatched concurrently and the outcome is all-or-none at this level
/// even though individual updates may have partially applied remotely.
pub struct EditOrchestrator {
    backend: Arc<dyn RecordBackend>,
    notifier: Arc<dyn Notifier>,
}

impl EditOrchestrator {
    pub fn new(backend: Arc<dyn RecordBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self { backend, notifier }
    }

    /// Persist a batch of drafts.
    ///
    /// Emits exactly one toast: success when every update lands, error
    /// carrying the first failure's detail otherwise. Nothing is retried.
    pub async fn submit(&self, drafts: Vec<DraftEdit>) -> SaveOutcome {
        if drafts.is_empty() {
            return SaveOutcome::Saved;
        }

        let batch_id = Uuid::new_v4();
        tracing::debug!(%batch_id, records = drafts.len(), "Dispatching save batch");

        let updates = drafts.iter().map(|draft| self.backend.update_record(draft));
        let results = join_all(updates).await;

        let first_failure = results.into_iter().find_map(|result| result.err());
        match first_failure {
            None => {
                tracing::info!(%batch_id, "Save batch committed");
                self.notifier
                    .notify(Toast::success("Success", "Records updated successfully!"));
                SaveOutcome::Saved
            }
            Some(err) => {
                tracing::warn!(%batch_id, error = %err, "Save batch failed");
                self.notifier.notify(Toast::error("Error", err.to_string()));
                SaveOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{init_tracing, InMemoryBackend, RecordedToasts};
    use finlist_core::{FieldKey, FieldValue, Severity};

    fn draft(id: &str, phone: &str) -> DraftEdit {
        let mut draft = DraftEdit::new(id.into());
        draft.set(FieldKey::Phone, FieldValue::Text(phone.into()));
        draft
    }

    #[tokio::test]
    async fn test_all_success_emits_one_success_toast() {
        init_tracing();
        let backend = Arc::new(InMemoryBackend::default());
        let toasts = Arc::new(RecordedToasts::default());
        let orchestrator = EditOrchestrator::new(backend.clone(), toasts.clone());

        let outcome = orchestrator
            .submit(vec![draft("001", "1"), draft("002", "2"), draft("003", "3")])
            .await;

        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(backend.update_count(), 3);
        let recorded = toasts.take();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].severity, Severity::Success);
        assert_eq!(recorded[0].message, "Records updated successfully!");
    }

    #[tokio::test]
    async fn test_any_failure_emits_one_error_toast() {
        init_tracing();
        let backend = Arc::new(InMemoryBackend::default());
        backend.fail_updates_for("002");
        let toasts = Arc::new(RecordedToasts::default());
        let orchestrator = EditOrchestrator::new(backend.clone(), toasts.clone());

        let outcome = orchestrator
            .submit(vec![draft("001", "1"), draft("002", "2"), draft("003", "3")])
            .await;

        assert_eq!(outcome, SaveOutcome::Failed);
        // Every update is still dispatched; there is no short-circuit.
        assert_eq!(backend.update_count(), 3);
        let recorded = toasts.take();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].severity, Severity::Error);
        assert!(recorded[0].message.contains("002"));
    }

    #[tokio::test]
    async fn test_updates_dispatch_concurrently() {
        init_tracing();
        let backend = Arc::new(InMemoryBackend::default());
        backend.hold_updates(3);
        let toasts = Arc::new(RecordedToasts::default());
        let orchestrator = EditOrchestrator::new(backend.clone(), toasts.clone());

        // With a rendezvous of 3, the batch only completes if all three
        // updates are in flight at once.
        let outcome = orchestrator
            .submit(vec![draft("001", "1"), draft("002", "2"), draft("003", "3")])
            .await;
        assert_eq!(outcome, SaveOutcome::Saved);
    }

    #[tokio::test]
    async fn test_empty_batch_is_a_quiet_success() {
        init_tracing();
        let backend = Arc::new(InMemoryBackend::default());
        let toasts = Arc::new(RecordedToasts::default());
        let orchestrator = EditOrchestrator::new(backend.clone(), toasts.clone());

        let outcome = orchestrator.submit(Vec::new()).await;
        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(backend.update_count(), 0);
        assert!(toasts.take().is_empty());
    }
}
