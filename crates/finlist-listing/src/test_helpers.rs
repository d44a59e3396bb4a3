//! Shared fixtures for the listing tests: an in-memory backend, a
//! recording notifier, and record builders.

use crate::ViewRow;
use async_trait::async_trait;
use finlist_core::{
    AccountRecord, DraftEdit, FieldKey, FinlistError, Notifier, Owner, RecordBackend, Result,
    Toast,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use tokio::sync::Barrier;

/// Initialize test tracing once per process
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn account(id: &str, name: &str, owner: &str) -> AccountRecord {
    AccountRecord {
        id: id.into(),
        name: name.to_string(),
        owner: Owner {
            name: owner.to_string(),
        },
        phone: Some("555-0000".to_string()),
        website: Some("https://example.test".to_string()),
        annual_revenue: Some(1_000_000.0),
    }
}

pub fn row(record: &AccountRecord) -> ViewRow {
    ViewRow::from_record(record)
}

/// Backend double holding records in memory, with failure injection and a
/// rendezvous barrier for asserting concurrent dispatch.
#[derive(Default)]
pub struct InMemoryBackend {
    records: Mutex<Vec<AccountRecord>>,
    fetch_error: Mutex<Option<String>>,
    failing_updates: Mutex<HashSet<String>>,
    rendezvous: Mutex<Option<Arc<Barrier>>>,
    fetch_count: AtomicUsize,
    update_count: AtomicUsize,
}

impl InMemoryBackend {
    pub fn with_records(records: Vec<AccountRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Make every subsequent fetch fail with `message`
    pub fn fail_fetches(&self, message: &str) {
        *self.fetch_error.lock().unwrap() = Some(message.to_string());
    }

    /// Make updates targeting `id` fail
    pub fn fail_updates_for(&self, id: &str) {
        self.failing_updates.lock().unwrap().insert(id.to_string());
    }

    /// Block each update until `parties` updates are in flight at once
    pub fn hold_updates(&self, parties: usize) {
        *self.rendezvous.lock().unwrap() = Some(Arc::new(Barrier::new(parties)));
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.update_count.load(Ordering::SeqCst)
    }

    fn apply(&self, draft: &DraftEdit) {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records.iter_mut().find(|r| r.id == draft.id) else {
            return;
        };
        for (field, value) in &draft.fields {
            match field {
                FieldKey::Phone => record.phone = value.as_str().map(str::to_string),
                FieldKey::Website => record.website = value.as_str().map(str::to_string),
                FieldKey::AnnualRevenue => record.annual_revenue = value.as_f64(),
                FieldKey::Name | FieldKey::Owner => {}
            }
        }
    }
}

#[async_trait]
impl RecordBackend for InMemoryBackend {
    async fn fetch_accounts(&self) -> Result<Vec<AccountRecord>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.fetch_error.lock().unwrap().clone() {
            return Err(FinlistError::Fetch(message));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn update_record(&self, draft: &DraftEdit) -> Result<()> {
        self.update_count.fetch_add(1, Ordering::SeqCst);

        let barrier = self.rendezvous.lock().unwrap().clone();
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }

        let failing = self
            .failing_updates
            .lock()
            .unwrap()
            .contains(draft.id.as_str());
        if failing {
            return Err(FinlistError::Update(format!(
                "record {} rejected the update",
                draft.id
            )));
        }

        self.apply(draft);
        Ok(())
    }
}

/// Notifier double that records every toast it is handed
#[derive(Default)]
pub struct RecordedToasts {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordedToasts {
    pub fn take(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock().unwrap())
    }
}

impl Notifier for RecordedToasts {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
