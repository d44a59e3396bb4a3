//! Pending edits awaiting a save

use finlist_core::{AccountId, DraftEdit, FieldKey, FieldValue, FinlistError, Result};
use std::collections::HashMap;

/// Tracks all draft edits not yet committed to the remote store.
///
/// Edits are keyed by record id; successive edits to the same record
/// merge into one draft, so the save batch carries at most one update per
/// record.
#[derive(Debug, Default)]
pub struct PendingEdits {
    drafts: HashMap<AccountId, DraftEdit>,
    /// Staging order of record ids, so a drained batch is deterministic
    order: Vec<AccountId>,
}

impl PendingEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage one cell edit.
    ///
    /// Rejects fields the listing does not allow edits to, value shapes
    /// that do not fit the field, and malformed website URLs.
    pub fn stage(&mut self, id: AccountId, field: FieldKey, value: FieldValue) -> Result<()> {
        if !field.is_editable() {
            return Err(FinlistError::ImmutableField(field.wire_name()));
        }
        if !field.validate(&value) {
            return Err(FinlistError::InvalidValue(format!(
                "{} cannot hold {}",
                field, value
            )));
        }
        if field == FieldKey::Website {
            if let FieldValue::Text(s) = &value {
                url::Url::parse(s)
                    .map_err(|e| FinlistError::InvalidValue(format!("Website '{}': {}", s, e)))?;
            }
        }

        if !self.drafts.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.drafts
            .entry(id.clone())
            .or_insert_with(|| DraftEdit::new(id))
            .set(field, value);
        Ok(())
    }

    /// Drain every draft in staging order, leaving the collection empty
    pub fn take(&mut self) -> Vec<DraftEdit> {
        let mut drafts = std::mem::take(&mut self.drafts);
        let order = std::mem::take(&mut self.order);
        order.into_iter().filter_map(|id| drafts.remove(&id)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Number of records with staged edits
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn get(&self, id: &AccountId) -> Option<&DraftEdit> {
        self.drafts.get(id)
    }
}
