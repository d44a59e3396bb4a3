//! Remote store trait definition

use crate::{AccountId, AccountRecord, FieldKey, FieldValue, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One record's uncommitted field changes, as submitted to the store.
///
/// Carries only the changed fields plus the id of the record it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEdit {
    pub id: AccountId,
    pub fields: HashMap<FieldKey, FieldValue>,
}

impl DraftEdit {
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            fields: HashMap::new(),
        }
    }

    /// Record a changed field, replacing any earlier value for the same
    /// field in this draft
    pub fn set(&mut self, field: FieldKey, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The remote source of truth behind the listing.
///
/// `fetch_accounts` backs both the initial load and every refresh;
/// `update_record` persists one draft and is issued once per edited
/// record, with no ordering guarantee between distinct records.
#[async_trait]
pub trait RecordBackend: Send + Sync {
    /// Fetch the complete canonical record set
    async fn fetch_accounts(&self) -> Result<Vec<AccountRecord>>;

    /// Persist one record's changed fields
    async fn update_record(&self, draft: &DraftEdit) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_draft_edit_serializes_with_wire_keys() {
        let mut draft = DraftEdit::new(AccountId::from("001"));
        draft.set(FieldKey::Phone, FieldValue::Text("555-0100".into()));

        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(json["id"], "001");
        assert_eq!(json["fields"]["Phone"], "555-0100");
    }

    #[test]
    fn test_set_replaces_earlier_value() {
        let mut draft = DraftEdit::new(AccountId::from("001"));
        draft.set(FieldKey::Phone, FieldValue::Text("555-0100".into()));
        draft.set(FieldKey::Phone, FieldValue::Text("555-0199".into()));

        assert_eq!(draft.fields.len(), 1);
        assert_eq!(
            draft.fields[&FieldKey::Phone],
            FieldValue::Text("555-0199".into())
        );
    }
}
