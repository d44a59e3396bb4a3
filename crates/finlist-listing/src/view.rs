//! Display rows derived from fetched records

use finlist_core::{AccountId, AccountRecord, FieldKey, FieldValue};
use serde::Serialize;

/// One row of the displayed listing.
///
/// A flattened copy of an [`AccountRecord`] plus the derived navigation
/// target for the Account Name link. Derived entirely from the record,
/// never independently persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRow {
    pub id: AccountId,
    /// Per-record detail path, opened in a new browsing context
    pub detail_url: String,
    pub name: String,
    /// Owner display name, flattened from the nested owner entity
    pub owner: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub annual_revenue: Option<f64>,
}

impl ViewRow {
    pub fn from_record(record: &AccountRecord) -> Self {
        Self {
            id: record.id.clone(),
            detail_url: format!("/{}", record.id),
            name: record.name.clone(),
            owner: record.owner.name.clone(),
            phone: record.phone.clone(),
            website: record.website.clone(),
            annual_revenue: record.annual_revenue,
        }
    }

    /// Value of one addressable field, as seen by sorting and display.
    /// Absent optionals yield [`FieldValue::Null`].
    pub fn field(&self, key: FieldKey) -> FieldValue {
        match key {
            FieldKey::Name => FieldValue::Text(self.name.clone()),
            FieldKey::Owner => FieldValue::Text(self.owner.clone()),
            FieldKey::Phone => self.phone.clone().into(),
            FieldKey::Website => self.website.clone().into(),
            FieldKey::AnnualRevenue => self.annual_revenue.into(),
        }
    }
}

impl From<&AccountRecord> for ViewRow {
    fn from(record: &AccountRecord) -> Self {
        Self::from_record(record)
    }
}
