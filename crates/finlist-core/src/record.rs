//! The account record model as delivered by the remote store

use crate::FieldValue;
use serde::{Deserialize, Serialize};

/// Opaque identifier of an account record.
///
/// Assigned by the remote store and immutable for the lifetime of the
/// record; every draft edit carries the id of the record it targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Nested owner entity on a fetched record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(rename = "Name")]
    pub name: String,
}

/// One account row as delivered by the inbound fetch contract.
///
/// Field names follow the wire shape of the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "Id")]
    pub id: AccountId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Owner")]
    pub owner: Owner,
    #[serde(rename = "Phone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "Website", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(
        rename = "AnnualRevenue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_revenue: Option<f64>,
}

/// Addressable fields of a displayed account row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    Name,
    Owner,
    Phone,
    Website,
    AnnualRevenue,
}

impl FieldKey {
    /// Wire name used by the fetch and persistence contracts
    pub fn wire_name(&self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Owner => "Owner",
            FieldKey::Phone => "Phone",
            FieldKey::Website => "Website",
            FieldKey::AnnualRevenue => "AnnualRevenue",
        }
    }

    /// Whether inline edits may target this field.
    ///
    /// Name and owner are display-only in the listing; the record id is
    /// not addressable as a field at all.
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            FieldKey::Phone | FieldKey::Website | FieldKey::AnnualRevenue
        )
    }

    /// Expected value shape for edits to this field
    pub fn validate(&self, value: &FieldValue) -> bool {
        match self {
            FieldKey::AnnualRevenue => {
                matches!(value, FieldValue::Number(_) | FieldValue::Null)
            }
            _ => matches!(value, FieldValue::Text(_) | FieldValue::Null),
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
