//! Display column declarations for the account listing

use crate::FieldKey;

/// Rendering type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Rendered as a link to the record's detail path, opened in a new
    /// browsing context
    Link,
    /// Plain text
    Text,
    /// Phone number
    Phone,
    /// URL
    Url,
    /// Currency amount
    Currency,
}

/// Declaration of one column in the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Display label
    pub label: &'static str,
    /// Record field the column renders
    pub field: FieldKey,
    /// Rendering type
    pub kind: ColumnKind,
    /// Whether the column offers a sort toggle
    pub sortable: bool,
    /// Whether the column offers an inline editor
    pub editable: bool,
}

/// The five columns of the account listing.
///
/// Account Name links to the per-record detail path; name and owner are
/// sortable; phone, website and annual revenue are inline-editable.
pub fn account_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec {
            label: "Account Name",
            field: FieldKey::Name,
            kind: ColumnKind::Link,
            sortable: true,
            editable: false,
        },
        ColumnSpec {
            label: "Account Owner",
            field: FieldKey::Owner,
            kind: ColumnKind::Text,
            sortable: true,
            editable: false,
        },
        ColumnSpec {
            label: "Phone",
            field: FieldKey::Phone,
            kind: ColumnKind::Phone,
            sortable: false,
            editable: true,
        },
        ColumnSpec {
            label: "Website",
            field: FieldKey::Website,
            kind: ColumnKind::Url,
            sortable: false,
            editable: true,
        },
        ColumnSpec {
            label: "Annual Revenue",
            field: FieldKey::AnnualRevenue,
            kind: ColumnKind::Currency,
            sortable: false,
            editable: true,
        },
    ]
}
