//! Ordering functions over view rows

use crate::ViewRow;
use finlist_core::{FieldKey, FieldValue};
use std::cmp::Ordering;

/// Sort direction for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Value transform applied to both operands before comparison
pub type Primer = fn(FieldValue) -> FieldValue;

/// Common primers for the listing's sortable columns
pub mod primers {
    use finlist_core::FieldValue;

    /// Case-insensitive text comparison
    pub fn lowercase(value: FieldValue) -> FieldValue {
        match value {
            FieldValue::Text(s) => FieldValue::Text(s.to_lowercase()),
            other => other,
        }
    }
}

/// An ordering function over [`ViewRow`]s for one field.
///
/// Pure: construction and comparison have no side effects and no error
/// cases. Incomparable operands (text against number, anything against
/// null) compare equal; a stable sort then leaves their relative order
/// unchanged.
#[derive(Debug, Clone)]
pub struct Comparator {
    field: FieldKey,
    direction: SortDirection,
    primer: Option<Primer>,
}

impl Comparator {
    pub fn new(field: FieldKey, direction: SortDirection) -> Self {
        Self {
            field,
            direction,
            primer: None,
        }
    }

    /// Pass both operands' field values through `primer` before comparing
    pub fn with_primer(mut self, primer: Primer) -> Self {
        self.primer = Some(primer);
        self
    }

    pub fn compare(&self, a: &ViewRow, b: &ViewRow) -> Ordering {
        let key = |row: &ViewRow| {
            let value = row.field(self.field);
            match self.primer {
                Some(primer) => primer(value),
                None => value,
            }
        };

        let ordering = compare_values(&key(a), &key(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Three-way comparison between two field values.
///
/// Numbers compare numerically, text compares by code point. Mixed or
/// null operands are incomparable and yield `Equal`.
fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(na), FieldValue::Number(nb)) => {
            na.partial_cmp(nb).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Text(sa), FieldValue::Text(sb)) => sa.cmp(sb),
        _ => Ordering::Equal,
    }
}
