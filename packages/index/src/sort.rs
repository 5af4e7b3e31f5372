//! Multi-key ordering of structured search candidates.
//!
//! Number keys compare numerically on their leading digits so "9" sorts
//! before "10"; values without digits sort last. The street name compares
//! case-insensitively. Remaining ties go to the higher score, then the
//! smaller id.

use std::cmp::Ordering;

use address_lookup_models::AddressRecord;
use address_lookup_query::plan::{SortDirection, SortField, SortSpec};

/// Numeric value of the leading digits of `value`, if any.
#[must_use]
pub fn numeric_key(value: &str) -> Option<u64> {
    let value = value.trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (numeric_key(a), numeric_key(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_field(a: &AddressRecord, b: &AddressRecord, field: SortField) -> Ordering {
    match field {
        SortField::StreetNumber => compare_numeric(&a.number_first, &b.number_first),
        SortField::FlatNumber => compare_numeric(&a.flat_number, &b.flat_number),
        SortField::StreetName => a
            .street_name
            .to_lowercase()
            .cmp(&b.street_name.to_lowercase()),
    }
}

/// Compares two scored records under `spec`.
#[must_use]
pub fn compare(a: &(f32, AddressRecord), b: &(f32, AddressRecord), spec: &SortSpec) -> Ordering {
    for key in spec.keys() {
        let ordering = compare_field(&a.1, &b.1, key.field);
        let ordering = match key.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    b.0.total_cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id))
}

/// Sorts scored records in place under `spec`.
pub fn sort_records(records: &mut [(f32, AddressRecord)], spec: &SortSpec) {
    records.sort_by(|a, b| compare(a, b, spec));
}
