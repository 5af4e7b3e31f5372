//! Result merging.
//!
//! The structured path and the suggest path often return the same
//! address. Hits are keyed by their persisted id when one is known, and by
//! their normalized one-line address otherwise.

use std::collections::HashMap;

use address_lookup_models::AddressHit;

/// Identity of a hit for de-duplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HitKey {
    /// Persisted address id.
    Id(String),
    /// Normalized one-line address.
    Text(String),
}

/// Returns the de-duplication key of `hit`.
#[must_use]
pub fn identity(hit: &AddressHit) -> HitKey {
    match hit.id.as_deref() {
        Some(id) if !id.is_empty() => HitKey::Id(id.to_string()),
        _ => HitKey::Text(normalize_address(&hit.address)),
    }
}

/// Lowercases and collapses runs of whitespace.
#[must_use]
pub fn normalize_address(address: &str) -> String {
    address
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merges structured and suggest hits into one ranked list.
///
/// Duplicates keep the higher-scoring hit; on equal scores the hit seen
/// first (structured before suggest) wins. The result is ordered by score
/// descending, and hits with equal scores keep their first-seen order, so
/// the structured path's sort order survives among ties.
#[must_use]
pub fn merge(structured: Vec<AddressHit>, suggest: Vec<AddressHit>) -> Vec<AddressHit> {
    let mut merged: Vec<AddressHit> = Vec::with_capacity(structured.len() + suggest.len());
    let mut positions: HashMap<HitKey, usize> = HashMap::new();

    for hit in structured.into_iter().chain(suggest) {
        let key = identity(&hit);
        if let Some(&at) = positions.get(&key) {
            if hit.score > merged[at].score {
                merged[at] = hit;
            }
        } else {
            positions.insert(key, merged.len());
            merged.push(hit);
        }
    }

    merged.sort_by(|a, b| b.score.total_cmp(&a.score));

    log::debug!("Merged into {} unique hits", merged.len());

    merged
}

#[cfg(test)]
mod tests {
    use address_lookup_models::{AddressRecord, HitOrigin};

    use super::*;

    fn structured(id: &str, score: f32) -> AddressHit {
        AddressHit::structured(
            AddressRecord {
                id: id.to_string(),
                number_first: "15".to_string(),
                street_name: format!("{id} street name"),
                street_type: "street".to_string(),
                ..AddressRecord::default()
            },
            score,
        )
    }

    fn suggestion(id: Option<&str>, address: &str, score: f32) -> AddressHit {
        AddressHit::suggestion(id.map(str::to_string), address, score)
    }

    fn ids(hits: &[AddressHit]) -> Vec<&str> {
        hits.iter().map(|h| h.id.as_deref().unwrap_or("-")).collect()
    }

    #[test]
    fn duplicate_keeps_higher_score() {
        let merged = merge(
            vec![structured("a", 1.0), structured("b", 3.0)],
            vec![suggestion(Some("a"), "15 a street", 5.0)],
        );
        assert_eq!(ids(&merged), ["a", "b"]);
        assert_eq!(merged[0].origin, HitOrigin::Suggest);
        assert!((merged[0].score - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn equal_score_duplicate_keeps_structured_hit() {
        let merged = merge(
            vec![structured("a", 2.0)],
            vec![suggestion(Some("a"), "15 a street", 2.0)],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].origin, HitOrigin::Structured);
        assert!(merged[0].record.is_some());
    }

    #[test]
    fn sorts_by_score_descending() {
        let merged = merge(
            vec![structured("a", 1.0), structured("b", 4.0)],
            vec![suggestion(Some("c"), "1 c road", 2.0)],
        );
        assert_eq!(ids(&merged), ["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let merged = merge(
            vec![structured("b", 1.0), structured("a", 1.0)],
            vec![suggestion(Some("c"), "1 c road", 1.0)],
        );
        assert_eq!(ids(&merged), ["b", "a", "c"]);
    }

    #[test]
    fn falls_back_to_normalized_text_without_id() {
        let merged = merge(
            Vec::new(),
            vec![
                suggestion(None, "11 Oyster Cove  Promenade", 1.0),
                suggestion(None, "11 oyster cove promenade", 3.0),
            ],
        );
        assert_eq!(merged.len(), 1);
        assert!((merged[0].score - 3.0).abs() < f32::EPSILON);
        assert_eq!(
            identity(&merged[0]),
            HitKey::Text("11 oyster cove promenade".to_string())
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let once = merge(
            vec![structured("a", 1.0), structured("b", 2.0)],
            vec![suggestion(Some("c"), "1 c road", 2.0)],
        );
        let twice = merge(once.clone(), Vec::new());
        assert_eq!(once, twice);

        let with_self = merge(once.clone(), once.clone());
        assert_eq!(once, with_self);
    }

    #[test]
    fn empty_inputs_merge_to_empty() {
        assert!(merge(Vec::new(), Vec::new()).is_empty());
    }
}
