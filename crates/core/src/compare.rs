//! Version selection and field-level diff over ledger snapshots.
//!
//! A snapshot is the field values of a record as of one modification
//! timestamp. Given the snapshots of a record and an optional as-of
//! timestamp, the comparison picks the "current" version (greatest
//! `modified_at` ≤ as-of, or the globally latest) and the "previous" one
//! (next-greatest strictly below current). A record that was never tracked,
//! or an as-of before its first version, yields an empty comparison — that
//! is a valid result, not an error.

use serde::Serialize;

use crate::types::Timestamp;

/// One version of a record: its snapshotted fields plus the version timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Field name → scalar value, per the kind's schema.
    pub fields: serde_json::Map<String, serde_json::Value>,
    /// The version's modification timestamp (total order within a record).
    pub modified_at: Timestamp,
}

/// Result of a version comparison; either side may be absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Comparison {
    pub current: Option<Snapshot>,
    pub previous: Option<Snapshot>,
}

/// Select the current and previous versions from a record's snapshots.
///
/// `snapshots` may arrive in any order. With `as_of` given, "current" is the
/// snapshot with the greatest `modified_at` ≤ `as_of`; otherwise the
/// globally latest. "Previous" is the next-greatest strictly before
/// current's `modified_at`.
pub fn select_versions(snapshots: &[Snapshot], as_of: Option<Timestamp>) -> Comparison {
    let current = snapshots
        .iter()
        .filter(|s| as_of.map_or(true, |t| s.modified_at <= t))
        .max_by_key(|s| s.modified_at)
        .cloned();

    let previous = current.as_ref().and_then(|cur| {
        snapshots
            .iter()
            .filter(|s| s.modified_at < cur.modified_at)
            .max_by_key(|s| s.modified_at)
            .cloned()
    });

    Comparison { current, previous }
}

/// Whether a field differs between the current and previous snapshots.
///
/// Strict value equality over the scalar JSON values; when `previous` is
/// absent there is nothing to diff against, so every field reports
/// unchanged.
pub fn is_different(current: Option<&Snapshot>, previous: Option<&Snapshot>, field: &str) -> bool {
    let Some(previous) = previous else {
        return false;
    };
    let current_value = current.and_then(|s| s.fields.get(field));
    let previous_value = previous.fields.get(field);
    current_value != previous_value
}
