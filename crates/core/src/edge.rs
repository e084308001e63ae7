//! The fixed 3-slot nullable-reference encoding for dependency edges.
//!
//! An edge between two records is persisted as three optional identifier
//! columns, one per entity kind. Exactly two of the three are populated on
//! any valid edge; the two populated slots must belong to different kinds
//! (a self-kind edge is not representable because each kind has one slot).
//! Orientation — which populated slot is the origin — is not derivable from
//! the slots and must be supplied by the caller.
//!
//! All encode/decode logic lives here; no other module touches raw slots.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, EntityRef};
use crate::error::CoreError;

/// The persisted slot triple of a dependency edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EdgeSlots {
    pub id_aud_sql: Option<String>,
    pub id_aud_report: Option<String>,
    pub id_aud_fv: Option<String>,
}

impl EdgeSlots {
    /// Encode an (origin, destination) pair into the slot triple.
    ///
    /// Fails with [`CoreError::InvalidEdge`] when both refs share a kind:
    /// the encoding has a single slot per kind and would silently drop one
    /// endpoint, so the pair is rejected outright.
    pub fn encode(origin: &EntityRef, destination: &EntityRef) -> Result<Self, CoreError> {
        if origin.kind == destination.kind {
            return Err(CoreError::InvalidEdge(format!(
                "Cannot encode an edge between two {} records: one slot per kind",
                origin.kind.table_name()
            )));
        }

        let mut slots = Self::default();
        slots.set(origin.kind, origin.id.clone());
        slots.set(destination.kind, destination.id.clone());

        debug_assert_eq!(slots.populated_count(), 2);
        Ok(slots)
    }

    /// Decode the slot triple back into an (origin, destination) pair,
    /// given the caller-supplied origin kind.
    ///
    /// Fails with [`CoreError::InvalidEdge`] if the triple does not have
    /// exactly two populated slots or the origin slot is empty — either
    /// means the stored row violates the encoding invariant.
    pub fn decode(&self, origin_kind: EntityKind) -> Result<(EntityRef, EntityRef), CoreError> {
        if self.populated_count() != 2 {
            return Err(CoreError::InvalidEdge(format!(
                "Edge encoding must have exactly 2 populated slots, found {}",
                self.populated_count()
            )));
        }

        let origin_id = self.get(origin_kind).ok_or_else(|| {
            CoreError::InvalidEdge(format!(
                "Origin slot for {} is empty",
                origin_kind.table_name()
            ))
        })?;

        // The other populated slot is the destination.
        let (dest_kind, dest_id) = EntityKind::ALL
            .into_iter()
            .filter(|k| *k != origin_kind)
            .find_map(|k| self.get(k).map(|id| (k, id)))
            .ok_or_else(|| {
                CoreError::InvalidEdge("Destination slot is empty".to_string())
            })?;

        Ok((
            EntityRef::new(origin_kind, origin_id),
            EntityRef::new(dest_kind, dest_id),
        ))
    }

    /// Number of populated slots; 2 on every valid edge.
    pub fn populated_count(&self) -> usize {
        [&self.id_aud_sql, &self.id_aud_report, &self.id_aud_fv]
            .into_iter()
            .filter(|s| s.is_some())
            .count()
    }

    fn set(&mut self, kind: EntityKind, id: String) {
        match kind {
            EntityKind::SqlQuery => self.id_aud_sql = Some(id),
            EntityKind::Report => self.id_aud_report = Some(id),
            EntityKind::VisualFormula => self.id_aud_fv = Some(id),
        }
    }

    fn get(&self, kind: EntityKind) -> Option<String> {
        match kind {
            EntityKind::SqlQuery => self.id_aud_sql.clone(),
            EntityKind::Report => self.id_aud_report.clone(),
            EntityKind::VisualFormula => self.id_aud_fv.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_ref(id: &str) -> EntityRef {
        EntityRef::new(EntityKind::SqlQuery, id)
    }

    fn report_ref(id: &str) -> EntityRef {
        EntityRef::new(EntityKind::Report, id)
    }

    fn fv_ref(id: &str) -> EntityRef {
        EntityRef::new(EntityKind::VisualFormula, id)
    }

    #[test]
    fn encode_populates_exactly_two_slots() {
        let slots = EdgeSlots::encode(&sql_ref("GLB001"), &report_ref("7")).unwrap();
        assert_eq!(slots.populated_count(), 2);
        assert_eq!(slots.id_aud_sql.as_deref(), Some("GLB001"));
        assert_eq!(slots.id_aud_report.as_deref(), Some("7"));
        assert_eq!(slots.id_aud_fv, None);
    }

    #[test]
    fn encode_every_kind_pair() {
        let pairs = [
            (sql_ref("a"), report_ref("b")),
            (sql_ref("a"), fv_ref("b")),
            (report_ref("a"), fv_ref("b")),
            (report_ref("a"), sql_ref("b")),
            (fv_ref("a"), sql_ref("b")),
            (fv_ref("a"), report_ref("b")),
        ];
        for (origin, dest) in pairs {
            let slots = EdgeSlots::encode(&origin, &dest).unwrap();
            assert_eq!(slots.populated_count(), 2, "{origin} -> {dest}");
        }
    }

    #[test]
    fn encode_rejects_same_kind_pair() {
        let err = EdgeSlots::encode(&report_ref("1"), &report_ref("2")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidEdge(_)));
    }

    #[test]
    fn decode_recovers_origin_and_destination() {
        let origin = fv_ref("42");
        let dest = sql_ref("GLB099");
        let slots = EdgeSlots::encode(&origin, &dest).unwrap();

        let (decoded_origin, decoded_dest) = slots.decode(EntityKind::VisualFormula).unwrap();
        assert_eq!(decoded_origin, origin);
        assert_eq!(decoded_dest, dest);
    }

    #[test]
    fn decode_with_wrong_origin_kind_fails() {
        let slots = EdgeSlots::encode(&sql_ref("x"), &report_ref("1")).unwrap();
        let err = slots.decode(EntityKind::VisualFormula).unwrap_err();
        assert!(matches!(err, CoreError::InvalidEdge(_)));
    }

    #[test]
    fn decode_rejects_underpopulated_slots() {
        let slots = EdgeSlots {
            id_aud_sql: Some("only-one".to_string()),
            ..Default::default()
        };
        let err = slots.decode(EntityKind::SqlQuery).unwrap_err();
        assert!(matches!(err, CoreError::InvalidEdge(_)));
    }

    #[test]
    fn decode_rejects_overpopulated_slots() {
        let slots = EdgeSlots {
            id_aud_sql: Some("a".to_string()),
            id_aud_report: Some("b".to_string()),
            id_aud_fv: Some("c".to_string()),
        };
        let err = slots.decode(EntityKind::SqlQuery).unwrap_err();
        assert!(matches!(err, CoreError::InvalidEdge(_)));
    }
}
