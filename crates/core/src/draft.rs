//! State machine for assembling a dependency edge in the creation/edit flow.
//!
//! The dialogs pick an origin kind, one origin record, a destination kind,
//! and one or more destination records. Because the slot encoding supports
//! only one reference per kind, switching the origin kind mid-flow must
//! clear everything downstream — otherwise stale selections from a
//! different kind could leak into the saved edge. The draft owns those
//! reset rules; the save operation is only reachable from [`DraftState::Ready`].

use crate::entity::{EntityKind, EntityRef};
use crate::priority::PriorityLevel;

/// Observable progress of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    NoOrigin,
    OriginChosen,
    Ready,
}

/// An in-progress dependency selection.
#[derive(Debug, Clone, Default)]
pub struct EdgeDraft {
    origin_kind: Option<EntityKind>,
    origin: Option<EntityRef>,
    destination_kind: Option<EntityKind>,
    destinations: Vec<EntityRef>,
    priority: Option<PriorityLevel>,
}

impl EdgeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state: `Ready` requires an origin and at least one destination.
    pub fn state(&self) -> DraftState {
        if self.origin.is_none() {
            DraftState::NoOrigin
        } else if self.destinations.is_empty() {
            DraftState::OriginChosen
        } else {
            DraftState::Ready
        }
    }

    /// Choose the origin kind. Changing it clears the chosen origin, the
    /// destination kind, and all destinations — destination choices may
    /// have assumed the previous origin kind.
    pub fn set_origin_kind(&mut self, kind: EntityKind) {
        if self.origin_kind == Some(kind) {
            return;
        }
        self.origin_kind = Some(kind);
        self.origin = None;
        self.destination_kind = None;
        self.destinations.clear();
    }

    /// Choose the origin record; its kind must match the chosen origin kind.
    /// Returns `false` (and leaves the draft unchanged) otherwise.
    pub fn set_origin(&mut self, origin: EntityRef) -> bool {
        if self.origin_kind != Some(origin.kind) {
            return false;
        }
        self.origin = Some(origin);
        true
    }

    /// Choose the destination kind. Changing it clears the destinations.
    pub fn set_destination_kind(&mut self, kind: EntityKind) {
        if self.destination_kind == Some(kind) {
            return;
        }
        self.destination_kind = Some(kind);
        self.destinations.clear();
    }

    /// Add a destination record; its kind must match the chosen destination
    /// kind. Duplicate refs are ignored.
    pub fn add_destination(&mut self, destination: EntityRef) -> bool {
        if self.destination_kind != Some(destination.kind) {
            return false;
        }
        if !self.destinations.contains(&destination) {
            self.destinations.push(destination);
        }
        true
    }

    pub fn remove_destination(&mut self, destination: &EntityRef) {
        self.destinations.retain(|d| d != destination);
    }

    pub fn set_priority(&mut self, priority: Option<PriorityLevel>) {
        self.priority = priority;
    }

    /// Consume the draft into its save payload: `(origin, destinations,
    /// priority)`. Only available from `Ready`.
    pub fn into_payload(self) -> Option<(EntityRef, Vec<EntityRef>, Option<PriorityLevel>)> {
        if self.state() != DraftState::Ready {
            return None;
        }
        // state() == Ready guarantees the origin is set.
        let origin = self.origin?;
        Some((origin, self.destinations, self.priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql(id: &str) -> EntityRef {
        EntityRef::new(EntityKind::SqlQuery, id)
    }

    fn report(id: &str) -> EntityRef {
        EntityRef::new(EntityKind::Report, id)
    }

    #[test]
    fn starts_without_origin() {
        assert_eq!(EdgeDraft::new().state(), DraftState::NoOrigin);
    }

    #[test]
    fn ready_requires_origin_and_one_destination() {
        let mut draft = EdgeDraft::new();
        draft.set_origin_kind(EntityKind::SqlQuery);
        assert!(draft.set_origin(sql("GLB001")));
        assert_eq!(draft.state(), DraftState::OriginChosen);

        draft.set_destination_kind(EntityKind::Report);
        assert!(draft.add_destination(report("7")));
        assert_eq!(draft.state(), DraftState::Ready);
    }

    #[test]
    fn changing_origin_kind_resets_everything_downstream() {
        let mut draft = EdgeDraft::new();
        draft.set_origin_kind(EntityKind::SqlQuery);
        draft.set_origin(sql("GLB001"));
        draft.set_destination_kind(EntityKind::Report);
        draft.add_destination(report("7"));
        assert_eq!(draft.state(), DraftState::Ready);

        draft.set_origin_kind(EntityKind::Report);
        assert_eq!(draft.state(), DraftState::NoOrigin);
        assert!(draft.into_payload().is_none());
    }

    #[test]
    fn reselecting_the_same_origin_kind_keeps_selections() {
        let mut draft = EdgeDraft::new();
        draft.set_origin_kind(EntityKind::SqlQuery);
        draft.set_origin(sql("GLB001"));
        draft.set_destination_kind(EntityKind::Report);
        draft.add_destination(report("7"));

        draft.set_origin_kind(EntityKind::SqlQuery);
        assert_eq!(draft.state(), DraftState::Ready);
    }

    #[test]
    fn changing_destination_kind_clears_destinations_only() {
        let mut draft = EdgeDraft::new();
        draft.set_origin_kind(EntityKind::SqlQuery);
        draft.set_origin(sql("GLB001"));
        draft.set_destination_kind(EntityKind::Report);
        draft.add_destination(report("7"));

        draft.set_destination_kind(EntityKind::VisualFormula);
        assert_eq!(draft.state(), DraftState::OriginChosen);
    }

    #[test]
    fn rejects_records_of_the_wrong_kind() {
        let mut draft = EdgeDraft::new();
        draft.set_origin_kind(EntityKind::SqlQuery);
        assert!(!draft.set_origin(report("7")));

        draft.set_origin(sql("GLB001"));
        draft.set_destination_kind(EntityKind::Report);
        assert!(!draft.add_destination(sql("GLB002")));
    }

    #[test]
    fn duplicate_destinations_are_ignored() {
        let mut draft = EdgeDraft::new();
        draft.set_origin_kind(EntityKind::SqlQuery);
        draft.set_origin(sql("GLB001"));
        draft.set_destination_kind(EntityKind::Report);
        draft.add_destination(report("7"));
        draft.add_destination(report("7"));

        let (_, destinations, _) = draft.into_payload().unwrap();
        assert_eq!(destinations.len(), 1);
    }

    #[test]
    fn payload_carries_priority() {
        let mut draft = EdgeDraft::new();
        draft.set_origin_kind(EntityKind::SqlQuery);
        draft.set_origin(sql("GLB001"));
        draft.set_destination_kind(EntityKind::Report);
        draft.add_destination(report("7"));
        draft.set_priority(Some(PriorityLevel::High));

        let (origin, destinations, priority) = draft.into_payload().unwrap();
        assert_eq!(origin, sql("GLB001"));
        assert_eq!(destinations, vec![report("7")]);
        assert_eq!(priority, Some(PriorityLevel::High));
    }

    #[test]
    fn removing_last_destination_leaves_ready_state() {
        let mut draft = EdgeDraft::new();
        draft.set_origin_kind(EntityKind::SqlQuery);
        draft.set_origin(sql("GLB001"));
        draft.set_destination_kind(EntityKind::Report);
        draft.add_destination(report("7"));
        draft.remove_destination(&report("7"));
        assert_eq!(draft.state(), DraftState::OriginChosen);
    }
}
