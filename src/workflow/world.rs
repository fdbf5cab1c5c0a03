//! What the workflow needs to know about the host world
//!
//! The host owns entities, beds and reservations. The workflow only sees
//! read-only snapshots and yes/no feasibility answers.

use crate::core::types::{EntityId, LocationId};

/// The entity carrying out the application
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: EntityId,
    pub label: String,
}

impl Actor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            label: label.into(),
        }
    }
}

/// Snapshot of a creature a template could be applied to
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: EntityId,
    pub label: String,
    /// Kind definition name
    pub kind: String,
    pub is_animal: bool,
    pub is_clone: bool,
    pub is_dead: bool,
    /// Holding location the subject currently occupies
    pub resident_location: Option<LocationId>,
}

impl Subject {
    pub fn new(label: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            label: label.into(),
            kind: kind.into(),
            is_animal: false,
            is_clone: false,
            is_dead: false,
            resident_location: None,
        }
    }
}

/// Bed (or animal bed) the subject lies in during the procedure
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingLocation {
    pub id: LocationId,
    pub label: String,
}

/// Something an actor must reserve and reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationTarget {
    Subject(EntityId),
    Item(EntityId),
    Location(LocationId),
}

/// Read-only view of the host simulation
pub trait WorldView {
    /// The subject with this id, if it is a creature that can be targeted
    fn subject(&self, id: EntityId) -> Option<Subject>;

    /// A free holding location suitable for the subject
    fn find_holding_location(&self, actor: &Actor, subject: &Subject) -> Option<HoldingLocation>;

    /// Whether the actor can currently reserve the target and path to it
    fn can_reserve_and_reach(&self, actor: &Actor, target: ReservationTarget) -> bool;
}

/// User-facing rejection: shows the message and plays the reject cue
pub trait RejectionFeedback {
    fn reject(&mut self, message: &str);
}
