//! Feasibility checks run when a target is committed
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. subject eligibility
//! 2. a holding location exists
//! 3. the actor can reserve and reach the subject
//! 4. the actor can reserve and reach the template item
//! 5. the actor can reserve and reach the holding location, unless the
//!    subject already occupies it

use super::dispatch::{DispatchRequest, JobKind};
use super::eligibility::SubjectEligibility;
use super::world::{Actor, ReservationTarget, Subject, WorldView};
use crate::records::RecordStack;
use std::fmt;

/// Why a committed target was turned down
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    Ineligible(String),
    NoHoldingLocation { animal: bool },
    SubjectUnreachable { actor: String, subject: String },
    TemplateUnreachable { actor: String, noun: &'static str },
    LocationUnreachable { actor: String, location: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Ineligible(reason) => f.write_str(reason),
            Rejection::NoHoldingLocation { animal: true } => f.write_str("No animal beds are available"),
            Rejection::NoHoldingLocation { animal: false } => f.write_str("No medical beds are available"),
            Rejection::SubjectUnreachable { actor, subject } => {
                write!(f, "{} can't reach/reserve {}", actor, subject)
            }
            Rejection::TemplateUnreachable { actor, noun } => {
                write!(f, "{} can't reach/reserve the {}", actor, noun)
            }
            Rejection::LocationUnreachable { actor, location } => {
                write!(f, "{} can't reach/reserve the {}", actor, location)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Dispatch(DispatchRequest),
    Rejected(Rejection),
}

/// Run every feasibility check for applying `template` to `subject`.
///
/// Pure: consults the world but never mutates anything.
pub fn validate(
    actor: &Actor,
    subject: &Subject,
    template: &RecordStack,
    world: &dyn WorldView,
    eligibility: &dyn SubjectEligibility,
) -> ValidationOutcome {
    match check_all(actor, subject, template, world, eligibility) {
        Ok(request) => ValidationOutcome::Dispatch(request),
        Err(rejection) => ValidationOutcome::Rejected(rejection),
    }
}

fn check_all(
    actor: &Actor,
    subject: &Subject,
    template: &RecordStack,
    world: &dyn WorldView,
    eligibility: &dyn SubjectEligibility,
) -> Result<DispatchRequest, Rejection> {
    eligibility
        .check(subject, &template.record)
        .map_err(Rejection::Ineligible)?;

    let location = world
        .find_holding_location(actor, subject)
        .ok_or(Rejection::NoHoldingLocation {
            animal: subject.is_animal,
        })?;

    if !world.can_reserve_and_reach(actor, ReservationTarget::Subject(subject.id)) {
        return Err(Rejection::SubjectUnreachable {
            actor: actor.label.clone(),
            subject: subject.label.clone(),
        });
    }

    if !world.can_reserve_and_reach(actor, ReservationTarget::Item(template.id)) {
        return Err(Rejection::TemplateUnreachable {
            actor: actor.label.clone(),
            noun: template.record.variant().noun(),
        });
    }

    let already_there = subject.resident_location == Some(location.id);
    if !already_there && !world.can_reserve_and_reach(actor, ReservationTarget::Location(location.id)) {
        return Err(Rejection::LocationUnreachable {
            actor: actor.label.clone(),
            location: location.label,
        });
    }

    Ok(DispatchRequest {
        job: JobKind::from(template.record.variant()),
        actor: actor.id,
        subject: subject.id,
        template: template.id,
        location: location.id,
        count: 1,
    })
}
