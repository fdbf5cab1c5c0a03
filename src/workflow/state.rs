//! The apply-template targeting state machine
//!
//! ```text
//! Idle --begin--> AwaitingTargetSelection --commit--> Validating
//!   ^                     |                              |
//!   +------cancel---------+                              |
//!   +-----------------dispatched / rejected--------------+
//! ```
//!
//! Only the pending selection survives between events. Validation runs to
//! completion inside `commit`, so `Validating` is never observed from outside.

use super::dispatch::{DispatchGateway, DispatchRequest};
use super::eligibility::SubjectEligibility;
use super::validation::{validate, Rejection, ValidationOutcome};
use super::world::{Actor, RejectionFeedback, WorldView};
use crate::core::types::EntityId;
use crate::records::{RecordStack, RecordVariant};
use std::mem;

/// Who is applying which template item
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSelection {
    pub actor: Actor,
    pub template: EntityId,
    pub variant: RecordVariant,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    AwaitingTargetSelection(PendingSelection),
    Validating(PendingSelection),
}

/// Pre-filter offered to the targeting UI while a selection is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFilter {
    actor: EntityId,
}

impl TargetFilter {
    /// Only creatures the world knows as subjects, and never the actor itself
    pub fn accepts(&self, candidate: EntityId, world: &dyn WorldView) -> bool {
        candidate != self.actor && world.subject(candidate).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No selection was pending
    NotTargeting,
    /// The target failed the pre-filter
    FilteredOut,
    /// The commit named a different template item than the pending one
    TemplateMismatch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    Dispatched(DispatchRequest),
    Rejected(Rejection),
    /// Nothing happened; the state is unchanged
    Ignored(IgnoreReason),
}

#[derive(Debug, Default)]
pub struct ApplyTemplateWorkflow {
    state: WorkflowState,
}

impl ApplyTemplateWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, WorkflowState::Idle)
    }

    /// Start targeting with `template`. Replaces any selection in progress.
    pub fn begin(&mut self, actor: Actor, template: &RecordStack) -> TargetFilter {
        let filter = TargetFilter { actor: actor.id };
        if let WorkflowState::AwaitingTargetSelection(previous) = &self.state {
            tracing::debug!("[Workflow] {} restarted targeting", previous.actor.label);
        }
        self.state = WorkflowState::AwaitingTargetSelection(PendingSelection {
            actor,
            template: template.id,
            variant: template.record.variant(),
        });
        filter
    }

    /// Filter for the pending selection, if any
    pub fn filter(&self) -> Option<TargetFilter> {
        match &self.state {
            WorkflowState::AwaitingTargetSelection(pending) => Some(TargetFilter {
                actor: pending.actor.id,
            }),
            _ => None,
        }
    }

    /// Abandon the pending selection. Returns whether one existed.
    pub fn cancel(&mut self) -> bool {
        match mem::take(&mut self.state) {
            WorkflowState::AwaitingTargetSelection(_) => true,
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Commit `target` for the pending selection.
    ///
    /// On rejection the reason goes to `feedback`; on success exactly one
    /// request goes to `gateway`. Either way the workflow returns to idle.
    pub fn commit(
        &mut self,
        target: EntityId,
        template: &RecordStack,
        world: &dyn WorldView,
        eligibility: &dyn SubjectEligibility,
        feedback: &mut dyn RejectionFeedback,
        gateway: &mut dyn DispatchGateway,
    ) -> CommitOutcome {
        let WorkflowState::AwaitingTargetSelection(pending) = &self.state else {
            return CommitOutcome::Ignored(IgnoreReason::NotTargeting);
        };
        if pending.template != template.id {
            return CommitOutcome::Ignored(IgnoreReason::TemplateMismatch);
        }
        let filter = TargetFilter {
            actor: pending.actor.id,
        };
        if !filter.accepts(target, world) {
            return CommitOutcome::Ignored(IgnoreReason::FilteredOut);
        }
        let Some(subject) = world.subject(target) else {
            return CommitOutcome::Ignored(IgnoreReason::FilteredOut);
        };

        let pending = match mem::take(&mut self.state) {
            WorkflowState::AwaitingTargetSelection(pending) => pending,
            other => {
                self.state = other;
                return CommitOutcome::Ignored(IgnoreReason::NotTargeting);
            }
        };
        self.state = WorkflowState::Validating(pending.clone());

        let outcome = match validate(&pending.actor, &subject, template, world, eligibility) {
            ValidationOutcome::Rejected(rejection) => {
                let message = rejection.to_string();
                tracing::debug!(
                    "[Workflow] Rejected {} on {}: {}",
                    template.label_no_count(),
                    subject.label,
                    message
                );
                feedback.reject(&message);
                CommitOutcome::Rejected(rejection)
            }
            ValidationOutcome::Dispatch(request) => {
                tracing::debug!(
                    "[Workflow] {} will apply {} to {}",
                    pending.actor.label,
                    template.label_no_count(),
                    subject.label
                );
                gateway.submit(request.clone());
                CommitOutcome::Dispatched(request)
            }
        };

        self.state = WorkflowState::Idle;
        outcome
    }
}
