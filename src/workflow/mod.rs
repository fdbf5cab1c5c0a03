//! Target-validation workflow
//!
//! An actor picks a template item, then a target subject. The workflow
//! checks feasibility against the host world and either hands a request to
//! the dispatch gateway or reports why it cannot proceed.

pub mod dispatch;
pub mod eligibility;
pub mod state;
pub mod validation;
pub mod world;

pub use dispatch::{DispatchGateway, DispatchRequest, JobKind, WorkOrderQueue};
pub use eligibility::{StandardEligibility, SubjectEligibility};
pub use state::{ApplyTemplateWorkflow, CommitOutcome, IgnoreReason, PendingSelection, TargetFilter, WorkflowState};
pub use validation::{validate, Rejection, ValidationOutcome};
pub use world::{Actor, HoldingLocation, RejectionFeedback, ReservationTarget, Subject, WorldView};
