//! Dispatch requests and the gateway that schedules them

use crate::core::types::{EntityId, LocationId};
use crate::records::RecordVariant;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobKind {
    ApplyGenomeTemplate,
    ApplyBrainTemplate,
}

impl From<RecordVariant> for JobKind {
    fn from(variant: RecordVariant) -> Self {
        match variant {
            RecordVariant::Genetic => JobKind::ApplyGenomeTemplate,
            RecordVariant::Cognitive => JobKind::ApplyBrainTemplate,
        }
    }
}

/// A fully validated work order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub job: JobKind,
    pub actor: EntityId,
    pub subject: EntityId,
    pub template: EntityId,
    pub location: LocationId,
    /// Template items consumed; always one
    pub count: u32,
}

/// Accepts validated requests and owns everything that happens next
pub trait DispatchGateway {
    fn submit(&mut self, request: DispatchRequest);
}

/// Ordered work orders for one actor
#[derive(Debug, Clone, Default)]
pub struct WorkOrderQueue {
    current: Option<DispatchRequest>,
    queued: VecDeque<DispatchRequest>,
}

impl WorkOrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&DispatchRequest> {
        self.current.as_ref()
    }

    pub fn complete_current(&mut self) -> Option<DispatchRequest> {
        let done = self.current.take();
        self.current = self.queued.pop_front();
        done
    }

    pub fn len(&self) -> usize {
        self.queued.len() + usize::from(self.current.is_some())
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.queued.is_empty()
    }
}

impl DispatchGateway for WorkOrderQueue {
    fn submit(&mut self, request: DispatchRequest) {
        self.queued.push_back(request);
        if self.current.is_none() {
            self.current = self.queued.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(location: u32) -> DispatchRequest {
        DispatchRequest {
            job: JobKind::ApplyBrainTemplate,
            actor: EntityId::new(),
            subject: EntityId::new(),
            template: EntityId::new(),
            location: LocationId(location),
            count: 1,
        }
    }

    #[test]
    fn test_queue_order() {
        let mut queue = WorkOrderQueue::new();
        assert!(queue.is_idle());

        queue.submit(request(1));
        queue.submit(request(2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().location, LocationId(1));

        let done = queue.complete_current().unwrap();
        assert_eq!(done.location, LocationId(1));
        assert_eq!(queue.current().unwrap().location, LocationId(2));

        queue.complete_current();
        assert!(queue.is_idle());
    }

    #[test]
    fn test_job_kind_from_variant() {
        assert_eq!(JobKind::from(RecordVariant::Genetic), JobKind::ApplyGenomeTemplate);
        assert_eq!(JobKind::from(RecordVariant::Cognitive), JobKind::ApplyBrainTemplate);
    }
}
