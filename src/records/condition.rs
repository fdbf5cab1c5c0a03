//! Acquired conditions carried over onto whatever a template is applied to

use crate::defs::{BodyPartDef, ConditionDef};
use std::cmp::Ordering;
use std::sync::Arc;

/// One acquired condition on the template's source subject
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionEntry {
    pub def: Arc<ConditionDef>,
    /// 0.0 = trace, 1.0 = fully developed
    pub severity: f32,
    /// None = whole body
    pub body_part: Option<Arc<BodyPartDef>>,
    /// Where the condition came from (surgery, event, ...)
    pub source: Option<String>,
}

impl ConditionEntry {
    pub fn new(def: Arc<ConditionDef>, severity: f32) -> Self {
        Self {
            def,
            severity,
            body_part: None,
            source: None,
        }
    }

    pub fn on_part(mut self, part: Arc<BodyPartDef>) -> Self {
        self.body_part = Some(part);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Total order used to compare condition lists as multisets.
    ///
    /// Display label first, then the remaining fields so entries sharing a
    /// label still sort the same way regardless of input order.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.def
            .label
            .cmp(&other.def.label)
            .then_with(|| self.def.name.cmp(&other.def.name))
            .then_with(|| {
                let a = self.body_part.as_ref().map(|p| p.name.as_str());
                let b = other.body_part.as_ref().map(|p| p.name.as_str());
                a.cmp(&b)
            })
            .then_with(|| self.severity.total_cmp(&other.severity))
            .then_with(|| self.source.cmp(&other.source))
    }

    /// "scar (left arm)" style label
    pub fn display_label(&self) -> String {
        match &self.body_part {
            Some(part) => format!("{} ({})", self.def.label, part.label),
            None => self.def.label.clone(),
        }
    }
}

/// Borrow a condition list in canonical order
pub fn sorted_conditions(conditions: &[ConditionEntry]) -> Vec<&ConditionEntry> {
    let mut sorted: Vec<&ConditionEntry> = conditions.iter().collect();
    sorted.sort_by(|a, b| a.canonical_cmp(b));
    sorted
}
