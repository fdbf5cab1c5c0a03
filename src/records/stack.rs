//! Inventory stacks of template items

use super::TemplateRecord;
use crate::core::types::EntityId;
use crate::equivalence::are_equivalent;

/// A quantity of identical template items
#[derive(Debug, Clone)]
pub struct RecordStack {
    pub id: EntityId,
    pub quantity: u32,
    /// Player-given name; replaces the generated label when set
    pub custom_name: Option<String>,
    pub record: TemplateRecord,
}

impl RecordStack {
    pub fn new(record: impl Into<TemplateRecord>, quantity: u32) -> Self {
        Self {
            id: EntityId::new(),
            quantity: quantity.max(1),
            custom_name: None,
            record: record.into(),
        }
    }

    /// "Anna genome template", or the custom name if one was given
    pub fn label_no_count(&self) -> String {
        let noun = self.record.variant().noun();
        match (&self.custom_name, self.record.source_label()) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(source)) => format!("{} {}", source, noun),
            _ => noun.to_string(),
        }
    }

    pub fn label(&self) -> String {
        if self.quantity > 1 {
            format!("{} x{}", self.label_no_count(), self.quantity)
        } else {
            self.label_no_count()
        }
    }

    /// Whether `other` may merge into this stack
    pub fn can_stack_with(&self, other: &RecordStack) -> bool {
        self.id != other.id && are_equivalent(&self.record, &other.record)
    }

    /// Merge `other` into this stack. Hands it back if the records differ or
    /// the combined count would not fit.
    pub fn absorb(&mut self, other: RecordStack) -> Result<(), RecordStack> {
        if !self.can_stack_with(&other) {
            return Err(other);
        }
        match self.quantity.checked_add(other.quantity) {
            Some(total) => {
                self.quantity = total;
                Ok(())
            }
            None => Err(other),
        }
    }

    /// Split `count` items into a new stack.
    ///
    /// The new stack owns a deep copy of every record collection. Returns
    /// None when `count` is zero or would take the whole stack, in which case
    /// the caller should move this stack itself.
    pub fn split_off(&mut self, count: u32) -> Option<RecordStack> {
        if count == 0 || count >= self.quantity {
            return None;
        }
        self.quantity -= count;
        Some(RecordStack {
            id: EntityId::new(),
            quantity: count,
            custom_name: self.custom_name.clone(),
            record: self.record.clone(),
        })
    }
}
