//! Template records
//!
//! A template is a snapshot of a living subject that can later be applied to
//! another one. Two variants exist:
//! - `GeneticRecord`: body plan, appearance, heritable traits
//! - `CognitiveRecord`: skills, backstories, trained behaviors
//!
//! Both carry the subject's acquired conditions.

pub mod cognitive;
pub mod condition;
pub mod describe;
pub mod genetic;
pub mod stack;

pub use cognitive::{CognitiveRecord, Passion, SkillEntry, SkillSet, TrainedBehaviorMap, TrainingState};
pub use condition::ConditionEntry;
pub use genetic::{AlienAppearance, CrownType, GeneticRecord, TraitEntry};
pub use stack::RecordStack;

use crate::defs::KindDef;
use std::sync::Arc;

/// Source label given to placeholder templates that were never sequenced
pub const BLANK_TEMPLATE_LABEL: &str = "Do Not Use This";

pub(crate) fn label_and_kind_valid(source_label: Option<&str>, kind: Option<&Arc<KindDef>>) -> bool {
    matches!(source_label, Some(label) if label != BLANK_TEMPLATE_LABEL) && kind.is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordVariant {
    Genetic,
    Cognitive,
}

impl RecordVariant {
    /// Item noun used in labels and messages
    pub fn noun(&self) -> &'static str {
        match self {
            RecordVariant::Genetic => "genome template",
            RecordVariant::Cognitive => "brain template",
        }
    }
}

#[derive(Debug, Clone)]
pub enum TemplateRecord {
    Genetic(GeneticRecord),
    Cognitive(CognitiveRecord),
}

impl TemplateRecord {
    pub fn variant(&self) -> RecordVariant {
        match self {
            TemplateRecord::Genetic(_) => RecordVariant::Genetic,
            TemplateRecord::Cognitive(_) => RecordVariant::Cognitive,
        }
    }

    pub fn source_label(&self) -> Option<&str> {
        match self {
            TemplateRecord::Genetic(r) => r.source_label.as_deref(),
            TemplateRecord::Cognitive(r) => r.source_label.as_deref(),
        }
    }

    pub fn kind(&self) -> Option<&Arc<KindDef>> {
        match self {
            TemplateRecord::Genetic(r) => r.kind.as_ref(),
            TemplateRecord::Cognitive(r) => r.kind.as_ref(),
        }
    }

    pub fn conditions(&self) -> &[ConditionEntry] {
        match self {
            TemplateRecord::Genetic(r) => &r.conditions,
            TemplateRecord::Cognitive(r) => &r.conditions,
        }
    }

    pub fn conditions_mut(&mut self) -> &mut Vec<ConditionEntry> {
        match self {
            TemplateRecord::Genetic(r) => &mut r.conditions,
            TemplateRecord::Cognitive(r) => &mut r.conditions,
        }
    }

    /// Whether this template may be applied to anything
    pub fn is_valid(&self) -> bool {
        match self {
            TemplateRecord::Genetic(r) => r.is_valid(),
            TemplateRecord::Cognitive(r) => r.is_valid(),
        }
    }

    /// Whether the source subject was an animal
    pub fn is_animal(&self) -> bool {
        match self {
            TemplateRecord::Genetic(r) => !r.is_humanoid(),
            TemplateRecord::Cognitive(r) => r.is_animal,
        }
    }
}

impl From<GeneticRecord> for TemplateRecord {
    fn from(record: GeneticRecord) -> Self {
        TemplateRecord::Genetic(record)
    }
}

impl From<CognitiveRecord> for TemplateRecord {
    fn from(record: CognitiveRecord) -> Self {
        TemplateRecord::Cognitive(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colonist() -> Arc<KindDef> {
        Arc::new(KindDef {
            name: "Colonist".into(),
            label: "colonist".into(),
            race_label: "Human".into(),
            is_animal: false,
        })
    }

    #[test]
    fn test_validity_rule() {
        assert!(label_and_kind_valid(Some("Anna"), Some(&colonist())));
        assert!(!label_and_kind_valid(None, Some(&colonist())));
        assert!(!label_and_kind_valid(Some(BLANK_TEMPLATE_LABEL), Some(&colonist())));
        assert!(!label_and_kind_valid(Some("Anna"), None));
    }

    #[test]
    fn test_variant_and_noun() {
        let genetic: TemplateRecord = GeneticRecord::new("Anna", colonist()).into();
        let cognitive: TemplateRecord = CognitiveRecord::new("Anna", colonist()).into();
        assert_eq!(genetic.variant(), RecordVariant::Genetic);
        assert_eq!(cognitive.variant().noun(), "brain template");
        assert_eq!(genetic.source_label(), Some("Anna"));
        assert!(genetic.is_valid() && cognitive.is_valid());
    }
}
