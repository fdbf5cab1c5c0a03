//! Subject eligibility - the first feasibility check

use super::world::Subject;
use crate::core::config::TemplateConfig;
use crate::records::TemplateRecord;

/// Decides whether a record may be applied to a subject at all.
///
/// Returns the user-facing reason on failure.
pub trait SubjectEligibility {
    fn check(&self, subject: &Subject, record: &TemplateRecord) -> Result<(), String>;
}

/// Eligibility rules used by the standard application flow
pub struct StandardEligibility<'a> {
    config: &'a TemplateConfig,
}

impl<'a> StandardEligibility<'a> {
    pub fn new(config: &'a TemplateConfig) -> Self {
        Self { config }
    }
}

impl SubjectEligibility for StandardEligibility<'_> {
    fn check(&self, subject: &Subject, record: &TemplateRecord) -> Result<(), String> {
        let noun = record.variant().noun();
        let Some(kind) = record.kind().filter(|_| record.is_valid()) else {
            return Err(format!("The {} is blank and cannot be applied", noun));
        };

        if subject.is_dead {
            return Err(format!("{} is dead", subject.label));
        }

        if record.is_animal() != subject.is_animal {
            return Err(if record.is_animal() {
                format!("An animal {} cannot be applied to {}", noun, subject.label)
            } else {
                format!("{} cannot take a humanlike {}", subject.label, noun)
            });
        }

        // Animals only accept templates of their own kind
        let kind_must_match = matches!(record, TemplateRecord::Genetic(_)) || subject.is_animal;
        if kind_must_match && kind.name != subject.kind {
            return Err(format!("{} is not of kind {}", subject.label, kind.race_label));
        }

        if matches!(record, TemplateRecord::Cognitive(_))
            && self.config.brain_templating_requires_clone
            && !subject.is_clone
        {
            return Err(format!("{} is not a clone", subject.label));
        }

        Ok(())
    }
}
