//! Description text for template items
//!
//! Produces the detailed description and the short inspect panel text.
//! Headings are plain English; localization happens in the host.

use super::condition::{sorted_conditions, ConditionEntry};
use super::{CognitiveRecord, GeneticRecord, TemplateRecord};

/// Shown in place of the field listing for templates that cannot be used
pub const BLANK_TEMPLATE_DESCRIPTION: &str =
    "This template is blank. It was never sequenced from a living subject and cannot be used.";

/// Full description: the item's base description followed by record fields
pub fn describe(record: &TemplateRecord, base_description: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    match record {
        TemplateRecord::Genetic(r) => describe_genetic(r, base_description, &mut lines),
        TemplateRecord::Cognitive(r) => describe_cognitive(r, base_description, &mut lines),
    }
    finish(lines)
}

/// Short summary for the selection panel
pub fn inspect(record: &TemplateRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(kind) = record.kind() {
        lines.push(format!("Race: {}", kind.race_label));
    }
    match record {
        TemplateRecord::Genetic(r) => {
            if r.kind.is_some() {
                lines.push(format!("Gender: {}", r.gender.label()));
            }
        }
        TemplateRecord::Cognitive(r) => {
            if let Some(child) = &r.child_backstory {
                lines.push(format!("Childhood: {}", capitalize(&child.title)));
            }
            if let Some(adult) = &r.adult_backstory {
                lines.push(format!("Adulthood: {}", capitalize(&adult.title)));
            }
        }
    }
    if !record.conditions().is_empty() {
        lines.push(format!("Conditions: {}", record.conditions().len()));
    }

    finish(lines)
}

fn describe_genetic(record: &GeneticRecord, base: &str, lines: &mut Vec<String>) {
    let (Some(label), Some(kind), true) = (&record.source_label, &record.kind, record.is_valid())
    else {
        lines.push(BLANK_TEMPLATE_DESCRIPTION.to_string());
        return;
    };

    lines.push(base.to_string());
    lines.push(String::new());
    lines.push(String::new());
    lines.push(format!("Name: {}", label));
    lines.push(format!("Race: {}", kind.race_label));
    lines.push(format!("Gender: {}", record.gender.label()));

    if let Some(hair) = &record.hair {
        if hair.tex_path.is_some() {
            lines.push(format!("Hair: {}", hair.label));
        }
    }

    if !record.traits.is_empty() {
        lines.push("Traits:".to_string());
        for entry in &record.traits {
            lines.push(format!("    {}", capitalize(entry.label())));
        }
    }

    push_conditions(&record.conditions, lines);
}

fn describe_cognitive(record: &CognitiveRecord, base: &str, lines: &mut Vec<String>) {
    if !record.is_valid() {
        lines.push(BLANK_TEMPLATE_DESCRIPTION.to_string());
        return;
    }

    lines.push(base.to_string());
    lines.push(String::new());

    if let Some(label) = &record.source_label {
        lines.push(format!("Name: {}", label));
    }
    if let Some(kind) = &record.kind {
        lines.push(format!("Race: {}", kind.race_label));
    }
    if let Some(child) = &record.child_backstory {
        lines.push(format!("Childhood: {}", capitalize(&child.title)));
    }
    if let Some(adult) = &record.adult_backstory {
        lines.push(format!("Adulthood: {}", capitalize(&adult.title)));
    }
    if let Some(belief) = &record.belief_system {
        lines.push(format!("Scanned belief system: {}", belief.label));
    }

    if record.is_animal {
        lines.push("Training:".to_string());
        for (def, state) in record.trained_behaviors.sorted() {
            lines.push(format!("    {}: {}", capitalize(&def.label), state.steps));
        }
    } else if !record.skills.is_empty() {
        lines.push("Skills:".to_string());
        for skill in record.skills.sorted() {
            lines.push(skill.display_line());
        }
    }

    push_conditions(&record.conditions, lines);
}

fn push_conditions(conditions: &[ConditionEntry], lines: &mut Vec<String>) {
    if conditions.is_empty() {
        return;
    }
    lines.push("Conditions:".to_string());
    for entry in sorted_conditions(conditions) {
        lines.push(format!("    {}", capitalize(&entry.display_label())));
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn finish(lines: Vec<String>) -> String {
    lines.join("\n").trim_end_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Gender;
    use crate::defs::{
        BackstoryDef, BackstorySlot, ConditionDef, HairDef, KindDef, SkillDef, TrainableDef,
        TraitDef, TraitDegree,
    };
    use crate::records::{Passion, SkillEntry, TraitEntry, TrainingState, BLANK_TEMPLATE_LABEL};
    use std::sync::Arc;

    fn kind(name: &str, is_animal: bool) -> Arc<KindDef> {
        Arc::new(KindDef {
            name: name.into(),
            label: name.to_lowercase(),
            race_label: name.into(),
            is_animal,
        })
    }

    #[test]
    fn test_blank_genome_shows_placeholder_only() {
        let text = describe(&GeneticRecord::blank().into(), "A genome template.");
        assert_eq!(text, BLANK_TEMPLATE_DESCRIPTION);
    }

    #[test]
    fn test_invalid_brain_shows_placeholder_only() {
        let sentinel = crate::records::CognitiveRecord::new(BLANK_TEMPLATE_LABEL, kind("Human", false));
        assert_eq!(describe(&sentinel.into(), "A brain template."), BLANK_TEMPLATE_DESCRIPTION);

        let mut kindless = crate::records::CognitiveRecord::new("Anna", kind("Human", false));
        kindless.kind = None;
        assert_eq!(describe(&kindless.into(), "A brain template."), BLANK_TEMPLATE_DESCRIPTION);

        let blank = crate::records::CognitiveRecord::blank();
        assert_eq!(describe(&blank.into(), "A brain template."), BLANK_TEMPLATE_DESCRIPTION);
    }

    #[test]
    fn test_genome_description_lists_fields() {
        let mut record = GeneticRecord::new("Anna", kind("Human", false));
        record.gender = Gender::Female;
        record.hair = Some(Arc::new(HairDef {
            name: "Bob".into(),
            label: "bob".into(),
            tex_path: Some("Things/Hair/Bob".into()),
        }));
        record.traits.push(TraitEntry::new(
            Arc::new(TraitDef {
                name: "Kind".into(),
                degrees: vec![TraitDegree { degree: 0, label: "kind".into() }],
            }),
            0,
        ));
        record.conditions.push(crate::records::ConditionEntry::new(
            Arc::new(ConditionDef {
                name: "Scar".into(),
                label: "scar".into(),
            }),
            0.4,
        ));

        let text = describe(&record.into(), "A genome template.");
        let expected = "A genome template.\n\n\nName: Anna\nRace: Human\nGender: Female\nHair: bob\nTraits:\n    Kind\nConditions:\n    Scar";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_brain_description_sorts_skills() {
        let mut record = crate::records::CognitiveRecord::new("Anna", kind("Human", false));
        record.child_backstory = Some(Arc::new(BackstoryDef {
            identifier: "Urchin12".into(),
            title: "urchin".into(),
            slot: BackstorySlot::Childhood,
        }));
        for (name, index, level) in [("Medicine", 5, 3), ("Shooting", 0, 8)] {
            record.skills.insert(SkillEntry::new(
                Arc::new(SkillDef {
                    name: name.into(),
                    label: name.into(),
                    index,
                }),
                level,
                Passion::None,
            ));
        }

        let text = describe(&record.into(), "A brain template.");
        assert!(text.contains("Childhood: Urchin"));
        let shooting = text.find("Shooting: 8").unwrap();
        let medicine = text.find("Medicine: 3").unwrap();
        assert!(shooting < medicine);
    }

    #[test]
    fn test_animal_brain_lists_training() {
        let mut record = crate::records::CognitiveRecord::new("Rex", kind("Husky", true));
        record.trained_behaviors.set(
            Arc::new(TrainableDef {
                name: "Obedience".into(),
                label: "obedience".into(),
                index: 0,
            }),
            TrainingState { learned: true, steps: 3 },
        );

        let text = describe(&record.into(), "A brain template.");
        assert!(text.contains("Training:\n    Obedience: 3"));
        assert!(!text.contains("Skills:"));
    }

    #[test]
    fn test_inspect_summary() {
        let mut record = GeneticRecord::new("Anna", kind("Human", false));
        record.gender = Gender::Male;
        let text = inspect(&record.into());
        assert_eq!(text, "Race: Human\nGender: Male");
    }
}
