//! Structural equivalence of template records
//!
//! Two records are equivalent when they may merge into one stack: every field
//! that shapes the applied result matches. The genome head variant path is a
//! render detail and is not compared; a merged stack keeps the receiving
//! stack's path. Checks run cheapest first and stop at the first mismatch.
//! Records of different variants are never equivalent.

use crate::records::{
    CognitiveRecord, ConditionEntry, GeneticRecord, SkillSet, TemplateRecord, TrainedBehaviorMap,
};

/// Whether two records may share one inventory stack
pub fn are_equivalent(a: &TemplateRecord, b: &TemplateRecord) -> bool {
    match (a, b) {
        (TemplateRecord::Genetic(a), TemplateRecord::Genetic(b)) => genetic_equivalent(a, b),
        (TemplateRecord::Cognitive(a), TemplateRecord::Cognitive(b)) => cognitive_equivalent(a, b),
        _ => false,
    }
}

pub fn genetic_equivalent(a: &GeneticRecord, b: &GeneticRecord) -> bool {
    // Scalars and single references
    a.gender == b.gender
        && a.crown_type == b.crown_type
        && a.skin_pigment == b.skin_pigment
        && a.hair_color == b.hair_color
        && a.source_label == b.source_label
        && a.kind == b.kind
        && a.body_type == b.body_type
        && a.hair == b.hair
        && a.alien == b.alien
        // Collections
        && a.traits == b.traits
        && conditions_equivalent(&a.conditions, &b.conditions)
}

pub fn cognitive_equivalent(a: &CognitiveRecord, b: &CognitiveRecord) -> bool {
    a.is_animal == b.is_animal
        && a.source_label == b.source_label
        && a.kind == b.kind
        && a.child_backstory == b.child_backstory
        && a.adult_backstory == b.adult_backstory
        && a.belief_system == b.belief_system
        && training_equivalent(&a.trained_behaviors, &b.trained_behaviors)
        && skills_equivalent(&a.skills, &b.skills)
        && conditions_equivalent(&a.conditions, &b.conditions)
}

/// Condition lists compared as multisets: order of acquisition is ignored
pub fn conditions_equivalent(a: &[ConditionEntry], b: &[ConditionEntry]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&ConditionEntry> = a.iter().collect();
    let mut b: Vec<&ConditionEntry> = b.iter().collect();
    a.sort_by(|x, y| x.canonical_cmp(y));
    b.sort_by(|x, y| x.canonical_cmp(y));
    a == b
}

/// Skills compared in definition-index order
pub fn skills_equivalent(a: &SkillSet, b: &SkillSet) -> bool {
    a.len() == b.len() && a.sorted() == b.sorted()
}

/// Same trainables, each with the same learned flag and step count
pub fn training_equivalent(a: &TrainedBehaviorMap, b: &TrainedBehaviorMap) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(def, state)| b.get(&def.name).is_some_and(|other| other == *state))
}
