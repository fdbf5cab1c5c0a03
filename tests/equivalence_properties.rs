//! Property tests for template equivalence

use bio_templates::defs::DefCatalog;
use bio_templates::equivalence::are_equivalent;
use bio_templates::records::{
    CognitiveRecord, ConditionEntry, GeneticRecord, Passion, SkillEntry, TemplateRecord,
    TraitEntry,
};
use proptest::prelude::*;

const TRAITS: [&str; 3] = ["Kind", "Brawler", "Industriousness"];
const CONDITIONS: [&str; 3] = ["Scar", "Bad Back", "Clone Sickness"];
const SKILLS: [&str; 4] = ["Shooting", "Melee", "Construction", "Medicine"];

fn catalog() -> DefCatalog {
    DefCatalog::from_toml_str(include_str!("../data/defs/base.toml")).unwrap()
}

fn genome(
    catalog: &DefCatalog,
    traits: &[usize],
    conditions: &[(usize, f32)],
    pigment: f32,
) -> TemplateRecord {
    let mut record = GeneticRecord::new("Anna", catalog.kinds.get("Colonist").unwrap());
    record.skin_pigment = pigment;
    record.traits = traits
        .iter()
        .map(|&i| TraitEntry::new(catalog.traits.get(TRAITS[i]).unwrap(), 0))
        .collect();
    record.conditions = conditions
        .iter()
        .map(|&(i, severity)| ConditionEntry::new(catalog.conditions.get(CONDITIONS[i]).unwrap(), severity))
        .collect();
    record.into()
}

fn brain(catalog: &DefCatalog, skills: &[(usize, i32)]) -> TemplateRecord {
    let mut record = CognitiveRecord::new("Anna", catalog.kinds.get("Colonist").unwrap());
    for &(i, level) in skills {
        record
            .skills
            .insert(SkillEntry::new(catalog.skills.get(SKILLS[i]).unwrap(), level, Passion::None));
    }
    record.into()
}

proptest! {
    #[test]
    fn genome_equivalence_is_reflexive(
        traits in prop::collection::vec(0usize..3, 0..4),
        conditions in prop::collection::vec((0usize..3, 0.0f32..1.0), 0..4),
        pigment in 0.0f32..1.0,
    ) {
        let catalog = catalog();
        let record = genome(&catalog, &traits, &conditions, pigment);
        prop_assert!(are_equivalent(&record, &record.clone()));
    }

    #[test]
    fn genome_equivalence_is_symmetric(
        traits_a in prop::collection::vec(0usize..3, 0..3),
        traits_b in prop::collection::vec(0usize..3, 0..3),
        conditions_a in prop::collection::vec((0usize..3, 0.0f32..1.0), 0..3),
        conditions_b in prop::collection::vec((0usize..3, 0.0f32..1.0), 0..3),
    ) {
        let catalog = catalog();
        let a = genome(&catalog, &traits_a, &conditions_a, 0.5);
        let b = genome(&catalog, &traits_b, &conditions_b, 0.5);
        prop_assert_eq!(are_equivalent(&a, &b), are_equivalent(&b, &a));
    }

    #[test]
    fn condition_order_never_matters(
        conditions in prop::collection::vec((0usize..3, 0.0f32..1.0), 0..5),
    ) {
        let catalog = catalog();
        let mut reversed = conditions.clone();
        reversed.reverse();
        let a = genome(&catalog, &[0], &conditions, 0.5);
        let b = genome(&catalog, &[0], &reversed, 0.5);
        prop_assert!(are_equivalent(&a, &b));
    }

    #[test]
    fn brain_equivalence_is_symmetric(
        skills_a in prop::collection::vec((0usize..4, 0i32..20), 0..4),
        skills_b in prop::collection::vec((0usize..4, 0i32..20), 0..4),
    ) {
        let catalog = catalog();
        let a = brain(&catalog, &skills_a);
        let b = brain(&catalog, &skills_b);
        prop_assert_eq!(are_equivalent(&a, &b), are_equivalent(&b, &a));
        prop_assert!(are_equivalent(&a, &a.clone()));
    }
}
