//! Save/load integration tests against the base catalog

use bio_templates::core::config::TemplateConfig;
use bio_templates::core::error::TemplateError;
use bio_templates::core::types::{Gender, Rgb};
use bio_templates::defs::{BackstorySlot, DefCatalog};
use bio_templates::equivalence::are_equivalent;
use bio_templates::persistence::{PersistenceAdapter, FALLBACK_HAIR};
use bio_templates::records::{
    CognitiveRecord, ConditionEntry, GeneticRecord, Passion, RecordStack, SkillEntry,
    TemplateRecord, TraitEntry, TrainingState,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn catalog() -> DefCatalog {
    DefCatalog::from_toml_str(include_str!("../data/defs/base.toml")).unwrap()
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn anna_genome(catalog: &DefCatalog) -> GeneticRecord {
    let mut record = GeneticRecord::new("Anna", catalog.kinds.get("Colonist").unwrap());
    record.gender = Gender::Female;
    record.hair = catalog.hairs.get("Bob");
    record.hair_color = Rgb::new(0.4, 0.2, 0.1);
    record.skin_pigment = 0.35;
    record.body_type = catalog.body_types.get("Thin");
    record.head_variant_path = Some("Heads/Female/Narrow".into());
    record.traits = vec![
        TraitEntry::new(catalog.traits.get("Kind").unwrap(), 0),
        TraitEntry::new(catalog.traits.get("Industriousness").unwrap(), 2),
    ];
    record.conditions = vec![
        ConditionEntry::new(catalog.conditions.get("Scar").unwrap(), 0.2)
            .on_part(catalog.body_parts.get("Torso").unwrap()),
        ConditionEntry::new(catalog.conditions.get("Bad Back").unwrap(), 0.6),
    ];
    record
}

fn anna_brain(catalog: &DefCatalog) -> CognitiveRecord {
    let mut record = CognitiveRecord::new("Anna", catalog.kinds.get("Colonist").unwrap());
    record.child_backstory = catalog.backstories.get("Urchin");
    record.adult_backstory = catalog.backstories.get("Medic");
    record.belief_system = catalog.belief_systems.get("Transhumanist");
    record.skills.insert(SkillEntry::new(catalog.skills.get("Medicine").unwrap(), 12, Passion::Major));
    record.skills.insert(SkillEntry::new(catalog.skills.get("Shooting").unwrap(), 4, Passion::None));
    record
        .conditions
        .push(ConditionEntry::new(catalog.conditions.get("Clone Sickness").unwrap(), 1.0));
    record
}

#[test]
fn test_genome_round_trip_is_equivalent() {
    let catalog = catalog();
    let config = TemplateConfig::default();
    let adapter = PersistenceAdapter::new(&catalog, &config);
    let record: TemplateRecord = anna_genome(&catalog).into();

    let json = adapter.to_json(&record).unwrap();
    let loaded = adapter.from_json(&json, &mut rng()).unwrap();

    assert!(loaded.report.is_clean(), "{:?}", loaded.report);
    assert!(are_equivalent(&record, &loaded.value));
    let TemplateRecord::Genetic(genome) = &loaded.value else {
        panic!("expected a genome template");
    };
    assert_eq!(genome.head_variant_path.as_deref(), Some("Heads/Female/Narrow"));
}

#[test]
fn test_brain_round_trip_is_equivalent() {
    let catalog = catalog();
    let config = TemplateConfig::default();
    let adapter = PersistenceAdapter::new(&catalog, &config);
    let record: TemplateRecord = anna_brain(&catalog).into();

    let json = adapter.to_json(&record).unwrap();
    let loaded = adapter.from_json(&json, &mut rng()).unwrap();

    assert!(loaded.report.is_clean(), "{:?}", loaded.report);
    assert!(are_equivalent(&record, &loaded.value));
}

#[test]
fn test_animal_brain_training_round_trip() {
    let catalog = catalog();
    let config = TemplateConfig::default();
    let adapter = PersistenceAdapter::new(&catalog, &config);

    let mut record = CognitiveRecord::new("Rex", catalog.kinds.get("Husky").unwrap());
    record.trained_behaviors.set(
        catalog.trainables.get("Obedience").unwrap(),
        TrainingState { learned: true, steps: 3 },
    );
    record.trained_behaviors.set(
        catalog.trainables.get("Release").unwrap(),
        TrainingState { learned: false, steps: 1 },
    );
    let record: TemplateRecord = record.into();

    let json = adapter.to_json(&record).unwrap();
    let loaded = adapter.from_json(&json, &mut rng()).unwrap();
    assert!(loaded.value.is_animal());
    assert!(are_equivalent(&record, &loaded.value));
}

#[test]
fn test_uninstalled_condition_is_pruned_alone() {
    let mut catalog = catalog();
    let config = TemplateConfig::default();
    let record: TemplateRecord = anna_genome(&catalog).into();
    let json = PersistenceAdapter::new(&catalog, &config).to_json(&record).unwrap();

    catalog.conditions.remove("Bad Back");
    let adapter = PersistenceAdapter::new(&catalog, &config);
    let loaded = adapter.from_json(&json, &mut rng()).unwrap();

    assert_eq!(loaded.report.pruned_conditions, 1);
    let conditions = loaded.value.conditions();
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].def.name, "Scar");
    assert!(loaded.value.is_valid());
}

#[test]
fn test_missing_backstory_gets_same_slot_substitute() {
    let mut catalog = catalog();
    let config = TemplateConfig::default();
    let record: TemplateRecord = anna_brain(&catalog).into();
    let json = PersistenceAdapter::new(&catalog, &config).to_json(&record).unwrap();

    catalog.backstories.remove("Medic");
    let adapter = PersistenceAdapter::new(&catalog, &config);
    let loaded = adapter.from_json(&json, &mut rng()).unwrap();

    assert_eq!(
        loaded.report.substituted_backstories,
        vec![(BackstorySlot::Adulthood, "Medic".to_string())]
    );
    let TemplateRecord::Cognitive(brain) = &loaded.value else {
        panic!("expected a brain template");
    };
    let adult = brain.adult_backstory.as_ref().unwrap();
    assert_eq!(adult.slot, BackstorySlot::Adulthood);
    assert_eq!(adult.identifier, "Miner");
    assert_eq!(brain.child_backstory.as_ref().unwrap().identifier, "Urchin");
}

#[test]
fn test_uninstalled_kind_leaves_record_unusable() {
    let mut catalog = catalog();
    let config = TemplateConfig::default();
    let record: TemplateRecord = anna_genome(&catalog).into();
    let json = PersistenceAdapter::new(&catalog, &config).to_json(&record).unwrap();

    catalog.kinds.remove("Colonist");
    let loaded = PersistenceAdapter::new(&catalog, &config)
        .from_json(&json, &mut rng())
        .unwrap();

    assert_eq!(loaded.report.unresolved_kind.as_deref(), Some("Colonist"));
    assert!(!loaded.value.is_valid());
}

#[test]
fn test_stack_round_trip_keeps_quantity_and_name() {
    let catalog = catalog();
    let config = TemplateConfig::default();
    let adapter = PersistenceAdapter::new(&catalog, &config);

    let mut stack = RecordStack::new(anna_brain(&catalog), 3);
    stack.custom_name = Some("Field medic backup".into());

    let json = adapter.stack_to_json(&stack).unwrap();
    let loaded = adapter.stack_from_json(&json, &mut rng()).unwrap().value;

    assert_eq!(loaded.id, stack.id);
    assert_eq!(loaded.quantity, 3);
    assert_eq!(loaded.label(), "Field medic backup x3");
    assert!(are_equivalent(&loaded.record, &stack.record));
}

#[test]
fn test_legacy_document_reads_with_defaults() {
    let catalog = catalog();
    let config = TemplateConfig::default();
    let adapter = PersistenceAdapter::new(&catalog, &config);

    let json = r#"{
        "variant": "genetic",
        "source_name": "Old Tom",
        "pawn_kind": "Colonist",
        "gender": "male",
        "crown_type": "average",
        "hediff_infos": null,
        "humanoid": { "skin_melanin": 0.5, "traits": null },
        "alien": { "is_alien": false, "addon_variants": null },
        "some_future_key": 12
    }"#;
    let loaded = adapter.from_json(json, &mut rng()).unwrap();

    assert_eq!(loaded.report.upgraded_from, Some(1));
    let TemplateRecord::Genetic(genome) = &loaded.value else {
        panic!("expected a genome template");
    };
    assert_eq!(genome.source_label.as_deref(), Some("Old Tom"));
    assert!(genome.conditions.is_empty());
    assert!(genome.traits.is_empty());
    assert!(genome.alien.addon_variants.is_empty());
    assert_eq!(genome.hair.as_ref().map(|h| h.name.as_str()), Some(FALLBACK_HAIR));
    assert!(genome.head_variant_path.as_deref().unwrap().contains("Male"));
}

#[test]
fn test_future_version_is_rejected() {
    let catalog = catalog();
    let config = TemplateConfig::default();
    let adapter = PersistenceAdapter::new(&catalog, &config);

    let json = r#"{ "version": 9, "variant": "cognitive", "source_label": "Anna" }"#;
    let err = adapter.from_json(json, &mut rng()).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::UnsupportedFormatVersion { found: 9, supported: 2 }
    ));
}

#[test]
fn test_malformed_json_is_an_error() {
    let catalog = catalog();
    let config = TemplateConfig::default();
    let adapter = PersistenceAdapter::new(&catalog, &config);
    assert!(matches!(
        adapter.from_json("{ not json", &mut rng()),
        Err(TemplateError::SerdeError(_))
    ));
}
