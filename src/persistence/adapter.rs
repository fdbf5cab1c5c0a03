//! Save and load template records against the live definition catalog.
//!
//! Saving never needs the catalog. Loading resolves every stored name and
//! repairs what no longer resolves:
//! - a missing kind leaves the record without one (invalid for use)
//! - conditions, traits, skills and training entries that no longer resolve
//!   are pruned individually
//! - missing backstories are replaced by a random backstory of the same slot
//! - humanoid genomes get a fallback hair style and head path
//!
//! None of these are errors. Only an unreadable document is.

use rand::Rng;
use std::sync::Arc;

use super::document::{
    CognitiveDocument, ConditionDocument, GeneticDocument, HumanoidDocument, RecordDocument,
    RecordEnvelope, FORMAT_VERSION,
};
use crate::core::config::TemplateConfig;
use crate::core::diagnostics::try_log;
use crate::core::error::{Result, TemplateError};
use crate::core::types::{EntityId, Gender};
use crate::defs::{BackstoryDef, BackstorySlot, DefCatalog, DefTable, Definition, KindDef};
use crate::records::{
    CognitiveRecord, ConditionEntry, GeneticRecord, RecordStack, SkillEntry, SkillSet,
    TemplateRecord, TrainedBehaviorMap, TrainingState, TraitEntry,
};

/// Hair style given to humanoid genomes whose style is missing
pub const FALLBACK_HAIR: &str = "Shaved";

pub const DEFAULT_MALE_HEAD: &str = "Things/Pawn/Humanlike/Heads/Male/Male_Average_Normal";
pub const DEFAULT_FEMALE_HEAD: &str = "Things/Pawn/Humanlike/Heads/Female/Female_Narrow_Normal";

/// What loading had to repair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Version the document was written with, when older than current
    pub upgraded_from: Option<u32>,
    /// Stored kind name that no longer resolves
    pub unresolved_kind: Option<String>,
    pub pruned_conditions: usize,
    pub pruned_traits: usize,
    pub pruned_skills: usize,
    pub pruned_training: usize,
    /// Single references (hair, body type, belief system) that were dropped
    pub dropped_references: Vec<String>,
    /// Backstories replaced by a random one: (slot, missing identifier)
    pub substituted_backstories: Vec<(BackstorySlot, String)>,
}

impl LoadReport {
    /// Nothing had to be repaired
    pub fn is_clean(&self) -> bool {
        self.unresolved_kind.is_none()
            && self.pruned_conditions == 0
            && self.pruned_traits == 0
            && self.pruned_skills == 0
            && self.pruned_training == 0
            && self.dropped_references.is_empty()
            && self.substituted_backstories.is_empty()
    }
}

/// A loaded value and the repairs made while loading it
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub value: T,
    pub report: LoadReport,
}

/// Converts records to and from their persisted documents
pub struct PersistenceAdapter<'a> {
    catalog: &'a DefCatalog,
    config: &'a TemplateConfig,
}

impl<'a> PersistenceAdapter<'a> {
    pub fn new(catalog: &'a DefCatalog, config: &'a TemplateConfig) -> Self {
        Self { catalog, config }
    }

    pub fn save(&self, record: &TemplateRecord) -> RecordEnvelope {
        RecordEnvelope::from(record)
    }

    pub fn save_stack(&self, stack: &RecordStack) -> RecordEnvelope {
        RecordEnvelope::from(stack)
    }

    pub fn to_json(&self, record: &TemplateRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.save(record))?)
    }

    pub fn stack_to_json(&self, stack: &RecordStack) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.save_stack(stack))?)
    }

    pub fn from_json<R: Rng + ?Sized>(&self, json: &str, rng: &mut R) -> Result<Loaded<TemplateRecord>> {
        let envelope: RecordEnvelope = serde_json::from_str(json)?;
        self.load(envelope, rng)
    }

    pub fn stack_from_json<R: Rng + ?Sized>(&self, json: &str, rng: &mut R) -> Result<Loaded<RecordStack>> {
        let envelope: RecordEnvelope = serde_json::from_str(json)?;
        self.load_stack(envelope, rng)
    }

    /// Rebuild a record from its document
    pub fn load<R: Rng + ?Sized>(
        &self,
        envelope: RecordEnvelope,
        rng: &mut R,
    ) -> Result<Loaded<TemplateRecord>> {
        let mut report = LoadReport::default();
        check_version(envelope.version, &mut report)?;

        let legacy = envelope.version < FORMAT_VERSION;
        let record = match envelope.record {
            RecordDocument::Genetic(doc) => {
                TemplateRecord::Genetic(self.load_genetic(doc, legacy, &mut report))
            }
            RecordDocument::Cognitive(doc) => {
                TemplateRecord::Cognitive(self.load_cognitive(doc, rng, &mut report))
            }
        };

        Ok(Loaded { value: record, report })
    }

    /// Rebuild a stack. Documents without stack data become a single item.
    pub fn load_stack<R: Rng + ?Sized>(
        &self,
        mut envelope: RecordEnvelope,
        rng: &mut R,
    ) -> Result<Loaded<RecordStack>> {
        let stack = envelope.stack.take();
        let Loaded { value: record, report } = self.load(envelope, rng)?;

        let value = match stack {
            Some(doc) => RecordStack {
                id: doc.id,
                quantity: doc.quantity.max(1),
                custom_name: doc.custom_name,
                record,
            },
            None => RecordStack {
                id: EntityId::new(),
                quantity: 1,
                custom_name: None,
                record,
            },
        };

        Ok(Loaded { value, report })
    }

    fn load_genetic(&self, doc: GeneticDocument, legacy: bool, report: &mut LoadReport) -> GeneticRecord {
        let mut record = GeneticRecord::blank();
        record.source_label = doc.source_label;
        record.kind = self.resolve_kind(doc.kind, report);
        record.gender = doc.gender;
        record.crown_type = doc.crown_type;
        record.alien = doc.alien.into();

        // Humanoid block only exists when the discriminant says so
        if doc.crown_type.is_humanoid() {
            let humanoid = doc.humanoid.unwrap_or_default();
            self.load_humanoid(&mut record, humanoid, legacy, report);
        }

        let (conditions, pruned) = self.resolve_conditions(doc.conditions);
        record.conditions = conditions;
        report.pruned_conditions = pruned;
        if pruned > 0 {
            try_log(
                self.config,
                format!(
                    "Removed {} unresolved conditions from {}'s genome template",
                    pruned,
                    label_for_log(record.source_label.as_deref())
                ),
            );
        }

        record
    }

    fn load_humanoid(
        &self,
        record: &mut GeneticRecord,
        doc: HumanoidDocument,
        legacy: bool,
        report: &mut LoadReport,
    ) {
        record.body_type = resolve_optional(&self.catalog.body_types, doc.body_type, "body type", report);
        record.hair_color = doc.hair_color;
        record.skin_pigment = doc.skin_pigment.clamp(0.0, 1.0);

        let before = doc.traits.len();
        record.traits = doc
            .traits
            .into_iter()
            .filter_map(|t| {
                self.catalog
                    .traits
                    .get(&t.def)
                    .map(|def| TraitEntry::new(def, t.degree))
            })
            .collect();
        report.pruned_traits = before - record.traits.len();
        if report.pruned_traits > 0 {
            try_log(
                self.config,
                format!(
                    "Removed {} unresolved traits from {}'s genome template",
                    report.pruned_traits,
                    label_for_log(record.source_label.as_deref())
                ),
            );
        }

        // A stored style that no longer exists always falls back; a style
        // that was never stored only falls back for pre-versioned saves.
        let stored_hair = doc.hair.is_some();
        record.hair = resolve_optional(&self.catalog.hairs, doc.hair, "hair", report);
        if record.hair.is_none() && (stored_hair || legacy) {
            record.hair = self.catalog.hairs.get(FALLBACK_HAIR);
        }

        record.head_variant_path = match doc.head_variant_path {
            Some(path) => Some(path),
            None if legacy => Some(default_head_path(record.gender).to_string()),
            None => None,
        };
    }

    fn load_cognitive<R: Rng + ?Sized>(
        &self,
        doc: CognitiveDocument,
        rng: &mut R,
        report: &mut LoadReport,
    ) -> CognitiveRecord {
        let mut record = CognitiveRecord::blank();
        record.source_label = doc.source_label;
        record.kind = self.resolve_kind(doc.kind, report);
        record.is_animal = doc.is_animal;
        record.belief_system =
            resolve_optional(&self.catalog.belief_systems, doc.belief_system, "belief system", report);

        record.child_backstory =
            self.resolve_backstory(doc.child_backstory, BackstorySlot::Childhood, rng, report);
        record.adult_backstory =
            self.resolve_backstory(doc.adult_backstory, BackstorySlot::Adulthood, rng, report);

        let before = doc.skills.len();
        let resolved: Vec<SkillEntry> = doc
            .skills
            .into_iter()
            .filter_map(|s| {
                self.catalog
                    .skills
                    .get(&s.def)
                    .map(|def| SkillEntry::new(def, s.level, s.passion))
            })
            .collect();
        report.pruned_skills = before - resolved.len();
        record.skills = resolved.into_iter().collect::<SkillSet>();

        let mut training = TrainedBehaviorMap::new();
        for entry in doc.training {
            match self.catalog.trainables.get(&entry.def) {
                Some(def) => {
                    training.set(
                        def,
                        TrainingState {
                            learned: entry.learned,
                            steps: entry.steps,
                        },
                    );
                }
                None => report.pruned_training += 1,
            }
        }
        record.trained_behaviors = training;

        let (conditions, pruned) = self.resolve_conditions(doc.conditions);
        record.conditions = conditions;
        report.pruned_conditions = pruned;

        let label = label_for_log(record.source_label.as_deref());
        if pruned > 0 {
            try_log(
                self.config,
                format!("Removed {} unresolved conditions from {}'s brain template", pruned, label),
            );
        }
        if report.pruned_skills + report.pruned_training > 0 {
            try_log(
                self.config,
                format!(
                    "Removed {} unresolved skills and {} unresolved trainables from {}'s brain template",
                    report.pruned_skills, report.pruned_training, label
                ),
            );
        }

        record
    }

    fn resolve_kind(&self, name: Option<String>, report: &mut LoadReport) -> Option<Arc<KindDef>> {
        let name = name?;
        let kind = self.catalog.kinds.get(&name);
        if kind.is_none() {
            try_log(
                self.config,
                format!("Kind '{}' is no longer defined; template is unusable", name),
            );
            report.unresolved_kind = Some(name);
        }
        kind
    }

    fn resolve_backstory<R: Rng + ?Sized>(
        &self,
        identifier: Option<String>,
        slot: BackstorySlot,
        rng: &mut R,
        report: &mut LoadReport,
    ) -> Option<Arc<BackstoryDef>> {
        let identifier = identifier.filter(|id| !id.is_empty())?;
        if let Some(found) = self.catalog.backstories.get(&identifier) {
            return Some(found);
        }

        let fallback = self.catalog.random_backstory(slot, rng);
        try_log(
            self.config,
            format!(
                "Couldn't load {} backstory with identifier {}. Giving random.",
                slot_name(slot),
                identifier
            ),
        );
        report.substituted_backstories.push((slot, identifier));
        fallback
    }

    /// Resolve condition entries, returning the survivors and how many were pruned
    fn resolve_conditions(&self, docs: Vec<ConditionDocument>) -> (Vec<ConditionEntry>, usize) {
        let before = docs.len();
        let conditions: Vec<ConditionEntry> = docs
            .into_iter()
            .filter_map(|doc| self.resolve_condition(doc))
            .collect();
        let pruned = before - conditions.len();
        (conditions, pruned)
    }

    fn resolve_condition(&self, doc: ConditionDocument) -> Option<ConditionEntry> {
        let def = self.catalog.conditions.get(&doc.def)?;
        // A condition on a body part that no longer exists cannot be placed
        let body_part = match doc.body_part {
            Some(part) => Some(self.catalog.body_parts.get(&part)?),
            None => None,
        };
        Some(ConditionEntry {
            def,
            severity: doc.severity,
            body_part,
            source: doc.source,
        })
    }
}

fn check_version(version: u32, report: &mut LoadReport) -> Result<()> {
    if version > FORMAT_VERSION {
        return Err(TemplateError::UnsupportedFormatVersion {
            found: version,
            supported: FORMAT_VERSION,
        });
    }
    if version < FORMAT_VERSION {
        tracing::debug!("upgrading template document from version {}", version);
        report.upgraded_from = Some(version);
    }
    Ok(())
}

fn resolve_optional<T: Definition>(
    table: &DefTable<T>,
    name: Option<String>,
    what: &str,
    report: &mut LoadReport,
) -> Option<Arc<T>> {
    let name = name?;
    let found = table.get(&name);
    if found.is_none() {
        report.dropped_references.push(format!("{} '{}'", what, name));
    }
    found
}

pub fn default_head_path(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => DEFAULT_MALE_HEAD,
        Gender::Female | Gender::None => DEFAULT_FEMALE_HEAD,
    }
}

fn slot_name(slot: BackstorySlot) -> &'static str {
    match slot {
        BackstorySlot::Childhood => "child",
        BackstorySlot::Adulthood => "adult",
    }
}

fn label_for_log(label: Option<&str>) -> &str {
    label.unwrap_or("an unnamed subject")
}
