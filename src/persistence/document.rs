//! Persisted record layout
//!
//! One tagged, versioned key/value document per template. Definition
//! references are stored by name. Unknown keys are ignored and missing keys
//! take the defaults documented on each field, so older and newer saves both
//! read cleanly.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::types::{EntityId, Gender, Rgb};
use crate::records::{
    AlienAppearance, CognitiveRecord, ConditionEntry, CrownType, GeneticRecord, Passion,
    RecordStack, TemplateRecord,
};

/// Newest layout this crate writes
pub const FORMAT_VERSION: u32 = 2;

/// Documents written before versioning carry no version key
fn legacy_version() -> u32 {
    1
}

/// Lists saved as `null` by older writers read back as empty
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level document: version, optional stack data, and the record itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEnvelope {
    #[serde(default = "legacy_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<StackDocument>,
    #[serde(flatten)]
    pub record: RecordDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackDocument {
    pub id: EntityId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub custom_name: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum RecordDocument {
    Genetic(GeneticDocument),
    Cognitive(CognitiveDocument),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConditionDocument {
    pub def: String,
    #[serde(default)]
    pub severity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraitDocument {
    pub def: String,
    #[serde(default)]
    pub degree: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillDocument {
    pub def: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub passion: Passion,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingDocument {
    pub def: String,
    #[serde(default)]
    pub learned: bool,
    #[serde(default)]
    pub steps: i32,
}

/// Genome document. `crown_type` is the humanoid discriminant and is always
/// written before the humanoid block; the block is only written (and only
/// read) when the crown type is humanoid.
///
/// Defaults: gender `none`, crown type `average`, no conditions, blank alien
/// block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticDocument {
    #[serde(alias = "source_name")]
    pub source_label: Option<String>,
    #[serde(alias = "pawn_kind")]
    pub kind: Option<String>,
    pub gender: Gender,
    pub crown_type: CrownType,
    #[serde(alias = "hediff_infos", deserialize_with = "null_as_empty")]
    pub conditions: Vec<ConditionDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humanoid: Option<HumanoidDocument>,
    pub alien: AlienDocument,
}

/// Defaults: black hair, pigment 0, no traits, no hair style or head path
/// (both receive fallbacks on load).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanoidDocument {
    pub body_type: Option<String>,
    pub hair_color: Rgb,
    #[serde(alias = "skin_melanin")]
    pub skin_pigment: f32,
    #[serde(deserialize_with = "null_as_empty")]
    pub traits: Vec<TraitDocument>,
    pub hair: Option<String>,
    #[serde(alias = "head_graphic_path")]
    pub head_variant_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlienDocument {
    #[serde(alias = "is_alien")]
    pub enabled: bool,
    pub skin_color: Rgb,
    pub skin_color_second: Rgb,
    pub hair_color_second: Rgb,
    #[serde(alias = "crown_type_alien")]
    pub crown_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub addon_variants: Vec<i32>,
}

/// Brain scan document. Defaults: not an animal, no backstories, no belief
/// system, no skills, no training, no conditions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CognitiveDocument {
    #[serde(alias = "source_name")]
    pub source_label: Option<String>,
    #[serde(alias = "kind_def")]
    pub kind: Option<String>,
    pub belief_system: Option<String>,
    pub is_animal: bool,
    #[serde(alias = "back_story_child")]
    pub child_backstory: Option<String>,
    #[serde(alias = "back_story_adult")]
    pub adult_backstory: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub skills: Vec<SkillDocument>,
    #[serde(deserialize_with = "null_as_empty")]
    pub training: Vec<TrainingDocument>,
    #[serde(alias = "hediff_infos", deserialize_with = "null_as_empty")]
    pub conditions: Vec<ConditionDocument>,
}

impl From<&ConditionEntry> for ConditionDocument {
    fn from(entry: &ConditionEntry) -> Self {
        Self {
            def: entry.def.name.clone(),
            severity: entry.severity,
            body_part: entry.body_part.as_ref().map(|p| p.name.clone()),
            source: entry.source.clone(),
        }
    }
}

impl From<&AlienAppearance> for AlienDocument {
    fn from(alien: &AlienAppearance) -> Self {
        Self {
            enabled: alien.is_alien,
            skin_color: alien.skin_color,
            skin_color_second: alien.skin_color_second,
            hair_color_second: alien.hair_color_second,
            crown_type: alien.crown_type.clone(),
            addon_variants: alien.addon_variants.clone(),
        }
    }
}

impl From<AlienDocument> for AlienAppearance {
    fn from(doc: AlienDocument) -> Self {
        Self {
            is_alien: doc.enabled,
            skin_color: doc.skin_color,
            skin_color_second: doc.skin_color_second,
            hair_color_second: doc.hair_color_second,
            crown_type: doc.crown_type,
            addon_variants: doc.addon_variants,
        }
    }
}

impl From<&GeneticRecord> for GeneticDocument {
    fn from(record: &GeneticRecord) -> Self {
        let humanoid = record.is_humanoid().then(|| HumanoidDocument {
            body_type: record.body_type.as_ref().map(|d| d.name.clone()),
            hair_color: record.hair_color,
            skin_pigment: record.skin_pigment,
            traits: record
                .traits
                .iter()
                .map(|t| TraitDocument {
                    def: t.def.name.clone(),
                    degree: t.degree,
                })
                .collect(),
            hair: record.hair.as_ref().map(|d| d.name.clone()),
            head_variant_path: record.head_variant_path.clone(),
        });

        Self {
            source_label: record.source_label.clone(),
            kind: record.kind.as_ref().map(|d| d.name.clone()),
            gender: record.gender,
            crown_type: record.crown_type,
            conditions: record.conditions.iter().map(ConditionDocument::from).collect(),
            humanoid,
            alien: AlienDocument::from(&record.alien),
        }
    }
}

impl From<&CognitiveRecord> for CognitiveDocument {
    fn from(record: &CognitiveRecord) -> Self {
        Self {
            source_label: record.source_label.clone(),
            kind: record.kind.as_ref().map(|d| d.name.clone()),
            belief_system: record.belief_system.as_ref().map(|d| d.name.clone()),
            is_animal: record.is_animal,
            child_backstory: record.child_backstory.as_ref().map(|b| b.identifier.clone()),
            adult_backstory: record.adult_backstory.as_ref().map(|b| b.identifier.clone()),
            skills: record
                .skills
                .sorted()
                .into_iter()
                .map(|s| SkillDocument {
                    def: s.def.name.clone(),
                    level: s.level,
                    passion: s.passion,
                })
                .collect(),
            training: record
                .trained_behaviors
                .sorted()
                .into_iter()
                .map(|(def, state)| TrainingDocument {
                    def: def.name.clone(),
                    learned: state.learned,
                    steps: state.steps,
                })
                .collect(),
            conditions: record.conditions.iter().map(ConditionDocument::from).collect(),
        }
    }
}

impl From<&TemplateRecord> for RecordDocument {
    fn from(record: &TemplateRecord) -> Self {
        match record {
            TemplateRecord::Genetic(r) => RecordDocument::Genetic(r.into()),
            TemplateRecord::Cognitive(r) => RecordDocument::Cognitive(r.into()),
        }
    }
}

impl From<&TemplateRecord> for RecordEnvelope {
    fn from(record: &TemplateRecord) -> Self {
        Self {
            version: FORMAT_VERSION,
            stack: None,
            record: record.into(),
        }
    }
}

impl From<&RecordStack> for RecordEnvelope {
    fn from(stack: &RecordStack) -> Self {
        Self {
            version: FORMAT_VERSION,
            stack: Some(StackDocument {
                id: stack.id,
                quantity: stack.quantity,
                custom_name: stack.custom_name.clone(),
            }),
            record: (&stack.record).into(),
        }
    }
}
