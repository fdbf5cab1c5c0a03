//! Genetic records - body plan, appearance and heritable traits

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::condition::ConditionEntry;
use super::{label_and_kind_valid, BLANK_TEMPLATE_LABEL};
use crate::core::types::{Gender, Rgb};
use crate::defs::{BodyTypeDef, HairDef, KindDef, TraitDef};

/// Head shape. `Undefined` marks an animal (non-humanoid) genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrownType {
    Undefined,
    #[default]
    Average,
    Narrow,
}

impl CrownType {
    pub fn is_humanoid(&self) -> bool {
        !matches!(self, CrownType::Undefined)
    }
}

/// A trait at a specific degree
#[derive(Debug, Clone, PartialEq)]
pub struct TraitEntry {
    pub def: Arc<TraitDef>,
    pub degree: i32,
}

impl TraitEntry {
    pub fn new(def: Arc<TraitDef>, degree: i32) -> Self {
        Self { def, degree }
    }

    pub fn label(&self) -> &str {
        self.def.label_at(self.degree).unwrap_or(&self.def.name)
    }
}

/// Extra appearance data for alien races
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlienAppearance {
    pub is_alien: bool,
    pub skin_color: Rgb,
    pub skin_color_second: Rgb,
    pub hair_color_second: Rgb,
    pub crown_type: String,
    /// Body addon variant indices; empty when the race has no addons
    pub addon_variants: Vec<i32>,
}

/// Stores the genome of a subject
#[derive(Debug, Clone)]
pub struct GeneticRecord {
    // All genomes
    pub source_label: Option<String>,
    pub kind: Option<Arc<KindDef>>,
    pub gender: Gender,
    pub crown_type: CrownType,
    pub conditions: Vec<ConditionEntry>,

    // Humanoid only
    pub body_type: Option<Arc<BodyTypeDef>>,
    pub traits: Vec<TraitEntry>,
    pub hair_color: Rgb,
    /// 0.0-1.0
    pub skin_pigment: f32,
    pub hair: Option<Arc<HairDef>>,
    pub head_variant_path: Option<String>,

    pub alien: AlienAppearance,
}

impl GeneticRecord {
    /// A humanoid genome with default appearance
    pub fn new(source_label: impl Into<String>, kind: Arc<KindDef>) -> Self {
        Self {
            source_label: Some(source_label.into()),
            kind: Some(kind),
            ..Self::blank()
        }
    }

    /// An animal genome (no humanoid block)
    pub fn animal(source_label: impl Into<String>, kind: Arc<KindDef>, gender: Gender) -> Self {
        Self {
            gender,
            crown_type: CrownType::Undefined,
            ..Self::new(source_label, kind)
        }
    }

    /// Placeholder genome produced by events or debug tools; never usable
    pub fn blank() -> Self {
        Self {
            source_label: Some(BLANK_TEMPLATE_LABEL.to_string()),
            kind: None,
            gender: Gender::None,
            crown_type: CrownType::Average,
            conditions: Vec::new(),
            body_type: None,
            traits: Vec::new(),
            hair_color: Rgb::default(),
            skin_pigment: 0.0,
            hair: None,
            head_variant_path: None,
            alien: AlienAppearance::default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        label_and_kind_valid(self.source_label.as_deref(), self.kind.as_ref())
    }

    pub fn is_humanoid(&self) -> bool {
        self.crown_type.is_humanoid()
    }
}
