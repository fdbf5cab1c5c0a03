//! Definition catalog for resolving persisted references.
//!
//! This module provides the `DefCatalog` which holds every content definition
//! a template can point at, handles TOML file loading, and answers
//! name-to-definition lookups. Entries can be removed at any time to model
//! content that was uninstalled between saving and loading.

use ahash::AHashMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use super::definitions::{
    BackstoryDef, BackstorySlot, BeliefSystemDef, BodyPartDef, BodyTypeDef, ConditionDef,
    Definition, HairDef, KindDef, SkillDef, TrainableDef, TraitDef,
};
use crate::core::error::{Result, TemplateError};

/// Name-indexed table of one definition type
#[derive(Debug, Clone)]
pub struct DefTable<T> {
    by_name: AHashMap<String, Arc<T>>,
}

impl<T> Default for DefTable<T> {
    fn default() -> Self {
        Self {
            by_name: AHashMap::new(),
        }
    }
}

impl<T: Definition> DefTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, returning the one it replaced (if any)
    pub fn insert(&mut self, def: T) -> Option<Arc<T>> {
        let name = def.def_name().to_string();
        self.by_name.insert(name, Arc::new(def))
    }

    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.by_name.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Drop a definition, as happens when its content pack is removed
    pub fn remove(&mut self, name: &str) -> Option<Arc<T>> {
        self.by_name.remove(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.by_name.values()
    }
}

/// On-disk layout of a catalog file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub kinds: Vec<KindDef>,
    pub traits: Vec<TraitDef>,
    pub conditions: Vec<ConditionDef>,
    pub body_parts: Vec<BodyPartDef>,
    pub body_types: Vec<BodyTypeDef>,
    pub hairs: Vec<HairDef>,
    pub skills: Vec<SkillDef>,
    pub trainables: Vec<TrainableDef>,
    pub backstories: Vec<BackstoryDef>,
    pub belief_systems: Vec<BeliefSystemDef>,
}

/// Every definition currently installed
#[derive(Debug, Clone, Default)]
pub struct DefCatalog {
    pub kinds: DefTable<KindDef>,
    pub traits: DefTable<TraitDef>,
    pub conditions: DefTable<ConditionDef>,
    pub body_parts: DefTable<BodyPartDef>,
    pub body_types: DefTable<BodyTypeDef>,
    pub hairs: DefTable<HairDef>,
    pub skills: DefTable<SkillDef>,
    pub trainables: DefTable<TrainableDef>,
    pub backstories: DefTable<BackstoryDef>,
    pub belief_systems: DefTable<BeliefSystemDef>,
}

impl DefCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML catalog document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.merge_toml_str(content)?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Add the definitions of another TOML document. Later files override
    /// earlier ones with the same name, the way content packs patch each other.
    pub fn merge_toml_str(&mut self, content: &str) -> Result<()> {
        let file: CatalogFile = toml::from_str(content)?;
        self.merge(file)
    }

    pub fn merge(&mut self, file: CatalogFile) -> Result<()> {
        insert_all(&mut self.kinds, file.kinds, "kind")?;
        insert_all(&mut self.traits, file.traits, "trait")?;
        insert_all(&mut self.conditions, file.conditions, "condition")?;
        insert_all(&mut self.body_parts, file.body_parts, "body part")?;
        insert_all(&mut self.body_types, file.body_types, "body type")?;
        insert_all(&mut self.hairs, file.hairs, "hair")?;
        insert_all(&mut self.skills, file.skills, "skill")?;
        insert_all(&mut self.trainables, file.trainables, "trainable")?;
        insert_all(&mut self.backstories, file.backstories, "backstory")?;
        insert_all(&mut self.belief_systems, file.belief_systems, "belief system")?;
        Ok(())
    }

    /// Pick a random backstory for a slot. Candidates are ordered by
    /// identifier first so a seeded rng gives the same answer every run.
    pub fn random_backstory<R: Rng + ?Sized>(
        &self,
        slot: BackstorySlot,
        rng: &mut R,
    ) -> Option<Arc<BackstoryDef>> {
        let mut candidates: Vec<&Arc<BackstoryDef>> =
            self.backstories.iter().filter(|b| b.slot == slot).collect();
        candidates.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        candidates.choose(rng).map(|b| Arc::clone(b))
    }
}

fn insert_all<T: Definition>(table: &mut DefTable<T>, defs: Vec<T>, what: &str) -> Result<()> {
    for def in defs {
        if def.def_name().trim().is_empty() {
            return Err(TemplateError::InvalidCatalog(format!(
                "{} definition with an empty name",
                what
            )));
        }
        let name = def.def_name().to_string();
        if table.insert(def).is_some() {
            tracing::debug!("{} definition '{}' overridden", what, name);
        }
    }
    Ok(())
}
