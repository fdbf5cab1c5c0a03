//! Cognitive records - skills, backstories and trained behaviors

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::condition::ConditionEntry;
use super::label_and_kind_valid;
use crate::defs::{BackstoryDef, BeliefSystemDef, KindDef, SkillDef, TrainableDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Passion {
    #[default]
    None,
    Minor,
    Major,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillEntry {
    pub def: Arc<SkillDef>,
    pub level: i32,
    pub passion: Passion,
}

impl SkillEntry {
    pub fn new(def: Arc<SkillDef>, level: i32, passion: Passion) -> Self {
        Self { def, level, passion }
    }

    /// "    Shooting: 8 (major passion)"
    pub fn display_line(&self) -> String {
        match self.passion {
            Passion::None => format!("    {}: {}", self.def.label, self.level),
            Passion::Minor => format!("    {}: {} (minor passion)", self.def.label, self.level),
            Passion::Major => format!("    {}: {} (major passion)", self.def.label, self.level),
        }
    }
}

/// Skills keyed by definition. At most one entry per skill.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    entries: Vec<SkillEntry>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for this skill, returning the old one
    pub fn insert(&mut self, entry: SkillEntry) -> Option<SkillEntry> {
        match self.entries.iter_mut().find(|e| e.def == entry.def) {
            Some(existing) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, skill: &str) -> Option<&SkillEntry> {
        self.entries.iter().find(|e| e.def.name == skill)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillEntry> {
        self.entries.iter()
    }

    /// Entries ordered by skill definition index
    pub fn sorted(&self) -> Vec<&SkillEntry> {
        let mut sorted: Vec<&SkillEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            a.def
                .index
                .cmp(&b.def.index)
                .then_with(|| a.def.name.cmp(&b.def.name))
        });
        sorted
    }
}

impl FromIterator<SkillEntry> for SkillSet {
    fn from_iter<I: IntoIterator<Item = SkillEntry>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainingState {
    pub learned: bool,
    pub steps: i32,
}

/// Trained behaviors of an animal, keyed by trainable definition name
#[derive(Debug, Clone, Default)]
pub struct TrainedBehaviorMap {
    entries: AHashMap<String, (Arc<TrainableDef>, TrainingState)>,
}

impl TrainedBehaviorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, def: Arc<TrainableDef>, state: TrainingState) -> Option<TrainingState> {
        self.entries
            .insert(def.name.clone(), (def, state))
            .map(|(_, old)| old)
    }

    pub fn get(&self, trainable: &str) -> Option<TrainingState> {
        self.entries.get(trainable).map(|(_, state)| *state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<TrainableDef>, &TrainingState)> {
        self.entries.values().map(|(def, state)| (def, state))
    }

    /// Entries ordered by trainable definition index
    pub fn sorted(&self) -> Vec<(&Arc<TrainableDef>, &TrainingState)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.index.cmp(&b.index).then_with(|| a.name.cmp(&b.name)));
        sorted
    }
}

/// A scan of a subject's mind
#[derive(Debug, Clone)]
pub struct CognitiveRecord {
    pub source_label: Option<String>,
    pub kind: Option<Arc<KindDef>>,
    pub belief_system: Option<Arc<BeliefSystemDef>>,
    pub conditions: Vec<ConditionEntry>,

    // Humanoid only
    pub child_backstory: Option<Arc<BackstoryDef>>,
    pub adult_backstory: Option<Arc<BackstoryDef>>,
    pub skills: SkillSet,

    // Animal only
    pub is_animal: bool,
    pub trained_behaviors: TrainedBehaviorMap,
}

impl CognitiveRecord {
    pub fn new(source_label: impl Into<String>, kind: Arc<KindDef>) -> Self {
        let is_animal = kind.is_animal;
        Self {
            source_label: Some(source_label.into()),
            kind: Some(kind),
            is_animal,
            ..Self::blank()
        }
    }

    /// Scan with nothing in it. Brain scans have no blank label of their
    /// own, so validity hinges on the missing label and kind.
    pub fn blank() -> Self {
        Self {
            source_label: None,
            kind: None,
            belief_system: None,
            conditions: Vec::new(),
            child_backstory: None,
            adult_backstory: None,
            skills: SkillSet::new(),
            is_animal: false,
            trained_behaviors: TrainedBehaviorMap::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        label_and_kind_valid(self.source_label.as_deref(), self.kind.as_ref())
    }
}
