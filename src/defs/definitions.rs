//! Content definitions referenced by template records
//!
//! Definitions come from an external, possibly-mutable catalog. Identity is
//! the stable `name` (or `identifier` for backstories): two handles are the
//! same definition iff their names match, whatever else they carry.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A catalog entry addressable by a stable string identifier
pub trait Definition {
    fn def_name(&self) -> &str;
}

macro_rules! impl_definition {
    ($ty:ty, $key:ident) => {
        impl Definition for $ty {
            fn def_name(&self) -> &str {
                &self.$key
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.$key == other.$key
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.$key.hash(state);
            }
        }
    };
}

/// Species/kind of creature a template was taken from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindDef {
    pub name: String,
    pub label: String,
    /// Display label of the race this kind belongs to
    pub race_label: String,
    #[serde(default)]
    pub is_animal: bool,
}

/// One degree of a trait, e.g. "optimist" at degree 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDegree {
    #[serde(default)]
    pub degree: i32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitDef {
    pub name: String,
    pub degrees: Vec<TraitDegree>,
}

impl TraitDef {
    /// Label for a degree, if the trait defines it
    pub fn label_at(&self, degree: i32) -> Option<&str> {
        self.degrees
            .iter()
            .find(|d| d.degree == degree)
            .map(|d| d.label.as_str())
    }
}

/// Acquired condition (implant, disease, scar, addiction, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionDef {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPartDef {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyTypeDef {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HairDef {
    pub name: String,
    pub label: String,
    /// Texture path; styles without one are not shown in descriptions
    #[serde(default)]
    pub tex_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDef {
    pub name: String,
    pub label: String,
    /// Stable ordering used wherever skills are listed
    pub index: u32,
}

/// Behavior an animal can be trained in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainableDef {
    pub name: String,
    pub label: String,
    pub index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackstorySlot {
    Childhood,
    Adulthood,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackstoryDef {
    pub identifier: String,
    pub title: String,
    pub slot: BackstorySlot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeliefSystemDef {
    pub name: String,
    pub label: String,
}

impl_definition!(KindDef, name);
impl_definition!(TraitDef, name);
impl_definition!(ConditionDef, name);
impl_definition!(BodyPartDef, name);
impl_definition!(BodyTypeDef, name);
impl_definition!(HairDef, name);
impl_definition!(SkillDef, name);
impl_definition!(TrainableDef, name);
impl_definition!(BackstoryDef, identifier);
impl_definition!(BeliefSystemDef, name);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_by_name() {
        let a = ConditionDef {
            name: "Scar".into(),
            label: "scar".into(),
        };
        let b = ConditionDef {
            name: "Scar".into(),
            label: "old scar".into(),
        };
        let c = ConditionDef {
            name: "Burn".into(),
            label: "scar".into(),
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_trait_label_at_degree() {
        let t = TraitDef {
            name: "NaturalMood".into(),
            degrees: vec![
                TraitDegree { degree: -1, label: "pessimist".into() },
                TraitDegree { degree: 1, label: "optimist".into() },
            ],
        };
        assert_eq!(t.label_at(1), Some("optimist"));
        assert_eq!(t.label_at(-1), Some("pessimist"));
        assert_eq!(t.label_at(0), None);
    }

    #[test]
    fn test_backstory_identity_uses_identifier() {
        let a = BackstoryDef {
            identifier: "Urchin12".into(),
            title: "urchin".into(),
            slot: BackstorySlot::Childhood,
        };
        assert_eq!(a.def_name(), "Urchin12");
    }
}
