//! Content definitions and the catalog they are resolved from

pub mod catalog;
pub mod definitions;

pub use catalog::{CatalogFile, DefCatalog, DefTable};
pub use definitions::{
    BackstoryDef, BackstorySlot, BeliefSystemDef, BodyPartDef, BodyTypeDef, ConditionDef,
    Definition, HairDef, KindDef, SkillDef, TrainableDef, TraitDef, TraitDegree,
};
