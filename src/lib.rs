//! Bio Templates - genetic and cognitive template records
//!
//! Templates are snapshots of a living subject: its body (genome templates)
//! or its mind (brain templates). This crate holds the record model, decides
//! when two template items may share an inventory stack, saves and reloads
//! records against an installed definition catalog, and runs the targeting
//! workflow that turns "apply this template" into a dispatched work order.

pub mod core;
pub mod defs;
pub mod equivalence;
pub mod persistence;
pub mod records;
pub mod workflow;
