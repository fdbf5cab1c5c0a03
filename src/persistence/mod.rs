//! Persistence of template records
//!
//! `document` defines the on-disk layout; `adapter` converts between records
//! and documents, resolving definition references on load.

pub mod adapter;
pub mod document;

pub use adapter::{LoadReport, Loaded, PersistenceAdapter, FALLBACK_HAIR};
pub use document::{RecordDocument, RecordEnvelope, StackDocument, FORMAT_VERSION};
