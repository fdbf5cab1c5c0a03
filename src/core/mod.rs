pub mod config;
pub mod diagnostics;
pub mod error;
pub mod types;

pub use config::TemplateConfig;
pub use error::{Result, TemplateError};
pub use types::{EntityId, Gender, LocationId, Rgb};
