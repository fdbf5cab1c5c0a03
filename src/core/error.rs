use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unsupported record format version {found} (newest readable is {supported})")]
    UnsupportedFormatVersion { found: u32, supported: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid definition catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
