//! Gated diagnostic output for recoverable data-integrity events

use crate::core::config::TemplateConfig;
use std::fmt::Display;

/// Emit a single-line diagnostic when debug logging is enabled.
///
/// Returns whether the message was emitted.
pub fn try_log(config: &TemplateConfig, message: impl Display) -> bool {
    if !config.debug_logging {
        return false;
    }
    tracing::info!(target: "bio_templates", "{}", message);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_without_debug_logging() {
        let config = TemplateConfig::default();
        assert!(!try_log(&config, "pruned 1 condition"));
    }

    #[test]
    fn test_emits_with_debug_logging() {
        let config = TemplateConfig {
            debug_logging: true,
            ..TemplateConfig::default()
        };
        assert!(try_log(&config, "pruned 1 condition"));
    }
}
