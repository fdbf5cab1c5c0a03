//! Template settings with documented defaults
//!
//! These are the read-only tunables the host exposes. The core never writes
//! them; a `TemplateConfig` is passed explicitly to whichever component reads
//! a knob.

use crate::core::error::{Result, TemplateError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable settings for template processing
///
/// Every field has a default, so a settings file only needs to name the
/// values it overrides. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    // === VAT MAINTENANCE ===
    /// Multiplier on how fast vat maintenance decays (0.01-4.0)
    pub maintenance_rate: f32,

    /// Maintenance level below which maintenance work is offered (0.0-1.0)
    pub maintenance_work_threshold: f32,

    // === GROWTH ===
    /// Multiplier on organ growth duration (0.0-4.0)
    pub organ_growth_rate: f32,

    /// Multiplier on clone growth duration (0.0-4.0)
    pub clone_growth_rate: f32,

    /// Multiplier on ingredients consumed by organ growth (0.0-4.0)
    pub organ_total_resources: f32,

    /// Multiplier on ingredients consumed by clone growth (0.0-4.0)
    pub clone_total_resources: f32,

    /// Upper bound on clone growth time in days (1-300)
    pub max_cloning_time_days: u32,

    /// How often vats re-check their ingredients, in seconds (1-20)
    pub ingredient_check_interval_seconds: u32,

    // === TOGGLES ===
    /// Emit template diagnostics (pruned references, fallbacks)
    pub debug_logging: bool,

    /// Fresh clones receive a negative thought
    pub give_clone_negative_thought: bool,

    /// Cognitive templates may only be applied to clones
    pub brain_templating_requires_clone: bool,

    /// Nerve-stapled subjects can have violent breaks ended
    pub neural_disrupt: bool,

    /// Use the deprecated clone render path
    pub old_cloning_render: bool,

    /// Record belief systems on cognitive scans
    pub do_ideology_features: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            maintenance_rate: 1.0,
            maintenance_work_threshold: 0.40,

            organ_growth_rate: 1.0,
            clone_growth_rate: 1.0,
            organ_total_resources: 1.0,
            clone_total_resources: 1.0,
            max_cloning_time_days: 60,
            ingredient_check_interval_seconds: 3,

            debug_logging: false,
            give_clone_negative_thought: true,
            brain_templating_requires_clone: true,
            neural_disrupt: true,
            old_cloning_render: false,
            do_ideology_features: true,
        }
    }
}

impl TemplateConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML settings document and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TemplateConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a TOML file on disk
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate every knob against the range the settings screen allows
    pub fn validate(&self) -> Result<()> {
        let multipliers = [
            ("organ_growth_rate", self.organ_growth_rate),
            ("clone_growth_rate", self.clone_growth_rate),
            ("organ_total_resources", self.organ_total_resources),
            ("clone_total_resources", self.clone_total_resources),
        ];
        for (name, value) in multipliers {
            check_range(name, value, 0.0, 4.0)?;
        }
        check_range("maintenance_rate", self.maintenance_rate, 0.01, 4.0)?;
        check_range(
            "maintenance_work_threshold",
            self.maintenance_work_threshold,
            0.0,
            1.0,
        )?;

        if !(1..=300).contains(&self.max_cloning_time_days) {
            return Err(TemplateError::InvalidConfig(format!(
                "max_cloning_time_days ({}) must be within 1..=300",
                self.max_cloning_time_days
            )));
        }
        if !(1..=20).contains(&self.ingredient_check_interval_seconds) {
            return Err(TemplateError::InvalidConfig(format!(
                "ingredient_check_interval_seconds ({}) must be within 1..=20",
                self.ingredient_check_interval_seconds
            )));
        }

        Ok(())
    }
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if value.is_nan() || value < min || value > max {
        return Err(TemplateError::InvalidConfig(format!(
            "{} ({}) must be within {}..={}",
            name, value, min, max
        )));
    }
    Ok(())
}
