//! App Configuration
//!
//! Presentation settings, loadable from JSON. Every field has a default so
//! a config file only needs the keys it changes.

use crate::error::AppError;
use alloc::format;
use alloc::string::String;
use calc_engine::ComputeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default display width in characters
pub const DEFAULT_MAX_DISPLAY_LEN: usize = 15;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Main display is hard-truncated to this many characters
    pub max_display_len: usize,

    /// Thousands separator for the integer part
    pub group_separator: char,

    /// Shown once after a division by zero
    pub divide_by_zero_text: String,

    /// Shown once after any other failed computation
    pub error_text: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_display_len: DEFAULT_MAX_DISPLAY_LEN,
            group_separator: ',',
            divide_by_zero_text: String::from("Error: Div by 0"),
            error_text: String::from("Error"),
        }
    }
}

impl CalculatorConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Error overlay text for a recovered computation failure.
    pub fn error_text_for(&self, error: ComputeError) -> &str {
        match error {
            ComputeError::DivideByZero => &self.divide_by_zero_text,
            ComputeError::InvalidOperand | ComputeError::Overflow => &self.error_text,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.max_display_len == 0 {
            return Err(AppError::Config(String::from(
                "max_display_len must be at least 1",
            )));
        }
        if self.group_separator.is_ascii_digit() || self.group_separator == '.' {
            return Err(AppError::Config(format!(
                "group_separator {:?} would be ambiguous",
                self.group_separator
            )));
        }
        Ok(())
    }
}
