//! Environment configuration for the insight CLI
//!
//! Values come from the environment (with an optional `.env` file loaded
//! through dotenvy); out-of-range numbers are clamped rather than rejected,
//! so a sloppy `.env` never breaks the tool. `validate` exists for callers
//! that construct a config by hand.

use thiserror::Error;

pub const DEFAULT_MAX_ADVISORIES: usize = 10;
pub const DEFAULT_MAX_OUTPUT_LINES: usize = 200;

const MAX_ADVISORIES_RANGE: (usize, usize) = (1, 50);
const MAX_OUTPUT_LINES_RANGE: (usize, usize) = (1, 1000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_advisories must be between 1 and 50, got {got}")]
    MaxAdvisoriesOutOfRange { got: usize },
    #[error("max_output_lines must be between 1 and 1000, got {got}")]
    MaxOutputLinesOutOfRange { got: usize },
}

/// Rendering caps applied by the CLI; the analyzers themselves are never
/// truncated by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightConfig {
    pub max_advisories: usize,
    pub max_output_lines: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            max_advisories: DEFAULT_MAX_ADVISORIES,
            max_output_lines: DEFAULT_MAX_OUTPUT_LINES,
        }
    }
}

impl InsightConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Optional .env alongside the working directory; absence is fine
        let _ = dotenvy::dotenv();

        let max_advisories = env_usize("INSIGHT_MAX_ADVISORIES", DEFAULT_MAX_ADVISORIES)
            .clamp(MAX_ADVISORIES_RANGE.0, MAX_ADVISORIES_RANGE.1);
        let max_output_lines = env_usize("INSIGHT_MAX_OUTPUT_LINES", DEFAULT_MAX_OUTPUT_LINES)
            .clamp(MAX_OUTPUT_LINES_RANGE.0, MAX_OUTPUT_LINES_RANGE.1);

        let config = Self {
            max_advisories,
            max_output_lines,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_advisories < MAX_ADVISORIES_RANGE.0 || self.max_advisories > MAX_ADVISORIES_RANGE.1 {
            return Err(ConfigError::MaxAdvisoriesOutOfRange {
                got: self.max_advisories,
            });
        }
        if self.max_output_lines < MAX_OUTPUT_LINES_RANGE.0
            || self.max_output_lines > MAX_OUTPUT_LINES_RANGE.1
        {
            return Err(ConfigError::MaxOutputLinesOutOfRange {
                got: self.max_output_lines,
            });
        }
        Ok(())
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}
