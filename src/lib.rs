//! Heuristic code-insight engine for Python lesson code
//!
//! Two pure analyzers over a source-text blob: a best-effort output
//! predictor for a narrow family of lesson scripts, and a trigger-catalog
//! hint engine producing categorized coaching advisories. Neither executes
//! code or keeps state between calls.

use serde::{Deserialize, Serialize};

/// Safely truncate a UTF-8 string to a maximum number of characters
pub fn truncate_utf8_safe(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Analyzers over lesson source text
pub mod analysis;

/// Environment configuration for the CLI
pub mod config;

// Re-export commonly used types for convenience
pub use analysis::{
    infer, predict_output, should_surface_hints, AdvisoryCategory, AdvisoryMessage,
    AdvisoryReport, HintPager,
};
pub use config::{ConfigError, InsightConfig};

/// Combined result of one analyzer pass, as emitted by the CLI in JSON mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisories: Option<AdvisoryReport>,
}

/// Run both analyzers over `source` in one call.
pub fn analyze(source: &str, task_hints: &[String]) -> InsightReport {
    InsightReport {
        predicted_output: Some(predict_output(source)),
        advisories: Some(infer(source, task_hints)),
    }
}
