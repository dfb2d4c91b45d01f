//! Analyzers over lesson source text

/// Hint attention heuristic and presentation-owned view state
pub mod attention;
/// Trigger-catalog hint and best-practice inference
pub mod hints;
/// Stripped-text lexical predicates shared by the analyzers
pub mod lexical;
/// Heuristic output prediction for print-based lesson scripts
pub mod predictor;

// Re-export commonly used types
pub use attention::{should_surface_hints, HintPager};
pub use hints::{infer, AdvisoryCategory, AdvisoryMessage, AdvisoryReport};
pub use predictor::{classify_argument, predict_output, PrintArgument};
