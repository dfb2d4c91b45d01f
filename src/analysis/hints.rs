//! Hint and best-practice inference over lesson source text
//!
//! A fixed catalog of lexical triggers is evaluated against a stripped copy
//! of the source (string/comment contents blanked, see [`super::lexical`]).
//! Each trigger that fires contributes at most one advisory message per
//! category. Author-supplied task hints are surfaced first, titled
//! "Task Hint N", and are never deduplicated against code-derived hints.
//!
//! Pure and deterministic: the same source and task hints always produce
//! the same ordered report.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lexical;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryCategory {
    Hint,
    BestPractice,
    Warning,
}

/// One advisory record shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryMessage {
    pub title: String,
    pub content: String,
    pub category: AdvisoryCategory,
}

impl AdvisoryMessage {
    fn new(title: &str, content: &str, category: AdvisoryCategory) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            category,
        }
    }
}

/// The three parallel advisory lists, in display order.
///
/// `hints` and `best_practices` are never empty (a placeholder entry stands
/// in when nothing fired); `warnings` may legitimately be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub hints: Vec<AdvisoryMessage>,
    pub best_practices: Vec<AdvisoryMessage>,
    pub warnings: Vec<AdvisoryMessage>,
}

impl AdvisoryReport {
    pub fn total(&self) -> usize {
        self.hints.len() + self.best_practices.len() + self.warnings.len()
    }
}

struct HintTrigger {
    id: &'static str,
    predicate: fn(&str) -> bool,
    messages: &'static [(AdvisoryCategory, &'static str, &'static str)],
}

// Catalog order is presentation order. Each entry may contribute to more
// than one category (e.g. while -> hint + warning).
static CATALOG: &[HintTrigger] = &[
    HintTrigger {
        id: "print-call",
        predicate: lexical::has_print_call,
        messages: &[(
            AdvisoryCategory::Hint,
            "String Formatting",
            "The print() function outputs text to the console. You can format strings using f-strings like f\"Hello, {name}!\"",
        )],
    },
    HintTrigger {
        id: "function-def",
        predicate: lexical::has_function_def,
        messages: &[(
            AdvisoryCategory::Hint,
            "Functions & Docstrings",
            "Functions help organize and reuse code. Remember to add docstrings to document what your functions do.",
        )],
    },
    HintTrigger {
        id: "for-loop",
        predicate: lexical::has_for_loop,
        messages: &[
            (
                AdvisoryCategory::Hint,
                "Loop Iteration",
                "For loops iterate over sequences like lists, tuples, or strings.",
            ),
            (
                AdvisoryCategory::BestPractice,
                "List Comprehensions",
                "Consider using list comprehensions for simple transformations of lists.",
            ),
        ],
    },
    HintTrigger {
        id: "while-loop",
        predicate: lexical::has_while_loop,
        messages: &[
            (
                AdvisoryCategory::Hint,
                "While Loops",
                "While loops continue until a condition becomes False.",
            ),
            (
                AdvisoryCategory::Warning,
                "Infinite Loop Risk",
                "Be careful with while loops to avoid infinite loops. Ensure the condition will eventually become False.",
            ),
        ],
    },
    HintTrigger {
        id: "conditional",
        predicate: lexical::has_conditional,
        messages: &[(
            AdvisoryCategory::Hint,
            "Conditionals",
            "Conditional statements let your code make decisions based on conditions.",
        )],
    },
    HintTrigger {
        id: "import",
        predicate: lexical::has_import,
        messages: &[(
            AdvisoryCategory::BestPractice,
            "Import Placement",
            "Import statements should be at the top of your file.",
        )],
    },
    HintTrigger {
        id: "bare-except",
        predicate: lexical::has_bare_except,
        messages: &[(
            AdvisoryCategory::Warning,
            "Bare Except",
            "Avoid bare except clauses. Specify the exceptions you want to catch.",
        )],
    },
    HintTrigger {
        id: "global-state",
        predicate: lexical::has_global,
        messages: &[(
            AdvisoryCategory::Warning,
            "Global State",
            "Use global variables sparingly. Consider using function parameters and return values instead.",
        )],
    },
];

const STYLE_REMINDER_TITLE: &str = "Python Style";
const STYLE_REMINDER: &str =
    "Use meaningful variable names and follow PEP 8 style guidelines for clean, readable code.";

const NO_HINTS_PLACEHOLDER: &str = "No specific hints for this code yet.";
const NO_PRACTICES_PLACEHOLDER: &str = "No specific best practices for this code yet.";

/// Run the trigger catalog against `source` and assemble the report.
///
/// `task_hints` are authored hints from the task definition; when non-empty
/// they form a prefix of the hints list regardless of code content.
pub fn infer(source: &str, task_hints: &[String]) -> AdvisoryReport {
    let mut report = AdvisoryReport::default();

    for (i, hint) in task_hints.iter().enumerate() {
        report.hints.push(AdvisoryMessage {
            title: format!("Task Hint {}", i + 1),
            content: hint.clone(),
            category: AdvisoryCategory::Hint,
        });
    }

    let stripped = lexical::strip_nonsemantic(source);
    let mut any_fired = false;

    for trigger in CATALOG {
        if !(trigger.predicate)(&stripped) {
            continue;
        }
        any_fired = true;
        debug!(trigger = trigger.id, "hint trigger fired");
        for (category, title, content) in trigger.messages {
            let msg = AdvisoryMessage::new(title, content, *category);
            match category {
                AdvisoryCategory::Hint => report.hints.push(msg),
                AdvisoryCategory::BestPractice => report.best_practices.push(msg),
                AdvisoryCategory::Warning => report.warnings.push(msg),
            }
        }
    }

    // Trailing generic style reminder, only alongside real findings
    if !source.is_empty() && any_fired {
        report.best_practices.push(AdvisoryMessage::new(
            STYLE_REMINDER_TITLE,
            STYLE_REMINDER,
            AdvisoryCategory::BestPractice,
        ));
    }

    if report.hints.is_empty() {
        report.hints.push(AdvisoryMessage::new(
            "Hints",
            NO_HINTS_PLACEHOLDER,
            AdvisoryCategory::Hint,
        ));
    }
    if report.best_practices.is_empty() {
        report.best_practices.push(AdvisoryMessage::new(
            "Best Practices",
            NO_PRACTICES_PLACEHOLDER,
            AdvisoryCategory::BestPractice,
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = CATALOG.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn style_reminder_is_last_best_practice() {
        let report = infer("import os\nfor x in [1]:\n    pass\n", &[]);
        let last = report.best_practices.last().unwrap();
        assert_eq!(last.title, STYLE_REMINDER_TITLE);
    }

    #[test]
    fn no_style_reminder_without_other_findings() {
        let report = infer("x = 1\n", &[]);
        assert_eq!(report.best_practices.len(), 1);
        assert_eq!(report.best_practices[0].content, NO_PRACTICES_PLACEHOLDER);
    }
}
