//! Hint attention heuristic and pager view state
//!
//! The surrounding UI owns this state explicitly and passes it around as a
//! plain serializable value; the analyzers never read or write it.

use serde::{Deserialize, Serialize};

use super::lexical;

/// How many characters of growth over the starting snippet make loop code
/// worth interrupting the learner for.
const LOOP_GROWTH_THRESHOLD: usize = 20;
/// Growth threshold for conditional code that lacks error handling.
const CONDITIONAL_GROWTH_THRESHOLD: usize = 30;

/// Decide whether the hints panel deserves the learner's attention.
///
/// Fires when the task ships authored hints, or when the code has grown
/// meaningfully past the starting snippet and shows loop or unguarded
/// conditional patterns.
pub fn should_surface_hints(source: &str, baseline_len: usize, has_task_hints: bool) -> bool {
    if has_task_hints {
        return true;
    }

    let stripped = lexical::strip_nonsemantic(source);
    let has_loops = lexical::has_for_loop(&stripped) || lexical::has_while_loop(&stripped);
    let has_conditionals = lexical::has_conditional(&stripped);
    let lacks_error_handling = !lexical::has_error_handling(&stripped);
    let grown_by = source.chars().count().saturating_sub(baseline_len);

    (has_loops && grown_by > LOOP_GROWTH_THRESHOLD)
        || (has_conditionals && lacks_error_handling && grown_by > CONDITIONAL_GROWTH_THRESHOLD)
}

/// Cursor over a displayed advisory list. Plain value type, serializable,
/// clamped against the list length on every move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintPager {
    index: usize,
}

impl HintPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self, total: usize) {
        if self.index + 1 < total {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Re-clamp after the advisory list shrinks under the cursor.
    pub fn clamp_to(&mut self, total: usize) {
        if total == 0 {
            self.index = 0;
        } else if self.index >= total {
            self.index = total - 1;
        }
    }
}
