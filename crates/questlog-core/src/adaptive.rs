//! Adaptive task scoring engine.
//!
//! Given the task list and the day's operating mode, produces a
//! prioritized, re-priced, annotated projection of every task. The
//! projection is derived state: it is recomputed from scratch on every
//! invocation and never persisted, so annotations cannot go stale when
//! the mode changes without a task-list change (or vice versa).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::checkin::Mode;
use crate::task::{Difficulty, Task};

/// A task annotated with mode-dependent score, XP, and advice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveTask {
    /// The underlying task
    #[serde(flatten)]
    pub task: Task,
    /// Ranking key only; never displayed as a value
    pub priority_score: f64,
    /// XP actually awarded if completed under the current mode
    pub adjusted_xp: i64,
    /// Advisory text (empty when the mode has no advice for this task)
    pub suggestion: String,
    /// Whether the mode recommends this task right now
    pub is_recommended: bool,
    /// Advisory time slot (empty when the mode assigns none)
    pub time_slot: String,
}

impl AdaptiveTask {
    /// XP bonus over the base reward under the current mode.
    pub fn xp_bonus(&self) -> i64 {
        self.adjusted_xp - self.task.xp
    }
}

/// Project a task list through the mode policy, sorted for display.
///
/// Completed tasks always sort after incomplete ones; within each bucket
/// the order is descending `priority_score`. Ties keep their input
/// order (the sort is stable), so equal-priority tasks do not visibly
/// reorder between invocations.
pub fn adapt_tasks(tasks: &[Task], mode: Mode) -> Vec<AdaptiveTask> {
    let mut adapted: Vec<AdaptiveTask> = tasks.iter().map(|t| adapt_task(t, mode)).collect();
    adapted.sort_by(|a, b| {
        a.task
            .completed
            .cmp(&b.task.completed)
            .then_with(|| {
                b.priority_score
                    .partial_cmp(&a.priority_score)
                    .unwrap_or(Ordering::Equal)
            })
    });
    adapted
}

/// Apply the mode policy to a single task.
fn adapt_task(task: &Task, mode: Mode) -> AdaptiveTask {
    let base = task.xp as f64;
    let mut priority_score = base;
    let mut adjusted_xp = task.xp;
    let mut suggestion = "";
    let mut is_recommended = false;
    let mut time_slot = "";

    match mode {
        Mode::Rest => match task.difficulty {
            Difficulty::Easy => {
                priority_score *= 3.0;
                adjusted_xp = scale_xp(task.xp, 1.5);
                is_recommended = true;
                suggestion = "A good fit for your current energy level";
                time_slot = "whenever you can";
            }
            Difficulty::Hard => {
                priority_score *= 0.3;
                suggestion = "Consider deferring until you have more energy";
                time_slot = "tomorrow";
            }
            Difficulty::Medium => {
                priority_score *= 0.7;
                suggestion = "Break it into smaller steps if needed";
                time_slot = "later";
            }
        },
        Mode::Sprint => match task.difficulty {
            Difficulty::Hard => {
                priority_score *= 3.0;
                adjusted_xp = scale_xp(task.xp, 2.0);
                is_recommended = true;
                suggestion = "Ideal moment for this high-impact task";
                time_slot = "now";
            }
            Difficulty::Medium => {
                priority_score *= 1.5;
                adjusted_xp = scale_xp(task.xp, 1.3);
                is_recommended = true;
                time_slot = "next hour";
            }
            Difficulty::Easy => {
                priority_score *= 0.8;
                time_slot = "later";
            }
        },
        Mode::Normal => {
            if task.difficulty == Difficulty::Medium {
                is_recommended = true;
                suggestion = "Good balance of effort and reward";
                time_slot = "during the day";
            }
        }
    }

    AdaptiveTask {
        task: task.clone(),
        priority_score,
        adjusted_xp,
        suggestion: suggestion.to_string(),
        is_recommended,
        time_slot: time_slot.to_string(),
    }
}

/// Round-to-nearest XP scaling, kept in one place so the rounding policy
/// stays consistent across modes.
fn scale_xp(xp: i64, factor: f64) -> i64 {
    (xp as f64 * factor).round() as i64
}
