//! Task types for the quest log.
//!
//! A task's base XP reward is fixed from its difficulty at creation time
//! and never re-priced afterwards, even if the difficulty is later edited.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Task difficulty, fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Quick wins (25 XP)
    Easy,
    /// Typical tasks (50 XP, default)
    Medium,
    /// High-impact work (100 XP)
    Hard,
}

impl Difficulty {
    /// Base XP reward for a task of this difficulty.
    pub fn base_xp(&self) -> i64 {
        match self {
            Difficulty::Easy => 25,
            Difficulty::Medium => 50,
            Difficulty::Hard => 100,
        }
    }

    /// Relative weight used by the adaptive scorer.
    pub fn weight(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// User-assigned task priority for display and filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A persisted task owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Owner identifier (always passed explicitly, never ambient)
    pub owner: String,
    /// Task title
    pub title: String,
    /// Base XP reward, assigned from difficulty at creation
    pub xp: i64,
    /// Display priority
    pub priority: Priority,
    /// Whether the task is completed
    pub completed: bool,
    /// Difficulty selected at creation
    pub difficulty: Difficulty,
    /// Optional free-text label
    pub label: Option<String>,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Optional due time
    pub due_time: Option<NaiveTime>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp (null if not completed)
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task with XP priced from its difficulty.
    pub fn new(owner: impl Into<String>, title: impl Into<String>, difficulty: Difficulty) -> Self {
        let now = Utc::now();
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            owner: owner.into(),
            title: title.into(),
            xp: difficulty.base_xp(),
            priority: Priority::default(),
            completed: false,
            difficulty,
            label: None,
            due_date: None,
            due_time: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Set the display priority (builder style).
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the free-text label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_priced_from_difficulty() {
        assert_eq!(Difficulty::Easy.base_xp(), 25);
        assert_eq!(Difficulty::Medium.base_xp(), 50);
        assert_eq!(Difficulty::Hard.base_xp(), 100);

        let task = Task::new("user-1", "Write report", Difficulty::Hard);
        assert_eq!(task.xp, 100);
        assert!(!task.completed);
    }

    #[test]
    fn test_difficulty_weights() {
        assert_eq!(Difficulty::Easy.weight(), 1);
        assert_eq!(Difficulty::Medium.weight(), 2);
        assert_eq!(Difficulty::Hard.weight(), 3);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_task_serde_roundtrip() {
        let task = Task::new("user-1", "Read a chapter", Difficulty::Easy)
            .with_priority(Priority::High)
            .with_label("reading");

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"difficulty\":\"easy\""));
        assert!(json.contains("\"priority\":\"high\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.xp, 25);
        assert_eq!(back.label.as_deref(), Some("reading"));
    }
}
