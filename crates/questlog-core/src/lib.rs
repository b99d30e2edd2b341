//! # Questlog Core Library
//!
//! This library provides the core business logic for Questlog, a gamified
//! personal task manager. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary over the same
//! core library.
//!
//! ## Architecture
//!
//! - **Leveling Model**: pure functions converting XP awards into level,
//!   remainder, and day-streak progression
//! - **Energy Mode Classifier**: maps a self-reported energy/sleep/mood
//!   check-in to an operating mode (Sprint/Normal/Rest)
//! - **Adaptive Task Scorer**: re-ranks and re-prices the task list under
//!   the current mode as a derived, never-persisted projection
//! - **Storage**: SQLite-based task and stats persistence plus TOML-based
//!   configuration
//!
//! The engine components are pure and synchronous: values in, values out,
//! no suspension points and no shared mutable state. Persistence is the
//! caller's job, through [`TaskDb`].
//!
//! ## Key Components
//!
//! - [`ModeStrategy`]: the two mode-classification formulas
//! - [`adapt_tasks`]: the mode-driven scoring projection
//! - [`apply_xp`]: XP, level, and streak accounting
//! - [`TaskDb`]: task and stats persistence
//! - [`Config`]: application configuration management

pub mod adaptive;
pub mod checkin;
pub mod error;
pub mod leveling;
pub mod storage;
pub mod task;

pub use adaptive::{adapt_tasks, AdaptiveTask};
pub use checkin::{EnergyCheckIn, Mode, ModeStrategy, Mood, SleepQuality};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use leveling::{apply_xp, total_xp_for_level, xp_required_for_level, UserStats, XpAward};
pub use storage::{Config, NewTask, TaskDb};
pub use task::{Difficulty, Priority, Task};
