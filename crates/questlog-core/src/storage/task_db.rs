//! SQLite-based storage for tasks and per-user stats.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::error::{CoreError, DatabaseError, Result, ValidationError};
use crate::leveling::UserStats;
use crate::task::{Difficulty, Priority, Task};

// === Helper Functions ===

/// Parse task priority from database string
fn parse_priority(priority_str: &str) -> Priority {
    match priority_str {
        "high" => Priority::High,
        "low" => Priority::Low,
        _ => Priority::Medium,
    }
}

/// Format task priority for database storage
fn format_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "high",
        Priority::Medium => "medium",
        Priority::Low => "low",
    }
}

/// Parse task difficulty from database string
fn parse_difficulty(difficulty_str: &str) -> Difficulty {
    match difficulty_str {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

/// Format task difficulty for database storage
fn format_difficulty(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "easy",
        Difficulty::Medium => "medium",
        Difficulty::Hard => "hard",
    }
}

/// Parse datetime from RFC3339 string with fallback to current time
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Parse calendar date from ISO string
fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Parse time-of-day from HH:MM:SS string
fn parse_time(time_str: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time_str, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time_str, "%H:%M"))
        .ok()
}

/// Build a Task from a database row
fn row_to_task(row: &rusqlite::Row) -> std::result::Result<Task, rusqlite::Error> {
    let priority_str: String = row.get(4)?;
    let difficulty_str: String = row.get(6)?;
    let due_date: Option<String> = row.get(8)?;
    let due_time: Option<String> = row.get(9)?;
    let created_at: String = row.get(10)?;
    let updated_at: String = row.get(11)?;
    let completed_at: Option<String> = row.get(12)?;

    Ok(Task {
        id: row.get(0)?,
        owner: row.get(1)?,
        title: row.get(2)?,
        xp: row.get(3)?,
        priority: parse_priority(&priority_str),
        completed: row.get(5)?,
        difficulty: parse_difficulty(&difficulty_str),
        label: row.get(7)?,
        due_date: due_date.as_deref().and_then(parse_date),
        due_time: due_time.as_deref().and_then(parse_time),
        created_at: parse_datetime_fallback(&created_at),
        updated_at: parse_datetime_fallback(&updated_at),
        completed_at: completed_at.as_deref().map(parse_datetime_fallback),
    })
}

/// Fields supplied when creating a task; everything else is derived.
///
/// The base XP is never accepted from the caller: it is priced from the
/// difficulty table at creation and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub priority: Option<Priority>,
    pub difficulty: Option<Difficulty>,
    pub label: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
}

/// SQLite database for task and stats storage.
pub struct TaskDb {
    conn: Connection,
}

impl TaskDb {
    /// Open the database at `~/.config/questlog/questlog.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()
            .map_err(|e| CoreError::Custom(e.to_string()))?
            .join("questlog.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        conn.busy_timeout(std::time::Duration::from_secs(5))
            .map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id           TEXT PRIMARY KEY,
                    owner        TEXT NOT NULL,
                    title        TEXT NOT NULL,
                    xp           INTEGER NOT NULL,
                    priority     TEXT NOT NULL DEFAULT 'medium',
                    completed    INTEGER NOT NULL DEFAULT 0,
                    difficulty   TEXT NOT NULL DEFAULT 'medium',
                    label        TEXT,
                    due_date     TEXT,
                    due_time     TEXT,
                    created_at   TEXT NOT NULL,
                    updated_at   TEXT NOT NULL,
                    completed_at TEXT
                );

                CREATE TABLE IF NOT EXISTS user_stats (
                    owner              TEXT PRIMARY KEY,
                    xp                 INTEGER NOT NULL DEFAULT 0,
                    level              INTEGER NOT NULL DEFAULT 0,
                    streak             INTEGER NOT NULL DEFAULT 0,
                    last_activity_date TEXT
                );

                CREATE INDEX IF NOT EXISTS idx_tasks_owner ON tasks(owner);
                CREATE INDEX IF NOT EXISTS idx_tasks_owner_completed ON tasks(owner, completed);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }

    // === Task CRUD ===

    /// Create a task for `owner`, pricing XP from the difficulty table.
    ///
    /// # Errors
    /// Rejects an empty or blank title before anything is written.
    pub fn create_task(&self, owner: &str, new_task: NewTask) -> Result<Task> {
        if new_task.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title").into());
        }

        let mut task = Task::new(
            owner,
            new_task.title,
            new_task.difficulty.unwrap_or_default(),
        );
        task.priority = new_task.priority.unwrap_or_default();
        task.label = new_task.label;
        task.due_date = new_task.due_date;
        task.due_time = new_task.due_time;

        self.conn
            .execute(
                "INSERT INTO tasks (id, owner, title, xp, priority, completed, difficulty,
                                    label, due_date, due_time, created_at, updated_at, completed_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    task.id,
                    task.owner,
                    task.title,
                    task.xp,
                    format_priority(task.priority),
                    task.completed,
                    format_difficulty(task.difficulty),
                    task.label,
                    task.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
                    task.due_time.map(|t| t.format("%H:%M:%S").to_string()),
                    task.created_at.to_rfc3339(),
                    task.updated_at.to_rfc3339(),
                    Option::<String>::None,
                ],
            )
            .map_err(DatabaseError::from)?;

        Ok(task)
    }

    /// List all tasks for `owner`, newest first.
    pub fn list_tasks(&self, owner: &str) -> Result<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, owner, title, xp, priority, completed, difficulty,
                        label, due_date, due_time, created_at, updated_at, completed_at
                 FROM tasks WHERE owner = ?1
                 ORDER BY created_at DESC",
            )
            .map_err(DatabaseError::from)?;

        let tasks = stmt
            .query_map(params![owner], row_to_task)
            .map_err(DatabaseError::from)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(DatabaseError::from)?;

        Ok(tasks)
    }

    /// Get a single task by id.
    pub fn get_task(&self, id: &str) -> Result<Task> {
        self.conn
            .query_row(
                "SELECT id, owner, title, xp, priority, completed, difficulty,
                        label, due_date, due_time, created_at, updated_at, completed_at
                 FROM tasks WHERE id = ?1",
                params![id],
                row_to_task,
            )
            .optional()
            .map_err(DatabaseError::from)?
            .ok_or_else(|| {
                DatabaseError::NotFound {
                    entity: "task",
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// Set a task's completion flag and return the updated task.
    pub fn set_completed(&self, id: &str, completed: bool) -> Result<Task> {
        let now = Utc::now().to_rfc3339();
        let completed_at = completed.then(|| now.clone());
        let changed = self
            .conn
            .execute(
                "UPDATE tasks SET completed = ?2, completed_at = ?3, updated_at = ?4
                 WHERE id = ?1",
                params![id, completed, completed_at, now],
            )
            .map_err(DatabaseError::from)?;

        if changed == 0 {
            return Err(DatabaseError::NotFound {
                entity: "task",
                id: id.to_string(),
            }
            .into());
        }
        self.get_task(id)
    }

    /// Delete a task by id.
    pub fn delete_task(&self, id: &str) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .map_err(DatabaseError::from)?;

        if changed == 0 {
            return Err(DatabaseError::NotFound {
                entity: "task",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    // === User stats ===

    /// Fetch stats for `owner`, creating a zero-valued record on first access.
    pub fn get_stats(&self, owner: &str) -> Result<UserStats> {
        let existing = self
            .conn
            .query_row(
                "SELECT owner, xp, level, streak, last_activity_date
                 FROM user_stats WHERE owner = ?1",
                params![owner],
                |row| {
                    let last_activity: Option<String> = row.get(4)?;
                    Ok(UserStats {
                        owner: row.get(0)?,
                        xp: row.get(1)?,
                        level: row.get(2)?,
                        streak: row.get(3)?,
                        last_activity_date: last_activity.as_deref().and_then(parse_date),
                    })
                },
            )
            .optional()
            .map_err(DatabaseError::from)?;

        match existing {
            Some(stats) => Ok(stats),
            None => {
                let stats = UserStats::new(owner);
                self.save_stats(&stats)?;
                Ok(stats)
            }
        }
    }

    /// Upsert stats for a user.
    pub fn save_stats(&self, stats: &UserStats) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO user_stats (owner, xp, level, streak, last_activity_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(owner) DO UPDATE SET
                     xp = excluded.xp,
                     level = excluded.level,
                     streak = excluded.streak,
                     last_activity_date = excluded.last_activity_date",
                params![
                    stats.owner,
                    stats.xp,
                    stats.level,
                    stats.streak,
                    stats
                        .last_activity_date
                        .map(|d| d.format("%Y-%m-%d").to_string()),
                ],
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }
}
