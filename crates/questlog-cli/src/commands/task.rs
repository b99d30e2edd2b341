//! Task management commands for CLI.

use chrono::{Local, NaiveDate, NaiveTime};
use clap::Subcommand;

use questlog_core::{
    adapt_tasks, apply_xp, Config, Difficulty, EnergyCheckIn, ModeStrategy, Mood, NewTask,
    Priority, SleepQuality, TaskDb,
};

use super::checkin::parse_strategy;
use super::{parse_difficulty, parse_due_time, parse_mood, parse_priority, parse_sleep};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Priority: high, medium, or low (default: medium)
        #[arg(long, value_parser = parse_priority)]
        priority: Option<Priority>,
        /// Difficulty: easy, medium, or hard (default: medium, fixes the XP reward)
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,
        /// Free-text label
        #[arg(long)]
        label: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,
        /// Due time (HH:MM)
        #[arg(long, value_parser = parse_due_time)]
        due_time: Option<NaiveTime>,
    },
    /// List tasks
    List {
        /// Include completed tasks
        #[arg(long)]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Complete a task and earn its XP
    Complete {
        /// Task ID
        id: String,
        /// Energy level 1-5; with --sleep and --mood, XP is priced by today's mode
        #[arg(long)]
        energy: Option<u8>,
        /// Sleep quality: poor/fair/good/excellent
        #[arg(long, value_parser = parse_sleep)]
        sleep: Option<SleepQuality>,
        /// Mood: stressed/neutral/motivated/energized
        #[arg(long, value_parser = parse_mood)]
        mood: Option<Mood>,
        /// Mode strategy override: additive or averaged
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<ModeStrategy>,
    },
    /// Reopen a completed task (earned XP is kept)
    Reopen {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = TaskDb::open()?;
    let config = Config::load_or_default();
    let owner = config.profile.owner.clone();

    match action {
        TaskAction::Create {
            title,
            priority,
            difficulty,
            label,
            due_date,
            due_time,
        } => {
            let task = db.create_task(
                &owner,
                NewTask {
                    title,
                    priority,
                    difficulty,
                    label,
                    due_date,
                    due_time,
                },
            )?;
            println!("Task created: {}", task.id);
            println!("  Title: {}", task.title);
            println!("  Reward: {} XP ({:?})", task.xp, task.difficulty);
        }
        TaskAction::List { all, json } => {
            let mut tasks = db.list_tasks(&owner)?;
            if !all {
                tasks.retain(|t| !t.completed);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks. Create one with: questlog-cli task create <title>");
            } else {
                for task in &tasks {
                    let mark = if task.completed { "x" } else { " " };
                    println!(
                        "[{}] {}  {} ({} XP, {})",
                        mark,
                        task.id,
                        task.title,
                        task.xp,
                        format!("{:?}", task.difficulty).to_lowercase(),
                    );
                }
            }
        }
        TaskAction::Get { id } => {
            let task = db.get_task(&id)?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Complete {
            id,
            energy,
            sleep,
            mood,
            strategy,
        } => {
            let task = db.get_task(&id)?;
            if task.completed {
                println!("Task already completed: {}", task.title);
                return Ok(());
            }

            let amount = match (energy, sleep, mood) {
                (Some(level), Some(sleep), Some(mood)) => {
                    let checkin = EnergyCheckIn::new(level, sleep, mood)?;
                    let mode = strategy
                        .unwrap_or(config.energy.strategy)
                        .classify(&checkin);
                    let adapted = adapt_tasks(&[task.clone()], mode);
                    println!("{} -- {}", mode.label(), mode.description());
                    adapted[0].adjusted_xp
                }
                (None, None, None) => task.xp,
                _ => {
                    return Err(
                        "provide --energy, --sleep, and --mood together (or none)".into()
                    )
                }
            };

            db.set_completed(&id, true)?;
            let stats = db.get_stats(&owner)?;
            let today = Local::now().date_naive();
            let award = apply_xp(&stats, amount, today)?;
            db.save_stats(&award.stats)?;

            println!("Task completed: {}", task.title);
            println!("  +{} XP", amount);
            if award.leveled_up {
                println!("  Level up! You are now level {}", award.stats.level);
            }
            println!("  Streak: {} day(s)", award.stats.streak);
        }
        TaskAction::Reopen { id } => {
            let task = db.set_completed(&id, false)?;
            println!("Task reopened: {}", task.title);
        }
        TaskAction::Delete { id } => {
            db.delete_task(&id)?;
            println!("Task deleted: {id}");
        }
    }

    Ok(())
}
