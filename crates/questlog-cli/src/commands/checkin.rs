//! Energy check-in command: classify today's mode and adapt the task list.

use clap::Args;

use questlog_core::{
    adapt_tasks, Config, EnergyCheckIn, ModeStrategy, Mood, SleepQuality, TaskDb,
};

use super::{parse_mood, parse_sleep};

/// Parse a mode-strategy argument (additive/averaged).
pub fn parse_strategy(value: &str) -> Result<ModeStrategy, String> {
    match value.to_lowercase().as_str() {
        "additive" => Ok(ModeStrategy::Additive),
        "averaged" => Ok(ModeStrategy::Averaged),
        _ => Err(format!(
            "invalid strategy: '{value}'. Use additive/averaged"
        )),
    }
}

#[derive(Args)]
pub struct CheckinArgs {
    /// Energy level 1-5
    #[arg(long)]
    pub energy: u8,
    /// Sleep quality: poor/fair/good/excellent
    #[arg(long, value_parser = parse_sleep)]
    pub sleep: SleepQuality,
    /// Mood: stressed/neutral/motivated/energized
    #[arg(long, value_parser = parse_mood)]
    pub mood: Mood,
    /// Mode strategy override: additive or averaged
    #[arg(long, value_parser = parse_strategy)]
    pub strategy: Option<ModeStrategy>,
    /// Output the adapted task list as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CheckinArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let checkin = EnergyCheckIn::new(args.energy, args.sleep, args.mood)?;
    let strategy = args.strategy.unwrap_or(config.energy.strategy);
    let mode = strategy.classify(&checkin);

    let db = TaskDb::open()?;
    let tasks = db.list_tasks(&config.profile.owner)?;
    let adapted = adapt_tasks(&tasks, mode);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&adapted)?);
        return Ok(());
    }

    println!("{}", mode.label());
    println!("{}", mode.description());
    println!();

    if adapted.is_empty() {
        println!("No tasks. Create one with: questlog-cli task create <title>");
        return Ok(());
    }

    for task in &adapted {
        let mark = if task.task.completed {
            "x"
        } else if task.is_recommended {
            "*"
        } else {
            " "
        };
        let mut line = format!("[{}] {}  +{} XP", mark, task.task.title, task.adjusted_xp);
        if task.xp_bonus() > 0 {
            line.push_str(&format!(" (+{} bonus)", task.xp_bonus()));
        }
        if !task.time_slot.is_empty() && !task.task.completed {
            line.push_str(&format!("  [{}]", task.time_slot));
        }
        println!("{line}");
        if !task.suggestion.is_empty() && !task.task.completed {
            println!("      {}", task.suggestion);
        }
    }

    Ok(())
}
