//! Level, XP, and streak reporting.

use clap::Subcommand;

use questlog_core::{xp_required_for_level, Config, TaskDb};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current level, XP progress, and streak
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// XP remaining until the next level
    Next,
}

/// Render a fixed-width progress bar for the XP toward the next level.
fn render_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = TaskDb::open()?;
    let config = Config::load_or_default();
    let stats = db.get_stats(&config.profile.owner)?;

    match action {
        StatsAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            let required = xp_required_for_level(stats.level);
            println!("Level {}", stats.level);
            println!(
                "  {} {}/{} XP ({:.0}%)",
                render_bar(stats.progress_percent(), 20),
                stats.xp,
                required,
                stats.progress_percent(),
            );
            println!("  Streak: {} day(s)", stats.streak);
            match stats.last_activity_date {
                Some(date) => println!("  Last activity: {date}"),
                None => println!("  Last activity: never"),
            }
        }
        StatsAction::Next => {
            println!(
                "{} XP to reach level {}",
                stats.xp_to_next_level(),
                stats.level + 1
            );
        }
    }

    Ok(())
}
