pub mod checkin;
pub mod config;
pub mod stats;
pub mod task;

use chrono::NaiveTime;
use questlog_core::{Difficulty, Mood, Priority, SleepQuality};

/// Parse a priority argument (high/medium/low).
pub fn parse_priority(value: &str) -> Result<Priority, String> {
    match value.to_lowercase().as_str() {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        _ => Err(format!("invalid priority: '{value}'. Use high/medium/low")),
    }
}

/// Parse a difficulty argument (easy/medium/hard).
pub fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    match value.to_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        _ => Err(format!("invalid difficulty: '{value}'. Use easy/medium/hard")),
    }
}

/// Parse a time-of-day argument, with or without seconds.
pub fn parse_due_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("invalid time: '{value}'. Use HH:MM"))
}

/// Parse a sleep-quality argument (poor/fair/good/excellent).
pub fn parse_sleep(value: &str) -> Result<SleepQuality, String> {
    match value.to_lowercase().as_str() {
        "poor" => Ok(SleepQuality::Poor),
        "fair" => Ok(SleepQuality::Fair),
        "good" => Ok(SleepQuality::Good),
        "excellent" => Ok(SleepQuality::Excellent),
        _ => Err(format!(
            "invalid sleep quality: '{value}'. Use poor/fair/good/excellent"
        )),
    }
}

/// Parse a mood argument (stressed/neutral/motivated/energized).
pub fn parse_mood(value: &str) -> Result<Mood, String> {
    match value.to_lowercase().as_str() {
        "stressed" => Ok(Mood::Stressed),
        "neutral" => Ok(Mood::Neutral),
        "motivated" => Ok(Mood::Motivated),
        "energized" => Ok(Mood::Energized),
        _ => Err(format!(
            "invalid mood: '{value}'. Use stressed/neutral/motivated/energized"
        )),
    }
}
