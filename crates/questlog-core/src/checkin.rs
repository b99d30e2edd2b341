//! Daily energy check-in and operating-mode classification.
//!
//! A check-in is a self-reported energy/sleep/mood triple, produced once
//! per day and consumed immediately by the adaptive scorer. It is
//! session-scoped and never persisted by the core.
//!
//! Two classification formulas coexist in the product history; both are
//! exposed as named strategies. `Additive` is the canonical default.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Self-reported sleep quality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SleepQuality {
    /// Contribution to the additive composite score.
    pub fn contribution(&self) -> i32 {
        match self {
            SleepQuality::Excellent => 2,
            SleepQuality::Good => 1,
            SleepQuality::Fair => 0,
            SleepQuality::Poor => -1,
        }
    }

    /// Position on the normalized 1-5 scale used by the averaged strategy.
    pub fn normalized(&self) -> f64 {
        match self {
            SleepQuality::Poor => 1.0,
            SleepQuality::Fair => 2.5,
            SleepQuality::Good => 4.0,
            SleepQuality::Excellent => 5.0,
        }
    }
}

/// Self-reported mood.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Stressed,
    Neutral,
    Motivated,
    Energized,
}

impl Mood {
    /// Contribution to the additive composite score.
    pub fn contribution(&self) -> i32 {
        match self {
            Mood::Energized => 2,
            Mood::Motivated => 1,
            Mood::Neutral => 0,
            Mood::Stressed => -1,
        }
    }

    /// Position on the normalized 1-5 scale used by the averaged strategy.
    pub fn normalized(&self) -> f64 {
        match self {
            Mood::Stressed => 1.0,
            Mood::Neutral => 2.5,
            Mood::Motivated => 4.0,
            Mood::Energized => 5.0,
        }
    }
}

/// A single day's energy check-in.
///
/// `energy_level` is validated to the 1-5 scale at construction; the enum
/// inputs are closed sets and need no further checking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyCheckIn {
    /// Self-reported energy level (1-5)
    pub energy_level: u8,
    /// Sleep quality last night
    pub sleep_quality: SleepQuality,
    /// Current mood
    pub mood: Mood,
}

impl EnergyCheckIn {
    /// Create a check-in, rejecting an out-of-range energy level.
    pub fn new(
        energy_level: u8,
        sleep_quality: SleepQuality,
        mood: Mood,
    ) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&energy_level) {
            return Err(ValidationError::EnergyLevelOutOfRange {
                value: energy_level,
            });
        }
        Ok(Self {
            energy_level,
            sleep_quality,
            mood,
        })
    }
}

/// Operating mode derived from a check-in.
///
/// The mode drives task re-ranking and XP re-pricing for the day:
/// - **Sprint**: high energy, hard tasks surfaced with bonus XP
/// - **Normal**: balanced, medium tasks recommended
/// - **Rest**: low energy, easy tasks surfaced with bonus XP
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Sprint,
    Normal,
    Rest,
}

impl Mode {
    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Sprint => "Sprint mode",
            Mode::Normal => "Normal mode",
            Mode::Rest => "Rest mode",
        }
    }

    /// One-line banner description for display.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Sprint => "Your energy is at its peak. Double XP on hard tasks.",
            Mode::Normal => "A balance of productivity and rest.",
            Mode::Rest => "Light tasks recommended. Bonus XP on easy tasks.",
        }
    }
}

/// Named classification strategy mapping a check-in to a [`Mode`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModeStrategy {
    /// Composite integer score: energy level plus sleep and mood
    /// contributions. Score >= 6 is Sprint, >= 3 is Normal, else Rest.
    #[default]
    Additive,
    /// Average of three 1-5 subscores. Average >= 4.0 is Sprint,
    /// >= 2.5 is Normal, else Rest.
    Averaged,
}

impl ModeStrategy {
    /// Classify a check-in into an operating mode.
    ///
    /// Pure and deterministic; both strategies treat any below-threshold
    /// score (including negative composites) as Rest.
    pub fn classify(&self, checkin: &EnergyCheckIn) -> Mode {
        match self {
            ModeStrategy::Additive => {
                let score = checkin.energy_level as i32
                    + checkin.sleep_quality.contribution()
                    + checkin.mood.contribution();
                if score >= 6 {
                    Mode::Sprint
                } else if score >= 3 {
                    Mode::Normal
                } else {
                    Mode::Rest
                }
            }
            ModeStrategy::Averaged => {
                let avg = (checkin.energy_level as f64
                    + checkin.sleep_quality.normalized()
                    + checkin.mood.normalized())
                    / 3.0;
                if avg >= 4.0 {
                    Mode::Sprint
                } else if avg >= 2.5 {
                    Mode::Normal
                } else {
                    Mode::Rest
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkin(level: u8, sleep: SleepQuality, mood: Mood) -> EnergyCheckIn {
        EnergyCheckIn::new(level, sleep, mood).unwrap()
    }

    #[test]
    fn test_energy_level_bounds() {
        assert!(EnergyCheckIn::new(0, SleepQuality::Good, Mood::Neutral).is_err());
        assert!(EnergyCheckIn::new(6, SleepQuality::Good, Mood::Neutral).is_err());
        assert!(EnergyCheckIn::new(1, SleepQuality::Good, Mood::Neutral).is_ok());
        assert!(EnergyCheckIn::new(5, SleepQuality::Good, Mood::Neutral).is_ok());
    }

    #[test]
    fn test_additive_peak_is_sprint() {
        // 5 + 2 + 2 = 9
        let mode = ModeStrategy::Additive.classify(&checkin(
            5,
            SleepQuality::Excellent,
            Mood::Energized,
        ));
        assert_eq!(mode, Mode::Sprint);
    }

    #[test]
    fn test_additive_floor_is_rest() {
        // 1 - 1 - 1 = -1, negative composites still classify as Rest
        let mode =
            ModeStrategy::Additive.classify(&checkin(1, SleepQuality::Poor, Mood::Stressed));
        assert_eq!(mode, Mode::Rest);
    }

    #[test]
    fn test_additive_midrange_is_normal() {
        // 3 + 1 + 0 = 4
        let mode = ModeStrategy::Additive.classify(&checkin(3, SleepQuality::Good, Mood::Neutral));
        assert_eq!(mode, Mode::Normal);
    }

    #[test]
    fn test_additive_thresholds_exact() {
        // 3 + 2 + 1 = 6 -> Sprint boundary
        let sprint =
            ModeStrategy::Additive.classify(&checkin(3, SleepQuality::Excellent, Mood::Motivated));
        assert_eq!(sprint, Mode::Sprint);

        // 2 + 0 + 1 = 3 -> Normal boundary
        let normal =
            ModeStrategy::Additive.classify(&checkin(2, SleepQuality::Fair, Mood::Motivated));
        assert_eq!(normal, Mode::Normal);

        // 2 + 0 + 0 = 2 -> below Normal
        let rest = ModeStrategy::Additive.classify(&checkin(2, SleepQuality::Fair, Mood::Neutral));
        assert_eq!(rest, Mode::Rest);
    }

    #[test]
    fn test_averaged_strategy() {
        // (5 + 5 + 5) / 3 = 5.0 -> Sprint
        let sprint = ModeStrategy::Averaged.classify(&checkin(
            5,
            SleepQuality::Excellent,
            Mood::Energized,
        ));
        assert_eq!(sprint, Mode::Sprint);

        // (3 + 4 + 2.5) / 3 ~= 3.17 -> Normal
        let normal =
            ModeStrategy::Averaged.classify(&checkin(3, SleepQuality::Good, Mood::Neutral));
        assert_eq!(normal, Mode::Normal);

        // (1 + 1 + 1) / 3 = 1.0 -> Rest
        let rest =
            ModeStrategy::Averaged.classify(&checkin(1, SleepQuality::Poor, Mood::Stressed));
        assert_eq!(rest, Mode::Rest);
    }

    #[test]
    fn test_strategies_are_deterministic() {
        let c = checkin(4, SleepQuality::Good, Mood::Motivated);
        for strategy in [ModeStrategy::Additive, ModeStrategy::Averaged] {
            assert_eq!(strategy.classify(&c), strategy.classify(&c));
        }
    }

    #[test]
    fn test_default_strategy_is_additive() {
        assert_eq!(ModeStrategy::default(), ModeStrategy::Additive);
    }
}
