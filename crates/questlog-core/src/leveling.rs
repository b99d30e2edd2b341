//! Leveling model: XP thresholds, level-up accounting, and day streaks.
//!
//! `UserStats.xp` is always the remainder after level-ups (progress toward
//! the next level), never a lifetime total. After any update the invariant
//! `0 <= xp < xp_required_for_level(level)` holds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// XP needed to advance from `level` to `level + 1`.
///
/// floor(100 * 1.5^level), computed by formula so callers can derive
/// cumulative thresholds for any level.
pub fn xp_required_for_level(level: u32) -> i64 {
    (100.0 * 1.5_f64.powi(level as i32)).floor() as i64
}

/// Total XP spent to reach `level` from level 0.
pub fn total_xp_for_level(level: u32) -> i64 {
    (0..level).map(xp_required_for_level).sum()
}

/// Per-user progression state.
///
/// Created zero-valued the first time a user is observed; mutated only
/// through [`apply_xp`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStats {
    /// Owner identifier
    pub owner: String,
    /// Progress toward the next level (remainder after level-ups)
    pub xp: i64,
    /// Current level, starting at 0
    pub level: u32,
    /// Consecutive days with at least one XP-granting completion
    pub streak: u32,
    /// Calendar day of the most recent XP award
    pub last_activity_date: Option<NaiveDate>,
}

impl UserStats {
    /// Zero-valued stats for a newly observed user.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            xp: 0,
            level: 0,
            streak: 0,
            last_activity_date: None,
        }
    }

    /// XP still needed to reach the next level.
    pub fn xp_to_next_level(&self) -> i64 {
        xp_required_for_level(self.level) - self.xp
    }

    /// Progress toward the next level as a percentage (0-100).
    pub fn progress_percent(&self) -> f64 {
        self.xp as f64 / xp_required_for_level(self.level) as f64 * 100.0
    }
}

/// Result of applying an XP award.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpAward {
    /// Updated stats; caller persists these
    pub stats: UserStats,
    /// Whether at least one level was gained
    pub leveled_up: bool,
    /// Number of levels gained (a large award may advance several)
    pub levels_gained: u32,
}

/// Apply an XP award to `stats` for the calendar day `today`.
///
/// Levels are carried forward while the remainder exceeds the current
/// threshold, so one large award can advance multiple levels. The streak
/// follows calendar-day differences between `today` and the previous
/// activity date:
///
/// - no prior activity: streak = 1
/// - next day: streak + 1
/// - same day: unchanged (repeat completions do not inflate it)
/// - gap of more than one day: reset to 1
/// - `today` earlier than the previous activity (clock skew): streak and
///   activity date are left untouched, the XP is still applied
///
/// # Errors
/// Rejects a negative `amount`; XP is never decremented.
pub fn apply_xp(
    stats: &UserStats,
    amount: i64,
    today: NaiveDate,
) -> Result<XpAward, ValidationError> {
    if amount < 0 {
        return Err(ValidationError::NegativeXpAmount { amount });
    }

    let mut remaining = stats.xp + amount;
    let mut level = stats.level;
    while remaining >= xp_required_for_level(level) {
        remaining -= xp_required_for_level(level);
        level += 1;
    }
    let levels_gained = level - stats.level;

    let (streak, last_activity_date) = match stats.last_activity_date {
        None => (1, Some(today)),
        Some(last) => {
            let diff_days = (today - last).num_days();
            if diff_days == 1 {
                (stats.streak + 1, Some(today))
            } else if diff_days == 0 {
                (stats.streak, Some(today))
            } else if diff_days > 1 {
                (1, Some(today))
            } else {
                // Backdated clock: leave streak state untouched
                (stats.streak, Some(last))
            }
        }
    };

    Ok(XpAward {
        stats: UserStats {
            owner: stats.owner.clone(),
            xp: remaining,
            level,
            streak,
            last_activity_date,
        },
        leveled_up: levels_gained > 0,
        levels_gained,
    })
}
