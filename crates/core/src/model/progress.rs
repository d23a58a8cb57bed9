use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::UserError;

/// Number of days covered by the daily progress chart.
pub const DAILY_PROGRESS_DAYS: usize = 30;

/// Upper bound of the daily study commitment slider.
pub const MAX_STUDY_HOURS: u8 = 12;

/// Slider position before the learner touches it.
pub const DEFAULT_STUDY_HOURS: u8 = 2;

const MIN_SCORE: u8 = 1;
const MAX_SCORE: u8 = 100;

//
// ─── STUDY HOURS ───────────────────────────────────────────────────────────────
//

/// Daily study commitment in whole hours, `0..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StudyHours(u8);

impl StudyHours {
    /// # Errors
    ///
    /// Returns `UserError::StudyHoursOutOfRange` above [`MAX_STUDY_HOURS`].
    pub fn new(hours: u8) -> Result<Self, UserError> {
        if hours > MAX_STUDY_HOURS {
            return Err(UserError::StudyHoursOutOfRange(hours));
        }
        Ok(Self(hours))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for StudyHours {
    fn default() -> Self {
        Self(DEFAULT_STUDY_HOURS)
    }
}

impl TryFrom<u8> for StudyHours {
    type Error = UserError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudyHours> for u8 {
    fn from(hours: StudyHours) -> Self {
        hours.0
    }
}

//
// ─── DAILY PROGRESS ────────────────────────────────────────────────────────────
//

/// Thirty daily progress scores, each in `1..=100`.
///
/// Drawn once when a learner is first seen and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 30]", into = "[u8; 30]")]
pub struct DailyProgress([u8; DAILY_PROGRESS_DAYS]);

impl DailyProgress {
    /// Draws one score per day, in day order, uniformly from `1..=100`.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut scores = [0u8; DAILY_PROGRESS_DAYS];
        for score in &mut scores {
            *score = rng.random_range(MIN_SCORE..=MAX_SCORE);
        }
        Self(scores)
    }

    /// Wraps known scores, e.g. when restoring a record.
    ///
    /// # Errors
    ///
    /// Returns `UserError::ProgressScoreOutOfRange` for the first score outside `1..=100`.
    pub fn from_scores(scores: [u8; DAILY_PROGRESS_DAYS]) -> Result<Self, UserError> {
        if let Some(bad) = scores
            .iter()
            .copied()
            .find(|s| !(MIN_SCORE..=MAX_SCORE).contains(s))
        {
            return Err(UserError::ProgressScoreOutOfRange(bad));
        }
        Ok(Self(scores))
    }

    #[must_use]
    pub fn scores(&self) -> &[u8; DAILY_PROGRESS_DAYS] {
        &self.0
    }

    /// Mean score over the window, for summary displays.
    #[must_use]
    pub fn average(&self) -> f64 {
        let total: u32 = self.0.iter().map(|s| u32::from(*s)).sum();
        f64::from(total) / DAILY_PROGRESS_DAYS as f64
    }
}

impl TryFrom<[u8; DAILY_PROGRESS_DAYS]> for DailyProgress {
    type Error = UserError;

    fn try_from(value: [u8; DAILY_PROGRESS_DAYS]) -> Result<Self, Self::Error> {
        Self::from_scores(value)
    }
}

impl From<DailyProgress> for [u8; DAILY_PROGRESS_DAYS] {
    fn from(progress: DailyProgress) -> Self {
        progress.0
    }
}
