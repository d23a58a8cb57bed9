use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{SEED_ACHIEVEMENT, SEED_BADGE};
use crate::model::ids::UserId;
use crate::model::progress::{DailyProgress, StudyHours};

/// Progress state for one learner.
///
/// Counters start at their defaults, `xp_points` only grows, and the
/// achievement and badge lists keep first-grant order without duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    identifier: UserId,
    skill_level: u32,
    projects_completed: u32,
    xp_points: u64,
    achievements: Vec<String>,
    badges: Vec<String>,
    learning_streak: u32,
    daily_progress: DailyProgress,
    study_hours: StudyHours,
    preferred_languages: BTreeSet<String>,
    joined_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates a fresh learner with starting counters and the seeded
    /// achievement and badge.
    #[must_use]
    pub fn new(
        identifier: UserId,
        study_hours: StudyHours,
        preferred_languages: BTreeSet<String>,
        daily_progress: DailyProgress,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            identifier,
            skill_level: 1,
            projects_completed: 0,
            xp_points: 0,
            achievements: vec![SEED_ACHIEVEMENT.to_string()],
            badges: vec![SEED_BADGE.to_string()],
            learning_streak: 1,
            daily_progress,
            study_hours,
            preferred_languages,
            joined_at,
        }
    }

    // ─── Accessors ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn identifier(&self) -> &UserId {
        &self.identifier
    }

    #[must_use]
    pub fn skill_level(&self) -> u32 {
        self.skill_level
    }

    #[must_use]
    pub fn projects_completed(&self) -> u32 {
        self.projects_completed
    }

    #[must_use]
    pub fn xp_points(&self) -> u64 {
        self.xp_points
    }

    #[must_use]
    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    #[must_use]
    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    #[must_use]
    pub fn learning_streak(&self) -> u32 {
        self.learning_streak
    }

    #[must_use]
    pub fn daily_progress(&self) -> &DailyProgress {
        &self.daily_progress
    }

    #[must_use]
    pub fn study_hours(&self) -> StudyHours {
        self.study_hours
    }

    #[must_use]
    pub fn preferred_languages(&self) -> &BTreeSet<String> {
        &self.preferred_languages
    }

    #[must_use]
    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    // ─── Mutations ─────────────────────────────────────────────────────────────

    /// Adds `amount` XP and returns the new total. Saturates at `u64::MAX`.
    pub fn award_xp(&mut self, amount: u32) -> u64 {
        self.xp_points = self.xp_points.saturating_add(u64::from(amount));
        self.xp_points
    }

    /// Appends an achievement unless already held. Returns true if it was new.
    pub fn add_achievement(&mut self, label: &str) -> bool {
        push_unique(&mut self.achievements, label)
    }

    /// Appends a badge unless already held. Returns true if it was new.
    pub fn add_badge(&mut self, label: &str) -> bool {
        push_unique(&mut self.badges, label)
    }
}

// Labels are opaque: compared and stored exactly as given.
fn push_unique(labels: &mut Vec<String>, label: &str) -> bool {
    if labels.iter().any(|existing| existing == label) {
        return false;
    }
    labels.push(label.to_string());
    true
}
