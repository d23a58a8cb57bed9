use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;
use crate::model::user::UserRecord;

/// Points each skill level contributes to the total score.
pub const SKILL_LEVEL_WEIGHT: u64 = 100;

/// One ranked leaderboard line, derived from a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub identifier: UserId,
    pub skill_level: u32,
    pub projects_completed: u32,
    pub xp_points: u64,
    pub total_score: u64,
}

impl From<&UserRecord> for LeaderboardRow {
    fn from(record: &UserRecord) -> Self {
        let total_score = u64::from(record.skill_level())
            .saturating_mul(SKILL_LEVEL_WEIGHT)
            .saturating_add(record.xp_points());
        Self {
            identifier: record.identifier().clone(),
            skill_level: record.skill_level(),
            projects_completed: record.projects_completed(),
            xp_points: record.xp_points(),
            total_score,
        }
    }
}

/// Headline counters for a single learner's analytics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetrics {
    pub skill_level: u32,
    pub projects_completed: u32,
    pub xp_points: u64,
    pub learning_streak: u32,
}

impl From<&UserRecord> for UserMetrics {
    fn from(record: &UserRecord) -> Self {
        Self {
            skill_level: record.skill_level(),
            projects_completed: record.projects_completed(),
            xp_points: record.xp_points(),
            learning_streak: record.learning_streak(),
        }
    }
}

/// Ranks records by total score, highest first; equal scores order by identifier.
pub fn rank<'a>(records: impl IntoIterator<Item = &'a UserRecord>) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = records.into_iter().map(LeaderboardRow::from).collect();
    rows.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| a.identifier.cmp(&b.identifier))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DAILY_PROGRESS_DAYS, DailyProgress, StudyHours};
    use crate::time::fixed_now;
    use std::collections::BTreeSet;

    fn user_with_xp(name: &str, xp: u32) -> UserRecord {
        let mut user = UserRecord::new(
            UserId::new(name).unwrap(),
            StudyHours::default(),
            BTreeSet::new(),
            DailyProgress::from_scores([1u8; DAILY_PROGRESS_DAYS]).unwrap(),
            fixed_now(),
        );
        user.award_xp(xp);
        user
    }

    fn names(rows: &[LeaderboardRow]) -> Vec<&str> {
        rows.iter().map(|r| r.identifier.as_str()).collect()
    }

    #[test]
    fn total_score_weights_skill_level() {
        let row = LeaderboardRow::from(&user_with_xp("alice", 20));
        assert_eq!(row.skill_level, 1);
        assert_eq!(row.xp_points, 20);
        assert_eq!(row.total_score, 120);
    }

    #[test]
    fn ties_break_by_identifier() {
        let users = [
            user_with_xp("carl", 50),
            user_with_xp("bob", 200),
            user_with_xp("ann", 200),
        ];
        let rows = rank(&users);
        assert_eq!(names(&rows), ["ann", "bob", "carl"]);
        assert_eq!(
            rows.iter().map(|r| r.total_score).collect::<Vec<_>>(),
            [300, 300, 150]
        );
    }

    #[test]
    fn ranking_ignores_input_order() {
        let mut users = vec![
            user_with_xp("dora", 5),
            user_with_xp("eve", 90),
            user_with_xp("finn", 40),
        ];
        let forward = rank(&users);
        users.reverse();
        assert_eq!(rank(&users), forward);
        assert_eq!(names(&forward), ["eve", "finn", "dora"]);
    }

    #[test]
    fn empty_input_gives_empty_board() {
        assert!(rank(std::iter::empty()).is_empty());
    }

    #[test]
    fn metrics_mirror_record_counters() {
        let metrics = UserMetrics::from(&user_with_xp("alice", 30));
        assert_eq!(
            metrics,
            UserMetrics {
                skill_level: 1,
                projects_completed: 0,
                xp_points: 30,
                learning_streak: 1,
            }
        );
    }
}
