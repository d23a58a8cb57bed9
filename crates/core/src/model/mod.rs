mod ids;
mod leaderboard;
mod progress;
mod user;

pub use crate::error::UserError;
pub use ids::UserId;
pub use leaderboard::{LeaderboardRow, SKILL_LEVEL_WEIGHT, UserMetrics, rank};
pub use progress::{
    DAILY_PROGRESS_DAYS, DEFAULT_STUDY_HOURS, DailyProgress, MAX_STUDY_HOURS, StudyHours,
};
pub use user::UserRecord;
