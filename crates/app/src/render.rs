//! Plain-text and JSON output for a dashboard run.

use std::fmt::Write as _;

use serde::Serialize;

use hub_core::model::{LeaderboardRow, UserMetrics, UserRecord};
use services::ChallengeUnlocked;

#[derive(Debug, Serialize)]
pub struct LearnerReport {
    pub record: UserRecord,
    pub metrics: UserMetrics,
    pub challenges: Vec<ChallengeUnlocked>,
}

#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub quote: &'static str,
    pub learners: Vec<LearnerReport>,
    pub leaderboard: Vec<LeaderboardRow>,
}

pub fn render_text(report: &DashboardReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\"{}\"", report.quote);

    for learner in &report.learners {
        let record = &learner.record;
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "== Welcome to your learning journey, {} ==",
            record.identifier()
        );
        let _ = writeln!(
            out,
            "Daily study commitment: {} hours",
            record.study_hours().value()
        );
        let languages: Vec<&str> = record
            .preferred_languages()
            .iter()
            .map(String::as_str)
            .collect();
        let _ = writeln!(out, "Languages: {}", languages.join(", "));
        let _ = writeln!(
            out,
            "30-day average progress: {:.1}",
            record.daily_progress().average()
        );
        for unlocked in &learner.challenges {
            let _ = writeln!(
                out,
                "Challenge unlocked: {} (XP now {})",
                unlocked.challenge, unlocked.xp_points
            );
        }
        let m = &learner.metrics;
        let _ = writeln!(
            out,
            "Skill Level {} | Projects {} | XP {} | Day Streak {}",
            m.skill_level, m.projects_completed, m.xp_points, m.learning_streak
        );
        let _ = writeln!(out, "Achievements: {}", record.achievements().join(", "));
        let _ = writeln!(out, "Badges: {}", record.badges().join(", "));
    }

    if !report.leaderboard.is_empty() {
        let _ = writeln!(out);
        out.push_str(&render_leaderboard(&report.leaderboard));
    }
    out
}

pub fn render_leaderboard(rows: &[LeaderboardRow]) -> String {
    let width = rows
        .iter()
        .map(|r| r.identifier.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max("Learner".len());

    let mut out = String::from("== Global Leaderboard ==\n");
    let _ = writeln!(
        out,
        "{:>3}  {:<width$}  {:>5}  {:>8}  {:>6}  {:>6}",
        "#", "Learner", "Skill", "Projects", "XP", "Total"
    );
    for (idx, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:>5}  {:>8}  {:>6}  {:>6}",
            idx + 1,
            row.identifier.as_str(),
            row.skill_level,
            row.projects_completed,
            row.xp_points,
            row.total_score
        );
    }
    out
}
