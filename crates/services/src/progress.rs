use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use hub_core::Clock;
use hub_core::model::{
    DailyProgress, LeaderboardRow, StudyHours, UserId, UserMetrics, UserRecord, rank,
};

use crate::error::ProgressError;

/// Owns every learner record for one host process.
///
/// The host constructs a single store and hands it to request handlers
/// (wrap it in an `Arc` to share across threads). One lock covers the
/// record map and the random source, so each operation is atomic and the
/// daily progress draw for a new learner happens exactly once.
pub struct ProgressStore<R = StdRng> {
    clock: Clock,
    state: Mutex<StoreState<R>>,
}

struct StoreState<R> {
    users: HashMap<UserId, UserRecord>,
    rng: R,
}

impl ProgressStore<StdRng> {
    /// Store backed by an OS-seeded generator.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self::with_rng(clock, StdRng::from_os_rng())
    }

    /// Store with a reproducible generator.
    #[must_use]
    pub fn seeded(clock: Clock, seed: u64) -> Self {
        Self::with_rng(clock, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ProgressStore<R> {
    #[must_use]
    pub fn with_rng(clock: Clock, rng: R) -> Self {
        Self {
            clock,
            state: Mutex::new(StoreState {
                users: HashMap::new(),
                rng,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState<R>>, ProgressError> {
        self.state
            .lock()
            .map_err(|e| ProgressError::Poisoned(e.to_string()))
    }

    /// Returns the learner's record, creating it on first sight.
    ///
    /// An existing record is returned untouched; `study_hours` and
    /// `preferred_languages` only apply when the record is created.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidArgument` for an empty identifier or
    /// study hours above 12, whether or not the learner already exists.
    pub fn ensure_user<I, S>(
        &self,
        identifier: &str,
        study_hours: u8,
        preferred_languages: I,
    ) -> Result<UserRecord, ProgressError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = UserId::new(identifier)?;
        let study_hours = StudyHours::new(study_hours)?;
        let languages: BTreeSet<String> =
            preferred_languages.into_iter().map(Into::into).collect();

        let mut guard = self.lock()?;
        let StoreState { users, rng } = &mut *guard;
        let record = users.entry(id).or_insert_with_key(|id| {
            debug!(learner = %id, study_hours = study_hours.value(), "creating learner");
            UserRecord::new(
                id.clone(),
                study_hours,
                languages,
                DailyProgress::draw(rng),
                self.clock.now(),
            )
        });
        Ok(record.clone())
    }

    /// Adds XP to an existing learner and returns the new total.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotFound` if the learner has no record.
    pub fn award_xp(&self, identifier: &str, amount: u32) -> Result<u64, ProgressError> {
        let total = self.update(identifier, |record| record.award_xp(amount))?;
        debug!(learner = identifier, amount, total, "awarded xp");
        Ok(total)
    }

    /// Grants an achievement; returns false if it was already held.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotFound` if the learner has no record.
    pub fn add_achievement(&self, identifier: &str, name: &str) -> Result<bool, ProgressError> {
        let added = self.update(identifier, |record| record.add_achievement(name))?;
        if added {
            debug!(learner = identifier, achievement = name, "granted achievement");
        }
        Ok(added)
    }

    /// Grants a badge; returns false if it was already held.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotFound` if the learner has no record.
    pub fn add_badge(&self, identifier: &str, name: &str) -> Result<bool, ProgressError> {
        let added = self.update(identifier, |record| record.add_badge(name))?;
        if added {
            debug!(learner = identifier, badge = name, "granted badge");
        }
        Ok(added)
    }

    /// Point-in-time ranking of every learner.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the store lock is poisoned.
    pub fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, ProgressError> {
        let guard = self.lock()?;
        Ok(rank(guard.users.values()))
    }

    /// Copy of the learner's record, if any.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidArgument` for an empty identifier.
    pub fn get_user(&self, identifier: &str) -> Result<Option<UserRecord>, ProgressError> {
        let id = UserId::new(identifier)?;
        let guard = self.lock()?;
        Ok(guard.users.get(&id).cloned())
    }

    /// Headline counters for the learner's analytics panel.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotFound` if the learner has no record.
    pub fn metrics(&self, identifier: &str) -> Result<UserMetrics, ProgressError> {
        self.update(identifier, |record| UserMetrics::from(&*record))
    }

    /// Number of known learners.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the store lock is poisoned.
    pub fn len(&self) -> Result<usize, ProgressError> {
        Ok(self.lock()?.users.len())
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Poisoned` if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, ProgressError> {
        Ok(self.lock()?.users.is_empty())
    }

    fn update<T>(
        &self,
        identifier: &str,
        op: impl FnOnce(&mut UserRecord) -> T,
    ) -> Result<T, ProgressError> {
        let id = UserId::new(identifier)?;
        let mut guard = self.lock()?;
        let Some(record) = guard.users.get_mut(&id) else {
            warn!(learner = %id, "unknown learner");
            return Err(ProgressError::NotFound(id));
        };
        Ok(op(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::catalog::{SEED_ACHIEVEMENT, SEED_BADGE};
    use hub_core::model::{DAILY_PROGRESS_DAYS, UserError};
    use hub_core::time::{fixed_clock, fixed_now};

    fn store() -> ProgressStore {
        ProgressStore::seeded(fixed_clock(), 42)
    }

    #[test]
    fn ensure_user_creates_defaults() {
        let store = store();
        let user = store.ensure_user("alice", 2, ["Python"]).unwrap();

        assert_eq!(user.identifier().as_str(), "alice");
        assert_eq!(user.skill_level(), 1);
        assert_eq!(user.xp_points(), 0);
        assert_eq!(user.projects_completed(), 0);
        assert_eq!(user.learning_streak(), 1);
        assert_eq!(user.achievements(), [SEED_ACHIEVEMENT]);
        assert_eq!(user.badges(), [SEED_BADGE]);
        assert_eq!(user.study_hours().value(), 2);
        assert_eq!(user.joined_at(), fixed_now());
        assert_eq!(user.daily_progress().scores().len(), DAILY_PROGRESS_DAYS);
        assert!(
            user.daily_progress()
                .scores()
                .iter()
                .all(|s| (1..=100).contains(s))
        );
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn ensure_user_draws_from_injected_rng() {
        let store = ProgressStore::with_rng(fixed_clock(), StdRng::seed_from_u64(9));
        let user = store.ensure_user("alice", 0, Vec::<String>::new()).unwrap();

        let mut expected_rng = StdRng::seed_from_u64(9);
        let expected: Vec<u8> = (0..DAILY_PROGRESS_DAYS)
            .map(|_| expected_rng.random_range(1..=100u8))
            .collect();
        assert_eq!(user.daily_progress().scores().as_slice(), expected.as_slice());
    }

    #[test]
    fn ensure_user_keeps_first_write() {
        let store = store();
        let first = store.ensure_user("alice", 2, ["Python"]).unwrap();
        store.award_xp("alice", 10).unwrap();

        let second = store.ensure_user("alice", 7, ["Go", "Rust"]).unwrap();
        assert_eq!(second.study_hours().value(), 2);
        assert_eq!(second.daily_progress(), first.daily_progress());
        assert_eq!(
            second.preferred_languages().iter().collect::<Vec<_>>(),
            ["Python"]
        );
        assert_eq!(second.xp_points(), 10);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn ensure_user_rejects_bad_input_without_inserting() {
        let store = store();
        assert!(matches!(
            store.ensure_user("", 2, ["Python"]),
            Err(ProgressError::InvalidArgument(UserError::EmptyIdentifier))
        ));
        assert!(matches!(
            store.ensure_user("alice", 13, ["Python"]),
            Err(ProgressError::InvalidArgument(
                UserError::StudyHoursOutOfRange(13)
            ))
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn award_xp_unknown_learner_is_not_found() {
        let store = store();
        let err = store.award_xp("nobody", 5).unwrap_err();
        assert!(matches!(err, ProgressError::NotFound(ref id) if id.as_str() == "nobody"));
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn labels_on_unknown_learner_do_not_create_records() {
        let store = store();
        assert!(matches!(
            store.add_achievement("ghost", "X"),
            Err(ProgressError::NotFound(_))
        ));
        assert!(matches!(
            store.add_badge("ghost", "X"),
            Err(ProgressError::NotFound(_))
        ));
        assert!(store.get_user("ghost").unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn add_achievement_twice_keeps_one_entry() {
        let store = store();
        store.ensure_user("alice", 2, ["Python"]).unwrap();
        assert!(store.add_achievement("alice", "X").unwrap());
        assert!(!store.add_achievement("alice", "X").unwrap());

        let user = store.get_user("alice").unwrap().unwrap();
        assert_eq!(user.achievements(), [SEED_ACHIEVEMENT, "X"]);
    }

    #[test]
    fn add_badge_appends_in_grant_order() {
        let store = store();
        store.ensure_user("alice", 2, ["Python"]).unwrap();
        store.add_badge("alice", "Challenger").unwrap();
        store.add_badge("alice", "Night Owl").unwrap();
        store.add_badge("alice", "Challenger").unwrap();

        let user = store.get_user("alice").unwrap().unwrap();
        assert_eq!(user.badges(), [SEED_BADGE, "Challenger", "Night Owl"]);
    }

    #[test]
    fn labels_are_kept_exactly_as_granted() {
        let store = store();
        store.ensure_user("ann", 2, ["Python"]).unwrap();
        assert!(store.add_achievement("ann", "  Star  ").unwrap());
        assert!(store.add_badge("ann", "").unwrap());

        let user = store.get_user("ann").unwrap().unwrap();
        assert_eq!(user.achievements(), [SEED_ACHIEVEMENT, "  Star  "]);
        assert_eq!(user.badges(), [SEED_BADGE, ""]);
    }

    #[test]
    fn padded_and_whitespace_names_are_distinct_learners() {
        let store = store();
        store.ensure_user("bob", 2, ["Python"]).unwrap();
        let padded = store.ensure_user("bob ", 5, ["Go"]).unwrap();
        let spaces = store.ensure_user("   ", 1, Vec::<String>::new()).unwrap();

        assert_eq!(padded.identifier().as_str(), "bob ");
        assert_eq!(padded.study_hours().value(), 5);
        assert_eq!(spaces.identifier().as_str(), "   ");
        assert_eq!(store.len().unwrap(), 3);
        assert!(matches!(
            store.award_xp("bob  ", 1),
            Err(ProgressError::NotFound(_))
        ));
    }

    #[test]
    fn metrics_track_awards() {
        let store = store();
        store.ensure_user("alice", 2, ["Python"]).unwrap();
        store.award_xp("alice", 25).unwrap();

        let metrics = store.metrics("alice").unwrap();
        assert_eq!(metrics.xp_points, 25);
        assert_eq!(metrics.skill_level, 1);
        assert!(matches!(
            store.metrics("bob"),
            Err(ProgressError::NotFound(_))
        ));
    }

    #[test]
    fn leaderboard_ranks_by_score_then_name() {
        let store = store();
        for name in ["carl", "bob", "ann"] {
            store.ensure_user(name, 1, Vec::<String>::new()).unwrap();
        }
        store.award_xp("bob", 200).unwrap();
        store.award_xp("ann", 200).unwrap();
        store.award_xp("carl", 50).unwrap();

        let rows = store.leaderboard().unwrap();
        let order: Vec<_> = rows.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(order, ["ann", "bob", "carl"]);
        assert_eq!(rows[0].total_score, 300);
        assert_eq!(rows[2].total_score, 150);
    }
}
