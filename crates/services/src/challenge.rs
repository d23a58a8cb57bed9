use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::error::ProgressError;
use crate::picks::pick_random_challenge;
use crate::progress::ProgressStore;

/// XP granted for each unlocked challenge.
pub const CHALLENGE_XP: u32 = 10;

/// Result of unlocking a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeUnlocked {
    pub challenge: &'static str,
    pub xp_points: u64,
}

/// Hands out daily challenges and credits the learner for each one.
pub struct ChallengeService<R> {
    store: Arc<ProgressStore<R>>,
}

impl<R: Rng> ChallengeService<R> {
    #[must_use]
    pub fn new(store: Arc<ProgressStore<R>>) -> Self {
        Self { store }
    }

    /// Picks a challenge for `identifier` and awards [`CHALLENGE_XP`].
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotFound` if the learner has no record; no XP
    /// is awarded in that case.
    pub fn unlock<G: Rng + ?Sized>(
        &self,
        identifier: &str,
        rng: &mut G,
    ) -> Result<ChallengeUnlocked, ProgressError> {
        let challenge = pick_random_challenge(rng);
        let xp_points = self.store.award_xp(identifier, CHALLENGE_XP)?;
        tracing::info!(learner = identifier, challenge, xp_points, "challenge unlocked");
        Ok(ChallengeUnlocked {
            challenge,
            xp_points,
        })
    }
}
