#![forbid(unsafe_code)]

pub mod challenge;
pub mod error;
pub mod picks;
pub mod progress;

pub use hub_core::Clock;

pub use challenge::{CHALLENGE_XP, ChallengeService, ChallengeUnlocked};
pub use error::ProgressError;
pub use picks::{pick_random_challenge, pick_random_quote};
pub use progress::ProgressStore;
