use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UserError;

/// Learner key: the display name typed into the dashboard.
///
/// Stored verbatim and guaranteed non-empty; `"bob"` and `"bob "` are
/// different learners. Ordering is lexicographic, which the leaderboard uses
/// as its tie-break.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Creates a validated identifier.
    ///
    /// # Errors
    ///
    /// Returns `UserError::EmptyIdentifier` if the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, UserError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(UserError::EmptyIdentifier);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({:?})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}
