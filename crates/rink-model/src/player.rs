use std::fmt;

use serde::{Deserialize, Serialize};

/// A player (or coach) as printed on a game report.
///
/// Identities are local to one game; nothing links the same person across games.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    /// Jersey number, only present when the source token carried one.
    pub number: Option<u32>,
    pub last_name: String,
    pub first_name: String,
}

impl PlayerIdentity {
    pub fn new(
        number: Option<u32>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            number,
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }

    /// "First Last", or just the last name when no first name was given.
    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(number) = self.number {
            write!(f, "{number}. ")?;
        }
        write!(f, "{}, {}", self.last_name, self.first_name)
    }
}
