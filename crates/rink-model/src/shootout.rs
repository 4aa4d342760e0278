use serde::{Deserialize, Serialize};

use crate::event::ShotOutcome;
use crate::game::Side;
use crate::player::PlayerIdentity;

/// One attempt of a game-winning-shots sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootoutAttempt {
    pub outcome: ShotOutcome,
    /// Running `(home, away)` shootout score after this attempt.
    pub score: Option<(u32, u32)>,
    pub team: String,
    pub side: Option<Side>,
    pub shooter: Option<PlayerIdentity>,
    pub goalie: Option<PlayerIdentity>,
}
