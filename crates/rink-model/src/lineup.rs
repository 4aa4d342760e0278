//! Officials, coaches and line combinations of a game.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::game::PerSide;
use crate::player::PlayerIdentity;

/// A named group of players ("1st Line", "Goalies", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub name: String,
    pub players: Vec<PlayerIdentity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLineup {
    /// Head coach first, then assistant. Extra entries are kept as parsed.
    pub coaches: Vec<PlayerIdentity>,
    pub lines: Vec<Line>,
    /// Jersey numbers of the starting players.
    pub starting: BTreeSet<u32>,
}

impl TeamLineup {
    pub fn is_starting(&self, player: &PlayerIdentity) -> bool {
        player
            .number
            .is_some_and(|number| self.starting.contains(&number))
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerIdentity> {
        self.lines.iter().flat_map(|line| line.players.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub refs: Vec<String>,
    pub linesmen: Vec<String>,
    pub teams: PerSide<TeamLineup>,
}
