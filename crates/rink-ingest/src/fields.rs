//! Names of the scalar and list fields of a [`RawGame`](crate::RawGame).

use rink_model::{Side, StatKind};

pub const GAME_ID: &str = "game_id";
pub const EVENT_URL: &str = "event_url";
pub const LINE_UP_URL: &str = "line_up_url";
pub const GAME_STATUS: &str = "game_status";
pub const DATE_TIME: &str = "date_time";
pub const LEAGUE: &str = "league";
pub const ARENA: &str = "arena";
pub const SPECTATORS: &str = "spectators";
pub const SCORE: &str = "score";
pub const SCORE_BY_PERIOD: &str = "score_by_period";

pub const GOALIES_TEAMS: &str = "goalies_teams";
pub const GOALIES_NAMES: &str = "goalies_names";
pub const GOALIES_SAVES: &str = "goalies_saves";

/// `home_name_abbrev` / `away_name_abbrev`.
pub fn name_abbrev(side: Side) -> String {
    format!("{side}_name_abbrev")
}

/// `home_name` / `away_name`.
pub fn name(side: Side) -> String {
    format!("{side}_name")
}

/// `shots_total_home`, `pim_total_away`, ...
pub fn total(kind: StatKind, side: Side) -> String {
    format!("{kind}_total_{side}")
}

/// `shots_by_period_home`, `saves_by_period_away`, ...
pub fn by_period(kind: StatKind, side: Side) -> String {
    format!("{kind}_by_period_{side}")
}

/// `pp_time_home` / `pp_time_away`.
pub fn pp_time(side: Side) -> String {
    format!("pp_time_{side}")
}

/// `pp_perc_home` / `pp_perc_away`.
pub fn pp_perc(side: Side) -> String {
    format!("pp_perc_{side}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sided_names() {
        assert_eq!(name_abbrev(Side::Home), "home_name_abbrev");
        assert_eq!(total(StatKind::PenaltyMinutes, Side::Away), "pim_total_away");
        assert_eq!(by_period(StatKind::Shots, Side::Home), "shots_by_period_home");
        assert_eq!(pp_perc(Side::Away), "pp_perc_away");
    }
}
