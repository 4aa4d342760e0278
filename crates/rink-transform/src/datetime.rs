//! Game start date/time parsing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse the printed start of a game, e.g. `"2022-03-01 19:00"`.
///
/// A date without a time is taken as midnight. Returns `None` when no known
/// format matches.
pub fn parse_game_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    try_parse_datetime(value).or_else(|| try_parse_date(value).map(|d| d.and_time(NaiveTime::MIN)))
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in &formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    None
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = ["%Y-%m-%d", "%Y%m%d"];

    for fmt in &formats {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }

    None
}
