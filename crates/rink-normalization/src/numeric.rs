//! Numeric cells: counts, percentages, goalie tokens and the game clock.

use crate::error::FieldError;
use crate::text::{digits_only, is_placeholder, normalize};

/// Seconds in a regulation period.
pub const PERIOD_SECONDS: u32 = 20 * 60;

/// Parse a non-negative count. Placeholders and empty cells are `Ok(None)`.
///
/// Digit groups separated by spaces ("5 432") are accepted.
pub fn parse_count(text: &str) -> Result<Option<u32>, FieldError> {
    let cleaned = normalize(text);
    if is_placeholder(&cleaned) {
        return Ok(None);
    }
    if !cleaned.chars().all(|ch| ch.is_ascii_digit() || ch == ' ') {
        return Err(FieldError::InvalidNumber(cleaned));
    }
    digits_only(&cleaned)
        .parse::<u32>()
        .map(Some)
        .map_err(|_| FieldError::InvalidNumber(cleaned))
}

/// Parse a power-play percentage such as `"12,5%"`.
///
/// Returns `None` when the value cannot be read; zero is only returned for a real
/// zero.
///
/// # Examples
///
/// ```
/// use rink_normalization::parse_power_play_percentage;
///
/// assert_eq!(parse_power_play_percentage("12,5%"), Some(12.5));
/// assert_eq!(parse_power_play_percentage("0%"), Some(0.0));
/// assert_eq!(parse_power_play_percentage("-"), None);
/// ```
pub fn parse_power_play_percentage(text: &str) -> Option<f64> {
    let cleaned = normalize(text).replace(',', ".");
    let number = cleaned.trim_end_matches('%').trim();
    if number.is_empty() {
        return None;
    }
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Split a goalie `"saves/shots"` token.
pub fn parse_saves_shots(text: &str) -> Result<(u32, u32), FieldError> {
    let cleaned = normalize(text);
    let parts: Vec<&str> = cleaned.split('/').map(str::trim).collect();
    match parts.as_slice() {
        [saves, shots] => {
            let saves = saves
                .parse::<u32>()
                .map_err(|_| FieldError::InvalidNumber((*saves).to_string()))?;
            let shots = shots
                .parse::<u32>()
                .map_err(|_| FieldError::InvalidNumber((*shots).to_string()))?;
            Ok((saves, shots))
        }
        _ => Err(FieldError::parts(&cleaned, '/', "2", parts.len())),
    }
}

/// Parse a cumulative `MM:SS` game clock into seconds.
pub fn parse_clock(text: &str) -> Result<u32, FieldError> {
    let cleaned = normalize(text);
    let invalid = || FieldError::InvalidClock(cleaned.clone());
    let (minutes, seconds) = cleaned.split_once(':').ok_or_else(invalid)?;
    let minutes = minutes.trim().parse::<u32>().map_err(|_| invalid())?;
    let seconds = seconds.trim().parse::<u32>().map_err(|_| invalid())?;
    if seconds >= 60 {
        return Err(invalid());
    }
    minutes
        .checked_mul(60)
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(invalid)
}

/// Period a clock value falls in. A period's final second (20:00, 40:00, ...)
/// belongs to that period; 4 and above are overtime.
pub fn period_of_clock(seconds: u32) -> u32 {
    if seconds == 0 {
        1
    } else {
        (seconds - 1) / PERIOD_SECONDS + 1
    }
}
