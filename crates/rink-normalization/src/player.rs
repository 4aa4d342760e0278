//! Player name tokens.
//!
//! The report prints players either as `"NUM.LAST,FIRST"` (rosters, scorers) or
//! `"LAST,FIRST"` (coaches). The dot after the number is turned into a comma so both
//! forms split the same way.

use rink_model::PlayerIdentity;

use crate::error::FieldError;
use crate::text::normalize;

/// Parse a name token.
///
/// Returns `Ok(None)` for an empty token and an error for anything that does not
/// split into two or three parts.
///
/// # Examples
///
/// ```
/// use rink_normalization::parse_player;
///
/// let player = parse_player("21. Andersson, Erik").unwrap().unwrap();
/// assert_eq!(player.number, Some(21));
/// assert_eq!(player.last_name, "Andersson");
/// assert_eq!(player.first_name, "Erik");
///
/// let coach = parse_player("Johansson, Per").unwrap().unwrap();
/// assert_eq!(coach.number, None);
///
/// assert!(parse_player("   ").unwrap().is_none());
/// ```
pub fn parse_player(token: &str) -> Result<Option<PlayerIdentity>, FieldError> {
    let cleaned = normalize(token).replace('.', ",");
    if cleaned.is_empty() {
        return Ok(None);
    }
    let parts: Vec<&str> = cleaned.split(',').map(str::trim).collect();
    let (number, last, first) = match parts.as_slice() {
        [number, last, first] => {
            let number = number
                .parse::<u32>()
                .map_err(|_| FieldError::InvalidNumber((*number).to_string()))?;
            (Some(number), *last, *first)
        }
        [last, first] => (None, *last, *first),
        _ => return Err(FieldError::parts(token, ',', "2 or 3", parts.len())),
    };
    if last.is_empty() {
        return Err(FieldError::MissingLastName(token.to_string()));
    }
    Ok(Some(PlayerIdentity::new(number, last, first)))
}
