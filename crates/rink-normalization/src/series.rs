//! Per-period counters and score lines.

use crate::error::FieldError;
use crate::text::{normalize, split_series, strip_parens};

fn parse_u32(token: &str) -> Result<u32, FieldError> {
    token
        .trim()
        .parse::<u32>()
        .map_err(|_| FieldError::InvalidNumber(token.trim().to_string()))
}

/// Parse a colon-separated per-period series such as `"(12:8:10)"`.
///
/// Placeholder periods (`-`) are dropped; the remaining values keep their
/// left-to-right order, so index 0 is period 1.
///
/// # Examples
///
/// ```
/// use rink_normalization::parse_period_series;
///
/// assert_eq!(parse_period_series("(12:8:10)").unwrap(), vec![12, 8, 10]);
/// assert_eq!(parse_period_series("(4:-:-)").unwrap(), vec![4]);
/// assert!(parse_period_series("(4:x:2)").is_err());
/// ```
pub fn parse_period_series(text: &str) -> Result<Vec<u32>, FieldError> {
    split_series(&strip_parens(text), ':')
        .iter()
        .map(|token| parse_u32(token))
        .collect()
}

fn parse_pair(text: &str, separator: char) -> Result<(u32, u32), FieldError> {
    let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
    match parts.as_slice() {
        [home, away] => Ok((parse_u32(home)?, parse_u32(away)?)),
        _ => Err(FieldError::parts(text, separator, "2", parts.len())),
    }
}

/// Parse the score-by-period line, e.g. `"(1-0,0-1,3-0)"` into `(home, away)` pairs.
///
/// # Examples
///
/// ```
/// use rink_normalization::parse_score_by_period;
///
/// let periods = parse_score_by_period("(1-0,0-1,3-0)").unwrap();
/// assert_eq!(periods, vec![(1, 0), (0, 1), (3, 0)]);
/// ```
pub fn parse_score_by_period(text: &str) -> Result<Vec<(u32, u32)>, FieldError> {
    split_series(&strip_parens(text), ',')
        .iter()
        .map(|period| parse_pair(period, '-'))
        .collect()
}

/// Parse a single score such as `"4 - 1"`. Empty input is `Ok(None)`.
pub fn parse_score(text: &str) -> Result<Option<(u32, u32)>, FieldError> {
    let cleaned = normalize(&strip_parens(text));
    if cleaned.is_empty() {
        return Ok(None);
    }
    parse_pair(&cleaned, '-').map(Some)
}

/// Jersey numbers listed after the colon of an on-ice cell (`"Pos. Part.: 7, 12"`).
///
/// Tokens that are not integers are dropped rather than read as zero.
pub fn parse_on_ice_list(text: &str) -> Vec<u32> {
    let Some((_, list)) = text.split_once(':') else {
        return Vec::new();
    };
    list.split(',')
        .filter_map(|token| token.trim().parse::<u32>().ok())
        .collect()
}
