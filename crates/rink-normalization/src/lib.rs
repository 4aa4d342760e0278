//! Parsers for the raw text cells of a game report.
//!
//! Everything in this crate is pure: functions take a string slice and return a
//! value or a [`FieldError`]. Deciding what a failure means (warning, empty value)
//! is left to the caller.
//!
//! - **text**: whitespace/parenthesis cleanup and placeholder-aware splitting
//! - **player**: `"NUM.LAST,FIRST"` name tokens
//! - **series**: per-period counters and score lines
//! - **numeric**: counts, percentages, clock tokens

pub mod error;
pub mod numeric;
pub mod player;
pub mod series;
pub mod text;

pub use error::FieldError;
pub use numeric::{
    parse_clock, parse_count, parse_power_play_percentage, parse_saves_shots, period_of_clock,
};
pub use player::parse_player;
pub use series::{parse_on_ice_list, parse_period_series, parse_score, parse_score_by_period};
pub use text::{digits_only, is_placeholder, normalize, normalize_opt, split_series, strip_parens};
