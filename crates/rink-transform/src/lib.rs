//! Game-report transformation.
//!
//! This crate turns a [`RawGame`](rink_ingest::RawGame) into a
//! [`Game`](rink_model::Game):
//!
//! - **classifier**: event detail cells to [`EventDetail`](rink_model::EventDetail)
//! - **assembler**: the finished-game gate and composition of every substructure
//! - **datetime**: game start parsing

pub mod assembler;
pub mod classifier;
pub mod datetime;

pub use assembler::{
    Assembly, AssemblyOptions, AssemblyOutcome, DEFAULT_COMPLETION_PHRASES, SkipReason, assemble,
};
pub use classifier::{
    Classification, ClassifierWarning, EventCells, PENALTY_SHOT_MARKER, classify,
    has_penalty_shot_marker, retag_penalty_shot,
};
pub use datetime::parse_game_datetime;
