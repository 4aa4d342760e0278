//! Cross-field consistency checks on an assembled [`Game`].
//!
//! Nothing here blocks a game: every finding becomes a
//! [`StructuralInconsistency`](rink_model::IssueKind::StructuralInconsistency)
//! warning and processing continues.

pub mod checks;

use rink_model::{Game, IssueLog};
use tracing::debug;

pub use checks::{Inconsistency, run_all};

/// Run every check and record the findings in `log`.
///
/// Returns the number of findings.
pub fn validate_game(game: &Game, log: &mut IssueLog) -> usize {
    let findings = run_all(game);
    debug!(game_id = %game.id, findings = findings.len(), "structural checks done");
    let count = findings.len();
    for finding in findings {
        log.inconsistent(finding.field, finding.message);
    }
    count
}
