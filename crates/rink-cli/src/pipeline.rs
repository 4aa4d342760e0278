//! Batch processing with explicit stages.
//!
//! 1. **Load**: read raw games from every input file
//! 2. **Assemble**: one task per game on a bounded worker pool
//! 3. **Commit**: project each game into the store inside its own transaction,
//!    in input order
//!
//! A file that cannot be read or a game the store rejects is reported and the
//! batch moves on.

use std::path::PathBuf;

use rayon::ThreadPoolBuildError;
use rayon::prelude::*;
use tracing::{debug, error, info, info_span, warn};

use rink_ingest::{RawGame, load_raw_games};
use rink_model::{BatchReport, GameReport, GameStatus};
use rink_output::{GameStore, WriteOutcome, project};
use rink_transform::{Assembly, AssemblyOptions, AssemblyOutcome, assemble};

/// Options for one batch run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub assembly: AssemblyOptions,
    /// Worker threads; `None` lets the pool pick one per core.
    pub jobs: Option<usize>,
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_assembly(mut self, assembly: AssemblyOptions) -> Self {
        self.assembly = assembly;
        self
    }

    #[must_use]
    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs.filter(|jobs| *jobs > 0);
        self
    }
}

// ============================================================================
// Stage 1: Load
// ============================================================================

/// A raw game and the file it came from.
#[derive(Debug, Clone)]
pub struct SourcedGame {
    pub source: PathBuf,
    pub raw: RawGame,
}

#[derive(Debug, Default)]
pub struct LoadResult {
    pub games: Vec<SourcedGame>,
    /// One message per file or game entry that could not be loaded.
    pub errors: Vec<String>,
}

pub fn load(files: &[PathBuf]) -> LoadResult {
    let mut result = LoadResult::default();
    for path in files {
        match load_raw_games(path) {
            Ok(loaded) => {
                result
                    .games
                    .extend(loaded.games.into_iter().map(|raw| SourcedGame {
                        source: path.clone(),
                        raw,
                    }));
                result
                    .errors
                    .extend(loaded.rejected.iter().map(ToString::to_string));
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "input file skipped");
                result.errors.push(err.to_string());
            }
        }
    }
    info!(
        files = files.len(),
        games = result.games.len(),
        failed_inputs = result.errors.len(),
        "inputs loaded"
    );
    result
}

// ============================================================================
// Stage 2: Assemble
// ============================================================================

/// Assemble every game on a dedicated pool. Output order matches input order.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be created.
pub fn assemble_all(
    games: &[SourcedGame],
    options: &PipelineOptions,
) -> Result<Vec<Assembly>, ThreadPoolBuildError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = options.jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build()?;
    debug!(threads = pool.current_num_threads(), "worker pool ready");

    Ok(pool.install(|| {
        games
            .par_iter()
            .map(|game| assemble(&game.raw, &options.assembly))
            .collect()
    }))
}

// ============================================================================
// Stage 3: Commit
// ============================================================================

/// Commit assembled games one at a time, in the given order.
pub fn commit_all<S: GameStore>(store: &mut S, assemblies: Vec<Assembly>) -> BatchReport {
    let mut report = BatchReport::default();
    for assembly in assemblies {
        report.games.push(commit(store, assembly));
    }
    info!(
        stored = report.count(GameStatus::Stored),
        skipped = report.count(GameStatus::Skipped),
        duplicate = report.count(GameStatus::Duplicate),
        failed = report.count(GameStatus::Failed),
        "batch committed"
    );
    report
}

/// Project one assembly into the store and describe what happened.
pub fn commit<S: GameStore>(store: &mut S, assembly: Assembly) -> GameReport {
    let span = info_span!("game", game_id = %assembly.game_id());
    let _guard = span.enter();

    let Assembly {
        outcome,
        issues: mut log,
    } = assembly;

    let game = match outcome {
        AssemblyOutcome::Skipped(reason) => {
            debug!(reason = %reason, "game skipped");
            let mut report = GameReport::new(log.game_id(), GameStatus::Skipped);
            report.error = Some(reason.to_string());
            report.issues = log.into_issues();
            return report;
        }
        AssemblyOutcome::Assembled(game) => game,
    };

    let written = store.write_game(&game.id, |sink| project(&game, sink, &mut log));
    let mut report = match written {
        Ok(WriteOutcome::Committed(summary)) => {
            let mut report = GameReport::new(game.id.as_str(), GameStatus::Stored);
            report.rows = summary.rows;
            report
        }
        Ok(WriteOutcome::Duplicate) => {
            warn!("game id already stored, second copy ignored");
            GameReport::new(game.id.as_str(), GameStatus::Duplicate)
        }
        Err(err) => {
            error!(error = %err, "game rolled back");
            let mut report = GameReport::new(game.id.as_str(), GameStatus::Failed);
            report.error = Some(err.to_string());
            report
        }
    };
    report.issues = log.into_issues();
    report
}

/// Everything a batch run produced besides the store contents.
#[derive(Debug, Default)]
pub struct BatchRun {
    pub report: BatchReport,
    pub load_errors: Vec<String>,
}

impl BatchRun {
    pub fn has_errors(&self) -> bool {
        self.report.has_failures() || !self.load_errors.is_empty()
    }
}

/// Run all three stages over `files` into `store`.
///
/// # Errors
///
/// Returns an error only if the worker pool cannot be created.
pub fn run_batch<S: GameStore>(
    files: &[PathBuf],
    options: &PipelineOptions,
    store: &mut S,
) -> Result<BatchRun, ThreadPoolBuildError> {
    let loaded = load(files);
    let assemblies = assemble_all(&loaded.games, options)?;
    Ok(BatchRun {
        report: commit_all(store, assemblies),
        load_errors: loaded.errors,
    })
}
