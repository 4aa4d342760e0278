//! Output side of the pipeline.
//!
//! - **projector**: [`Game`](rink_model::Game) to table rows with synthesized keys
//! - **store**: [`RowSink`], per-game transactions, natural-id uniqueness
//! - **export**: CSV and JSON lines files per table

pub mod export;
pub mod projector;
pub mod store;

pub use export::{
    ExportError, ExportFormat, ExportedTable, export_store, table_frame, write_csv, write_jsonl,
};
pub use projector::{
    ASSISTANT_COACH_NUMBER, COACHES_LINE, HEAD_COACH_NUMBER, ProjectionSummary, project,
};
pub use store::{GameStore, MemoryStore, RowBuffer, RowSink, StoreError, WriteOutcome};
