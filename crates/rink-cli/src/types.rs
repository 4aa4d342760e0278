use std::path::PathBuf;

use rink_cli::pipeline::BatchRun;
use rink_output::{ExportFormat, ExportedTable};

use crate::cli::OutputFormatArg;

#[derive(Debug)]
pub struct ProcessResult {
    pub run: BatchRun,
    /// `None` on a dry run.
    pub output_dir: Option<PathBuf>,
    pub exported: Vec<ExportedTable>,
    pub issues_report: Option<PathBuf>,
}

impl From<OutputFormatArg> for ExportFormat {
    fn from(format: OutputFormatArg) -> Self {
        match format {
            OutputFormatArg::Csv => ExportFormat::Csv,
            OutputFormatArg::Jsonl => ExportFormat::Jsonl,
        }
    }
}
