use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use rink_cli::pipeline::{PipelineOptions, run_batch};
use rink_ingest::resolve_inputs;
use rink_model::{BatchReport, Issue, TableName};
use rink_output::{ExportFormat, MemoryStore, export_store};
use rink_transform::AssemblyOptions;

use crate::cli::ProcessArgs;
use crate::summary::apply_table_style;
use crate::types::ProcessResult;

const ISSUES_FILE: &str = "issues.json";

pub fn run_tables() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Columns", "Description"]);
    apply_table_style(&mut table);
    for name in TableName::ALL {
        let columns = name
            .columns()
            .iter()
            .map(|column| format!("{} {}", column.name, column.ty.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            name.as_str().to_string(),
            columns,
            name.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let span = info_span!("process");
    let _guard = span.enter();
    let started = Instant::now();

    let files = resolve_inputs(&args.inputs).context("resolve inputs")?;
    if files.is_empty() {
        bail!("no JSON input files found");
    }

    let mut assembly = AssemblyOptions::new().with_checks(!args.no_checks);
    if !args.accept_status.is_empty() {
        assembly = assembly.with_completion_phrases(args.accept_status.iter().cloned());
    }
    let options = PipelineOptions::new()
        .with_assembly(assembly)
        .with_jobs(args.jobs);

    let mut store = MemoryStore::new();
    let run = run_batch(&files, &options, &mut store).context("start worker pool")?;

    let mut result = ProcessResult {
        run,
        output_dir: None,
        exported: Vec::new(),
        issues_report: None,
    };
    if args.dry_run {
        info!("dry run, nothing written");
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("output"));
        let format = ExportFormat::from(args.format);
        result.exported = export_store(&store, &output_dir, format)
            .with_context(|| format!("export tables to {}", output_dir.display()))?;
        if args.issues_report {
            let path = output_dir.join(ISSUES_FILE);
            write_issues(&path, &result.run.report)?;
            result.issues_report = Some(path);
        }
        result.output_dir = Some(output_dir);
    }

    info!(
        games = result.run.report.games.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "process finished"
    );
    Ok(result)
}

fn write_issues(path: &Path, report: &BatchReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let issues: Vec<&Issue> = report.issues().collect();
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &issues)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}
