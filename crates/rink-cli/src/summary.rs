use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rink_model::{GameStatus, IssueKind, TableName};

use crate::types::ProcessResult;

const STATUSES: [GameStatus; 4] = [
    GameStatus::Stored,
    GameStatus::Skipped,
    GameStatus::Duplicate,
    GameStatus::Failed,
];

pub fn print_summary(result: &ProcessResult) {
    let report = &result.run.report;
    match &result.output_dir {
        Some(dir) => println!("Output: {}", dir.display()),
        None => println!("Output: dry run, nothing written"),
    }
    if let Some(path) = &result.issues_report {
        println!("Issues report: {}", path.display());
    }

    let mut tables = Table::new();
    tables.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut tables);
    align_column(&mut tables, 1, CellAlignment::Right);
    let rows = report.rows_per_table();
    let mut total_rows = 0usize;
    for table in TableName::ALL {
        let count = rows.get(&table).copied().unwrap_or(0);
        total_rows += count;
        let file = result
            .exported
            .iter()
            .find(|exported| exported.table == table)
            .map(|exported| exported.path.as_path());
        tables.add_row(vec![
            Cell::new(table.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(count, Color::White),
            file_cell(file),
        ]);
    }
    tables.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{tables}");

    let mut games = Table::new();
    games.set_header(vec![header_cell("Games"), header_cell("Count")]);
    apply_summary_table_style(&mut games);
    align_column(&mut games, 1, CellAlignment::Right);
    for status in STATUSES {
        games.add_row(vec![
            Cell::new(status.as_str()),
            count_cell(report.count(status), status_color(status)),
        ]);
    }
    println!("{games}");

    let mut issues = Table::new();
    issues.set_header(vec![header_cell("Issue"), header_cell("Count")]);
    apply_summary_table_style(&mut issues);
    align_column(&mut issues, 1, CellAlignment::Right);
    for (kind, count) in report.issue_counts() {
        issues.add_row(vec![
            Cell::new(kind.as_str()),
            count_cell(count, issue_color(kind)),
        ]);
    }
    println!("{issues}");

    if !result.run.load_errors.is_empty() {
        eprintln!("Unreadable inputs:");
        for error in &result.run.load_errors {
            eprintln!("- {error}");
        }
    }
    for game in report
        .games
        .iter()
        .filter(|game| game.status == GameStatus::Failed)
    {
        eprintln!(
            "- game {} failed: {}",
            game.game_id,
            game.error.as_deref().unwrap_or("unknown error")
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_color(status: GameStatus) -> Color {
    match status {
        GameStatus::Stored => Color::Green,
        GameStatus::Skipped | GameStatus::Duplicate => Color::Yellow,
        GameStatus::Failed => Color::Red,
    }
}

fn issue_color(kind: IssueKind) -> Color {
    match kind {
        IssueKind::IncompleteGame => Color::DarkYellow,
        IssueKind::StructuralInconsistency => Color::Red,
        IssueKind::MalformedField | IssueKind::UnclassifiableEvent => Color::Yellow,
    }
}

fn file_cell(path: Option<&Path>) -> Cell {
    match path.and_then(Path::file_name) {
        Some(name) => Cell::new(name.to_string_lossy()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
