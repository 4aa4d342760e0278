//! Table export: CSV through polars, JSON lines through serde_json.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::{Column, CsvWriter, DataFrame, NamedFrom, SerWriter, Series};
use rink_model::{CellValue, ColumnType, Row, TableName};
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;
use tracing::info;

use crate::store::MemoryStore;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build {table} frame: {message}")]
    Frame { table: TableName, message: String },

    #[error("failed to serialize {table} row: {source}")]
    Json {
        table: TableName,
        #[source]
        source: serde_json::Error,
    },
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Jsonl,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}

/// One written table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedTable {
    pub table: TableName,
    pub path: PathBuf,
    pub rows: usize,
}

/// Build a DataFrame with one typed column per schema column.
pub fn table_frame(table: TableName, rows: &[Row]) -> Result<DataFrame, ExportError> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.columns().len());
    for column in table.columns() {
        let name = column.name;
        let series = match column.ty {
            ColumnType::Text => {
                let values: Vec<Option<String>> = rows
                    .iter()
                    .map(|row| row.get(name).as_text().map(ToString::to_string))
                    .collect();
                Series::new(name.into(), values)
            }
            ColumnType::Int => {
                let values: Vec<Option<i64>> =
                    rows.iter().map(|row| row.get(name).as_int()).collect();
                Series::new(name.into(), values)
            }
            ColumnType::Float => {
                let values: Vec<Option<f64>> =
                    rows.iter().map(|row| row.get(name).as_float()).collect();
                Series::new(name.into(), values)
            }
            ColumnType::Bool => {
                let values: Vec<Option<bool>> =
                    rows.iter().map(|row| row.get(name).as_bool()).collect();
                Series::new(name.into(), values)
            }
        };
        columns.push(series.into());
    }
    DataFrame::new(columns).map_err(|e| ExportError::Frame {
        table,
        message: e.to_string(),
    })
}

fn create(path: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Write one table as CSV with a header row.
pub fn write_csv(path: &Path, table: TableName, rows: &[Row]) -> Result<(), ExportError> {
    let mut frame = table_frame(table, rows)?;
    let mut file = create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .map_err(|e| ExportError::Frame {
            table,
            message: e.to_string(),
        })?;
    file.flush().map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// A row serialized as a JSON object in schema column order.
struct OrderedRow<'a>(&'a Row);

impl Serialize for OrderedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.0.table.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for (name, value) in self.0.values() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Write rows as JSON lines, one object per row, nulls included.
pub fn write_jsonl<W: Write>(writer: &mut W, table: TableName, rows: &[Row]) -> Result<(), ExportError> {
    let io_error = |e: std::io::Error| ExportError::Io {
        path: PathBuf::from(format!("{table}.jsonl")),
        source: e,
    };
    for row in rows {
        serde_json::to_writer(&mut *writer, &OrderedRow(row))
            .map_err(|e| ExportError::Json { table, source: e })?;
        writer.write_all(b"\n").map_err(io_error)?;
    }
    writer.flush().map_err(io_error)
}

/// Write every table of the store into `dir` as `<table>.<ext>`.
///
/// Empty tables are written too, so downstream loaders always find all eight files.
pub fn export_store(
    store: &MemoryStore,
    dir: &Path,
    format: ExportFormat,
) -> Result<Vec<ExportedTable>, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut exported = Vec::with_capacity(TableName::ALL.len());
    for table in TableName::ALL {
        let rows = store.rows(table);
        let path = dir.join(format!("{table}.{}", format.extension()));
        match format {
            ExportFormat::Csv => write_csv(&path, table, rows)?,
            ExportFormat::Jsonl => {
                let mut file = create(&path)?;
                write_jsonl(&mut file, table, rows)?;
            }
        }
        info!(table = %table, rows = rows.len(), path = %path.display(), "table exported");
        exported.push(ExportedTable {
            table,
            path,
            rows: rows.len(),
        });
    }
    Ok(exported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_has_every_schema_column() {
        let rows = vec![
            Row::new(TableName::Refs)
                .with("game_id", "1")
                .with("role", "referee")
                .with("name", "Lindqvist Mikael"),
        ];
        let frame = table_frame(TableName::Refs, &rows).expect("frame");
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.width(), TableName::Refs.columns().len());
    }

    #[test]
    fn jsonl_keeps_nulls_and_order() {
        let rows = vec![Row::new(TableName::Refs).with("game_id", "1").with("role", "linesman")];
        let mut out = Vec::new();
        write_jsonl(&mut out, TableName::Refs, &rows).expect("jsonl");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text, "{\"game_id\":\"1\",\"role\":\"linesman\",\"name\":null}\n");
        assert!(CellValue::Null.is_null());
    }
}
