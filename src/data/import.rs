//! Battle record import from JSON, CSV and spreadsheet exports.
//!
//! Tabular sources are read as a header row plus string cells and go
//! through the same serde path as JSON, so the Chinese sheet headers and
//! the snake_case names are accepted everywhere.

use std::fs;
use std::path::Path;

use calamine::{Data, Reader};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::data::record::BattleRecord;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read import file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse records JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to open workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no worksheets")]
    EmptyWorkbook,
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported import format '{0}' (expected .json, .csv or .xlsx)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
    Spreadsheet,
}

impl ImportFormat {
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(Self::Spreadsheet),
            _ => Err(ImportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads every record in `path`, picking the reader by file extension.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<BattleRecord>, ImportError> {
    let path = path.as_ref();
    let records = match ImportFormat::from_path(path)? {
        ImportFormat::Json => parse_records_json(&fs::read_to_string(path)?)?,
        ImportFormat::Csv => parse_records_csv(&fs::read_to_string(path)?)?,
        ImportFormat::Spreadsheet => load_records_xlsx(path)?,
    };
    tracing::info!(path = %path.display(), records = records.len(), "imported battle records");
    Ok(records)
}

/// Accepts a JSON array of records or a single record object.
pub fn parse_records_json(raw: &str) -> Result<Vec<BattleRecord>, ImportError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|source| ImportError::Row {
                    row: index,
                    source,
                })
            })
            .collect(),
        single => Ok(vec![serde_json::from_value(single)?]),
    }
}

pub fn parse_records_csv(raw: &str) -> Result<Vec<BattleRecord>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(raw.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let cells: Vec<String> = row.iter().map(str::to_string).collect();
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        records.push(record_from_row(&headers, cells, index + 1)?);
    }
    Ok(records)
}

/// Reads the first worksheet; row one holds the headers.
pub fn load_records_xlsx(path: &Path) -> Result<Vec<BattleRecord>, ImportError> {
    let mut workbook = calamine::open_workbook_auto(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::EmptyWorkbook)?;
    let range = workbook.worksheet_range(&sheet)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header.iter().map(cell_text).collect();

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        if row.iter().all(cell_is_empty) {
            continue;
        }
        let cells = row.iter().map(cell_text).collect();
        records.push(record_from_row(&headers, cells, index + 1)?);
    }
    Ok(records)
}

fn record_from_row(
    headers: &[String],
    cells: Vec<String>,
    row: usize,
) -> Result<BattleRecord, ImportError> {
    let object: Map<String, Value> = headers
        .iter()
        .zip(cells)
        .filter(|(header, _)| !header.is_empty())
        .map(|(header, cell)| (header.clone(), Value::String(cell)))
        .collect();
    serde_json::from_value(Value::Object(object)).map_err(|source| ImportError::Row { row, source })
}

/// Whole-number floats print without a fraction so "11200" stays an integer.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.trim().to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", *value as i64)
        }
        Data::Float(value) => value.to_string(),
        other => other.to_string(),
    }
}

fn cell_is_empty(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_accepts_array_or_single_object() {
        let many = parse_records_json(r#"[{"attack": "1"}, {"攻击": 2}]"#).expect("array");
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].attack, "2");

        let one = parse_records_json(r#"{"companion": "光猎"}"#).expect("object");
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].companion, "光猎");
    }

    #[test]
    fn json_row_errors_name_the_row() {
        let err = parse_records_json(r#"[{"attack": "1"}, {"attack": [1]}]"#).unwrap_err();
        assert!(matches!(err, ImportError::Row { row: 1, .. }), "{err}");
    }

    #[test]
    fn csv_reads_chinese_headers_and_skips_blank_rows() {
        let raw = "攻击,生命,搭档身份,阶数\n11200,210000,暗蚀国王,IV\n,,,\n6483, 9000 ,光猎,II\n";
        let records = parse_records_csv(raw).expect("csv");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].companion, "暗蚀国王");
        assert_eq!(records[1].hp, "9000");
        assert_eq!(records[1].stage, "II");
    }

    #[test]
    fn spreadsheet_cells_render_as_text() {
        assert_eq!(cell_text(&Data::Float(11200.0)), "11200");
        assert_eq!(cell_text(&Data::Float(6.5)), "6.5");
        assert_eq!(cell_text(&Data::Int(480)), "480");
        assert_eq!(cell_text(&Data::String(" 顺 ".into())), "顺");
        assert!(cell_is_empty(&Data::Empty));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImportFormat::from_path(Path::new("a.JSON")).ok(), Some(ImportFormat::Json));
        assert_eq!(ImportFormat::from_path(Path::new("a.csv")).ok(), Some(ImportFormat::Csv));
        assert_eq!(
            ImportFormat::from_path(Path::new("a.xlsx")).ok(),
            Some(ImportFormat::Spreadsheet)
        );
        assert!(ImportFormat::from_path(Path::new("a.txt")).is_err());
    }
}
