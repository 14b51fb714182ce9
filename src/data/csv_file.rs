//! CSV loading for the weather export.
//!
//! The loader only resolves the two configured columns; everything else in the
//! file is discarded here, so the transformer never sees extra columns.

use std::collections::HashMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::StringRecord;

use crate::pipeline::PipelineError;

/// One raw CSV row, still unparsed. `line` is the 1-based line number in the
/// source file, kept so later failures can point at the offending row.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: usize,
    pub date: String,
    pub value: String,
}

/// Read the CSV at `path` and pull out the configured date/value columns.
pub fn load_raw_rows(
    path: &Path,
    date_column: &str,
    value_column: &str,
) -> Result<Vec<RawRow>, PipelineError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PipelineError::MissingFile(path.to_path_buf()),
        _ => PipelineError::Load(format!("failed to open '{}': {}", path.display(), e)),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| PipelineError::Load(format!("failed to read CSV headers: {}", e)))?
        .clone();

    let header_map = build_header_map(&headers);

    let date_idx = *header_map
        .get(date_column)
        .ok_or_else(|| PipelineError::MissingColumn(date_column.to_string()))?;
    let value_idx = *header_map
        .get(value_column)
        .ok_or_else(|| PipelineError::MissingColumn(value_column.to_string()))?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header row, and CSV lines are 1-based
        let line = idx + 2;

        let record = result
            .map_err(|e| PipelineError::Load(format!("CSV parse error at line {}: {}", line, e)))?;

        let date = get_field(&record, date_idx, date_column, line)?;
        let value = get_field(&record, value_idx, value_column, line)?;

        rows.push(RawRow { line, date, value });
    }

    log::info!("Loaded {} rows from '{}'", rows.len(), path.display());
    Ok(rows)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header. If we don't strip it, the date column looks missing.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn get_field(
    record: &StringRecord,
    idx: usize,
    column: &str,
    line: usize,
) -> Result<String, PipelineError> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            PipelineError::Load(format!("missing '{}' value at line {}", column, line))
        })
}
