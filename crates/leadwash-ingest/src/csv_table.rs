use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::info;

use leadwash_model::{LEAD_COLUMNS, LeadError, LeadRecord, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_lowercase()
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Load lead records from a CSV file.
///
/// Columns are matched by header name, so column order is irrelevant.
/// Cells are trimmed and empty cells become `None`. A header-only file
/// yields an empty dataset; a file with no readable header is an error.
///
/// # Errors
///
/// Returns a distinct error for a missing file, an empty file, a missing
/// required column, and a CSV parse failure. Each aborts the run; no
/// partial dataset is ever returned.
pub fn read_leads(path: &Path) -> Result<Vec<LeadRecord>> {
    if !path.exists() {
        return Err(LeadError::NotFound(path.to_path_buf()));
    }
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|error| LeadError::Csv(error.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|error| LeadError::Csv(error.to_string()))?;
    let headers: Vec<String> = headers.iter().map(normalize_header).collect();
    if headers.iter().all(String::is_empty) {
        return Err(LeadError::EmptyFile(path.to_path_buf()));
    }

    let mut indices = [0usize; LEAD_COLUMNS.len()];
    for (slot, column) in indices.iter_mut().zip(LEAD_COLUMNS) {
        *slot = headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| LeadError::MissingColumn(column.to_string()))?;
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|error| LeadError::Csv(error.to_string()))?;
        let cell = |idx: usize| row.get(indices[idx]).and_then(normalize_cell);
        records.push(LeadRecord {
            tel: cell(0),
            email: cell(1),
            name: cell(2),
            firstname: cell(3),
            idade: cell(4),
            sexo: cell(5),
            onde: cell(6),
            date: cell(7),
        });
    }

    info!(
        path = %path.display(),
        row_count = records.len(),
        column_count = headers.len(),
        "leads loaded"
    );
    Ok(records)
}

/// Write records to a CSV file with the standard column set.
///
/// `None` fields are written as empty cells.
///
/// # Errors
///
/// Returns an error when the file cannot be created or a row fails to
/// serialize.
pub fn write_leads(path: &Path, records: &[LeadRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| LeadError::Csv(error.to_string()))?;
    writer
        .write_record(LEAD_COLUMNS)
        .map_err(|error| LeadError::Csv(error.to_string()))?;
    for record in records {
        let row = record.values().map(|value| value.unwrap_or(""));
        writer
            .write_record(row)
            .map_err(|error| LeadError::Csv(error.to_string()))?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        row_count = records.len(),
        "cleaned leads written"
    );
    Ok(())
}
