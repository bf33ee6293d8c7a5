/// Input loader -- turns a delimited byte stream into a `RecordTable`.
///
/// Parsing is strict about shape (every record must have as many fields as
/// the header) and lenient about content: cells are typed per column after
/// the whole file has been read, and no column is required at this stage.
mod typing;

use crate::error::PipelineError;
use crate::model::RecordTable;
use compact_str::CompactString;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub use typing::type_columns;

/// Normalise a column label: trim, lowercase, spaces to underscores.
///
/// `" Math Score "` becomes `"math_score"`.
pub fn normalize_label(raw: &str) -> CompactString {
    let trimmed = raw.trim();
    let mut out = CompactString::with_capacity(trimmed.len());
    for ch in trimmed.chars().flat_map(char::to_lowercase) {
        out.push(if ch == ' ' { '_' } else { ch });
    }
    out
}

/// Parse an in-memory CSV document.
pub fn load_bytes(bytes: &[u8]) -> Result<RecordTable, PipelineError> {
    load_reader(bytes)
}

/// Read a file's raw bytes.
///
/// An unreadable file is reported as `MalformedInput` so callers only ever
/// see the two pipeline error kinds.
pub fn read_file(path: &Path) -> Result<Vec<u8>, PipelineError> {
    std::fs::read(path).map_err(|e| {
        PipelineError::MalformedInput(format!("cannot read {}: {e}", path.display()))
    })
}

/// Read and parse a CSV file from disk.
pub fn load_path(path: &Path) -> Result<RecordTable, PipelineError> {
    load_bytes(&read_file(path)?)
}

/// Parse CSV from any reader.
pub fn load_reader<R: Read>(reader: R) -> Result<RecordTable, PipelineError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(PipelineError::MalformedInput(
            "no header row found".to_string(),
        ));
    }

    let columns = normalize_headers(headers.iter())?;
    debug!(?columns, "Normalised column labels");

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        raw_rows.push(record.iter().map(str::to_owned).collect());
    }

    let rows = type_columns(columns.len(), raw_rows);
    let table = RecordTable::from_parts(columns, rows);

    info!(
        "Loaded table: {} rows x {} columns",
        table.len(),
        table.column_count()
    );
    Ok(table)
}

/// Normalise every header and reject labels that collide afterwards.
fn normalize_headers<'a>(
    raw: impl Iterator<Item = &'a str>,
) -> Result<Vec<CompactString>, PipelineError> {
    let mut seen: HashSet<CompactString> = HashSet::new();
    let mut columns = Vec::new();
    for label in raw {
        let name = normalize_label(label);
        if !seen.insert(name.clone()) {
            return Err(PipelineError::MalformedInput(format!(
                "duplicate column `{name}` after normalising labels"
            )));
        }
        columns.push(name);
    }
    Ok(columns)
}
