//! Edge list loading from delimited text.
//!
//! ```csv
//! source;target;edge.id;onset
//! 27;53;1;1637
//! 53;27;2;1637
//! ```
//!
//! Columns are located by header name, so extra columns and any column order are
//! accepted. Header names and the delimiter come from [`DatasetConfig`].

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::config::DatasetConfig;
use crate::error::{GraphError, Result};
use crate::graph::edge::Edge;

/// Load every edge from the CSV file at `path`, in file order.
pub fn load_edges_csv<P: AsRef<Path>>(path: P, config: &DatasetConfig) -> Result<Vec<Edge>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let edges = read_edges(file, config)?;
    info!(path = %path.display(), edges = edges.len(), "loaded edge list");
    Ok(edges)
}

/// Parse edges from any reader producing delimited text with a header row.
pub fn read_edges<R: Read>(reader: R, config: &DatasetConfig) -> Result<Vec<Edge>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = &config.columns;
    let source_col = column_position(&headers, &columns.source)?;
    let target_col = column_position(&headers, &columns.target)?;
    let id_col = column_position(&headers, &columns.id)?;
    let year_col = column_position(&headers, &columns.year)?;

    let mut edges = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // +2: the header is line 1 and rows are 1-indexed.
        let row = row_idx + 2;

        let source = integer_field(&record, source_col, &columns.source, row)?;
        let target = integer_field(&record, target_col, &columns.target, row)?;
        let id = integer_field(&record, id_col, &columns.id, row)?;
        let year = integer_field(&record, year_col, &columns.year, row)?;
        let year = i32::try_from(year).map_err(|_| GraphError::InvalidRecord {
            row,
            column: columns.year.clone(),
            value: year.to_string(),
        })?;

        edges.push(Edge::new(source, target, id, year));
    }

    Ok(edges)
}

fn column_position(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| GraphError::MissingColumn(name.to_owned()))
}

fn integer_field(record: &StringRecord, col: usize, name: &str, row: usize) -> Result<i64> {
    let raw = record.get(col).unwrap_or("");
    coerce_integer(raw).ok_or_else(|| GraphError::InvalidRecord {
        row,
        column: name.to_owned(),
        value: raw.to_owned(),
    })
}

/// Parse an integer, also accepting integer-valued floats such as `1637.0`.
fn coerce_integer(raw: &str) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
