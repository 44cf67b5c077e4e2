//! Dataset file loading
//!
//! Three layouts are accepted:
//! - a JSON array of records,
//! - a column-oriented object (`{"topic": {"0": "Life"}, "stories": {"0": 1.2}}`),
//!   the default layout of dataframe JSON exports,
//! - JSON Lines, one record per line.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{info, warn};

use super::Dataset;
use crate::types::{MedialError, MedialResult, Row};

/// Read and validate a dataset file
pub fn load_dataset<P: AsRef<Path>>(path: P) -> MedialResult<Dataset> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dataset = parse_dataset(&content)?;
    info!("Loaded {} topics from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse dataset text in any supported layout
pub fn parse_dataset(content: &str) -> MedialResult<Dataset> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Dataset::default());
    }

    let rows = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => records_to_rows(items)?,
        Ok(Value::Object(object)) if is_column_oriented(&object) => columns_to_rows(object)?,
        Ok(Value::Object(object)) => vec![object],
        Ok(_) => {
            return Err(MedialError::schema(
                "Dataset must be an array of records or a column-oriented object",
            ))
        }
        Err(_) => parse_json_lines(trimmed)?,
    };

    Dataset::from_rows(rows)
}

fn records_to_rows(items: Vec<Value>) -> MedialResult<Vec<Row>> {
    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| match item {
            Value::Object(row) => Ok(row),
            _ => Err(MedialError::schema(format!(
                "Dataset record {} is not an object",
                position
            ))),
        })
        .collect()
}

/// Every value is an object keyed by row label
fn is_column_oriented(object: &Map<String, Value>) -> bool {
    !object.is_empty() && object.values().all(Value::is_object)
}

fn columns_to_rows(object: Map<String, Value>) -> MedialResult<Vec<Row>> {
    // Row labels come from the first column; dataframe exports use "0", "1", ...
    let mut labels: Vec<String> = object
        .values()
        .next()
        .and_then(Value::as_object)
        .map(|column| column.keys().cloned().collect())
        .unwrap_or_default();
    labels.sort_by(|a, b| match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    });

    let mut rows: Vec<Row> = labels.iter().map(|_| Map::new()).collect();
    for (column, values) in object {
        let values = match values {
            Value::Object(values) => values,
            _ => return Err(MedialError::schema(format!("Column '{}' is not an object", column))),
        };
        for (label, row) in labels.iter().zip(rows.iter_mut()) {
            if let Some(value) = values.get(label) {
                row.insert(column.clone(), value.clone());
            }
        }
    }
    Ok(rows)
}

fn parse_json_lines(content: &str) -> MedialResult<Vec<Row>> {
    let mut rows = Vec::new();

    for (line_number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(row)) => rows.push(row),
            Ok(_) => {
                return Err(MedialError::schema(format!(
                    "Line {} is not a JSON object",
                    line_number + 1
                )))
            }
            Err(e) => {
                warn!("Failed to parse dataset line {}: {}", line_number + 1, e);
                return Err(e.into());
            }
        }
    }

    Ok(rows)
}
