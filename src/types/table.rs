//! Column-named tables of JSON scalars
//!
//! The graph builder hands edge and node tables to the scaler. Their columns
//! are not fixed: node tables carry whatever extra attributes the dataset
//! has, so rows are kept as JSON maps alongside an ordered column list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single table row
pub type Row = Map<String, Value>;

/// Table with an ordered set of column names
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given columns
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from rows, columns taken in first-seen order
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut table = Self::default();
        for row in rows {
            table.push(row);
        }
        table
    }

    /// Append a row, registering any new columns it introduces
    pub fn push(&mut self, row: Row) {
        for key in row.keys() {
            if !self.has_column(key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(row);
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Columns whose every row holds a JSON number
    ///
    /// An empty table has no numeric columns.
    pub fn numeric_columns(&self) -> Vec<&str> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        self.columns
            .iter()
            .filter(|column| {
                self.rows
                    .iter()
                    .all(|row| matches!(row.get(column.as_str()), Some(Value::Number(_))))
            })
            .map(String::as_str)
            .collect()
    }

    /// Numeric values of a column, skipping rows where it is not a number
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.rows
            .iter()
            .filter_map(move |row| row.get(column).and_then(Value::as_f64))
    }

    /// Rewrite a column so every value is a string
    pub fn stringify_column(&mut self, column: &str) {
        for row in &mut self.rows {
            if let Some(value) = row.get_mut(column) {
                if !value.is_string() {
                    *value = Value::String(value_to_string(value));
                }
            }
        }
    }
}

/// String form of an id-like value
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
