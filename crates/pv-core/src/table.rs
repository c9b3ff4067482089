//! Core table types for representing pipeline result tables

use crate::error::{Error, Result};
use crate::values::Value;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed table from a single delimited file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Row data
    pub rows: Vec<Row>,
    /// Source file path
    pub source_path: PathBuf,
}

impl Table {
    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find a column by name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Find a column by name, failing if it is absent
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.find_column(name).ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
            path: self.source_path.clone(),
        })
    }

    /// All cells of a column, in row order
    pub fn column_values(&self, name: &str) -> Result<Vec<&CellValue>> {
        let col = self.require_column(name)?;
        Ok(self
            .rows
            .iter()
            .map(|r| r.get(col.index).unwrap_or(&CellValue::Empty))
            .collect())
    }

    /// Split rows by whether `column` contains `needle` as a substring.
    ///
    /// Returns `(matching, rest)`. Empty cells never match.
    pub fn partition_contains(&self, column: &str, needle: &str) -> Result<(Vec<&Row>, Vec<&Row>)> {
        let col = self.require_column(column)?;
        Ok(self.rows.iter().partition(|r| {
            r.get(col.index)
                .is_some_and(|c| c.to_string_value().contains(needle))
        }))
    }

    /// Numeric summary of a column over every row
    pub fn summarize(&self, column: &str) -> Result<Summary> {
        let rows: Vec<&Row> = self.rows.iter().collect();
        self.summarize_rows(&rows, column)
    }

    /// Numeric summary of a column over a selection of rows.
    ///
    /// Empty cells are skipped; any other non-numeric cell is an error. A
    /// column holding any float is summarised as floats.
    pub fn summarize_rows(&self, rows: &[&Row], column: &str) -> Result<Summary> {
        let col = self.require_column(column)?;
        let mut ints = Vec::new();
        let mut floats = Vec::new();

        for row in rows {
            match row.get(col.index).unwrap_or(&CellValue::Empty) {
                CellValue::Empty => {}
                CellValue::Integer(i) => {
                    ints.push(*i);
                    floats.push(*i as f64);
                }
                CellValue::Float(f) => floats.push(*f),
                CellValue::String(s) => {
                    return Err(Error::NonNumeric {
                        column: column.to_string(),
                        value: s.clone(),
                        path: self.source_path.clone(),
                    })
                }
            }
        }

        if floats.is_empty() {
            return Err(Error::EmptySelection {
                what: column.to_string(),
                path: self.source_path.clone(),
            });
        }

        let count = floats.len();
        if ints.len() == count {
            let min = ints.iter().copied().min().unwrap_or_default();
            let max = ints.iter().copied().max().unwrap_or_default();
            return Ok(Summary {
                min: Value::Integer(min),
                max: Value::Integer(max),
                count,
            });
        }

        let min = floats.iter().copied().fold(f64::INFINITY, f64::min);
        let max = floats.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Summary {
            min: Value::Float(min),
            max: Value::Float(max),
            count,
        })
    }
}

/// Minimum, maximum and count of a numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub min: Value,
    pub max: Value,
    pub count: usize,
}

/// A column definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name (e.g., "Number_of_TUSCO_Genes")
    pub name: String,
    /// Column index (0-based)
    pub index: usize,
}

impl Column {
    /// Create a new column
    pub fn new(name: String, index: usize) -> Self {
        Self { name, index }
    }
}

/// A row of data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    /// Cell values for each column
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// A cell value with type detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// String value
    String(String),
    /// Empty/null cell
    Empty,
}

/// Cell texts read as missing data, as R and pandas write them
pub const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

impl CellValue {
    /// Parse a string into a CellValue, detecting the type.
    ///
    /// Blank cells and [`MISSING_TOKENS`] become `Empty`.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();

        if trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed) {
            return CellValue::Empty;
        }

        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }

        if let Ok(f) = trimmed.parse::<f64>() {
            return CellValue::Float(f);
        }

        CellValue::String(trimmed.to_string())
    }

    /// Convert to a display string
    pub fn to_string_value(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(fl) => write!(f, "{}", fl),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Empty => write!(f, ""),
        }
    }
}
