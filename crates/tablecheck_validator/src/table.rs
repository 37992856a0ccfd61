//! Table representation for validation.
//!
//! This module provides the typed-cell model of the dataset under
//! validation. Each cell is a tagged value; the numeric-vs-null question
//! is settled once, when the table is loaded, and never revisited per
//! rule. The table is immutable for the duration of a validation run.

use std::collections::{BTreeSet, HashMap};

/// A single cell in a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Null/missing value
    Null,
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
}

impl Cell {
    /// Returns true if this cell is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Returns the type name of this cell.
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Null => "null",
            Cell::Int(_) => "integer",
            Cell::Float(_) => "float",
            Cell::Text(_) => "text",
        }
    }

    /// Attempts to read this cell as a float, promoting integers.
    ///
    /// Text and null cells have no numeric reading; the promotion here is
    /// the only implicit widening the engine performs.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to read this cell as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Null => write!(f, "null"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// A single row of data.
pub type Row = HashMap<String, Cell>;

static NULL_CELL: Cell = Cell::Null;

/// The dataset under validation.
///
/// An ordered sequence of rows plus the header. A column present in the
/// header but absent from a row is observed as null; rules never
/// distinguish the two. The engine treats the table as read-only.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table with an explicit header.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Creates an empty table with no columns.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Creates a table from rows, deriving the header from the union of
    /// row keys (sorted, for a stable header).
    ///
    /// Prefer [`Table::new`] when the source header is known.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let names: BTreeSet<&str> = rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        Self {
            columns: names.into_iter().map(String::from).collect(),
            rows,
        }
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of columns in the header.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the header column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the header contains the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Reads a cell from a row, observing a missing entry as null.
    pub fn cell<'a>(&self, row: &'a Row, name: &str) -> &'a Cell {
        row.get(name).unwrap_or(&NULL_CELL)
    }
}
