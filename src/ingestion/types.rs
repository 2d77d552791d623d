//! Core data types for the ingestion pipeline
//! Pure data structures with no behavior

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Compensation assigned when the source payload carries none
pub const DEFAULT_COMPENSATION: i32 = 60_000;

/// A normalized person record - pure data, no behavior
///
/// Identity is structural: two records with the same fields are the same
/// record, and nothing deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    pub compensation: i32,
}

/// Insertion-ordered collection of records accumulated during ingestion
///
/// Created empty, grows via `push`, never shrinks. Single owner; read once
/// when projected into a [`Table`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<PersonRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PersonRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersonRecord> {
        self.records.iter()
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Read-only tabular projection of a RecordSet
///
/// One row per record, one column per record field in declaration order.
/// The row index is implicit: a row's position, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Column widths: header vs widest cell, plus the index gutter
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.to_string().len());
            }
        }
        let idx_width = self.rows.len().saturating_sub(1).to_string().len();

        write!(f, "{:idx_width$}", "")?;
        for (col, w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", col, w = w)?;
        }
        writeln!(f)?;

        for (idx, row) in self.rows.iter().enumerate() {
            write!(f, "{:>idx_width$}", idx)?;
            for (cell, w) in row.iter().zip(&widths) {
                write!(f, "  {:>w$}", cell.to_string(), w = w)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Summary of one ingestion run
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub source_url: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub records_fetched: usize,
}

impl std::fmt::Display for IngestReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fetched {} records from {} in {}ms",
            self.records_fetched,
            self.source_url,
            (self.completed_at - self.started_at).num_milliseconds()
        )
    }
}
