//! Table projection - load a RecordSet into an in-memory tabular view

use crate::ingestion::types::{Cell, PersonRecord, RecordSet, Table};
use tracing::debug;

/// Column names, in the order record fields are declared
const COLUMNS: [&str; 3] = ["first", "last", "pay"];

/// Project a RecordSet into a Table
///
/// Pure and deterministic: no renaming, no filtering, one row per record in
/// insertion order. An empty set keeps the default columns with zero rows.
pub fn to_table(set: &RecordSet) -> Table {
    debug!("Projecting {} records into a table", set.len());

    Table {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: set.iter().map(to_row).collect(),
    }
}

fn to_row(record: &PersonRecord) -> Vec<Cell> {
    vec![
        Cell::Text(record.first_name.clone()),
        Cell::Text(record.last_name.clone()),
        Cell::Number(record.compensation as i64),
    ]
}
