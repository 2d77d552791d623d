// Library module for testable functions

pub mod ingestion;

use ingestion::PersonRecord;

/// Compute the display name from stored fields
/// Consumers call this on demand; nothing is cached on the record
pub fn display_name(record: &PersonRecord) -> String {
    format!("{} {}", record.first_name, record.last_name)
}

/// Apply a raise, returning a new record
/// `rate` is a multiplier, e.g. 1.04 for a 4% raise
pub fn with_raise(record: &PersonRecord, rate: f64) -> PersonRecord {
    PersonRecord {
        compensation: (record.compensation as f64 * rate).round() as i32,
        ..record.clone()
    }
}
