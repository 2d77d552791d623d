//! Parse functions - transform raw payloads into PersonRecord structs

use crate::ingestion::error::IngestError;
use crate::ingestion::types::{PersonRecord, DEFAULT_COMPENSATION};
use serde::Deserialize;
use tracing::debug;

/// Remote payload shape: `{ results: [ { name: { first, last, ... }, ... } ] }`
///
/// Everything outside `results[0].name.{first,last}` is ignored.
#[derive(Debug, Deserialize)]
struct SourcePayload {
    results: Vec<SourceResult>,
}

#[derive(Debug, Deserialize)]
struct SourceResult {
    name: Option<SourceName>,
}

#[derive(Debug, Deserialize)]
struct SourceName {
    first: String,
    last: String,
}

/// Parse one source payload into a PersonRecord
///
/// The source never supplies compensation, so every record gets the fixed
/// default.
pub fn parse_person(payload: serde_json::Value) -> Result<PersonRecord, IngestError> {
    let payload: SourcePayload = serde_json::from_value(payload)
        .map_err(|e| IngestError::malformed(format!("unexpected payload shape: {}", e)))?;

    let result = payload
        .results
        .first()
        .ok_or_else(|| IngestError::malformed("payload contained no results"))?;

    let name = result
        .name
        .as_ref()
        .ok_or_else(|| IngestError::malformed("result is missing the name field"))?;

    debug!("Parsed record for {} {}", name.first, name.last);

    Ok(PersonRecord {
        first_name: name.first.clone(),
        last_name: name.last.clone(),
        compensation: DEFAULT_COMPENSATION,
    })
}
