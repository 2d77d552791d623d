//! Record ingestion module - sequential fetch, normalize, tabulate pipeline

pub mod error;
pub mod fetch;
pub mod parse;
pub mod table;
pub mod types;

pub use error::IngestError;
pub use types::*;
