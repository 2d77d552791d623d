//! Fetch functions - retrieve records from the remote source

use crate::ingestion::error::IngestError;
use crate::ingestion::parse::parse_person;
use crate::ingestion::types::{PersonRecord, RecordSet};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// A source of raw record payloads
///
/// The seam between ingestion logic and the network; tests substitute a
/// mock implementation.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn fetch_raw(&self) -> Result<serde_json::Value, IngestError>;

    /// Human-readable description of where records come from, for logs
    /// and reports.
    fn describe(&self) -> String;
}

/// HTTP source hitting a randomuser-style endpoint
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IngestError::unavailable(format!("failed to build client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl RecordSource for HttpSource {
    async fn fetch_raw(&self) -> Result<serde_json::Value, IngestError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::unavailable(format!(
                "HTTP request failed: {}",
                status
            )));
        }

        // A decode failure here is a malformed body, not an unreachable
        // source; From<reqwest::Error> makes the distinction.
        let payload = response.json::<serde_json::Value>().await?;
        Ok(payload)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Fetch and normalize a single record
pub async fn fetch_one<S: RecordSource>(source: &S) -> Result<PersonRecord, IngestError> {
    let raw = source.fetch_raw().await?;
    parse_person(raw)
}

/// Fetch exactly `count` records in sequence
///
/// All-or-nothing: the first failure aborts the run and no partial set is
/// returned.
pub async fn ingest<S: RecordSource>(source: &S, count: usize) -> Result<RecordSet, IngestError> {
    info!("Ingesting {} records from {}", count, source.describe());

    let mut set = RecordSet::new();
    for _ in 0..count {
        let record = fetch_one(source).await?;
        set.push(record);
    }

    info!("Ingested {} records", set.len());

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    enum MockResponse {
        Payload(serde_json::Value),
        Unavailable,
    }

    struct MockSource {
        responses: Mutex<VecDeque<MockResponse>>,
    }

    impl MockSource {
        fn new(responses: Vec<MockResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
            }
        }

        fn person(first: &str, last: &str) -> MockResponse {
            MockResponse::Payload(json!({
                "results": [{"name": {"first": first, "last": last}}]
            }))
        }
    }

    impl RecordSource for MockSource {
        async fn fetch_raw(&self) -> Result<serde_json::Value, IngestError> {
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("mock source exhausted");

            match next {
                MockResponse::Payload(v) => Ok(v),
                MockResponse::Unavailable => {
                    Err(IngestError::unavailable("connection refused"))
                }
            }
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    #[tokio::test]
    async fn test_fetch_one_maps_payload_to_record() {
        let source = MockSource::new(vec![MockSource::person("Jen", "Ward")]);

        let record = fetch_one(&source).await.unwrap();

        assert_eq!(
            record,
            PersonRecord {
                first_name: "Jen".to_string(),
                last_name: "Ward".to_string(),
                compensation: 60_000,
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_one_missing_name_is_malformed() {
        let source = MockSource::new(vec![MockResponse::Payload(
            json!({"results": [{"gender": "female"}]}),
        )]);

        let err = fetch_one(&source).await.unwrap_err();
        assert!(matches!(err, IngestError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_ingest_count_and_order() {
        let source = MockSource::new(vec![
            MockSource::person("Jen", "Ward"),
            MockSource::person("Sam", "Hale"),
            MockSource::person("Ada", "Byrne"),
        ]);

        let set = ingest(&source, 3).await.unwrap();

        assert_eq!(set.len(), 3);
        let firsts: Vec<&str> = set.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(firsts, vec!["Jen", "Sam", "Ada"]);
    }

    #[tokio::test]
    async fn test_ingest_zero_is_empty() {
        // No responses queued: ingest(0) must not touch the source at all
        let source = MockSource::new(vec![]);

        let set = ingest(&source, 0).await.unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_ingest_aborts_on_source_failure() {
        let source = MockSource::new(vec![
            MockSource::person("Jen", "Ward"),
            MockSource::person("Sam", "Hale"),
            MockResponse::Unavailable,
        ]);

        // All-or-nothing: two successful fetches are discarded with the run
        let err = ingest(&source, 5).await.unwrap_err();
        assert!(matches!(err, IngestError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_ingest_aborts_on_malformed_payload() {
        let source = MockSource::new(vec![
            MockSource::person("Jen", "Ward"),
            MockResponse::Payload(json!({"results": []})),
        ]);

        let err = ingest(&source, 2).await.unwrap_err();
        assert!(matches!(err, IngestError::MalformedResponse { .. }));
    }

    #[tokio::test]
    #[ignore] // Ignore by default since it hits real API
    async fn test_fetch_one_live() {
        let source =
            HttpSource::new("https://randomuser.me/api/", Duration::from_secs(30)).unwrap();

        let record = fetch_one(&source).await.unwrap();

        assert!(!record.first_name.is_empty());
        assert!(!record.last_name.is_empty());
        assert_eq!(record.compensation, 60_000);
    }
}
