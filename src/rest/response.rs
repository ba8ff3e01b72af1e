//! OpenCGA REST response envelope
//!
//! Every web-service call returns the same JSON wrapper: a top-level
//! `responses` sequence of per-query result groups, each carrying its own
//! `results` and counters, plus severity-tagged events at both levels.
//! Callers treat the envelope as opaque until one of the extraction helpers
//! below; absent optional fields decode to defaults rather than failing.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Severity of a server-side event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    Info,
    Warning,
    Error,
}

/// A server-side event attached to a response or a result group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Event {
    /// Build an ERROR event from a bare message, for failures where the
    /// server body was not a structured envelope.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            event_type: EventType::Error,
            code: None,
            id: None,
            name: None,
            message: Some(message.into()),
        }
    }

    /// Best human-readable description of this event.
    pub fn describe(&self) -> &str {
        self.message
            .as_deref()
            .or(self.name.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("unspecified error")
    }

    pub fn is_error(&self) -> bool {
        self.event_type == EventType::Error
    }
}

/// One per-query result group inside the envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataResult<T> {
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(rename = "numResults", default)]
    pub num_results: Option<i64>,
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(rename = "resultType", default)]
    pub result_type: Option<String>,
    #[serde(rename = "numMatches", default)]
    pub num_matches: Option<i64>,
    #[serde(rename = "numInserted", default)]
    pub num_inserted: Option<i64>,
    #[serde(rename = "numUpdated", default)]
    pub num_updated: Option<i64>,
    #[serde(rename = "numDeleted", default)]
    pub num_deleted: Option<i64>,
}

/// Top-level response wrapper returned by every OpenCGA endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RestResponse<T> {
    #[serde(rename = "apiVersion", default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
    #[serde(default)]
    pub responses: Vec<DataResult<T>>,
}

impl<T> RestResponse<T> {
    /// First result of the first result group, if any.
    pub fn first_result(&self) -> Option<&T> {
        self.responses.first().and_then(|r| r.results.first())
    }

    /// Consume the envelope and return the first result, if any.
    pub fn into_first_result(self) -> Option<T> {
        self.responses
            .into_iter()
            .next()
            .and_then(|r| r.results.into_iter().next())
    }

    /// All results across every group, in envelope order.
    pub fn results(&self) -> impl Iterator<Item = &T> + '_ {
        self.responses.iter().flat_map(|r| r.results.iter())
    }

    /// Consume the envelope and return all results, in envelope order.
    pub fn into_results(self) -> Vec<T> {
        self.responses
            .into_iter()
            .flat_map(|r| r.results)
            .collect()
    }

    /// Total matches reported by the first result group, when the server
    /// counted them (`count=true` queries).
    pub fn total_matches(&self) -> Option<i64> {
        self.responses.first().and_then(|r| r.num_matches)
    }

    /// Every ERROR-severity event, top level first, then per group, in order.
    pub fn error_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.is_error())
            .chain(
                self.responses
                    .iter()
                    .flat_map(|r| r.events.iter().filter(|e| e.is_error())),
            )
            .collect()
    }

    pub fn has_error_events(&self) -> bool {
        !self.error_events().is_empty()
    }

    /// Promote server-reported failures to [`ClientError::Api`].
    ///
    /// An envelope that decoded from a non-2xx status, or that carries any
    /// ERROR event, is a service failure; the extracted events travel with
    /// the error for user-facing reporting.
    pub fn ok_or_api_error(self, status: u16) -> Result<Self, ClientError> {
        if (200..300).contains(&status) && !self.has_error_events() {
            Ok(self)
        } else {
            let events = self
                .error_events()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            Err(ClientError::Api { status, events })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_envelope() -> RestResponse<serde_json::Value> {
        let body = serde_json::json!({
            "apiVersion": "v2",
            "time": 13,
            "responses": [
                {
                    "time": 2,
                    "numResults": 2,
                    "numMatches": 40,
                    "results": [ {"id": "p1"}, {"id": "p2"} ]
                },
                {
                    "numResults": 1,
                    "results": [ {"id": "p3"} ]
                }
            ]
        });
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_decode_tolerates_absent_optional_fields() {
        // No events, no params, no counters beyond numResults.
        let env: RestResponse<serde_json::Value> =
            serde_json::from_str(r#"{"responses":[{"results":[{"id":"x"}]}]}"#).unwrap();
        assert_eq!(env.first_result().unwrap()["id"], "x");
        assert!(env.events.is_empty());
        assert_eq!(env.total_matches(), None);
    }

    #[test]
    fn test_decode_tolerates_unknown_fields() {
        let env: RestResponse<serde_json::Value> = serde_json::from_str(
            r#"{"federationNode":"n1","responses":[{"results":[],"futureCounter":7}]}"#,
        )
        .unwrap();
        assert!(env.responses[0].results.is_empty());
    }

    #[test]
    fn test_results_flatten_in_envelope_order() {
        let env = panel_envelope();
        let ids: Vec<_> = env.results().map(|v| v["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
        assert_eq!(env.total_matches(), Some(40));
    }

    #[test]
    fn test_error_events_preserve_order_across_levels() {
        let body = serde_json::json!({
            "events": [
                {"type": "WARNING", "message": "slow query"},
                {"type": "ERROR", "message": "top level boom"}
            ],
            "responses": [
                {"events": [{"type": "ERROR", "name": "CatalogException"}], "results": []}
            ]
        });
        let env: RestResponse<serde_json::Value> = serde_json::from_value(body).unwrap();
        let described: Vec<_> = env.error_events().iter().map(|e| e.describe()).collect();
        assert_eq!(described, vec!["top level boom", "CatalogException"]);
    }

    #[test]
    fn test_ok_or_api_error_promotes_error_events() {
        let body = serde_json::json!({
            "events": [{"type": "ERROR", "message": "study not found"}],
            "responses": []
        });
        let env: RestResponse<serde_json::Value> = serde_json::from_value(body).unwrap();
        let err = env.ok_or_api_error(500).unwrap_err();
        match err {
            ClientError::Api { status, events } => {
                assert_eq!(status, 500);
                assert_eq!(events.len(), 1);
                assert_eq!(events[0].describe(), "study not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_ok_or_api_error_accepts_clean_2xx() {
        let env = panel_envelope();
        assert!(env.ok_or_api_error(200).is_ok());
    }

    #[test]
    fn test_event_describe_fallback_chain() {
        let e = Event {
            event_type: EventType::Error,
            code: None,
            id: Some("E123".to_string()),
            name: None,
            message: None,
        };
        assert_eq!(e.describe(), "E123");
        assert_eq!(Event::error("boom").describe(), "boom");
    }
}
