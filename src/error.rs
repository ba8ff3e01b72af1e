//! Error handling for the OpenCGA client
//!
//! This module provides idiomatic Rust error types using thiserror for
//! better error messages and proper error chain handling. Transport and
//! service failures stay in [`ClientError`]; logical inconsistencies raised
//! by the interpretation editor are explicit [`EditError`] values so callers
//! can assert on them instead of inspecting logs.

use thiserror::Error;

use crate::rest::response::Event;

/// Main error type for the OpenCGA client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenCGA API error (status {status}): {}", summarize_events(.events))]
    Api { status: u16, events: Vec<Event> },

    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {endpoint} carried no result")]
    EmptyResponse { endpoint: String },

    #[error("operation requires an authenticated session")]
    NotLoggedIn,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid URL: {0}")]
    Url(String),

    #[error("interpretation edit rejected: {0}")]
    Edit(#[from] EditError),
}

impl ClientError {
    /// Error events extracted from the service response, if any.
    pub fn events(&self) -> &[Event] {
        match self {
            ClientError::Api { events, .. } => events,
            _ => &[],
        }
    }
}

/// Logical inconsistencies in the pending-edit set of an interpretation.
///
/// The membership checks treat `baseline ∪ added` (for additions) and
/// `baseline ∖ removed` (for removals and updates) as the effective
/// primary-findings set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("variant '{id}' is already part of the primary findings")]
    AlreadyInBaseline { id: String },

    #[error("variant '{id}' is not part of the primary findings")]
    NotInBaseline { id: String },

    #[error("variant carries no id")]
    MissingId,
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

fn summarize_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "no error details provided".to_string();
    }
    events
        .iter()
        .map(|e| e.describe().to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
