//! REST plumbing shared by every resource wrapper
//!
//! This module provides:
//! - The response envelope every endpoint resolves to
//! - Query-parameter handling and the shared projection/pagination options
//! - The HTTP core that builds paths and dispatches requests

pub mod client;
pub mod query;
pub mod response;

pub use client::RestClient;
pub use query::{QueryOptions, QueryParams, SortOrder};
pub use response::{DataResult, Event, EventType, RestResponse};
