//! opencga-client - Typed async REST client for OpenCGA
//!
//! This crate talks to the web services of an OpenCGA clinical genomics
//! server: catalog resources (disease panels, families, users) and clinical
//! analyses with their interpretations. Every resource method maps 1:1 to a
//! verb + path + parameter bag and resolves to the platform's response
//! envelope; decoding into typed models happens once at that boundary.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use opencga_client::{ClientConfig, Session};
//! use opencga_client::catalog::PanelSearchParams;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ClientConfig::new("https://ws.opencb.org/opencga-prod")
//!     .with_study("demo@family:corpasome");
//! let session = Session::login(config, "demo", "demo").await?;
//!
//! let panels = session
//!     .panels()
//!     .search(&PanelSearchParams::new().with_genes("BRCA2"))
//!     .await?;
//! for panel in panels.results() {
//!     println!("{}", panel.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Interpretation editing goes through
//! [`clinical::InterpretationManager`], which reconciles local add/remove/
//! update edits against the server-confirmed findings and commits them as a
//! single update.

// Core error handling
pub mod error;

// Client configuration
pub mod config;

// REST plumbing: envelope, query parameters, HTTP core
pub mod rest;

// Session context and resource wrappers
pub mod catalog;
pub mod clinical;
pub mod session;

// Display formatters
pub mod format;

// Public re-exports for the common path
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, EditError};
pub use rest::{QueryOptions, RestResponse};
pub use session::Session;
