//! Clinical analysis services
//!
//! This module provides:
//! - Typed models for cases, interpretations and reported variants
//! - The `analysis/clinical` resource wrapper
//! - The pending-edit manager that reconciles local findings edits before
//!   committing them as a single interpretation update

pub mod client;
pub mod interpretation;
pub mod models;

pub use client::{ClinicalAnalysisClient, ClinicalSearchParams};
pub use interpretation::{CommitOutcome, InterpretationManager, InterpretationWriter};
pub use models::{
    ClinicalAnalysis, ClinicalVariant, Interpretation, InterpretationUpdateParams,
};
