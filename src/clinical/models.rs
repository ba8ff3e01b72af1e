//! Clinical analysis types
//!
//! Cases, interpretations and reported variants. Variant annotation and
//! evidence payloads are open-ended server-side, so they are carried as
//! `serde_json::Value` rather than re-modeled field by field; everything
//! the client logic touches (ids, findings lists, comments) is typed.

use serde::{Deserialize, Serialize};

use crate::catalog::models::{Disorder, Family, Individual, Internal, Panel};

/// A comment thread entry on a case, interpretation or variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalComment {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A reported variant inside an interpretation's findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalVariant {
    /// Variant id (`chrom:pos:ref:alt` or an rs id); the key every
    /// pending-edit operation works with.
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub variant_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discussion: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<ClinicalComment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidences: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<serde_json::Value>,
}

impl ClinicalVariant {
    /// Minimal variant carrying only an id; enough for the pending-edit
    /// operations and for tests.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chromosome: None,
            start: None,
            end: None,
            reference: None,
            alternate: None,
            variant_type: None,
            status: None,
            discussion: None,
            comments: Vec::new(),
            evidences: Vec::new(),
            annotation: None,
        }
    }
}

/// An interpretation: one analyst's set of findings for a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub id: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "clinicalAnalysisId", default)]
    pub clinical_analysis_id: Option<String>,
    #[serde(default)]
    pub analyst: Option<serde_json::Value>,
    #[serde(default)]
    pub method: Option<serde_json::Value>,
    #[serde(rename = "primaryFindings", default)]
    pub primary_findings: Vec<ClinicalVariant>,
    #[serde(rename = "secondaryFindings", default)]
    pub secondary_findings: Vec<ClinicalVariant>,
    #[serde(default)]
    pub comments: Vec<ClinicalComment>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(rename = "creationDate", default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub internal: Option<Internal>,
}

/// A clinical analysis (case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalAnalysis {
    pub id: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub analysis_type: Option<String>,
    #[serde(default)]
    pub disorder: Option<Disorder>,
    #[serde(default)]
    pub proband: Option<Individual>,
    #[serde(default)]
    pub family: Option<Family>,
    #[serde(default)]
    pub panels: Vec<Panel>,
    /// The case's primary interpretation.
    #[serde(default)]
    pub interpretation: Option<Interpretation>,
    #[serde(rename = "secondaryInterpretations", default)]
    pub secondary_interpretations: Vec<Interpretation>,
    #[serde(default)]
    pub priority: Option<serde_json::Value>,
    #[serde(default)]
    pub analyst: Option<serde_json::Value>,
    #[serde(default)]
    pub comments: Vec<ClinicalComment>,
    #[serde(rename = "creationDate", default)]
    pub creation_date: Option<String>,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub internal: Option<Internal>,
}

/// Body for `analysis/clinical/create`. Referenced entities are resolved
/// by the server against the study.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalAnalysisCreateParams {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proband: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disorder: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panels: Option<Vec<serde_json::Value>>,
}

/// Body for `analysis/clinical/{ids}/update`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalAnalysisUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyst: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<ClinicalComment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Body for
/// `analysis/clinical/{case}/interpretation/{interpretation}/update`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_findings: Option<Vec<ClinicalVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_findings: Option<Vec<ClinicalVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<ClinicalComment>>,
}
