//! Catalog entity types
//!
//! Typed mapping of the catalog payloads this client touches: disease
//! panels, families and their members, users. Decoding happens once at the
//! API boundary; every server-optional field is an `Option` or defaults, so
//! partial projections (`include`/`exclude`) always decode.

use serde::{Deserialize, Serialize};

/// A term from an ontology (HPO, OMIM, panel categories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OntologyTerm {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A phenotype annotation on an individual, family or panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phenotype {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(rename = "ageOfOnset", default)]
    pub age_of_onset: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A disorder annotation; evidences link back to phenotypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disorder {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub evidences: Vec<Phenotype>,
}

/// Lightweight reference to a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
}

/// Lifecycle status attached by the server (`internal.status`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Internal {
    #[serde(default)]
    pub status: Option<Status>,
}

/// A gene entry inside a disease panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelGene {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(rename = "modesOfInheritance", default)]
    pub modes_of_inheritance: Vec<String>,
    #[serde(rename = "cancer", default)]
    pub cancer: Option<serde_json::Value>,
}

/// Provenance of an imported panel (e.g. PanelApp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelStats {
    #[serde(rename = "numberOfGenes", default)]
    pub number_of_genes: Option<i64>,
    #[serde(rename = "numberOfRegions", default)]
    pub number_of_regions: Option<i64>,
    #[serde(rename = "numberOfVariants", default)]
    pub number_of_variants: Option<i64>,
}

/// A disease panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<PanelSource>,
    #[serde(default)]
    pub genes: Vec<PanelGene>,
    #[serde(default)]
    pub regions: Vec<serde_json::Value>,
    #[serde(default)]
    pub variants: Vec<serde_json::Value>,
    #[serde(default)]
    pub disorders: Vec<OntologyTerm>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub stats: Option<PanelStats>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(rename = "creationDate", default)]
    pub creation_date: Option<String>,
    #[serde(rename = "modificationDate", default)]
    pub modification_date: Option<String>,
    #[serde(default)]
    pub internal: Option<Internal>,
}

/// A family member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub sex: Option<OntologyTerm>,
    #[serde(rename = "lifeStatus", default)]
    pub life_status: Option<String>,
    #[serde(default)]
    pub father: Option<IndividualRef>,
    #[serde(default)]
    pub mother: Option<IndividualRef>,
    #[serde(default)]
    pub phenotypes: Vec<Phenotype>,
    #[serde(default)]
    pub disorders: Vec<Disorder>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(rename = "creationDate", default)]
    pub creation_date: Option<String>,
}

/// Reference to an individual by id only, used in pedigree links and
/// create/update bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualRef {
    #[serde(default)]
    pub id: String,
}

/// A family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<Individual>,
    #[serde(default)]
    pub phenotypes: Vec<Phenotype>,
    #[serde(default)]
    pub disorders: Vec<Disorder>,
    #[serde(rename = "expectedSize", default)]
    pub expected_size: Option<i32>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(rename = "creationDate", default)]
    pub creation_date: Option<String>,
    #[serde(rename = "modificationDate", default)]
    pub modification_date: Option<String>,
    #[serde(default)]
    pub internal: Option<Internal>,
}

/// One ACL entry: a member and its effective permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AclEntry {
    pub member: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A catalog user, as returned by `users/{user}/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub account: Option<serde_json::Value>,
}

/// Token pair returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    pub token: String,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}
