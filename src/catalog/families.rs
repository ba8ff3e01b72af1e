//! Family resource wrapper (`families` category)

use serde::Serialize;

use crate::catalog::models::{AclEntry, Disorder, Family, IndividualRef, Phenotype};
use crate::catalog::AclAction;
use crate::error::ClientResult;
use crate::rest::{QueryOptions, QueryParams, RestClient, RestResponse};

const CATEGORY: &str = "families";

/// Filters for `families/search`. Unset fields are omitted from the query.
#[derive(Debug, Clone, Default)]
pub struct FamilySearchParams {
    /// Study scope; defaults to the session study.
    pub study: Option<String>,
    /// Family id filter, comma-separated.
    pub id: Option<String>,
    /// Family name filter, comma-separated.
    pub name: Option<String>,
    /// Member id filter, comma-separated.
    pub members: Option<String>,
    /// Phenotype filter (id or name), comma-separated.
    pub phenotypes: Option<String>,
    /// Disorder filter (id or name), comma-separated.
    pub disorders: Option<String>,
    /// Expected pedigree size filter (supports `<`, `>`).
    pub expected_size: Option<String>,
    /// Creation date filter (`yyyyMMddHHmmss`, supports `<`, `>`, ranges).
    pub creation_date: Option<String>,
    /// Projection and pagination.
    pub options: QueryOptions,
}

impl FamilySearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_study(mut self, study: impl Into<String>) -> Self {
        self.study = Some(study.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_members(mut self, members: impl Into<String>) -> Self {
        self.members = Some(members.into());
        self
    }

    pub fn with_disorders(mut self, disorders: impl Into<String>) -> Self {
        self.disorders = Some(disorders.into());
        self
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set_opt("study", self.study.as_deref());
        params.set_opt("id", self.id.as_deref());
        params.set_opt("name", self.name.as_deref());
        params.set_opt("members", self.members.as_deref());
        params.set_opt("phenotypes", self.phenotypes.as_deref());
        params.set_opt("disorders", self.disorders.as_deref());
        params.set_opt("expectedSize", self.expected_size.as_deref());
        params.set_opt("creationDate", self.creation_date.as_deref());
        self.options.apply(&mut params);
        params
    }
}

/// Body for `families/create`. Members are referenced by id; the server
/// resolves them against the study.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyCreateParams {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub members: Vec<IndividualRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_size: Option<i32>,
}

/// Body for `families/{ids}/update`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<IndividualRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phenotypes: Option<Vec<Phenotype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disorders: Option<Vec<Disorder>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_size: Option<i32>,
}

/// Body for `families/acl/{members}/update`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FamilyAclUpdateParams {
    /// Permissions to apply, comma-separated (e.g. `"VIEW,WRITE"`).
    pub permissions: String,
    /// Family ids the change applies to, comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// Resource wrapper for the `families` web services.
pub struct FamilyClient<'a> {
    rest: &'a RestClient,
}

impl<'a> FamilyClient<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// POST `/families/create`.
    pub async fn create(
        &self,
        body: &FamilyCreateParams,
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<Family>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.post(CATEGORY, &[], "create", params, body).await
    }

    /// GET `/families/search`.
    pub async fn search(&self, params: &FamilySearchParams) -> ClientResult<RestResponse<Family>> {
        self.rest
            .get(CATEGORY, &[], "search", params.to_query())
            .await
    }

    /// GET `/families/distinct` for one field.
    pub async fn distinct(
        &self,
        field: &str,
        params: &FamilySearchParams,
    ) -> ClientResult<RestResponse<serde_json::Value>> {
        let mut query = params.to_query();
        query.set("field", field);
        self.rest.get(CATEGORY, &[], "distinct", query).await
    }

    /// GET `/families/{ids}/info`.
    pub async fn info(
        &self,
        ids: &[&str],
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<Family>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.get(CATEGORY, ids, "info", params).await
    }

    /// POST `/families/{ids}/update`.
    pub async fn update(
        &self,
        ids: &[&str],
        body: &FamilyUpdateParams,
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<Family>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.post(CATEGORY, ids, "update", params, body).await
    }

    /// DELETE `/families/{ids}/delete`.
    pub async fn delete(&self, ids: &[&str]) -> ClientResult<RestResponse<Family>> {
        self.rest
            .delete(CATEGORY, ids, "delete", QueryParams::new())
            .await
    }

    /// GET `/families/{ids}/acl`.
    pub async fn acl(&self, ids: &[&str]) -> ClientResult<RestResponse<AclEntry>> {
        self.rest
            .get(CATEGORY, ids, "acl", QueryParams::new())
            .await
    }

    /// POST `/families/acl/{members}/update`.
    pub async fn update_acl(
        &self,
        members: &[&str],
        action: AclAction,
        body: &FamilyAclUpdateParams,
    ) -> ClientResult<RestResponse<AclEntry>> {
        let mut params = QueryParams::new();
        params.set("action", action);
        let members = members
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self.rest
            .post(CATEGORY, &[], &format!("acl/{members}/update"), params, body)
            .await
    }
}
