//! Disease-panel resource wrapper (`panels` category)
//!
//! One method per REST operation; each maps to a verb + path template +
//! parameter bag and delegates to the shared [`RestClient`].

use serde::Serialize;

use crate::catalog::models::{AclEntry, Panel, PanelGene, PanelSource};
use crate::catalog::AclAction;
use crate::error::ClientResult;
use crate::rest::{QueryOptions, QueryParams, RestClient, RestResponse};

const CATEGORY: &str = "panels";

/// Page size used by [`PanelClient::search_all`] when the caller set none.
const DRAIN_PAGE_SIZE: usize = 100;
/// Hard page cap so a bad filter cannot drain forever.
const DRAIN_MAX_PAGES: usize = 50;

/// Filters for `panels/search`.
///
/// Every field maps to the query parameter of the same (camelCase) name;
/// unset fields are omitted. List-valued filters are comma-joined strings,
/// matching the server contract.
#[derive(Debug, Clone, Default)]
pub struct PanelSearchParams {
    /// Study scope (`[[user@]project:]study`); defaults to the session study.
    pub study: Option<String>,
    /// Panel id filter, comma-separated.
    pub id: Option<String>,
    /// Panel name filter, comma-separated.
    pub name: Option<String>,
    /// Disorder filter (id or name), comma-separated.
    pub disorders: Option<String>,
    /// Gene filter (id or name), comma-separated.
    pub genes: Option<String>,
    /// Region filter, comma-separated.
    pub regions: Option<String>,
    /// Category filter, comma-separated.
    pub categories: Option<String>,
    /// Tag filter, comma-separated.
    pub tags: Option<String>,
    /// Internal status filter.
    pub status: Option<String>,
    /// Creation date filter (`yyyyMMddHHmmss`, supports `<`, `>`, ranges).
    pub creation_date: Option<String>,
    /// Modification date filter, same grammar as `creation_date`.
    pub modification_date: Option<String>,
    /// Projection and pagination.
    pub options: QueryOptions,
}

impl PanelSearchParams {
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

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_disorders(mut self, disorders: impl Into<String>) -> Self {
        self.disorders = Some(disorders.into());
        self
    }

    pub fn with_genes(mut self, genes: impl Into<String>) -> Self {
        self.genes = Some(genes.into());
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
        params.set_opt("disorders", self.disorders.as_deref());
        params.set_opt("genes", self.genes.as_deref());
        params.set_opt("regions", self.regions.as_deref());
        params.set_opt("categories", self.categories.as_deref());
        params.set_opt("tags", self.tags.as_deref());
        params.set_opt("status", self.status.as_deref());
        params.set_opt("creationDate", self.creation_date.as_deref());
        params.set_opt("modificationDate", self.modification_date.as_deref());
        self.options.apply(&mut params);
        params
    }
}

/// Body for `panels/create`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelCreateParams {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PanelSource>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub genes: Vec<PanelGene>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

/// Body for `panels/{ids}/update`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genes: Option<Vec<PanelGene>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Body for `panels/acl/{members}/update`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PanelAclUpdateParams {
    /// Permissions to apply, comma-separated (e.g. `"VIEW,WRITE"`).
    pub permissions: String,
    /// Panel ids the change applies to, comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
}

/// Resource wrapper for the `panels` web services.
pub struct PanelClient<'a> {
    rest: &'a RestClient,
}

impl<'a> PanelClient<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// POST `/panels/create`.
    pub async fn create(
        &self,
        body: &PanelCreateParams,
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<Panel>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.post(CATEGORY, &[], "create", params, body).await
    }

    /// GET `/panels/search`.
    pub async fn search(&self, params: &PanelSearchParams) -> ClientResult<RestResponse<Panel>> {
        self.rest
            .get(CATEGORY, &[], "search", params.to_query())
            .await
    }

    /// GET `/panels/distinct` for one field.
    pub async fn distinct(
        &self,
        field: &str,
        params: &PanelSearchParams,
    ) -> ClientResult<RestResponse<serde_json::Value>> {
        let mut query = params.to_query();
        query.set("field", field);
        self.rest.get(CATEGORY, &[], "distinct", query).await
    }

    /// GET `/panels/{ids}/info`.
    pub async fn info(
        &self,
        ids: &[&str],
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<Panel>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.get(CATEGORY, ids, "info", params).await
    }

    /// POST `/panels/{ids}/update`.
    pub async fn update(
        &self,
        ids: &[&str],
        body: &PanelUpdateParams,
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<Panel>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.post(CATEGORY, ids, "update", params, body).await
    }

    /// DELETE `/panels/{ids}/delete`.
    pub async fn delete(&self, ids: &[&str]) -> ClientResult<RestResponse<Panel>> {
        self.rest
            .delete(CATEGORY, ids, "delete", QueryParams::new())
            .await
    }

    /// GET `/panels/{ids}/acl`.
    pub async fn acl(&self, ids: &[&str]) -> ClientResult<RestResponse<AclEntry>> {
        self.rest
            .get(CATEGORY, ids, "acl", QueryParams::new())
            .await
    }

    /// POST `/panels/acl/{members}/update`.
    pub async fn update_acl(
        &self,
        members: &[&str],
        action: AclAction,
        body: &PanelAclUpdateParams,
    ) -> ClientResult<RestResponse<AclEntry>> {
        let mut params = QueryParams::new();
        params.set("action", action);
        let action_path = format!("{}/update", join_members(members));
        self.rest
            .post(CATEGORY, &[], &format!("acl/{action_path}"), params, body)
            .await
    }

    /// Drain every page of a search.
    ///
    /// Repeats `search` with increasing `skip` until a short page arrives.
    /// Pages are capped; when the cap is hit the drain stops and a warning
    /// is logged with how much was fetched.
    pub async fn search_all(&self, params: &PanelSearchParams) -> ClientResult<Vec<Panel>> {
        let page_size = params.options.limit.unwrap_or(DRAIN_PAGE_SIZE);
        let mut all = Vec::new();
        let mut page = 0;

        loop {
            let mut paged = params.clone();
            paged.options.limit = Some(page_size);
            paged.options.skip = Some(page * page_size);

            let response = self.search(&paged).await?;
            let results = response.into_results();
            let count = results.len();
            all.extend(results);

            tracing::debug!(page, count, total = all.len(), "fetched panel page");

            if count < page_size {
                break;
            }
            page += 1;
            if page >= DRAIN_MAX_PAGES {
                tracing::warn!(
                    fetched = all.len(),
                    "stopped panel drain at page cap; narrow the filter to fetch the rest"
                );
                break;
            }
        }

        Ok(all)
    }
}

fn join_members(members: &[&str]) -> String {
    members
        .iter()
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
