//! Clinical analysis resource wrapper (`analysis/clinical` category)

use async_trait::async_trait;

use crate::clinical::interpretation::InterpretationWriter;
use crate::clinical::models::{
    ClinicalAnalysis, ClinicalAnalysisCreateParams, ClinicalAnalysisUpdateParams, ClinicalVariant,
    Interpretation, InterpretationUpdateParams,
};
use crate::error::ClientResult;
use crate::rest::{QueryOptions, QueryParams, RestClient, RestResponse};

const CATEGORY: &str = "analysis/clinical";

/// Filters for `analysis/clinical/search`.
#[derive(Debug, Clone, Default)]
pub struct ClinicalSearchParams {
    /// Study scope; defaults to the session study.
    pub study: Option<String>,
    /// Case id filter, comma-separated.
    pub id: Option<String>,
    /// Case type filter (`SINGLE`, `FAMILY`, `CANCER`), comma-separated.
    pub analysis_type: Option<String>,
    /// Proband id filter, comma-separated.
    pub proband: Option<String>,
    /// Family id filter, comma-separated.
    pub family: Option<String>,
    /// Disorder filter (id or name), comma-separated.
    pub disorder: Option<String>,
    /// Panel id filter, comma-separated.
    pub panels: Option<String>,
    /// Internal status filter.
    pub status: Option<String>,
    /// Priority filter, comma-separated.
    pub priority: Option<String>,
    /// Creation date filter (`yyyyMMddHHmmss`, supports `<`, `>`, ranges).
    pub creation_date: Option<String>,
    /// Due date filter, same grammar as `creation_date`.
    pub due_date: Option<String>,
    /// Projection and pagination.
    pub options: QueryOptions,
}

impl ClinicalSearchParams {
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

    pub fn with_proband(mut self, proband: impl Into<String>) -> Self {
        self.proband = Some(proband.into());
        self
    }

    pub fn with_panels(mut self, panels: impl Into<String>) -> Self {
        self.panels = Some(panels.into());
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
        params.set_opt("type", self.analysis_type.as_deref());
        params.set_opt("proband", self.proband.as_deref());
        params.set_opt("family", self.family.as_deref());
        params.set_opt("disorder", self.disorder.as_deref());
        params.set_opt("panels", self.panels.as_deref());
        params.set_opt("status", self.status.as_deref());
        params.set_opt("priority", self.priority.as_deref());
        params.set_opt("creationDate", self.creation_date.as_deref());
        params.set_opt("dueDate", self.due_date.as_deref());
        self.options.apply(&mut params);
        params
    }
}

/// Resource wrapper for the `analysis/clinical` web services.
pub struct ClinicalAnalysisClient<'a> {
    rest: &'a RestClient,
}

impl<'a> ClinicalAnalysisClient<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self { rest }
    }

    /// GET `/analysis/clinical/search`.
    pub async fn search(
        &self,
        params: &ClinicalSearchParams,
    ) -> ClientResult<RestResponse<ClinicalAnalysis>> {
        self.rest
            .get(CATEGORY, &[], "search", params.to_query())
            .await
    }

    /// GET `/analysis/clinical/distinct` for one field.
    pub async fn distinct(
        &self,
        field: &str,
        params: &ClinicalSearchParams,
    ) -> ClientResult<RestResponse<serde_json::Value>> {
        let mut query = params.to_query();
        query.set("field", field);
        self.rest.get(CATEGORY, &[], "distinct", query).await
    }

    /// GET `/analysis/clinical/{ids}/info`.
    pub async fn info(
        &self,
        ids: &[&str],
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<ClinicalAnalysis>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.get(CATEGORY, ids, "info", params).await
    }

    /// POST `/analysis/clinical/create`.
    pub async fn create(
        &self,
        body: &ClinicalAnalysisCreateParams,
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<ClinicalAnalysis>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.post(CATEGORY, &[], "create", params, body).await
    }

    /// POST `/analysis/clinical/{ids}/update`.
    pub async fn update(
        &self,
        ids: &[&str],
        body: &ClinicalAnalysisUpdateParams,
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<ClinicalAnalysis>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        self.rest.post(CATEGORY, ids, "update", params, body).await
    }

    /// DELETE `/analysis/clinical/{ids}/delete`.
    pub async fn delete(&self, ids: &[&str]) -> ClientResult<RestResponse<ClinicalAnalysis>> {
        self.rest
            .delete(CATEGORY, ids, "delete", QueryParams::new())
            .await
    }

    /// POST `/analysis/clinical/{case}/interpretation/{interpretation}/update`.
    pub async fn update_interpretation(
        &self,
        clinical_id: &str,
        interpretation_id: &str,
        body: &InterpretationUpdateParams,
        options: &QueryOptions,
    ) -> ClientResult<RestResponse<Interpretation>> {
        let mut params = QueryParams::new();
        options.apply(&mut params);
        let action = format!("interpretation/{interpretation_id}/update");
        self.rest
            .post(CATEGORY, &[clinical_id], &action, params, body)
            .await
    }
}

#[async_trait]
impl InterpretationWriter for ClinicalAnalysisClient<'_> {
    async fn write_primary_findings(
        &self,
        clinical_id: &str,
        interpretation_id: &str,
        findings: Vec<ClinicalVariant>,
    ) -> ClientResult<()> {
        let body = InterpretationUpdateParams {
            primary_findings: Some(findings),
            ..Default::default()
        };
        self.update_interpretation(clinical_id, interpretation_id, &body, &QueryOptions::new())
            .await?;
        Ok(())
    }
}
