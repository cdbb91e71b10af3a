//! HTTP client for the service's REST API.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use kaleo_utils::pagination::{Page, PageQuery};

use crate::error::ApiError;
use crate::models::{
    PassSummary, PassValidationRequest, PassValidationResponse, ProgramSummary,
    PublishedProgramSummary, StaffProgramSummary,
};
use crate::wire::PageWire;

/// Client for the service's REST API.
///
/// Cheap to share behind an `Arc`; the underlying connection pool is
/// reused across calls.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    /// Create a client for a service base URL, optionally authenticated.
    ///
    /// Calls to bearer-protected endpoints without a token are still
    /// issued; the server answers 401 and the normal error path surfaces
    /// it.
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Self {
            http: reqwest::Client::new(),
            base_url,
            access_token,
        }
    }

    /// Whether this client sends a bearer token.
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// List the caller's programs. Bearer-protected.
    pub async fn list_programs(&self, query: &PageQuery) -> Result<Page<ProgramSummary>, ApiError> {
        self.fetch_page("/api/v1/programs", query).await
    }

    /// List the caller's purchased passes. Bearer-protected.
    pub async fn list_passes(&self, query: &PageQuery) -> Result<Page<PassSummary>, ApiError> {
        self.fetch_page("/api/v1/passes", query).await
    }

    /// List published programs, optionally filtered by the query's search
    /// text. Public.
    pub async fn list_published_programs(
        &self,
        query: &PageQuery,
    ) -> Result<Page<PublishedProgramSummary>, ApiError> {
        self.fetch_page("/api/v1/published-programs", query).await
    }

    /// List programs the caller may validate passes for. Bearer-protected.
    pub async fn list_staff_programs(
        &self,
        query: &PageQuery,
    ) -> Result<Page<StaffProgramSummary>, ApiError> {
        self.fetch_page("/api/v1/pass-validations", query).await
    }

    /// Validate one presented pass. Bearer-protected.
    pub async fn validate_pass(
        &self,
        request: &PassValidationRequest,
    ) -> Result<PassValidationResponse, ApiError> {
        let url = format!("{}/api/v1/pass-validations", self.base_url);
        debug!(program = %request.program_id, "validating pass");

        let response = self.authorize(self.http.post(url).json(request)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_error_body(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch one page of a list endpoint and normalize its wire shape.
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &PageQuery,
    ) -> Result<Page<T>, ApiError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, page = query.page, size = query.size, "fetching page");

        let mut request = self.http.get(url).query(&[
            ("page", query.page.to_string()),
            ("size", query.size.to_string()),
        ]);

        if let Some(search) = query.search.as_deref() {
            request = request.query(&[("q", search)]);
        }

        let response = self.authorize(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_error_body(status.as_u16(), &body));
        }

        let wire: PageWire<T> = serde_json::from_str(&body)?;
        Ok(wire.normalize())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.access_token.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
