use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::{
    Client, Method, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use crate::{
    clients::{
        cache::{
            DASHBOARD_KEY, METRICS_KEY, ORGANIZATIONS_KEY, PLANS_KEY, QueryCache, TEMPLATES_KEY,
            entry_key,
        },
        session::SessionStore,
    },
    config::Config,
    error::ApiError,
    models::{
        metrics::{
            AppointmentMetrics, ClientMetrics, DashboardData, EmployeeMetrics, InstanceMetrics,
            PlanMetrics, RevenueMetrics, ServiceMetrics,
        },
        organization::{OrganizationDetail, OrganizationSummary},
        plan::{CreatePlan, Plan, ReorderPlans, UpdatePlan},
        response::{Envelope, ErrorBody, MaybeEnveloped},
        retry::RetryConfig,
        session::{LoginRequest, LoginResponse, Session},
        template::{
            CreateTemplate, Template, TemplatePreviewRequest, TemplateQuery, UpdateTemplate,
        },
    },
    utils::retry_when,
};

/// Whether an endpoint wraps its payload in `{ "dados": ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Enveloped,
    Bare,
}

type Query = Vec<(&'static str, String)>;

/// Client for the Bellory admin REST API.
///
/// Every request carries the session's bearer token. A `401` clears the
/// session before the error is returned. Reads are cached for the configured
/// staleness window and retried on transient failures; each successful
/// mutation invalidates the cache entries of the resource it touched.
pub struct AdminApiClient {
    http_client: Client,
    base_url: String,
    timeout: Duration,
    retry_config: RetryConfig,
    session: SessionStore,
    cache: QueryCache,
}

impl AdminApiClient {
    pub fn new(config: &Config, session: SessionStore) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        let base_url = config.api_base_url();

        info!(base_url = %base_url, "Admin API client initialized");

        Ok(Self {
            http_client,
            base_url,
            timeout: config.request_timeout(),
            retry_config: config.retry_config(),
            session,
            cache: QueryCache::new(config.cache_stale_time()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn invalidate(&mut self, prefix: &str) {
        self.cache.invalidate(prefix);
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.http_client.request(method.clone(), url.as_str());
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(method = %method, url = %url, "Sending API request");

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(self.timeout)
            } else {
                ApiError::Transport(e)
            }
        })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(method = %method, path, "API rejected credentials, ending session");
            if let Err(e) = self.session.clear() {
                warn!(error = %e, "Failed to clear stored session");
            }
            return Err(ApiError::Unauthorized);
        }

        if status == StatusCode::FORBIDDEN {
            warn!(method = %method, path, "API refused access");
            return Err(ApiError::Forbidden);
        }

        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unexpected status")
                        .to_string()
                });

            warn!(method = %method, path, status = status.as_u16(), message = %message, "API request failed");

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        // Empty bodies decode as `null`, which is what `()` expects.
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };

        serde_json::from_str(text)
            .map_err(|e| ApiError::InvalidResponse(format!("{} {}: {}", method, path, e)))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
        shape: Shape,
    ) -> Result<T, ApiError> {
        retry_when(
            &self.retry_config,
            || async move {
                match shape {
                    Shape::Enveloped => self
                        .request::<Envelope<T>>(Method::GET, path, query, None)
                        .await
                        .map(|envelope| envelope.dados),
                    Shape::Bare => self.request::<T>(Method::GET, path, query, None).await,
                }
            },
            ApiError::is_retryable,
        )
        .await
    }

    async fn cached_get<T>(
        &mut self,
        key: String,
        path: &str,
        query: Query,
        shape: Shape,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(hit) = self.cache.get::<T>(&key) {
            return Ok(hit);
        }

        let value: T = self.fetch(path, &query, shape).await?;
        self.cache.put(&key, &value);
        Ok(value)
    }

    async fn mutate<T, B>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&B>,
        invalidates: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        let value = self.request::<T>(method, path, &[], body.as_ref()).await?;
        self.cache.invalidate(invalidates);
        Ok(value)
    }

    /// Signs in and persists the session. Accepts the response bare or
    /// wrapped in `dados`.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Session, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;

        let response = self
            .request::<MaybeEnveloped<LoginResponse>>(Method::POST, "/auth/login", &[], Some(&body))
            .await?
            .into_inner();

        let session = Session::from(response);
        self.session
            .store(session.clone())
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to persist session: {}", e)))?;
        self.cache.clear();

        info!(user_id = session.user.id, "Signed in");
        Ok(session)
    }

    pub fn logout(&mut self) -> Result<(), Error> {
        self.cache.clear();
        self.session.clear()
    }

    pub async fn dashboard(&mut self) -> Result<DashboardData, ApiError> {
        self.cached_get(
            DASHBOARD_KEY.to_string(),
            "/admin/dashboard",
            Vec::new(),
            Shape::Bare,
        )
        .await
    }

    async fn metrics<T>(&mut self, name: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Serialize,
    {
        self.cached_get(
            entry_key(METRICS_KEY, name),
            &format!("/admin/metricas/{}", name),
            Vec::new(),
            Shape::Bare,
        )
        .await
    }

    pub async fn appointment_metrics(&mut self) -> Result<AppointmentMetrics, ApiError> {
        self.metrics("agendamentos").await
    }

    pub async fn revenue_metrics(&mut self) -> Result<RevenueMetrics, ApiError> {
        self.metrics("faturamento").await
    }

    pub async fn service_metrics(&mut self) -> Result<ServiceMetrics, ApiError> {
        self.metrics("servicos").await
    }

    pub async fn employee_metrics(&mut self) -> Result<EmployeeMetrics, ApiError> {
        self.metrics("funcionarios").await
    }

    pub async fn client_metrics(&mut self) -> Result<ClientMetrics, ApiError> {
        self.metrics("clientes").await
    }

    pub async fn instance_metrics(&mut self) -> Result<InstanceMetrics, ApiError> {
        self.metrics("instancias").await
    }

    pub async fn plan_metrics(&mut self) -> Result<PlanMetrics, ApiError> {
        self.metrics("planos").await
    }

    pub async fn organizations(&mut self) -> Result<Vec<OrganizationSummary>, ApiError> {
        self.cached_get(
            ORGANIZATIONS_KEY.to_string(),
            "/admin/organizacoes",
            Vec::new(),
            Shape::Bare,
        )
        .await
    }

    pub async fn organization(&mut self, id: i64) -> Result<OrganizationDetail, ApiError> {
        self.cached_get(
            entry_key(ORGANIZATIONS_KEY, id),
            &format!("/admin/organizacoes/{}", id),
            Vec::new(),
            Shape::Bare,
        )
        .await
    }

    pub async fn plans(&mut self) -> Result<Vec<Plan>, ApiError> {
        self.cached_get(
            PLANS_KEY.to_string(),
            "/admin/planos",
            Vec::new(),
            Shape::Enveloped,
        )
        .await
    }

    pub async fn plan(&mut self, id: i64) -> Result<Plan, ApiError> {
        self.cached_get(
            entry_key(PLANS_KEY, id),
            &format!("/admin/planos/{}", id),
            Vec::new(),
            Shape::Enveloped,
        )
        .await
    }

    pub async fn create_plan(&mut self, plan: &CreatePlan) -> Result<Plan, ApiError> {
        let created: Envelope<Plan> = self
            .mutate(Method::POST, "/admin/planos", Some(plan), PLANS_KEY)
            .await?;

        info!(plan_id = created.dados.id, code = %created.dados.code, "Plan created");
        Ok(created.dados)
    }

    pub async fn update_plan(&mut self, id: i64, plan: &UpdatePlan) -> Result<Plan, ApiError> {
        let updated: Envelope<Plan> = self
            .mutate(Method::PUT, &format!("/admin/planos/{}", id), Some(plan), PLANS_KEY)
            .await?;

        info!(plan_id = id, "Plan updated");
        Ok(updated.dados)
    }

    pub async fn deactivate_plan(&mut self, id: i64) -> Result<(), ApiError> {
        self.mutate::<(), ()>(Method::DELETE, &format!("/admin/planos/{}", id), None, PLANS_KEY)
            .await?;

        info!(plan_id = id, "Plan deactivated");
        Ok(())
    }

    pub async fn activate_plan(&mut self, id: i64) -> Result<Plan, ApiError> {
        let activated: Envelope<Plan> = self
            .mutate::<_, ()>(
                Method::PATCH,
                &format!("/admin/planos/{}/ativar", id),
                None,
                PLANS_KEY,
            )
            .await?;

        info!(plan_id = id, "Plan activated");
        Ok(activated.dados)
    }

    pub async fn reorder_plans(&mut self, order: &ReorderPlans) -> Result<(), ApiError> {
        self.mutate::<(), _>(Method::PUT, "/admin/planos/reordenar", Some(order), PLANS_KEY)
            .await?;

        info!(plan_count = order.plans.len(), "Plans reordered");
        Ok(())
    }

    pub async fn templates(&mut self, query: TemplateQuery) -> Result<Vec<Template>, ApiError> {
        let mut params: Query = Vec::new();
        if let Some(channel) = query.channel {
            params.push(("tipo", channel.as_str().to_string()));
        }
        if let Some(category) = query.category {
            params.push(("categoria", category.as_str().to_string()));
        }

        let key = entry_key(
            TEMPLATES_KEY,
            format!(
                "tipo={}&categoria={}",
                query.channel.map(|c| c.as_str().to_string()).unwrap_or_default(),
                query.category.map(|c| c.as_str().to_string()).unwrap_or_default()
            ),
        );

        self.cached_get(key, "/admin/templates", params, Shape::Enveloped)
            .await
    }

    pub async fn template(&mut self, id: i64) -> Result<Template, ApiError> {
        self.cached_get(
            entry_key(TEMPLATES_KEY, id),
            &format!("/admin/templates/{}", id),
            Vec::new(),
            Shape::Enveloped,
        )
        .await
    }

    pub async fn create_template(&mut self, template: &CreateTemplate) -> Result<Template, ApiError> {
        let created: Envelope<Template> = self
            .mutate(Method::POST, "/admin/templates", Some(template), TEMPLATES_KEY)
            .await?;

        info!(template_id = created.dados.id, code = %created.dados.code, "Template created");
        Ok(created.dados)
    }

    pub async fn update_template(
        &mut self,
        id: i64,
        template: &UpdateTemplate,
    ) -> Result<Template, ApiError> {
        let updated: Envelope<Template> = self
            .mutate(
                Method::PUT,
                &format!("/admin/templates/{}", id),
                Some(template),
                TEMPLATES_KEY,
            )
            .await?;

        info!(template_id = id, "Template updated");
        Ok(updated.dados)
    }

    pub async fn deactivate_template(&mut self, id: i64) -> Result<(), ApiError> {
        self.mutate::<(), ()>(
            Method::DELETE,
            &format!("/admin/templates/{}", id),
            None,
            TEMPLATES_KEY,
        )
        .await?;

        info!(template_id = id, "Template deactivated");
        Ok(())
    }

    pub async fn activate_template(&mut self, id: i64) -> Result<Template, ApiError> {
        let activated: Envelope<Template> = self
            .mutate::<_, ()>(
                Method::PATCH,
                &format!("/admin/templates/{}/ativar", id),
                None,
                TEMPLATES_KEY,
            )
            .await?;

        info!(template_id = id, "Template activated");
        Ok(activated.dados)
    }

    /// The server unsets the previous default of the same channel and
    /// category, so every cached template list is dropped afterwards.
    pub async fn mark_template_default(&mut self, id: i64) -> Result<Template, ApiError> {
        let marked: Envelope<Template> = self
            .mutate::<_, ()>(
                Method::PATCH,
                &format!("/admin/templates/{}/padrao", id),
                None,
                TEMPLATES_KEY,
            )
            .await?;

        info!(template_id = id, "Template marked as default");
        Ok(marked.dados)
    }

    /// Server-side rendering of a saved template. Returns the rendered body.
    pub async fn preview_template(
        &self,
        id: i64,
        request: &TemplatePreviewRequest,
    ) -> Result<String, ApiError> {
        let body = serde_json::to_value(request)?;
        let preview: Envelope<String> = self
            .request(
                Method::POST,
                &format!("/admin/templates/{}/preview", id),
                &[],
                Some(&body),
            )
            .await?;

        debug!(template_id = id, "Template preview rendered by server");
        Ok(preview.dados)
    }
}
