//! `reqwest` implementation of [`PlanService`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::{
    Categories, CategoryRequest, CategoryTasks, CodeSnippet, CreatedIssue, DevCategory,
    FinalPlan, GeneratedPlan, PlanRequest, PushedTickets, RefineRequest, RefinedPlan,
    SnippetRequest, SuggestedTickets, Ticket, TicketPlan,
};
use crate::error::ServiceError;
use crate::service::PlanService;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GeneratePlan,
    RefinePlan,
    SuggestTickets,
    PushTickets,
    DevCategories,
    CategoryTasks,
    CodeSnippet,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::GeneratePlan => "/api/generate-project-plan",
            Endpoint::RefinePlan => "/api/refine-project-plan",
            Endpoint::SuggestTickets => "/api/generate-jira-tickets-from-plan",
            Endpoint::PushTickets => "/api/push-finalized-tickets",
            Endpoint::DevCategories => "/api/get-dev-categories",
            Endpoint::CategoryTasks => "/api/get-tasks-by-category",
            Endpoint::CodeSnippet => "/api/generate-code-snippet",
        }
    }
}

pub struct HttpPlanService {
    base_url: String,
    http: Client,
}

impl HttpPlanService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpPlanService { base_url, http }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn post<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let path = endpoint.path();
        debug!(endpoint = path, "post: sending request");

        let response = self
            .http
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport {
                endpoint: path,
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ServiceError::Transport {
            endpoint: path,
            message: e.to_string(),
        })?;

        if !status.is_success() {
            warn!(endpoint = path, status = status.as_u16(), "post: API error");
            return Err(ServiceError::Status {
                endpoint: path,
                status: status.as_u16(),
                body: text,
            });
        }

        decode_response(endpoint, &text)
    }
}

/// Decode a successful response body. Any shape other than the expected
/// envelope is a malformed response.
pub fn decode_response<R: DeserializeOwned>(
    endpoint: Endpoint,
    body: &str,
) -> Result<R, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::MalformedResponse {
        endpoint: endpoint.path(),
        detail: e.to_string(),
    })
}

#[async_trait]
impl PlanService for HttpPlanService {
    async fn generate_plan(&self, request: &PlanRequest) -> Result<String, ServiceError> {
        let response: GeneratedPlan = self.post(Endpoint::GeneratePlan, request).await?;
        Ok(response.project_plan)
    }

    async fn refine_plan(&self, request: &RefineRequest) -> Result<String, ServiceError> {
        let response: RefinedPlan = self.post(Endpoint::RefinePlan, request).await?;
        Ok(response.refined_plan)
    }

    async fn suggest_tickets(&self, plan: &str) -> Result<Vec<Ticket>, ServiceError> {
        let response: SuggestedTickets = self
            .post(Endpoint::SuggestTickets, &TicketPlan { plan })
            .await?;
        Ok(response.tickets)
    }

    async fn push_tickets(&self, tickets: &[Ticket]) -> Result<Vec<CreatedIssue>, ServiceError> {
        let response: PushedTickets = self.post(Endpoint::PushTickets, tickets).await?;
        Ok(response.created_issues)
    }

    async fn dev_categories(&self, plan: &str) -> Result<Vec<DevCategory>, ServiceError> {
        let response: Categories = self
            .post(Endpoint::DevCategories, &FinalPlan { final_plan: plan })
            .await?;
        Ok(response.categories)
    }

    async fn tasks_for_category(
        &self,
        category: &str,
        plan: &str,
    ) -> Result<Vec<Ticket>, ServiceError> {
        let body = CategoryRequest {
            category,
            final_plan: plan,
        };
        let response: CategoryTasks = self.post(Endpoint::CategoryTasks, &body).await?;
        Ok(response.tasks)
    }

    async fn code_snippet(&self, task: &Ticket, plan: &str) -> Result<CodeSnippet, ServiceError> {
        let body = SnippetRequest {
            task_name: &task.summary,
            task_description: &task.description,
            final_plan: plan,
        };
        self.post(Endpoint::CodeSnippet, &body).await
    }
}
