//! The seam between plan sessions and the planning API.

use async_trait::async_trait;

use crate::api::{CodeSnippet, CreatedIssue, DevCategory, PlanRequest, RefineRequest, Ticket};
use crate::error::ServiceError;

/// Remote planning operations. Each call is independent and stateless.
///
/// [`crate::HttpPlanService`] talks to the real API; tests substitute their
/// own implementation.
#[async_trait]
pub trait PlanService: Send + Sync {
    /// Generate a plan from a structured brief or free text.
    async fn generate_plan(&self, request: &PlanRequest) -> Result<String, ServiceError>;

    /// Return a revised plan for `original_plan` given `user_feedback`.
    async fn refine_plan(&self, request: &RefineRequest) -> Result<String, ServiceError>;

    async fn suggest_tickets(&self, plan: &str) -> Result<Vec<Ticket>, ServiceError>;

    async fn push_tickets(&self, tickets: &[Ticket]) -> Result<Vec<CreatedIssue>, ServiceError>;

    async fn dev_categories(&self, plan: &str) -> Result<Vec<DevCategory>, ServiceError>;

    async fn tasks_for_category(
        &self,
        category: &str,
        plan: &str,
    ) -> Result<Vec<Ticket>, ServiceError>;

    async fn code_snippet(&self, task: &Ticket, plan: &str) -> Result<CodeSnippet, ServiceError>;
}
