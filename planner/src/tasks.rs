use tracing::debug;

use crate::api::{CodeSnippet, DevCategory, Ticket};
use crate::busy::BusyFlag;
use crate::error::ServiceError;
use crate::service::PlanService;

/// Development task browsing over a finished plan.
#[derive(Debug, Default)]
pub struct TaskBrowser {
    categories: BusyFlag,
    tasks: BusyFlag,
    snippet: BusyFlag,
}

impl TaskBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn categories<S>(
        &self,
        service: &S,
        plan: &str,
    ) -> Option<Result<Vec<DevCategory>, ServiceError>>
    where
        S: PlanService + ?Sized,
    {
        let _guard = self.categories.try_acquire()?;
        Some(service.dev_categories(plan).await)
    }

    pub async fn tasks<S>(
        &self,
        service: &S,
        category: &str,
        plan: &str,
    ) -> Option<Result<Vec<Ticket>, ServiceError>>
    where
        S: PlanService + ?Sized,
    {
        let _guard = self.tasks.try_acquire()?;
        debug!(category, "loading tasks");
        Some(service.tasks_for_category(category, plan).await)
    }

    pub async fn snippet<S>(
        &self,
        service: &S,
        task: &Ticket,
        plan: &str,
    ) -> Option<Result<CodeSnippet, ServiceError>>
    where
        S: PlanService + ?Sized,
    {
        let _guard = self.snippet.try_acquire()?;
        debug!(task = %task.summary, "generating snippet");
        Some(service.code_snippet(task, plan).await)
    }
}

/// Find a task by summary, ignoring case and surrounding whitespace.
pub fn find_task<'a>(tasks: &'a [Ticket], summary: &str) -> Option<&'a Ticket> {
    let wanted = summary.trim();
    tasks
        .iter()
        .find(|t| t.summary.trim().eq_ignore_ascii_case(wanted))
}
