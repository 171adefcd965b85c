#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use planner::{
    CodeSnippet, CreatedIssue, DevCategory, PlanRequest, PlanService, RefineRequest, ServiceError,
    Ticket,
};

pub fn transport_error(endpoint: &'static str) -> ServiceError {
    ServiceError::Transport {
        endpoint,
        message: "connection refused".to_string(),
    }
}

pub fn ticket(summary: &str) -> Ticket {
    Ticket {
        summary: summary.to_string(),
        description: format!("{} description", summary),
    }
}

/// Answers every call with canned results and counts calls per operation.
pub struct MockService {
    pub plan: Result<String, ServiceError>,
    pub refined: Result<String, ServiceError>,
    pub tickets: Vec<Ticket>,
    pub generate_calls: AtomicUsize,
    pub refine_calls: AtomicUsize,
    pub suggest_calls: AtomicUsize,
    pub push_calls: AtomicUsize,
    pub snippet_calls: AtomicUsize,
    pub last_refine: Mutex<Option<RefineRequest>>,
}

impl MockService {
    pub fn new() -> Self {
        MockService {
            plan: Ok("# Generated".to_string()),
            refined: Ok("X".to_string()),
            tickets: vec![ticket("Set up CI"), ticket("Design schema")],
            generate_calls: AtomicUsize::new(0),
            refine_calls: AtomicUsize::new(0),
            suggest_calls: AtomicUsize::new(0),
            push_calls: AtomicUsize::new(0),
            snippet_calls: AtomicUsize::new(0),
            last_refine: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        MockService {
            plan: Err(transport_error("/api/generate-project-plan")),
            refined: Err(transport_error("/api/refine-project-plan")),
            ..Self::new()
        }
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanService for MockService {
    async fn generate_plan(&self, _request: &PlanRequest) -> Result<String, ServiceError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.plan.clone()
    }

    async fn refine_plan(&self, request: &RefineRequest) -> Result<String, ServiceError> {
        self.refine_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_refine.lock().unwrap() = Some(request.clone());
        tokio::task::yield_now().await;
        self.refined.clone()
    }

    async fn suggest_tickets(&self, _plan: &str) -> Result<Vec<Ticket>, ServiceError> {
        self.suggest_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(self.tickets.clone())
    }

    async fn push_tickets(&self, tickets: &[Ticket]) -> Result<Vec<CreatedIssue>, ServiceError> {
        self.push_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(tickets
            .iter()
            .enumerate()
            .map(|(i, t)| CreatedIssue {
                summary: t.summary.clone(),
                key: Some(format!("PLAN-{}", i + 1)),
                url: None,
                error: None,
            })
            .collect())
    }

    async fn dev_categories(&self, _plan: &str) -> Result<Vec<DevCategory>, ServiceError> {
        Ok(vec![DevCategory {
            name: "Backend".to_string(),
            tech: vec!["Rust".to_string()],
        }])
    }

    async fn tasks_for_category(
        &self,
        category: &str,
        _plan: &str,
    ) -> Result<Vec<Ticket>, ServiceError> {
        Ok(vec![ticket(&format!("{} task", category))])
    }

    async fn code_snippet(&self, task: &Ticket, _plan: &str) -> Result<CodeSnippet, ServiceError> {
        self.snippet_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        Ok(CodeSnippet {
            task: task.summary.clone(),
            language: "rust".to_string(),
            snippet: "fn main() {}".to_string(),
        })
    }
}
