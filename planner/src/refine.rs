//! The refinement loop: one plan, one feedback buffer, one request at a time.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{PlanRequest, RefineRequest};
use crate::error::ServiceError;
use crate::service::PlanService;

/// Plan shown when the initial generation request fails.
pub const LOAD_ERROR_PLAN: &str = "# Error\nUnable to load project plan.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinePhase {
    Idle,
    Refining,
    Done,
    Failed,
}

impl fmt::Display for RefinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RefinePhase::Idle => "idle",
            RefinePhase::Refining => "refining",
            RefinePhase::Done => "done",
            RefinePhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Why a refinement trigger issued no request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RefineRejection {
    #[error("there is no plan to refine")]
    EmptyPlan,
    #[error("feedback is empty")]
    EmptyFeedback,
    #[error("a refinement is already in progress")]
    AlreadyRefining,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefineOutcome {
    Rejected(RefineRejection),
    Refined,
    Failed(ServiceError),
}

/// Owns the current plan text and the pending feedback.
///
/// The plan changes only through [`PlanSession::fetch_initial`] and a
/// successful refinement.
#[derive(Debug)]
pub struct PlanSession {
    plan: String,
    feedback: String,
    phase: RefinePhase,
    last_settled: Option<RefinePhase>,
}

impl Default for PlanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanSession {
    pub fn new() -> Self {
        PlanSession {
            plan: String::new(),
            feedback: String::new(),
            phase: RefinePhase::Idle,
            last_settled: None,
        }
    }

    /// Start from a plan loaded elsewhere, e.g. a file on disk.
    pub fn with_plan(plan: impl Into<String>) -> Self {
        PlanSession {
            plan: plan.into(),
            ..Self::new()
        }
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = feedback.into();
    }

    pub fn phase(&self) -> RefinePhase {
        self.phase
    }

    /// `Done` or `Failed` for the most recent completed refinement.
    pub fn last_settled(&self) -> Option<RefinePhase> {
        self.last_settled
    }

    /// Fetch the first plan. On failure the plan becomes [`LOAD_ERROR_PLAN`].
    pub async fn fetch_initial<S>(
        &mut self,
        service: &S,
        request: &PlanRequest,
    ) -> Result<(), ServiceError>
    where
        S: PlanService + ?Sized,
    {
        match service.generate_plan(request).await {
            Ok(plan) => {
                info!(chars = plan.len(), "fetched initial plan");
                self.plan = plan;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "initial plan fetch failed");
                self.plan = LOAD_ERROR_PLAN.to_string();
                Err(e)
            }
        }
    }

    /// Move to `Refining` and build the request, or say why not.
    pub fn begin_refine(&mut self) -> Result<RefineRequest, RefineRejection> {
        if self.phase == RefinePhase::Refining {
            return Err(RefineRejection::AlreadyRefining);
        }
        if self.plan.is_empty() {
            return Err(RefineRejection::EmptyPlan);
        }
        if self.feedback.trim().is_empty() {
            return Err(RefineRejection::EmptyFeedback);
        }

        self.transition(RefinePhase::Refining);
        Ok(RefineRequest {
            original_plan: self.plan.clone(),
            user_feedback: self.feedback.clone(),
        })
    }

    /// Apply the result of the request started by [`Self::begin_refine`].
    ///
    /// On failure plan and feedback stay as they were and the error is handed
    /// back. Either way the session ends up `Idle`.
    pub fn finish_refine(
        &mut self,
        result: Result<String, ServiceError>,
    ) -> Result<(), ServiceError> {
        if self.phase != RefinePhase::Refining {
            debug!(phase = %self.phase, "finish_refine without a refinement in flight");
        }

        let settled = match result {
            Ok(plan) => {
                self.plan = plan;
                self.feedback.clear();
                self.transition(RefinePhase::Done);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "refinement failed; plan unchanged");
                self.transition(RefinePhase::Failed);
                Err(e)
            }
        };
        self.last_settled = Some(self.phase);
        self.transition(RefinePhase::Idle);
        settled
    }

    /// Run one refinement cycle against `service`. No retry.
    pub async fn refine<S>(&mut self, service: &S) -> RefineOutcome
    where
        S: PlanService + ?Sized,
    {
        let request = match self.begin_refine() {
            Ok(request) => request,
            Err(rejection) => {
                debug!(%rejection, "refinement not started");
                return RefineOutcome::Rejected(rejection);
            }
        };

        let result = service.refine_plan(&request).await;
        match self.finish_refine(result) {
            Ok(()) => RefineOutcome::Refined,
            Err(e) => RefineOutcome::Failed(e),
        }
    }

    fn transition(&mut self, to: RefinePhase) {
        debug!(from = %self.phase, %to, "refine phase");
        self.phase = to;
    }
}
