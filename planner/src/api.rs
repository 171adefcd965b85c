//! Wire types for the planning API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured project brief, as entered in the planning form.
///
/// Read from TOML with snake_case keys, sent as camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ProjectBrief {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_description: String,
    #[serde(default)]
    pub stakeholder: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub expected_duration: String,
    #[serde(default = "default_duration_unit")]
    pub duration_unit: String,
    #[serde(default)]
    pub team_size: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub location_type: String,
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub database: Vec<String>,
    #[serde(default)]
    pub cloud: Vec<String>,
    #[serde(default)]
    pub devops: Vec<String>,
    #[serde(default)]
    pub design: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_tech: Option<String>,
}

fn default_duration_unit() -> String {
    "months".to_string()
}

impl Default for ProjectBrief {
    fn default() -> Self {
        ProjectBrief {
            project_name: String::new(),
            project_description: String::new(),
            stakeholder: String::new(),
            category: String::new(),
            start_date: String::new(),
            expected_duration: String::new(),
            duration_unit: default_duration_unit(),
            team_size: String::new(),
            budget: String::new(),
            experience: String::new(),
            location_type: String::new(),
            frontend: Vec::new(),
            backend: Vec::new(),
            database: Vec::new(),
            cloud: Vec::new(),
            devops: Vec::new(),
            design: Vec::new(),
            other_tech: None,
        }
    }
}

impl ProjectBrief {
    /// Names of required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = [
            ("project_name", &self.project_name),
            ("stakeholder", &self.stakeholder),
            ("category", &self.category),
            ("project_description", &self.project_description),
            ("start_date", &self.start_date),
            ("expected_duration", &self.expected_duration),
            ("team_size", &self.team_size),
            ("budget", &self.budget),
            ("experience", &self.experience),
            ("location_type", &self.location_type),
        ];
        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Body of a plan generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlanRequest {
    Structured(ProjectBrief),
    FreeText { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefineRequest {
    pub original_plan: String,
    pub user_feedback: String,
}

/// A ticket as suggested by, and submitted to, the API. Opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub summary: String,
    #[serde(default)]
    pub description: String,
}

/// Result of submitting one ticket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    pub summary: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl fmt::Display for CreatedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.key, &self.error) {
            (Some(key), _) => {
                write!(f, "created {}", key)?;
                if let Some(url) = &self.url {
                    write!(f, " ({})", url)?;
                }
                write!(f, ": {}", self.summary)
            }
            (None, Some(error)) => write!(f, "failed: {}: {}", self.summary, error),
            (None, None) => write!(f, "unknown result: {}", self.summary),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DevCategory {
    pub name: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeSnippet {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub language: String,
    pub snippet: String,
}

// Response envelopes. A missing field is a malformed response.

#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedPlan {
    pub project_plan: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefinedPlan {
    pub refined_plan: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestedTickets {
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PushedTickets {
    #[serde(alias = "created")]
    pub created_issues: Vec<CreatedIssue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Categories {
    pub categories: Vec<DevCategory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryTasks {
    pub tasks: Vec<Ticket>,
}

// Request bodies that only wrap the plan.

#[derive(Debug, Serialize)]
pub(crate) struct TicketPlan<'a> {
    pub plan: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct FinalPlan<'a> {
    pub final_plan: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryRequest<'a> {
    pub category: &'a str,
    pub final_plan: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SnippetRequest<'a> {
    pub task_name: &'a str,
    pub task_description: &'a str,
    pub final_plan: &'a str,
}
