pub mod api;
pub mod brief;
pub mod busy;
pub mod error;
pub mod http;
pub mod refine;
pub mod service;
pub mod tasks;
pub mod tickets;

pub use api::{
    CodeSnippet, CreatedIssue, DevCategory, PlanRequest, ProjectBrief, RefineRequest, Ticket,
};
pub use brief::{load_request, load_text};
pub use busy::{BusyFlag, BusyGuard};
pub use error::{BriefError, ServiceError, TicketFileError};
pub use http::{DEFAULT_API_URL, Endpoint, HttpPlanService};
pub use refine::{LOAD_ERROR_PLAN, PlanSession, RefineOutcome, RefinePhase, RefineRejection};
pub use service::PlanService;
pub use tasks::{TaskBrowser, find_task};
pub use tickets::{TicketDesk, read_ticket_file, write_ticket_file};
