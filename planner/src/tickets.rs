use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::{CreatedIssue, Ticket};
use crate::busy::BusyFlag;
use crate::error::{ServiceError, TicketFileError};
use crate::service::PlanService;

/// Ticket suggestion and submission. Each operation returns `None` when it is
/// triggered again while its previous request is still in flight.
#[derive(Debug, Default)]
pub struct TicketDesk {
    suggesting: BusyFlag,
    pushing: BusyFlag,
}

impl TicketDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.suggesting.is_busy() || self.pushing.is_busy()
    }

    pub async fn suggest<S>(
        &self,
        service: &S,
        plan: &str,
    ) -> Option<Result<Vec<Ticket>, ServiceError>>
    where
        S: PlanService + ?Sized,
    {
        let Some(_guard) = self.suggesting.try_acquire() else {
            debug!("suggest: already in flight");
            return None;
        };
        let result = service.suggest_tickets(plan).await;
        if let Ok(tickets) = &result {
            info!(count = tickets.len(), "suggested tickets");
        }
        Some(result)
    }

    pub async fn submit<S>(
        &self,
        service: &S,
        tickets: &[Ticket],
    ) -> Option<Result<Vec<CreatedIssue>, ServiceError>>
    where
        S: PlanService + ?Sized,
    {
        let Some(_guard) = self.pushing.try_acquire() else {
            debug!("submit: already in flight");
            return None;
        };
        let result = service.push_tickets(tickets).await;
        if let Ok(created) = &result {
            let failed = created.iter().filter(|c| c.key.is_none()).count();
            info!(submitted = tickets.len(), failed, "pushed tickets");
        }
        Some(result)
    }
}

/// On-disk form of a ticket batch: one `[[ticket]]` table per ticket, so the
/// suggestions can be edited before they are submitted.
#[derive(Debug, Serialize, Deserialize)]
struct TicketFile<T> {
    #[serde(default)]
    ticket: T,
}

pub fn tickets_to_toml(tickets: &[Ticket]) -> Result<String, TicketFileError> {
    Ok(toml::to_string(&TicketFile { ticket: tickets })?)
}

/// Parse an edited ticket file. Every ticket needs a summary.
pub fn tickets_from_toml(source: &str) -> Result<Vec<Ticket>, TicketFileError> {
    let file: TicketFile<Vec<Ticket>> = toml::from_str(source)?;
    if file.ticket.is_empty() {
        return Err(TicketFileError::NoTickets);
    }
    if let Some(index) = file.ticket.iter().position(|t| t.summary.trim().is_empty()) {
        return Err(TicketFileError::BlankSummary(index + 1));
    }
    Ok(file.ticket)
}

pub fn write_ticket_file(path: &Path, tickets: &[Ticket]) -> Result<(), TicketFileError> {
    let source = tickets_to_toml(tickets)?;
    fs::write(path, source).map_err(|source| TicketFileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = tickets.len(), "wrote ticket file");
    Ok(())
}

pub fn read_ticket_file(path: &Path) -> Result<Vec<Ticket>, TicketFileError> {
    let source = fs::read_to_string(path).map_err(|source| TicketFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tickets_from_toml(&source)
}
