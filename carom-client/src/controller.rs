//! Table session controller
//!
//! Mediates start/stop/invoice transitions against the backend and
//! keeps the local table board coherent with server responses. All
//! operations take `&mut self`: the controller is single-threaded and
//! cooperative, so exclusive access is what rules out two in-flight
//! transitions for the same table.

use std::collections::HashMap;

use futures::stream::{self, StreamExt};
use thiserror::Error;

use crate::api::HallApi;
use crate::error::ClientError;
use shared::billing::{self, BillingError};
use shared::models::{BilliardTable, Invoice, TableSession, TableStatus};
use shared::money::Money;

/// Upper bound on concurrent per-table session fetches during refresh
const SESSION_FETCH_CONCURRENCY: usize = 4;

/// Session control error type
#[derive(Debug, Error)]
pub enum SessionControlError {
    /// Server-reported close time precedes the open time
    #[error(transparent)]
    InvalidInterval(#[from] BillingError),

    /// No tracked session matches the request
    #[error("no tracked session for id {0}")]
    SessionNotFound(i64),

    /// The session is still open, or the backend rejected the invoice
    #[error("invoice creation failed: {0}")]
    InvoiceCreationFailed(String),

    /// The table is not on the board
    #[error("unknown table {0}")]
    TableNotFound(i64),

    /// The table already has an active session
    #[error("table {0} already has an active session")]
    TableOccupied(i64),

    /// Opaque transport or backend failure
    #[error("upstream request failed: {0}")]
    Upstream(#[from] ClientError),
}

/// A table together with the client-side view of its session.
#[derive(Debug, Clone)]
pub struct TrackedTable {
    pub table: BilliardTable,
    /// The active session while the table is occupied. After a stop the
    /// closed session stays here (so an invoice can still be created
    /// from it) until the next refresh discards it.
    pub current_session: Option<TableSession>,
    /// Invoice materialized from the last closed session, if any
    pub invoice_id: Option<i64>,
}

impl TrackedTable {
    fn active_session(&self) -> Option<&TableSession> {
        self.current_session.as_ref().filter(|s| s.is_active())
    }
}

/// Outcome of one refresh pass.
#[derive(Debug, Default)]
pub struct RefreshReport {
    /// Number of tables on the board after the refresh
    pub tables: usize,
    /// Tables whose active-session fetch failed. Their rows carry no
    /// session, but the failures are reported rather than masked as
    /// empty state.
    pub session_failures: Vec<(i64, ClientError)>,
}

/// Human-readable result of closing a session.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// The closed session as returned by the backend
    pub session: TableSession,
    /// Whole minutes between the server-reported timestamps
    pub duration_minutes: i64,
    /// `"1h 30m"` style rendering of the duration
    pub duration_display: String,
    /// Server-confirmed total. Never substituted locally: when the
    /// backend omits it, it stays absent.
    pub total: Option<Money>,
    /// Locally computed verification value for the same interval
    pub estimated_total: Money,
}

/// Orchestrates the per-table session lifecycle:
/// `AVAILABLE|RESERVED --start--> OCCUPIED --stop--> AVAILABLE`.
///
/// Every transition is confirmed by the backend before local state is
/// touched; a failed call leaves the board exactly as it was.
pub struct TableSessionController<A> {
    api: A,
    tables: Vec<TrackedTable>,
}

impl<A: HallApi> TableSessionController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tables: Vec::new(),
        }
    }

    /// The current table board.
    pub fn tables(&self) -> &[TrackedTable] {
        &self.tables
    }

    /// One tracked table, if it is on the board.
    pub fn table(&self, table_id: i64) -> Option<&TrackedTable> {
        self.tables.iter().find(|t| t.table.id == table_id)
    }

    fn entry_mut(&mut self, table_id: i64) -> Result<&mut TrackedTable, SessionControlError> {
        self.tables
            .iter_mut()
            .find(|t| t.table.id == table_id)
            .ok_or(SessionControlError::TableNotFound(table_id))
    }

    /// Reload the table list and the active session of every occupied
    /// table.
    ///
    /// Occupied tables get their session fetched with bounded fan-out;
    /// every other table gets no session, which discards any stale
    /// closed session still held locally. A single failed session fetch
    /// degrades that table to "no session" and is surfaced in the
    /// report instead of failing the whole refresh.
    pub async fn refresh(&mut self) -> Result<RefreshReport, SessionControlError> {
        let tables = self.api.list_tables().await?;
        let mut report = RefreshReport {
            tables: tables.len(),
            session_failures: Vec::new(),
        };

        let occupied: Vec<i64> = tables
            .iter()
            .filter(|t| t.status == TableStatus::Occupied)
            .map(|t| t.id)
            .collect();

        let api = &self.api;
        let results: Vec<(i64, Result<TableSession, ClientError>)> = stream::iter(occupied)
            .map(|id| async move { (id, api.active_session(id).await) })
            .buffer_unordered(SESSION_FETCH_CONCURRENCY)
            .collect()
            .await;

        let mut sessions: HashMap<i64, TableSession> = HashMap::new();
        for (table_id, result) in results {
            match result {
                Ok(session) => {
                    sessions.insert(table_id, session);
                }
                Err(err) => {
                    tracing::warn!(table_id, error = %err, "active session fetch failed");
                    report.session_failures.push((table_id, err));
                }
            }
        }

        self.tables = tables
            .into_iter()
            .map(|table| {
                let current_session = sessions.remove(&table.id);
                TrackedTable {
                    table,
                    current_session,
                    invoice_id: None,
                }
            })
            .collect();

        tracing::debug!(
            tables = report.tables,
            failures = report.session_failures.len(),
            "table board refreshed"
        );
        Ok(report)
    }

    /// Open a session on an available or reserved table.
    ///
    /// The transition is applied only after the backend confirms; a
    /// rejected or failed call leaves the table untouched.
    pub async fn start(&mut self, table_id: i64) -> Result<TableSession, SessionControlError> {
        let entry = self.entry_mut(table_id)?;
        if entry.table.status == TableStatus::Occupied || entry.active_session().is_some() {
            return Err(SessionControlError::TableOccupied(table_id));
        }

        let session = self.api.start_session(table_id).await?;
        tracing::info!(table_id, session_id = session.id, "session started");

        let entry = self.entry_mut(table_id)?;
        entry.table.status = TableStatus::Occupied;
        entry.current_session = Some(session.clone());
        entry.invoice_id = None;
        Ok(session)
    }

    /// Close the active session on a table.
    ///
    /// Requires a locally tracked active session; stopping a table whose
    /// session is unknown here (stale view) fails with
    /// [`SessionControlError::SessionNotFound`] rather than guessing.
    /// Duration and the verification total are computed once, from the
    /// two server timestamps; the returned `total` is the server's.
    pub async fn stop(&mut self, table_id: i64) -> Result<SessionSummary, SessionControlError> {
        let entry = self.entry_mut(table_id)?;
        if entry.active_session().is_none() {
            return Err(SessionControlError::SessionNotFound(table_id));
        }
        let price_per_hour = entry.table.price_per_hour;

        let closed = self.api.end_session(table_id).await?;
        let end_time = closed.end_time.ok_or_else(|| {
            SessionControlError::Upstream(ClientError::InvalidResponse(
                "close response missing endTime".to_string(),
            ))
        })?;

        let charge = billing::compute_charge(closed.start_time, end_time, price_per_hour)?;
        let summary = SessionSummary {
            duration_minutes: charge.duration_minutes,
            duration_display: billing::format_duration(charge.duration_minutes),
            total: closed.total,
            estimated_total: charge.total,
            session: closed.clone(),
        };
        tracing::info!(
            table_id,
            session_id = closed.id,
            duration = %summary.duration_display,
            "session closed"
        );

        let entry = self.entry_mut(table_id)?;
        entry.table.status = TableStatus::Available;
        entry.current_session = Some(closed);
        Ok(summary)
    }

    /// Materialize an invoice from a closed, tracked session.
    ///
    /// The session itself is not mutated; only the resulting invoice
    /// reference is recorded on the table entry.
    pub async fn create_invoice(
        &mut self,
        session_id: i64,
    ) -> Result<Invoice, SessionControlError> {
        let index = self
            .tables
            .iter()
            .position(|t| {
                t.current_session
                    .as_ref()
                    .is_some_and(|s| s.id == session_id)
            })
            .ok_or(SessionControlError::SessionNotFound(session_id))?;

        let session = self.tables[index]
            .current_session
            .as_ref()
            .ok_or(SessionControlError::SessionNotFound(session_id))?;
        if session.is_active() {
            return Err(SessionControlError::InvoiceCreationFailed(format!(
                "session {session_id} is still active"
            )));
        }

        let invoice = self
            .api
            .create_invoice_from_session(session_id)
            .await
            .map_err(|err| SessionControlError::InvoiceCreationFailed(err.to_string()))?;
        tracing::info!(session_id, invoice_id = invoice.id, "invoice created");

        self.tables[index].invoice_id = Some(invoice.id);
        Ok(invoice)
    }
}
