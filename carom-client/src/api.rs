//! API seam consumed by the session controller
//!
//! The controller depends on this trait rather than on the concrete
//! transport, so tests can script the backend.

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{BilliardTable, Invoice, TableSession};

/// The slice of the backend surface the session controller uses: the
/// table list plus the session lifecycle endpoints.
#[async_trait]
pub trait HallApi: Send + Sync {
    async fn list_tables(&self) -> ClientResult<Vec<BilliardTable>>;
    async fn active_session(&self, table_id: i64) -> ClientResult<TableSession>;
    async fn start_session(&self, table_id: i64) -> ClientResult<TableSession>;
    async fn end_session(&self, table_id: i64) -> ClientResult<TableSession>;
    async fn create_invoice_from_session(&self, session_id: i64) -> ClientResult<Invoice>;
}

#[async_trait]
impl<T: HallApi + ?Sized> HallApi for std::sync::Arc<T> {
    async fn list_tables(&self) -> ClientResult<Vec<BilliardTable>> {
        (**self).list_tables().await
    }

    async fn active_session(&self, table_id: i64) -> ClientResult<TableSession> {
        (**self).active_session(table_id).await
    }

    async fn start_session(&self, table_id: i64) -> ClientResult<TableSession> {
        (**self).start_session(table_id).await
    }

    async fn end_session(&self, table_id: i64) -> ClientResult<TableSession> {
        (**self).end_session(table_id).await
    }

    async fn create_invoice_from_session(&self, session_id: i64) -> ClientResult<Invoice> {
        (**self).create_invoice_from_session(session_id).await
    }
}

#[async_trait]
impl HallApi for HttpClient {
    async fn list_tables(&self) -> ClientResult<Vec<BilliardTable>> {
        HttpClient::list_tables(self).await
    }

    async fn active_session(&self, table_id: i64) -> ClientResult<TableSession> {
        HttpClient::active_session(self, table_id).await
    }

    async fn start_session(&self, table_id: i64) -> ClientResult<TableSession> {
        HttpClient::start_session(self, table_id).await
    }

    async fn end_session(&self, table_id: i64) -> ClientResult<TableSession> {
        HttpClient::end_session(self, table_id).await
    }

    async fn create_invoice_from_session(&self, session_id: i64) -> ClientResult<Invoice> {
        HttpClient::create_invoice_from_session(self, session_id).await
    }
}
