//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::models::{
    BilliardTable, DashboardStats, Invoice, Product, ProductCreate, ProductUpdate, TableCreate,
    TableSession, TableUpdate,
};
use shared::page::Page;

/// Page size used when draining a paged listing in full
const FULL_FETCH_PAGE_SIZE: u32 = 100;

/// Error body the backend attaches to non-2xx responses
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for the POS backend REST API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request. The backend answers deletes with an empty
    /// body, so nothing is deserialized.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.delete(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_from(status, text));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_from(status, text));
        }
        response.json().await.map_err(Into::into)
    }

    /// Map a non-2xx response to a client error, preferring the
    /// structured `message` body when the backend sent one.
    fn error_from(status: StatusCode, text: String) -> ClientError {
        if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
            return ClientError::Api {
                status: status.as_u16(),
                message: body.message,
            };
        }
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }

    // ========== Tables API ==========

    /// List all tables
    pub async fn list_tables(&self) -> ClientResult<Vec<BilliardTable>> {
        self.get("tables").await
    }

    /// Get one table
    pub async fn get_table(&self, table_id: i64) -> ClientResult<BilliardTable> {
        self.get(&format!("tables/{table_id}")).await
    }

    /// Create a table
    pub async fn create_table(&self, payload: &TableCreate) -> ClientResult<BilliardTable> {
        self.post("tables", payload).await
    }

    /// Update a table
    pub async fn update_table(
        &self,
        table_id: i64,
        payload: &TableUpdate,
    ) -> ClientResult<BilliardTable> {
        self.put(&format!("tables/{table_id}"), payload).await
    }

    // ========== Sessions API ==========

    /// Open a session on a table
    pub async fn start_session(&self, table_id: i64) -> ClientResult<TableSession> {
        self.post_empty(&format!("invoices/sessions/{table_id}/start"))
            .await
    }

    /// Close the active session on a table
    pub async fn end_session(&self, table_id: i64) -> ClientResult<TableSession> {
        self.post_empty(&format!("invoices/sessions/{table_id}/end"))
            .await
    }

    /// Fetch the active session of a table
    pub async fn active_session(&self, table_id: i64) -> ClientResult<TableSession> {
        self.get(&format!("invoices/sessions/{table_id}")).await
    }

    /// Materialize an invoice from a closed session
    pub async fn create_invoice_from_session(&self, session_id: i64) -> ClientResult<Invoice> {
        self.post_empty(&format!("invoices/sessions/{session_id}/create-invoice"))
            .await
    }

    // ========== Products API ==========

    /// List one page of products, sorted by name
    pub async fn list_products(&self, page: u32, size: u32) -> ClientResult<Page<Product>> {
        self.get(&format!("products?page={page}&size={size}&sort=name,asc"))
            .await
    }

    /// Drain the product listing across all pages
    pub async fn list_all_products(&self) -> ClientResult<Vec<Product>> {
        let mut products = Vec::new();
        let mut page = 0;
        loop {
            let batch = self.list_products(page, FULL_FETCH_PAGE_SIZE).await?;
            let fetched = batch.content.len();
            let last = batch.is_last(FULL_FETCH_PAGE_SIZE as usize);
            products.extend(batch.content);
            if last || fetched == 0 {
                break;
            }
            page += 1;
        }
        Ok(products)
    }

    /// Create a product
    pub async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.post("products", payload).await
    }

    /// Update a product
    pub async fn update_product(
        &self,
        product_id: i64,
        payload: &ProductUpdate,
    ) -> ClientResult<Product> {
        self.put(&format!("products/{product_id}"), payload).await
    }

    /// Delete a product
    pub async fn delete_product(&self, product_id: i64) -> ClientResult<()> {
        self.delete(&format!("products/{product_id}")).await
    }

    // ========== Invoices API ==========

    /// List one page of invoices
    pub async fn list_invoices(&self, page: u32, size: u32) -> ClientResult<Page<Invoice>> {
        self.get(&format!("invoices?page={page}&size={size}")).await
    }

    /// Get one invoice with its items and originating session
    pub async fn get_invoice(&self, invoice_id: i64) -> ClientResult<Invoice> {
        self.get(&format!("invoices/{invoice_id}")).await
    }

    /// Delete an invoice
    pub async fn delete_invoice(&self, invoice_id: i64) -> ClientResult<()> {
        self.delete(&format!("invoices/{invoice_id}")).await
    }

    // ========== Dashboard API ==========

    /// Fetch the admin dashboard counters
    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.get("admin/dashboard").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ClientConfig::new("http://localhost:8080/api/").build_http_client();
        assert_eq!(client.url("tables"), "http://localhost:8080/api/tables");
        assert_eq!(client.url("/tables"), "http://localhost:8080/api/tables");
    }

    #[test]
    fn test_error_from_prefers_structured_body() {
        let err = HttpClient::error_from(
            StatusCode::BAD_REQUEST,
            r#"{"message": "pricePerHour must be non-negative"}"#.to_string(),
        );
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "pricePerHour must be non-negative");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_from_falls_back_to_status() {
        assert!(matches!(
            HttpClient::error_from(StatusCode::NOT_FOUND, "gone".to_string()),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            HttpClient::error_from(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            HttpClient::error_from(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
            ClientError::Internal(_)
        ));
    }
}
