//! Carom Client - HTTP client for the billiards-hall POS backend
//!
//! Provides the typed REST surface plus the table-session controller
//! that keeps the local table board coherent with server state.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;

pub use api::HallApi;
pub use config::ClientConfig;
pub use controller::{
    RefreshReport, SessionControlError, SessionSummary, TableSessionController, TrackedTable,
};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{BilliardTable, Invoice, Product, TableSession, TableStatus};
pub use shared::{Money, Page};
