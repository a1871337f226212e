//! Invoice Model
//!
//! Invoices are produced by the backend from a closed table session
//! and/or sold products; this client only reads and references them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::Product;
use super::session::TableSession;
use crate::money::Money;

/// Invoice line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: i64,
    #[serde(default)]
    pub product: Option<Product>,
    pub quantity: i32,
    #[serde(default)]
    pub unit_price: Money,
    #[serde(default)]
    pub line_total: Money,
}

/// Invoice entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Originating table session, when the invoice was materialized
    /// from one
    #[serde(default)]
    pub session: Option<TableSession>,
    #[serde(default)]
    pub subtotal: Money,
    #[serde(default)]
    pub discount_amount: Money,
    #[serde(default)]
    pub discount_percent: Option<f64>,
    #[serde(default)]
    pub tax_amount: Money,
    #[serde(default)]
    pub tax_percent: Option<f64>,
    #[serde(default)]
    pub total: Money,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}
