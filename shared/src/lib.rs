//! Shared types for the Carom billiards-hall client
//!
//! Wire models, money arithmetic and the session billing calculator
//! used across crates. Everything here is pure: no I/O, no clocks.

pub mod billing;
pub mod catalog;
pub mod models;
pub mod money;
pub mod page;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use billing::{BillingError, SessionCharge, compute_charge, format_duration};
pub use money::{Money, MoneyError};
pub use page::Page;
