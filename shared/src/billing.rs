//! Session duration and charge calculator
//!
//! Pure functions: given two server-reported timestamps and an hourly
//! rate, derive the elapsed minutes and the owed amount. The server
//! remains the pricing authority; the total computed here is a
//! fallback/verification value only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::Money;

/// Billing calculation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// The interval is reversed
    #[error("session end {end} is before start {start}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Derived duration and charge for one closed session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCharge {
    /// Whole elapsed minutes; fractional minutes are truncated
    pub duration_minutes: i64,
    /// `price_per_hour * duration_minutes / 60`, rounded half-up to the
    /// minor unit
    pub total: Money,
}

/// Compute elapsed minutes and the owed amount for `[start, end]` at the
/// given hourly rate.
///
/// Deterministic and side-effect free. Fails with
/// [`BillingError::InvalidInterval`] when `end < start`.
pub fn compute_charge(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    price_per_hour: Money,
) -> Result<SessionCharge, BillingError> {
    if end < start {
        return Err(BillingError::InvalidInterval { start, end });
    }

    let elapsed_ms = (end - start).num_milliseconds();
    let duration_minutes = elapsed_ms / 60_000;

    let total = (price_per_hour.amount() * Decimal::from(duration_minutes) / Decimal::from(60))
        .round_dp_with_strategy(
            crate::money::MINOR_UNIT_PLACES,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        );

    Ok(SessionCharge {
        duration_minutes,
        total: Money::from_raw(total),
    })
}

/// Render a minute count the way the table board shows it: `"1h 30m"`
/// once a full hour has elapsed, otherwise `"45m"`.
pub fn format_duration(minutes: i64) -> String {
    if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}
