//! Tenant credit ledger models.
//!
//! The credit ledger bills tenants for transaction fees. All postings happen
//! in stored procedures; this service only reads the projections they expose.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One movement on the tenant's internal credit balance, as returned by
/// `get_credit_mutations`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CreditMutation {
    pub occurred_utc: DateTime<Utc>,
    pub kind: String,
    pub amount: Decimal,
    pub balance_after: Decimal,
    pub reference: Option<String>,
}

/// Aggregated credit totals for a period, as returned by `get_credit_report`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CreditReport {
    pub opening_balance: Decimal,
    pub total_fees: Decimal,
    pub total_topups: Decimal,
    pub total_adjustments: Decimal,
    pub closing_balance: Decimal,
}
