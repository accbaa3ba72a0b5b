//! Per-category source records as fetched from the store.
//!
//! Each category keeps its own shape; required fields are enforced at the
//! fetch boundary by the row decoder instead of letting nulls reach the
//! arithmetic downstream.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Finalized customer deposit.
#[derive(Debug, Clone, FromRow)]
pub struct DepositRecord {
    pub deposit_id: Uuid,
    pub tenant_id: Uuid,
    pub bank_id: Uuid,
    pub net_amount: Decimal,
    pub description: Option<String>,
    pub opened_utc: Option<DateTime<Utc>>,
    pub finalized_utc: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_utc: DateTime<Utc>,
}

impl DepositRecord {
    pub fn click_time(&self) -> DateTime<Utc> {
        self.opened_utc.unwrap_or(self.created_utc)
    }
}

/// Finalized customer withdrawal. `net_amount` is stored positive.
#[derive(Debug, Clone, FromRow)]
pub struct WithdrawalRecord {
    pub withdrawal_id: Uuid,
    pub tenant_id: Uuid,
    pub bank_id: Uuid,
    pub net_amount: Decimal,
    pub description: Option<String>,
    pub opened_utc: Option<DateTime<Utc>>,
    pub finalized_utc: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_utc: DateTime<Utc>,
}

impl WithdrawalRecord {
    pub fn click_time(&self) -> DateTime<Utc> {
        self.opened_utc.unwrap_or(self.created_utc)
    }
}

/// Deposit received but not yet assigned to a lead.
#[derive(Debug, Clone, FromRow)]
pub struct PendingDepositRecord {
    pub pending_id: Uuid,
    pub tenant_id: Uuid,
    pub bank_id: Uuid,
    pub net_amount: Decimal,
    pub description: Option<String>,
    pub finalized_utc: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_utc: DateTime<Utc>,
}

/// Manual balance correction. `delta` carries its own sign.
#[derive(Debug, Clone, FromRow)]
pub struct AdjustmentRecord {
    pub adjustment_id: Uuid,
    pub tenant_id: Uuid,
    pub bank_id: Uuid,
    pub delta: Decimal,
    pub description: Option<String>,
    pub finalized_utc: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_utc: DateTime<Utc>,
}

/// Bank expense. `amount` is stored negative and carried through as-is.
#[derive(Debug, Clone, FromRow)]
pub struct ExpenseRecord {
    pub expense_id: Uuid,
    pub tenant_id: Uuid,
    pub bank_id: Uuid,
    pub amount: Decimal,
    pub description: Option<String>,
    pub finalized_utc: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_utc: DateTime<Utc>,
}

/// Interbank transfer between two of the tenant's banks. Expands into a
/// debit and a credit ledger row.
#[derive(Debug, Clone, FromRow)]
pub struct TransferRecord {
    pub transfer_id: Uuid,
    pub tenant_id: Uuid,
    pub from_bank_id: Uuid,
    pub to_bank_id: Uuid,
    pub gross_amount: Decimal,
    pub description: Option<String>,
    pub from_utc: Option<DateTime<Utc>>,
    pub to_utc: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_utc: DateTime<Utc>,
}
