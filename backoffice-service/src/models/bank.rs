//! Bank and identity lookup models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tenant bank account used for deposits, withdrawals, and transfers.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Bank {
    pub bank_id: Uuid,
    pub tenant_id: Uuid,
    pub code: String,
    pub account_name: String,
    pub account_number: String,
    pub is_active: bool,
    pub created_utc: DateTime<Utc>,
}

/// Identity record resolved for creator display names.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Profile {
    pub profile_id: Uuid,
    pub display_name: String,
}
