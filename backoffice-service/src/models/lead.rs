//! Lead (customer) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Lead {
    pub lead_id: Uuid,
    pub tenant_id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub bank_name: Option<String>,
    pub created_utc: DateTime<Utc>,
}
