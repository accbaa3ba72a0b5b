//! Request/response shapes for deposit entry.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepositRequest {
    pub bank_id: Uuid,
    pub lead_id: Option<Uuid>,
    pub net_amount: Decimal,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub opened_at: Option<DateTime<Utc>>,
    pub finalized_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct DepositCreatedResponse {
    pub deposit_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AssignPendingDepositRequest {
    pub lead_id: Uuid,
}
