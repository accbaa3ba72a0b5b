//! Request/response shapes for lead management.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Lead;

#[derive(Debug, Default, Deserialize)]
pub struct LeadsQuery {
    pub page_size: Option<i32>,
    pub page_token: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeadRequest {
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,
    #[validate(length(min = 1, max = 32))]
    pub phone: String,
    #[validate(length(max = 120))]
    pub account_name: Option<String>,
    #[validate(length(max = 64))]
    pub account_number: Option<String>,
    #[validate(length(max = 120))]
    pub bank_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub leads: Vec<Lead>,
    /// Cursor for the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<Uuid>,
}
