//! Request/response shapes for the tenant credit ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::CreditReport;

#[derive(Debug, Default, Deserialize)]
pub struct CreditQuery {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreditAmountRequest {
    pub amount: Decimal,
    #[validate(length(max = 500))]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreditReportResponse {
    #[serde(flatten)]
    pub report: CreditReport,
    pub adjustment_total: Decimal,
}
