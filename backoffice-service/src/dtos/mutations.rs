//! Request/response shapes for the unified mutation view.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{MutationKind, MutationRow};

/// Query parameters of the mutation view. Dates are `YYYY-MM-DD` calendar
/// dates in the back-office timezone; malformed values degrade to "filter not
/// applied".
#[derive(Debug, Default, Deserialize)]
pub struct MutationQuery {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub sequence: Option<String>,
    pub search: Option<String>,
    pub kind: Option<String>,
    pub bank_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MutationRowResponse {
    pub sequence: i64,
    pub click_time: String,
    pub chosen_time_top: String,
    pub chosen_time_bottom: String,
    pub kind: MutationKind,
    pub bank_id: Uuid,
    pub bank_lines: Vec<String>,
    pub description: String,
    pub amount: Decimal,
    pub creator: String,
}

fn display_instant(instant: Option<DateTime<Utc>>) -> String {
    instant
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| "-".to_string())
}

impl From<MutationRow> for MutationRowResponse {
    fn from(row: MutationRow) -> Self {
        Self {
            sequence: row.display_sequence,
            click_time: row.click_time.to_rfc3339_opts(SecondsFormat::Millis, true),
            chosen_time_top: display_instant(row.chosen_time_top),
            chosen_time_bottom: display_instant(row.chosen_time_bottom),
            kind: row.kind,
            bank_id: row.bank_id,
            bank_lines: row.bank_lines,
            description: row.description,
            amount: row.amount,
            creator: row.creator_name.unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MutationListResponse {
    /// Rows after the post-hoc filter, display order.
    pub rows: Vec<MutationRowResponse>,
    /// Row count of the unfiltered window (what the sequence numbers span).
    pub total: usize,
}
