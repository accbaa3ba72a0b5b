//! Unified bank-mutation ledger rows.
//!
//! Rows are derived, never persisted: every load normalizes the six source
//! categories into this one shape, orders it, and numbers it from scratch.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source category of a unified mutation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Deposit,
    Withdrawal,
    PendingDeposit,
    Adjustment,
    Expense,
    Transfer,
}

impl MutationKind {
    /// Get string representation for API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::PendingDeposit => "pending_deposit",
            Self::Adjustment => "adjustment",
            Self::Expense => "expense",
            Self::Transfer => "transfer",
        }
    }

    /// Parse a category tag. Unknown tags yield `None` so that a malformed
    /// filter input can degrade to "filter not applied".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "deposit" => Some(Self::Deposit),
            "withdrawal" => Some(Self::Withdrawal),
            "pending_deposit" => Some(Self::PendingDeposit),
            "adjustment" => Some(Self::Adjustment),
            "expense" => Some(Self::Expense),
            "transfer" => Some(Self::Transfer),
            _ => None,
        }
    }

    /// SQL expression of the column a category keys its click time on.
    ///
    /// Deposits and withdrawals key on when the order was opened (falling back
    /// to row creation where it was never recorded); the other four key on row
    /// creation. The fetch range filter uses the same column per category, so
    /// the window always selects by click time.
    pub fn click_time_expr(self) -> &'static str {
        match self {
            Self::Deposit | Self::Withdrawal => "COALESCE(opened_utc, created_utc)",
            Self::PendingDeposit | Self::Adjustment | Self::Expense | Self::Transfer => {
                "created_utc"
            }
        }
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of the unified mutation ledger.
///
/// `display_sequence` is assigned per load over the whole unfiltered window;
/// it is not a source identifier. An interbank transfer contributes two rows
/// sharing click time, chosen times, and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRow {
    pub display_sequence: i64,
    pub click_time: DateTime<Utc>,
    pub chosen_time_top: Option<DateTime<Utc>>,
    pub chosen_time_bottom: Option<DateTime<Utc>>,
    pub kind: MutationKind,
    pub bank_id: Uuid,
    pub bank_lines: Vec<String>,
    pub description: String,
    pub amount: Decimal,
    pub creator_id: Option<Uuid>,
    pub creator_name: Option<String>,
}

impl MutationRow {
    /// Canonical string form of the click instant. The ledger is ordered by
    /// lexicographic comparison of these strings, not by numeric comparison
    /// of the instants.
    pub fn click_sort_key(&self) -> String {
        self.click_time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Lowercased text searched by the free-text filter: description plus the
    /// joined bank label lines.
    pub fn search_haystack(&self) -> String {
        format!("{} {}", self.description, self.bank_lines.join(" ")).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_roundtrip() {
        for kind in [
            MutationKind::Deposit,
            MutationKind::Withdrawal,
            MutationKind::PendingDeposit,
            MutationKind::Adjustment,
            MutationKind::Expense,
            MutationKind::Transfer,
        ] {
            assert_eq!(MutationKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(MutationKind::parse("topup"), None);
        assert_eq!(MutationKind::parse(""), None);
    }

    #[test]
    fn click_time_expr_per_category() {
        assert_eq!(
            MutationKind::Deposit.click_time_expr(),
            "COALESCE(opened_utc, created_utc)"
        );
        assert_eq!(
            MutationKind::Withdrawal.click_time_expr(),
            "COALESCE(opened_utc, created_utc)"
        );
        assert_eq!(MutationKind::PendingDeposit.click_time_expr(), "created_utc");
        assert_eq!(MutationKind::Transfer.click_time_expr(), "created_utc");
    }

    #[test]
    fn sort_key_is_millisecond_rfc3339() {
        let row = MutationRow {
            display_sequence: 0,
            click_time: "2024-03-05T10:20:30.456Z".parse().unwrap(),
            chosen_time_top: None,
            chosen_time_bottom: None,
            kind: MutationKind::Deposit,
            bank_id: Uuid::nil(),
            bank_lines: vec![],
            description: String::new(),
            amount: Decimal::ZERO,
            creator_id: None,
            creator_name: None,
        };
        assert_eq!(row.click_sort_key(), "2024-03-05T10:20:30.456Z");
    }
}
