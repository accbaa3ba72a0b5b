//! Post-hoc filtering over an already-built ledger.

use uuid::Uuid;

use crate::models::{MutationKind, MutationRow};
use crate::mutations::range::ClickWindow;

/// AND-composed predicates applied after `build`. Pure over its inputs: it
/// never re-fetches or re-numbers. With no active predicate it is the
/// identity.
#[derive(Debug, Default, Clone)]
pub struct MutationFilter {
    /// Exact sequence-number match. Non-numeric input leaves the predicate
    /// inert rather than erroring.
    pub sequence: Option<String>,
    /// Case-insensitive substring over description plus joined bank lines.
    pub search: Option<String>,
    pub kind: Option<MutationKind>,
    pub bank_id: Option<Uuid>,
    /// Inclusive click-time bounds, derived from the same UTC+7 rule the
    /// build window uses.
    pub window: Option<ClickWindow>,
}

impl MutationFilter {
    pub fn is_identity(&self) -> bool {
        self.sequence.is_none()
            && self.search.is_none()
            && self.kind.is_none()
            && self.bank_id.is_none()
            && self.window.is_none()
    }

    pub fn apply(&self, rows: &[MutationRow]) -> Vec<MutationRow> {
        if self.is_identity() {
            return rows.to_vec();
        }
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    fn matches(&self, row: &MutationRow) -> bool {
        if let Some(sequence) = &self.sequence {
            if let Ok(wanted) = sequence.trim().parse::<i64>() {
                if row.display_sequence != wanted {
                    return false;
                }
            }
        }

        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !row.search_haystack().contains(&needle) {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if row.kind != kind {
                return false;
            }
        }

        if let Some(bank_id) = self.bank_id {
            if row.bank_id != bank_id {
                return false;
            }
        }

        if let Some(window) = self.window {
            if !window.contains(row.click_time) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;

    fn sample(sequence: i64, click: &str, description: &str) -> MutationRow {
        MutationRow {
            display_sequence: sequence,
            click_time: click.parse::<DateTime<Utc>>().unwrap(),
            chosen_time_top: None,
            chosen_time_bottom: None,
            kind: MutationKind::Deposit,
            bank_id: Uuid::nil(),
            bank_lines: vec!["BCA".into(), "Main Ops".into(), "1234567890".into()],
            description: description.to_string(),
            amount: Decimal::new(100, 0),
            creator_id: None,
            creator_name: None,
        }
    }

    #[test]
    fn identity_filter_returns_input_unchanged() {
        let rows = vec![
            sample(2, "2024-02-01T10:00:00Z", "b"),
            sample(1, "2024-02-01T09:00:00Z", "a"),
        ];
        let filtered = MutationFilter::default().apply(&rows);
        assert_eq!(filtered, rows);
    }

    #[test]
    fn non_numeric_sequence_is_a_no_op() {
        let rows = vec![sample(1, "2024-02-01T09:00:00Z", "a")];
        let filter = MutationFilter {
            sequence: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows), rows);
    }

    #[test]
    fn sequence_match_is_exact() {
        let rows = vec![
            sample(2, "2024-02-01T10:00:00Z", "b"),
            sample(1, "2024-02-01T09:00:00Z", "a"),
        ];
        let filter = MutationFilter {
            sequence: Some(" 1 ".into()),
            ..Default::default()
        };
        let filtered = filter.apply(&rows);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].display_sequence, 1);
    }

    #[test]
    fn search_spans_description_and_bank_lines() {
        let rows = vec![sample(1, "2024-02-01T09:00:00Z", "Salary Payment")];
        for needle in ["salary", "PAYMENT", "bca", "main ops", "34567"] {
            let filter = MutationFilter {
                search: Some(needle.into()),
                ..Default::default()
            };
            assert_eq!(filter.apply(&rows).len(), 1, "needle {needle:?}");
        }
        let filter = MutationFilter {
            search: Some("refund".into()),
            ..Default::default()
        };
        assert!(filter.apply(&rows).is_empty());
    }

    #[test]
    fn predicates_compose_by_and() {
        let rows = vec![
            sample(2, "2024-02-01T10:00:00Z", "match"),
            sample(1, "2024-02-01T09:00:00Z", "match"),
        ];
        let filter = MutationFilter {
            sequence: Some("2".into()),
            search: Some("match".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows).len(), 1);

        let filter = MutationFilter {
            sequence: Some("2".into()),
            search: Some("other".into()),
            ..Default::default()
        };
        assert!(filter.apply(&rows).is_empty());
    }
}
