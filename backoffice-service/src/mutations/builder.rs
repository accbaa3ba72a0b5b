//! Construction of the unified mutation ledger.
//!
//! Six category fetches and the bank listing run concurrently; normalization,
//! ordering, and numbering are pure over the fetched batches; the creator
//! identity lookup runs last because it needs the union of creator ids.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use backoffice_core::error::AppError;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::models::{
    AdjustmentRecord, Bank, DepositRecord, ExpenseRecord, MutationKind, MutationRow,
    PendingDepositRecord, TransferRecord, WithdrawalRecord,
};
use crate::mutations::range::DateRange;
use crate::mutations::source::MutationSource;

/// Bank labels resolved for display. Unknown banks degrade to a short
/// `#<id>` placeholder line instead of failing the build.
#[derive(Debug, Default, Clone)]
pub struct BankDirectory {
    labels: HashMap<Uuid, Vec<String>>,
}

impl BankDirectory {
    pub fn new(banks: Vec<Bank>) -> Self {
        let labels = banks
            .into_iter()
            .map(|bank| {
                (
                    bank.bank_id,
                    vec![bank.code, bank.account_name, bank.account_number],
                )
            })
            .collect();
        Self { labels }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self, bank_id: Uuid) -> Vec<String> {
        self.labels
            .get(&bank_id)
            .cloned()
            .unwrap_or_else(|| vec![format!("#{}", short_id(bank_id))])
    }
}

fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// First 8 characters of the identifier, shown when no identity record
/// matches a creator id.
pub fn fallback_name(id: Uuid) -> String {
    short_id(id)
}

/// The six category batches of one load, in normalization order.
#[derive(Debug, Default)]
pub struct SourceBatches {
    pub deposits: Vec<DepositRecord>,
    pub withdrawals: Vec<WithdrawalRecord>,
    pub pending_deposits: Vec<PendingDepositRecord>,
    pub adjustments: Vec<AdjustmentRecord>,
    pub expenses: Vec<ExpenseRecord>,
    pub transfers: Vec<TransferRecord>,
}

fn row(
    kind: MutationKind,
    click_time: chrono::DateTime<chrono::Utc>,
    chosen_time_top: Option<chrono::DateTime<chrono::Utc>>,
    chosen_time_bottom: Option<chrono::DateTime<chrono::Utc>>,
    bank_id: Uuid,
    description: Option<String>,
    amount: rust_decimal::Decimal,
    creator_id: Option<Uuid>,
    banks: &BankDirectory,
) -> MutationRow {
    MutationRow {
        display_sequence: 0,
        click_time,
        chosen_time_top,
        chosen_time_bottom,
        kind,
        bank_id,
        bank_lines: banks.lines(bank_id),
        description: description.unwrap_or_default(),
        amount,
        creator_id,
        creator_name: None,
    }
}

fn normalize_deposits(records: Vec<DepositRecord>, banks: &BankDirectory) -> Vec<MutationRow> {
    records
        .into_iter()
        .map(|r| {
            row(
                MutationKind::Deposit,
                r.click_time(),
                r.finalized_utc,
                None,
                r.bank_id,
                r.description,
                r.net_amount,
                r.created_by,
                banks,
            )
        })
        .collect()
}

fn normalize_withdrawals(records: Vec<WithdrawalRecord>, banks: &BankDirectory) -> Vec<MutationRow> {
    records
        .into_iter()
        .map(|r| {
            row(
                MutationKind::Withdrawal,
                r.click_time(),
                r.finalized_utc,
                None,
                r.bank_id,
                r.description,
                -r.net_amount.abs(),
                r.created_by,
                banks,
            )
        })
        .collect()
}

fn normalize_pending_deposits(
    records: Vec<PendingDepositRecord>,
    banks: &BankDirectory,
) -> Vec<MutationRow> {
    records
        .into_iter()
        .map(|r| {
            row(
                MutationKind::PendingDeposit,
                r.created_utc,
                r.finalized_utc,
                None,
                r.bank_id,
                r.description,
                r.net_amount,
                r.created_by,
                banks,
            )
        })
        .collect()
}

fn normalize_adjustments(records: Vec<AdjustmentRecord>, banks: &BankDirectory) -> Vec<MutationRow> {
    records
        .into_iter()
        .map(|r| {
            // Delta already carries its sign.
            row(
                MutationKind::Adjustment,
                r.created_utc,
                r.finalized_utc,
                None,
                r.bank_id,
                r.description,
                r.delta,
                r.created_by,
                banks,
            )
        })
        .collect()
}

fn normalize_expenses(records: Vec<ExpenseRecord>, banks: &BankDirectory) -> Vec<MutationRow> {
    records
        .into_iter()
        .map(|r| {
            // Expenses are stored negative and carried through unchanged.
            row(
                MutationKind::Expense,
                r.created_utc,
                r.finalized_utc,
                None,
                r.bank_id,
                r.description,
                r.amount,
                r.created_by,
                banks,
            )
        })
        .collect()
}

fn normalize_transfers(records: Vec<TransferRecord>, banks: &BankDirectory) -> Vec<MutationRow> {
    let mut rows = Vec::with_capacity(records.len() * 2);
    for r in records {
        // Debit side first, credit side second; both share the transfer's
        // click time, chosen times, and description.
        rows.push(row(
            MutationKind::Transfer,
            r.created_utc,
            r.from_utc,
            r.to_utc,
            r.from_bank_id,
            r.description.clone(),
            -r.gross_amount,
            r.created_by,
            banks,
        ));
        rows.push(row(
            MutationKind::Transfer,
            r.created_utc,
            r.from_utc,
            r.to_utc,
            r.to_bank_id,
            r.description,
            r.gross_amount,
            r.created_by,
            banks,
        ));
    }
    rows
}

/// Normalize, order, and number one load of the ledger. Pure.
///
/// Rows are concatenated category by category, stably sorted ascending by the
/// canonical string form of the click instant (ties keep concatenation
/// order), numbered 1..N in that order, then reversed so the display order is
/// descending sequence. Tie order in the display is therefore the exact
/// reverse of the ascending pass.
pub fn assemble_rows(batches: SourceBatches, banks: &BankDirectory) -> Vec<MutationRow> {
    let SourceBatches {
        deposits,
        withdrawals,
        pending_deposits,
        adjustments,
        expenses,
        transfers,
    } = batches;

    let mut rows = Vec::new();
    rows.extend(normalize_deposits(deposits, banks));
    rows.extend(normalize_withdrawals(withdrawals, banks));
    rows.extend(normalize_pending_deposits(pending_deposits, banks));
    rows.extend(normalize_adjustments(adjustments, banks));
    rows.extend(normalize_expenses(expenses, banks));
    rows.extend(normalize_transfers(transfers, banks));

    rows.sort_by_cached_key(|r| r.click_sort_key());
    for (index, row) in rows.iter_mut().enumerate() {
        row.display_sequence = index as i64 + 1;
    }
    rows.reverse();
    rows
}

/// Distinct non-null creator ids in row order, for the batched identity
/// lookup.
pub fn distinct_creators(rows: &[MutationRow]) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::new();
    rows.iter()
        .filter_map(|r| r.creator_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

async fn bounded<T>(
    limit: Duration,
    what: &'static str,
    fut: impl Future<Output = Result<T, AppError>>,
) -> Result<T, AppError> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(AppError::FetchError(anyhow::anyhow!(
            "{} fetch timed out after {}s",
            what,
            limit.as_secs()
        ))),
    }
}

/// Build the unified mutation ledger for a tenant and optional date window.
///
/// Any category fetch failure fails the whole build; an under-counted ledger
/// is worse than a loud error. Bank-label and identity failures degrade to
/// placeholders. Read-only and idempotent against an unchanged store.
#[instrument(skip(source), fields(tenant_id = %tenant_id))]
pub async fn build_mutations<S>(
    source: &S,
    tenant_id: Uuid,
    range: Option<DateRange>,
    fetch_timeout: Duration,
) -> Result<Vec<MutationRow>, AppError>
where
    S: MutationSource + ?Sized,
{
    let window = range.map(|r| r.window()).transpose()?;

    let (deposits, withdrawals, pending_deposits, adjustments, expenses, transfers, banks) = tokio::join!(
        bounded(
            fetch_timeout,
            "deposits",
            source.fetch_deposits(tenant_id, window)
        ),
        bounded(
            fetch_timeout,
            "withdrawals",
            source.fetch_withdrawals(tenant_id, window)
        ),
        bounded(
            fetch_timeout,
            "pending_deposits",
            source.fetch_pending_deposits(tenant_id, window)
        ),
        bounded(
            fetch_timeout,
            "adjustments",
            source.fetch_adjustments(tenant_id, window)
        ),
        bounded(
            fetch_timeout,
            "expenses",
            source.fetch_expenses(tenant_id, window)
        ),
        bounded(
            fetch_timeout,
            "transfers",
            source.fetch_transfers(tenant_id, window)
        ),
        bounded(fetch_timeout, "banks", source.list_banks(tenant_id)),
    );

    let batches = SourceBatches {
        deposits: deposits?,
        withdrawals: withdrawals?,
        pending_deposits: pending_deposits?,
        adjustments: adjustments?,
        expenses: expenses?,
        transfers: transfers?,
    };

    let directory = match banks {
        Ok(list) => BankDirectory::new(list),
        Err(e) => {
            warn!(error = %e, "Bank lookup failed, using placeholder labels");
            BankDirectory::empty()
        }
    };

    let mut rows = assemble_rows(batches, &directory);
    enrich_creators(source, &mut rows, fetch_timeout).await;

    debug!(row_count = rows.len(), "Unified mutation ledger built");
    Ok(rows)
}

/// Resolve creator display names through one batched lookup. A missing
/// identity record, or a failed lookup, falls back to a truncated id.
async fn enrich_creators<S>(source: &S, rows: &mut [MutationRow], fetch_timeout: Duration)
where
    S: MutationSource + ?Sized,
{
    let ids = distinct_creators(rows);
    if ids.is_empty() {
        return;
    }

    let names: HashMap<Uuid, String> =
        match bounded(fetch_timeout, "profiles", source.resolve_profiles(&ids)).await {
            Ok(profiles) => profiles
                .into_iter()
                .map(|p| (p.profile_id, p.display_name))
                .collect(),
            Err(e) => {
                warn!(error = %e, "Identity lookup failed, using truncated ids");
                HashMap::new()
            }
        };

    for row in rows.iter_mut() {
        if let Some(id) = row.creator_id {
            row.creator_name = Some(names.get(&id).cloned().unwrap_or_else(|| fallback_name(id)));
        }
    }
}
