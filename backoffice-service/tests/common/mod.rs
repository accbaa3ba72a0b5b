//! Common test utilities for backoffice-service integration tests.

use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use backoffice_core::error::AppError;
use backoffice_service::models::{
    AdjustmentRecord, Bank, DepositRecord, ExpenseRecord, PendingDepositRecord, Profile,
    TransferRecord, WithdrawalRecord,
};
use backoffice_service::mutations::{ClickWindow, MutationSource};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,backoffice_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn at(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid test instant")
}

pub fn dec(v: i64) -> Decimal {
    Decimal::new(v, 0)
}

/// In-memory store standing in for the external database. Tenant scoping is
/// the store's concern, so the tenant argument is ignored here; window
/// filtering mirrors the per-category click-time columns.
#[derive(Default)]
pub struct MemorySource {
    pub deposits: Vec<DepositRecord>,
    pub withdrawals: Vec<WithdrawalRecord>,
    pub pending_deposits: Vec<PendingDepositRecord>,
    pub adjustments: Vec<AdjustmentRecord>,
    pub expenses: Vec<ExpenseRecord>,
    pub transfers: Vec<TransferRecord>,
    pub banks: Vec<Bank>,
    pub profiles: Vec<Profile>,
    /// Category/lookup names whose fetch should fail.
    pub failing: Vec<&'static str>,
    /// Id sets passed to `resolve_profiles`, for asserting batching.
    pub profile_calls: Mutex<Vec<Vec<Uuid>>>,
}

impl MemorySource {
    fn fail_if(&self, what: &'static str) -> Result<(), AppError> {
        if self.failing.contains(&what) {
            return Err(AppError::FetchError(anyhow::anyhow!(
                "simulated {} outage",
                what
            )));
        }
        Ok(())
    }
}

fn within(window: Option<ClickWindow>, instant: DateTime<Utc>) -> bool {
    window.map(|w| w.contains(instant)).unwrap_or(true)
}

#[async_trait]
impl MutationSource for MemorySource {
    async fn fetch_deposits(
        &self,
        _tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<DepositRecord>, AppError> {
        self.fail_if("deposits")?;
        Ok(self
            .deposits
            .iter()
            .filter(|r| within(window, r.click_time()))
            .cloned()
            .collect())
    }

    async fn fetch_withdrawals(
        &self,
        _tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<WithdrawalRecord>, AppError> {
        self.fail_if("withdrawals")?;
        Ok(self
            .withdrawals
            .iter()
            .filter(|r| within(window, r.click_time()))
            .cloned()
            .collect())
    }

    async fn fetch_pending_deposits(
        &self,
        _tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<PendingDepositRecord>, AppError> {
        self.fail_if("pending_deposits")?;
        Ok(self
            .pending_deposits
            .iter()
            .filter(|r| within(window, r.created_utc))
            .cloned()
            .collect())
    }

    async fn fetch_adjustments(
        &self,
        _tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<AdjustmentRecord>, AppError> {
        self.fail_if("adjustments")?;
        Ok(self
            .adjustments
            .iter()
            .filter(|r| within(window, r.created_utc))
            .cloned()
            .collect())
    }

    async fn fetch_expenses(
        &self,
        _tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<ExpenseRecord>, AppError> {
        self.fail_if("expenses")?;
        Ok(self
            .expenses
            .iter()
            .filter(|r| within(window, r.created_utc))
            .cloned()
            .collect())
    }

    async fn fetch_transfers(
        &self,
        _tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<TransferRecord>, AppError> {
        self.fail_if("transfers")?;
        Ok(self
            .transfers
            .iter()
            .filter(|r| within(window, r.created_utc))
            .cloned()
            .collect())
    }

    async fn list_banks(&self, _tenant_id: Uuid) -> Result<Vec<Bank>, AppError> {
        self.fail_if("banks")?;
        Ok(self.banks.clone())
    }

    async fn resolve_profiles(&self, ids: &[Uuid]) -> Result<Vec<Profile>, AppError> {
        self.fail_if("profiles")?;
        self.profile_calls
            .lock()
            .expect("profile_calls lock")
            .push(ids.to_vec());
        Ok(self
            .profiles
            .iter()
            .filter(|p| ids.contains(&p.profile_id))
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Record builders
// ---------------------------------------------------------------------------

pub fn deposit(bank_id: Uuid, click: &str, amount: i64) -> DepositRecord {
    DepositRecord {
        deposit_id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        bank_id,
        net_amount: dec(amount),
        description: Some("deposit".to_string()),
        opened_utc: Some(at(click)),
        finalized_utc: Some(at(click)),
        created_by: None,
        created_utc: at("2024-01-01T00:00:00Z"),
    }
}

pub fn withdrawal(bank_id: Uuid, click: &str, amount: i64) -> WithdrawalRecord {
    WithdrawalRecord {
        withdrawal_id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        bank_id,
        net_amount: dec(amount),
        description: Some("withdrawal".to_string()),
        opened_utc: Some(at(click)),
        finalized_utc: Some(at(click)),
        created_by: None,
        created_utc: at("2024-01-01T00:00:00Z"),
    }
}

pub fn pending_deposit(bank_id: Uuid, created: &str, amount: i64) -> PendingDepositRecord {
    PendingDepositRecord {
        pending_id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        bank_id,
        net_amount: dec(amount),
        description: None,
        finalized_utc: None,
        created_by: None,
        created_utc: at(created),
    }
}

pub fn adjustment(bank_id: Uuid, created: &str, delta: i64) -> AdjustmentRecord {
    AdjustmentRecord {
        adjustment_id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        bank_id,
        delta: dec(delta),
        description: Some("correction".to_string()),
        finalized_utc: None,
        created_by: None,
        created_utc: at(created),
    }
}

pub fn expense(bank_id: Uuid, created: &str, amount: i64) -> ExpenseRecord {
    ExpenseRecord {
        expense_id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        bank_id,
        amount: dec(amount),
        description: Some("bank fee".to_string()),
        finalized_utc: None,
        created_by: None,
        created_utc: at(created),
    }
}

pub fn transfer(from_bank_id: Uuid, to_bank_id: Uuid, created: &str, amount: i64) -> TransferRecord {
    TransferRecord {
        transfer_id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        from_bank_id,
        to_bank_id,
        gross_amount: dec(amount),
        description: Some("rebalance".to_string()),
        from_utc: Some(at(created)),
        to_utc: Some(at(created)),
        created_by: None,
        created_utc: at(created),
    }
}

pub fn bank(code: &str) -> Bank {
    Bank {
        bank_id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        code: code.to_string(),
        account_name: format!("{} Ops", code),
        account_number: "1234567890".to_string(),
        is_active: true,
        created_utc: at("2023-06-01T00:00:00Z"),
    }
}
