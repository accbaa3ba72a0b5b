//! Read access the unified view builder depends on.

use async_trait::async_trait;
use backoffice_core::error::AppError;
use uuid::Uuid;

use crate::models::{
    AdjustmentRecord, Bank, DepositRecord, ExpenseRecord, PendingDepositRecord, Profile,
    TransferRecord, WithdrawalRecord,
};
use crate::mutations::range::ClickWindow;

/// Category and lookup reads needed to build the unified mutation ledger.
///
/// `Database` implements this against PostgreSQL; tests substitute an
/// in-memory store. Every fetch is scoped to the caller's tenant and, when a
/// window is given, restricted to records whose category click-time column
/// falls inside it (bounds inclusive).
#[async_trait]
pub trait MutationSource: Send + Sync {
    async fn fetch_deposits(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<DepositRecord>, AppError>;

    async fn fetch_withdrawals(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<WithdrawalRecord>, AppError>;

    async fn fetch_pending_deposits(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<PendingDepositRecord>, AppError>;

    async fn fetch_adjustments(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<AdjustmentRecord>, AppError>;

    async fn fetch_expenses(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<ExpenseRecord>, AppError>;

    async fn fetch_transfers(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<TransferRecord>, AppError>;

    /// All banks visible to the tenant, for label resolution.
    async fn list_banks(&self, tenant_id: Uuid) -> Result<Vec<Bank>, AppError>;

    /// Batched identity lookup for creator display names.
    async fn resolve_profiles(&self, ids: &[Uuid]) -> Result<Vec<Profile>, AppError>;
}
