//! Withdrawal endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use backoffice_core::error::AppError;
use uuid::Uuid;

use crate::middleware::TenantContext;
use crate::startup::AppState;

/// Remove a withdrawal through `delete_withdrawal`; the procedure restores
/// the bank balance as part of the same transaction.
pub async fn delete_withdrawal(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(withdrawal_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    tracing::info!(
        tenant_id = %tenant.tenant_id,
        withdrawal_id = %withdrawal_id,
        "Deleting withdrawal"
    );

    state
        .db
        .delete_withdrawal(tenant.tenant_id, withdrawal_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
