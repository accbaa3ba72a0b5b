//! Deposit entry endpoints. Balance postings happen inside the stored
//! procedures; these handlers only validate and forward.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use backoffice_core::error::AppError;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::dtos::{AssignPendingDepositRequest, CreateDepositRequest, DepositCreatedResponse};
use crate::middleware::TenantContext;
use crate::startup::AppState;

/// Record a deposit through `perform_deposit`.
pub async fn create_deposit(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(payload): Json<CreateDepositRequest>,
) -> Result<(StatusCode, Json<DepositCreatedResponse>), AppError> {
    payload.validate()?;

    if payload.net_amount <= Decimal::ZERO {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Deposit amount must be positive"
        )));
    }

    tracing::info!(
        tenant_id = %tenant.tenant_id,
        bank_id = %payload.bank_id,
        amount = %payload.net_amount,
        "Recording deposit"
    );

    let deposit_id = state
        .db
        .perform_deposit(
            tenant.tenant_id,
            payload.bank_id,
            payload.lead_id,
            payload.net_amount,
            payload.description.as_deref(),
            payload.opened_at,
            payload.finalized_at,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DepositCreatedResponse { deposit_id }),
    ))
}

/// Assign a pending deposit to a lead, turning it into a finalized deposit.
pub async fn assign_pending_deposit(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(pending_id): Path<Uuid>,
    Json(payload): Json<AssignPendingDepositRequest>,
) -> Result<Json<DepositCreatedResponse>, AppError> {
    tracing::info!(
        tenant_id = %tenant.tenant_id,
        pending_id = %pending_id,
        lead_id = %payload.lead_id,
        "Assigning pending deposit"
    );

    let deposit_id = state
        .db
        .assign_pending_deposit(tenant.tenant_id, pending_id, payload.lead_id)
        .await?;

    Ok(Json(DepositCreatedResponse { deposit_id }))
}

/// Remove a pending deposit.
pub async fn delete_pending_deposit(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(pending_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    tracing::info!(
        tenant_id = %tenant.tenant_id,
        pending_id = %pending_id,
        "Deleting pending deposit"
    );

    state
        .db
        .delete_pending_deposit(tenant.tenant_id, pending_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
