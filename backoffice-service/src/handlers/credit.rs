//! Tenant credit ledger endpoints. The ledger itself is maintained by stored
//! procedures; these handlers read its projections and forward postings.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use backoffice_core::error::AppError;
use rust_decimal::Decimal;
use validator::Validate;

use crate::dtos::{CreditAmountRequest, CreditQuery, CreditReportResponse};
use crate::handlers::parse_date_range;
use crate::middleware::TenantContext;
use crate::models::CreditMutation;
use crate::startup::AppState;

/// Credit balance movements for an optional period.
pub async fn list_credit_mutations(
    State(state): State<AppState>,
    tenant: TenantContext,
    Query(query): Query<CreditQuery>,
) -> Result<Json<Vec<CreditMutation>>, AppError> {
    let window = parse_date_range(query.from_date.as_deref(), query.to_date.as_deref())
        .and_then(|r| r.window().ok());

    let mutations = state
        .db
        .get_credit_mutations(tenant.tenant_id, window)
        .await?;

    Ok(Json(mutations))
}

/// Aggregated credit report plus the manual adjustment total.
pub async fn credit_report(
    State(state): State<AppState>,
    tenant: TenantContext,
    Query(query): Query<CreditQuery>,
) -> Result<Json<CreditReportResponse>, AppError> {
    let window = parse_date_range(query.from_date.as_deref(), query.to_date.as_deref())
        .and_then(|r| r.window().ok());

    let report = state.db.get_credit_report(tenant.tenant_id, window).await?;
    let adjustment_total = state
        .db
        .get_credit_adjustment_total(tenant.tenant_id, window)
        .await?;

    Ok(Json(CreditReportResponse {
        report,
        adjustment_total,
    }))
}

/// Post a manual credit adjustment. The amount carries its own sign and must
/// be non-zero.
pub async fn create_credit_adjustment(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(payload): Json<CreditAmountRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    if payload.amount == Decimal::ZERO {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Adjustment amount must be non-zero"
        )));
    }

    tracing::info!(
        tenant_id = %tenant.tenant_id,
        amount = %payload.amount,
        "Posting credit adjustment"
    );

    state
        .db
        .perform_tenant_credit_adjustment(tenant.tenant_id, payload.amount, payload.note.as_deref())
        .await?;

    Ok(StatusCode::CREATED)
}

/// Top up the tenant's credit balance.
pub async fn create_credit_topup(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(payload): Json<CreditAmountRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    if payload.amount <= Decimal::ZERO {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Topup amount must be positive"
        )));
    }

    tracing::info!(
        tenant_id = %tenant.tenant_id,
        amount = %payload.amount,
        "Posting credit topup"
    );

    state
        .db
        .perform_tenant_credit_topup(tenant.tenant_id, payload.amount, payload.note.as_deref())
        .await?;

    Ok(StatusCode::CREATED)
}
