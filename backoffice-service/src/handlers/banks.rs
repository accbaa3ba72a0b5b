//! Bank listing endpoint.

use axum::{extract::State, Json};
use backoffice_core::error::AppError;

use crate::middleware::TenantContext;
use crate::models::Bank;
use crate::startup::AppState;

/// List the tenant's active banks.
pub async fn list_banks(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<Json<Vec<Bank>>, AppError> {
    let banks = state.db.list_banks(tenant.tenant_id).await?;
    Ok(Json(banks))
}
