//! Lead (customer) endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use backoffice_core::error::AppError;
use validator::Validate;

use crate::dtos::{CreateLeadRequest, LeadListResponse, LeadsQuery};
use crate::middleware::TenantContext;
use crate::models::Lead;
use crate::startup::AppState;

/// List leads with keyset pagination.
pub async fn list_leads(
    State(state): State<AppState>,
    tenant: TenantContext,
    Query(query): Query<LeadsQuery>,
) -> Result<Json<LeadListResponse>, AppError> {
    let page_size = query.page_size.unwrap_or(50).clamp(1, 100);

    let leads = state
        .db
        .list_leads(tenant.tenant_id, page_size, query.page_token)
        .await?;

    let next_page_token = if leads.len() == page_size as usize {
        leads.last().map(|l| l.lead_id)
    } else {
        None
    };

    Ok(Json(LeadListResponse {
        leads,
        next_page_token,
    }))
}

/// Register a new lead for the tenant.
pub async fn create_lead(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(payload): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<Lead>), AppError> {
    payload.validate()?;

    tracing::info!(
        tenant_id = %tenant.tenant_id,
        "Creating lead"
    );

    let lead = state
        .db
        .create_lead(
            tenant.tenant_id,
            &payload.full_name,
            &payload.phone,
            payload.account_name.as_deref(),
            payload.account_number.as_deref(),
            payload.bank_name.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(lead)))
}
