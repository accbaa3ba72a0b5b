//! The unified mutation view endpoint.

use axum::{extract::Query, extract::State, Json};
use backoffice_core::error::AppError;
use uuid::Uuid;

use crate::dtos::{MutationListResponse, MutationQuery};
use crate::handlers::parse_date_range;
use crate::middleware::TenantContext;
use crate::models::MutationKind;
use crate::mutations::{build_mutations, MutationFilter};
use crate::services::metrics::{MUTATION_BUILDS_TOTAL, MUTATION_ROWS_BUILT};
use crate::services::record_error;
use crate::startup::AppState;

/// Build the unified ledger for the requested window, then apply the
/// post-hoc filter. Sequence numbers always span the unfiltered window.
pub async fn list_mutations(
    State(state): State<AppState>,
    tenant: TenantContext,
    Query(query): Query<MutationQuery>,
) -> Result<Json<MutationListResponse>, AppError> {
    tracing::info!(
        tenant_id = %tenant.tenant_id,
        from_date = ?query.from_date,
        to_date = ?query.to_date,
        "Building unified mutation view"
    );

    let range = parse_date_range(query.from_date.as_deref(), query.to_date.as_deref());

    let rows = match build_mutations(
        state.db.as_ref(),
        tenant.tenant_id,
        range,
        state.config.fetch_timeout(),
    )
    .await
    {
        Ok(rows) => {
            MUTATION_BUILDS_TOTAL.with_label_values(&["ok"]).inc();
            rows
        }
        Err(e) => {
            MUTATION_BUILDS_TOTAL.with_label_values(&["error"]).inc();
            record_error("fetch_error");
            return Err(e);
        }
    };
    MUTATION_ROWS_BUILT.observe(rows.len() as f64);

    let filter = MutationFilter {
        sequence: query.sequence,
        search: query.search,
        kind: query.kind.as_deref().and_then(MutationKind::parse),
        bank_id: query
            .bank_id
            .as_deref()
            .and_then(|s| Uuid::parse_str(s).ok()),
        window: range.and_then(|r| r.window().ok()),
    };

    let total = rows.len();
    let filtered = filter.apply(&rows);

    Ok(Json(MutationListResponse {
        rows: filtered.into_iter().map(Into::into).collect(),
        total,
    }))
}
