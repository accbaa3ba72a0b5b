//! Tenant context middleware for multi-tenancy support.
//!
//! Extracts tenant information from request headers. These headers are set by
//! the authenticating front end after validating the session; row-level
//! security in the database is the second line of defense.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use backoffice_core::error::AppError;
use uuid::Uuid;

/// Tenant context extracted from request headers.
#[derive(Debug, Clone)]
pub struct TenantContext {
    /// Tenant whose records every query is scoped to.
    pub tenant_id: Uuid,
    /// Back-office user making the request (optional for read endpoints).
    pub user_id: Option<Uuid>,
}

#[async_trait]
impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let tenant_id = parts
            .headers
            .get("X-Tenant-ID")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized(anyhow::anyhow!(
                    "Missing X-Tenant-ID header (required from front end)"
                ))
            })?;

        let tenant_id = Uuid::parse_str(tenant_id).map_err(|_| {
            AppError::Unauthorized(anyhow::anyhow!("Invalid X-Tenant-ID header"))
        })?;

        let user_id = parts
            .headers
            .get("X-User-ID")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok());

        // Add to tracing span for observability
        let span = tracing::Span::current();
        span.record("tenant_id", tenant_id.to_string().as_str());
        if let Some(uid) = user_id {
            span.record("user_id", uid.to_string().as_str());
        }

        Ok(TenantContext { tenant_id, user_id })
    }
}
