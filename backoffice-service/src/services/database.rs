//! Database service for backoffice-service.
//!
//! The durable schema, row-level security, and all balance mutations live in
//! the external PostgreSQL database; this layer only issues reads and invokes
//! the stored procedures.

#![allow(clippy::too_many_arguments)]

use crate::models::{
    AdjustmentRecord, Bank, CreditMutation, CreditReport, DepositRecord, ExpenseRecord, Lead,
    MutationKind, PendingDepositRecord, Profile, TransferRecord, WithdrawalRecord,
};
use crate::mutations::range::ClickWindow;
use crate::mutations::source::MutationSource;
use crate::services::metrics::DB_QUERY_DURATION;
use async_trait::async_trait;
use backoffice_core::error::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

fn window_bounds(window: Option<ClickWindow>) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    match window {
        Some(w) => (Some(w.lower), Some(w.upper)),
        None => (None, None),
    }
}

/// Map a stored-procedure failure onto the error taxonomy. The procedures
/// signal duplicates via unique violations and invalid arguments via
/// `raise_exception` (SQLSTATE P0001).
fn procedure_error(name: &'static str, e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(anyhow::anyhow!("{} rejected a duplicate: {}", name, db_err.message()))
        }
        sqlx::Error::Database(ref db_err) if db_err.code().as_deref() == Some("P0001") => {
            AppError::BadRequest(anyhow::anyhow!("{}", db_err.message()))
        }
        sqlx::Error::RowNotFound => {
            AppError::NotFound(anyhow::anyhow!("{}: no matching record", name))
        }
        _ => AppError::DatabaseError(anyhow::anyhow!("{} failed: {}", name, e)),
    }
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "backoffice-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["health_check"])
            .start_timer();

        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;

        timer.observe_duration();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Mutation Category Fetches
    // -------------------------------------------------------------------------

    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn fetch_deposits(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<DepositRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["fetch_deposits"])
            .start_timer();

        let (lower, upper) = window_bounds(window);
        let query = format!(
            r#"
            SELECT deposit_id, tenant_id, bank_id, net_amount, description, opened_utc, finalized_utc, created_by, created_utc
            FROM deposits
            WHERE tenant_id = $1
              AND ($2::timestamptz IS NULL OR {col} >= $2)
              AND ($3::timestamptz IS NULL OR {col} <= $3)
            "#,
            col = MutationKind::Deposit.click_time_expr()
        );
        let records = sqlx::query_as::<_, DepositRecord>(&query)
            .bind(tenant_id)
            .bind(lower)
            .bind(upper)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to fetch deposits: {}", e)))?;

        timer.observe_duration();
        Ok(records)
    }

    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn fetch_withdrawals(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<WithdrawalRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["fetch_withdrawals"])
            .start_timer();

        let (lower, upper) = window_bounds(window);
        let query = format!(
            r#"
            SELECT withdrawal_id, tenant_id, bank_id, net_amount, description, opened_utc, finalized_utc, created_by, created_utc
            FROM withdrawals
            WHERE tenant_id = $1
              AND ($2::timestamptz IS NULL OR {col} >= $2)
              AND ($3::timestamptz IS NULL OR {col} <= $3)
            "#,
            col = MutationKind::Withdrawal.click_time_expr()
        );
        let records = sqlx::query_as::<_, WithdrawalRecord>(&query)
            .bind(tenant_id)
            .bind(lower)
            .bind(upper)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Failed to fetch withdrawals: {}", e))
            })?;

        timer.observe_duration();
        Ok(records)
    }

    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn fetch_pending_deposits(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<PendingDepositRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["fetch_pending_deposits"])
            .start_timer();

        let (lower, upper) = window_bounds(window);
        let query = format!(
            r#"
            SELECT pending_id, tenant_id, bank_id, net_amount, description, finalized_utc, created_by, created_utc
            FROM pending_deposits
            WHERE tenant_id = $1
              AND ($2::timestamptz IS NULL OR {col} >= $2)
              AND ($3::timestamptz IS NULL OR {col} <= $3)
            "#,
            col = MutationKind::PendingDeposit.click_time_expr()
        );
        let records = sqlx::query_as::<_, PendingDepositRecord>(&query)
            .bind(tenant_id)
            .bind(lower)
            .bind(upper)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Failed to fetch pending deposits: {}", e))
            })?;

        timer.observe_duration();
        Ok(records)
    }

    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn fetch_adjustments(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<AdjustmentRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["fetch_adjustments"])
            .start_timer();

        let (lower, upper) = window_bounds(window);
        let query = format!(
            r#"
            SELECT adjustment_id, tenant_id, bank_id, delta, description, finalized_utc, created_by, created_utc
            FROM bank_adjustments
            WHERE tenant_id = $1
              AND ($2::timestamptz IS NULL OR {col} >= $2)
              AND ($3::timestamptz IS NULL OR {col} <= $3)
            "#,
            col = MutationKind::Adjustment.click_time_expr()
        );
        let records = sqlx::query_as::<_, AdjustmentRecord>(&query)
            .bind(tenant_id)
            .bind(lower)
            .bind(upper)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Failed to fetch adjustments: {}", e))
            })?;

        timer.observe_duration();
        Ok(records)
    }

    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn fetch_expenses(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<ExpenseRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["fetch_expenses"])
            .start_timer();

        let (lower, upper) = window_bounds(window);
        let query = format!(
            r#"
            SELECT expense_id, tenant_id, bank_id, amount, description, finalized_utc, created_by, created_utc
            FROM bank_expenses
            WHERE tenant_id = $1
              AND ($2::timestamptz IS NULL OR {col} >= $2)
              AND ($3::timestamptz IS NULL OR {col} <= $3)
            "#,
            col = MutationKind::Expense.click_time_expr()
        );
        let records = sqlx::query_as::<_, ExpenseRecord>(&query)
            .bind(tenant_id)
            .bind(lower)
            .bind(upper)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to fetch expenses: {}", e)))?;

        timer.observe_duration();
        Ok(records)
    }

    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn fetch_transfers(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<TransferRecord>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["fetch_transfers"])
            .start_timer();

        let (lower, upper) = window_bounds(window);
        let query = format!(
            r#"
            SELECT transfer_id, tenant_id, from_bank_id, to_bank_id, gross_amount, description, from_utc, to_utc, created_by, created_utc
            FROM bank_transfers
            WHERE tenant_id = $1
              AND ($2::timestamptz IS NULL OR {col} >= $2)
              AND ($3::timestamptz IS NULL OR {col} <= $3)
            "#,
            col = MutationKind::Transfer.click_time_expr()
        );
        let records = sqlx::query_as::<_, TransferRecord>(&query)
            .bind(tenant_id)
            .bind(lower)
            .bind(upper)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::DatabaseError(anyhow::anyhow!("Failed to fetch transfers: {}", e))
            })?;

        timer.observe_duration();
        Ok(records)
    }

    // -------------------------------------------------------------------------
    // Lookup Operations
    // -------------------------------------------------------------------------

    /// List active banks for a tenant.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn list_banks(&self, tenant_id: Uuid) -> Result<Vec<Bank>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["list_banks"])
            .start_timer();

        let banks = sqlx::query_as::<_, Bank>(
            r#"
            SELECT bank_id, tenant_id, code, account_name, account_number, is_active, created_utc
            FROM banks
            WHERE tenant_id = $1 AND is_active
            ORDER BY code
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list banks: {}", e)))?;

        timer.observe_duration();
        Ok(banks)
    }

    /// Resolve display names for a set of creator ids in one query.
    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    pub async fn resolve_profiles(&self, ids: &[Uuid]) -> Result<Vec<Profile>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["resolve_profiles"])
            .start_timer();

        let profiles = sqlx::query_as::<_, Profile>(
            r#"
            SELECT profile_id, display_name
            FROM profiles
            WHERE profile_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to resolve profiles: {}", e)))?;

        timer.observe_duration();
        Ok(profiles)
    }

    // -------------------------------------------------------------------------
    // Lead Operations
    // -------------------------------------------------------------------------

    /// List leads for a tenant with keyset pagination.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn list_leads(
        &self,
        tenant_id: Uuid,
        page_size: i32,
        page_token: Option<Uuid>,
    ) -> Result<Vec<Lead>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["list_leads"])
            .start_timer();

        let limit = page_size.min(100).max(1) as i64;

        let leads = if let Some(cursor) = page_token {
            sqlx::query_as::<_, Lead>(
                r#"
                SELECT lead_id, tenant_id, full_name, phone, account_name, account_number, bank_name, created_utc
                FROM leads
                WHERE tenant_id = $1 AND lead_id > $2
                ORDER BY lead_id
                LIMIT $3
                "#,
            )
            .bind(tenant_id)
            .bind(cursor)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, Lead>(
                r#"
                SELECT lead_id, tenant_id, full_name, phone, account_name, account_number, bank_name, created_utc
                FROM leads
                WHERE tenant_id = $1
                ORDER BY lead_id
                LIMIT $2
                "#,
            )
            .bind(tenant_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list leads: {}", e)))?;

        timer.observe_duration();
        Ok(leads)
    }

    /// Create a new lead. Phone numbers are unique per tenant.
    #[instrument(skip(self, full_name, phone), fields(tenant_id = %tenant_id))]
    pub async fn create_lead(
        &self,
        tenant_id: Uuid,
        full_name: &str,
        phone: &str,
        account_name: Option<&str>,
        account_number: Option<&str>,
        bank_name: Option<&str>,
    ) -> Result<Lead, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["create_lead"])
            .start_timer();

        let lead_id = Uuid::new_v4();
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (lead_id, tenant_id, full_name, phone, account_name, account_number, bank_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING lead_id, tenant_id, full_name, phone, account_name, account_number, bank_name, created_utc
            "#,
        )
        .bind(lead_id)
        .bind(tenant_id)
        .bind(full_name)
        .bind(phone)
        .bind(account_name)
        .bind(account_number)
        .bind(bank_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(anyhow::anyhow!(
                    "Lead with phone '{}' already exists for tenant",
                    phone
                ))
            }
            _ => AppError::DatabaseError(anyhow::anyhow!("Failed to create lead: {}", e)),
        })?;

        timer.observe_duration();

        info!(lead_id = %lead.lead_id, "Lead created");
        Ok(lead)
    }

    // -------------------------------------------------------------------------
    // Stored Procedure Calls (postings happen inside the database)
    // -------------------------------------------------------------------------

    /// Record a deposit through `perform_deposit`. Returns the new deposit id.
    #[instrument(skip(self, description), fields(tenant_id = %tenant_id, bank_id = %bank_id))]
    pub async fn perform_deposit(
        &self,
        tenant_id: Uuid,
        bank_id: Uuid,
        lead_id: Option<Uuid>,
        net_amount: Decimal,
        description: Option<&str>,
        opened_utc: Option<DateTime<Utc>>,
        finalized_utc: Option<DateTime<Utc>>,
    ) -> Result<Uuid, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["perform_deposit"])
            .start_timer();

        let deposit_id: Uuid =
            sqlx::query_scalar("SELECT perform_deposit($1, $2, $3, $4, $5, $6, $7)")
                .bind(tenant_id)
                .bind(bank_id)
                .bind(lead_id)
                .bind(net_amount)
                .bind(description)
                .bind(opened_utc)
                .bind(finalized_utc)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| procedure_error("perform_deposit", e))?;

        timer.observe_duration();

        info!(deposit_id = %deposit_id, amount = %net_amount, "Deposit recorded");
        Ok(deposit_id)
    }

    /// Turn a pending deposit into a finalized one via `assign_pending_deposit`.
    /// Returns the id of the deposit it became.
    #[instrument(skip(self), fields(tenant_id = %tenant_id, pending_id = %pending_id))]
    pub async fn assign_pending_deposit(
        &self,
        tenant_id: Uuid,
        pending_id: Uuid,
        lead_id: Uuid,
    ) -> Result<Uuid, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["assign_pending_deposit"])
            .start_timer();

        let deposit_id: Uuid = sqlx::query_scalar("SELECT assign_pending_deposit($1, $2, $3)")
            .bind(tenant_id)
            .bind(pending_id)
            .bind(lead_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| procedure_error("assign_pending_deposit", e))?;

        timer.observe_duration();

        info!(deposit_id = %deposit_id, "Pending deposit assigned");
        Ok(deposit_id)
    }

    /// Remove a pending deposit via `delete_pending_deposit`.
    #[instrument(skip(self), fields(tenant_id = %tenant_id, pending_id = %pending_id))]
    pub async fn delete_pending_deposit(
        &self,
        tenant_id: Uuid,
        pending_id: Uuid,
    ) -> Result<(), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["delete_pending_deposit"])
            .start_timer();

        sqlx::query("SELECT delete_pending_deposit($1, $2)")
            .bind(tenant_id)
            .bind(pending_id)
            .execute(&self.pool)
            .await
            .map_err(|e| procedure_error("delete_pending_deposit", e))?;

        timer.observe_duration();

        info!("Pending deposit deleted");
        Ok(())
    }

    /// Remove a withdrawal via `delete_withdrawal`.
    #[instrument(skip(self), fields(tenant_id = %tenant_id, withdrawal_id = %withdrawal_id))]
    pub async fn delete_withdrawal(
        &self,
        tenant_id: Uuid,
        withdrawal_id: Uuid,
    ) -> Result<(), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["delete_withdrawal"])
            .start_timer();

        sqlx::query("SELECT delete_withdrawal($1, $2)")
            .bind(tenant_id)
            .bind(withdrawal_id)
            .execute(&self.pool)
            .await
            .map_err(|e| procedure_error("delete_withdrawal", e))?;

        timer.observe_duration();

        info!("Withdrawal deleted");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Credit Ledger Operations
    // -------------------------------------------------------------------------

    /// Credit balance movements for a period via `get_credit_mutations`.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn get_credit_mutations(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<CreditMutation>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["get_credit_mutations"])
            .start_timer();

        let (lower, upper) = window_bounds(window);
        let mutations = sqlx::query_as::<_, CreditMutation>(
            "SELECT * FROM get_credit_mutations($1, $2, $3)",
        )
        .bind(tenant_id)
        .bind(lower)
        .bind(upper)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| procedure_error("get_credit_mutations", e))?;

        timer.observe_duration();
        Ok(mutations)
    }

    /// Aggregated credit totals for a period via `get_credit_report`.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn get_credit_report(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<CreditReport, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["get_credit_report"])
            .start_timer();

        let (lower, upper) = window_bounds(window);
        let report =
            sqlx::query_as::<_, CreditReport>("SELECT * FROM get_credit_report($1, $2, $3)")
                .bind(tenant_id)
                .bind(lower)
                .bind(upper)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| procedure_error("get_credit_report", e))?;

        timer.observe_duration();
        Ok(report)
    }

    /// Sum of manual credit adjustments for a period via
    /// `get_credit_adjustment_total`.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn get_credit_adjustment_total(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Decimal, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["get_credit_adjustment_total"])
            .start_timer();

        let (lower, upper) = window_bounds(window);
        let total: Decimal =
            sqlx::query_scalar("SELECT get_credit_adjustment_total($1, $2, $3)")
                .bind(tenant_id)
                .bind(lower)
                .bind(upper)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| procedure_error("get_credit_adjustment_total", e))?;

        timer.observe_duration();
        Ok(total)
    }

    /// Post a manual credit adjustment via `perform_tenant_credit_adjustment`.
    #[instrument(skip(self, note), fields(tenant_id = %tenant_id))]
    pub async fn perform_tenant_credit_adjustment(
        &self,
        tenant_id: Uuid,
        amount: Decimal,
        note: Option<&str>,
    ) -> Result<(), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["perform_tenant_credit_adjustment"])
            .start_timer();

        sqlx::query("SELECT perform_tenant_credit_adjustment($1, $2, $3)")
            .bind(tenant_id)
            .bind(amount)
            .bind(note)
            .execute(&self.pool)
            .await
            .map_err(|e| procedure_error("perform_tenant_credit_adjustment", e))?;

        timer.observe_duration();

        info!(amount = %amount, "Credit adjustment posted");
        Ok(())
    }

    /// Top up the tenant's credit balance via `perform_tenant_credit_topup`.
    #[instrument(skip(self, note), fields(tenant_id = %tenant_id))]
    pub async fn perform_tenant_credit_topup(
        &self,
        tenant_id: Uuid,
        amount: Decimal,
        note: Option<&str>,
    ) -> Result<(), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["perform_tenant_credit_topup"])
            .start_timer();

        sqlx::query("SELECT perform_tenant_credit_topup($1, $2, $3)")
            .bind(tenant_id)
            .bind(amount)
            .bind(note)
            .execute(&self.pool)
            .await
            .map_err(|e| procedure_error("perform_tenant_credit_topup", e))?;

        timer.observe_duration();

        info!(amount = %amount, "Credit topup posted");
        Ok(())
    }
}

#[async_trait]
impl MutationSource for Database {
    async fn fetch_deposits(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<DepositRecord>, AppError> {
        Database::fetch_deposits(self, tenant_id, window).await
    }

    async fn fetch_withdrawals(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<WithdrawalRecord>, AppError> {
        Database::fetch_withdrawals(self, tenant_id, window).await
    }

    async fn fetch_pending_deposits(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<PendingDepositRecord>, AppError> {
        Database::fetch_pending_deposits(self, tenant_id, window).await
    }

    async fn fetch_adjustments(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<AdjustmentRecord>, AppError> {
        Database::fetch_adjustments(self, tenant_id, window).await
    }

    async fn fetch_expenses(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<ExpenseRecord>, AppError> {
        Database::fetch_expenses(self, tenant_id, window).await
    }

    async fn fetch_transfers(
        &self,
        tenant_id: Uuid,
        window: Option<ClickWindow>,
    ) -> Result<Vec<TransferRecord>, AppError> {
        Database::fetch_transfers(self, tenant_id, window).await
    }

    async fn list_banks(&self, tenant_id: Uuid) -> Result<Vec<Bank>, AppError> {
        Database::list_banks(self, tenant_id).await
    }

    async fn resolve_profiles(&self, ids: &[Uuid]) -> Result<Vec<Profile>, AppError> {
        Database::resolve_profiles(self, ids).await
    }
}
