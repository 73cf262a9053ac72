//! Session - client plus record store
//!
//! The stateful shell around the pure pipeline. Reads refresh whole
//! collections; writes follow the fire-and-refresh pattern: one API
//! call, then a re-fetch of the affected collections. There is no
//! optimistic local mutation, so a failed write leaves nothing to
//! roll back and a failed refresh leaves the previous (stale but
//! consistent) snapshot in place.

use chrono::NaiveDate;
use shared::models::{
    ConvertWalkin, Customer, CustomerCreate, CustomerUpdate, DashboardStats, ExpenseCreate,
    ExpenseUpdate, JarReturnRequest, JarReturnResponse, PayDueRequest, PayDueResponse,
    ReminderCreate, ReminderReschedule, ReminderStatus, SaleCreate, TotalDueRequest,
    TotalDueResponse,
};

use crate::{ClientConfig, ClientResult, HttpClient, RecordStore};

/// A connected session: HTTP client plus the current record snapshot.
#[derive(Debug, Clone)]
pub struct Session {
    client: HttpClient,
    store: RecordStore,
}

impl Session {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: config.build_http_client(),
            store: RecordStore::default(),
        }
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    // ========== Refreshes ==========

    /// Re-fetch the customer-board collections (customers, sales, jar
    /// ledger) in parallel. The page is "loaded" only once all three
    /// resolve; any failure leaves the whole snapshot untouched.
    pub async fn refresh_all(&mut self) -> ClientResult<()> {
        let (customers, sales, jar_tracks) = tokio::try_join!(
            self.client.customers(),
            self.client.sales(),
            self.client.jar_tracking(),
        )?;
        tracing::debug!(
            customers = customers.len(),
            sales = sales.len(),
            jar_tracks = jar_tracks.len(),
            "refreshed board collections"
        );
        self.store.customers = customers;
        self.store.sales = sales;
        self.store.jar_tracks = jar_tracks;
        Ok(())
    }

    pub async fn refresh_payments(&mut self) -> ClientResult<()> {
        self.store.payments = self.client.payments().await?;
        Ok(())
    }

    pub async fn refresh_expenses(&mut self) -> ClientResult<()> {
        self.store.expenses = self.client.expenses().await?;
        Ok(())
    }

    pub async fn refresh_reminders(&mut self) -> ClientResult<()> {
        self.store.reminders = self.client.reminders().await?;
        Ok(())
    }

    // ========== Customer commands ==========

    pub async fn add_customer(&mut self, req: &CustomerCreate) -> ClientResult<Customer> {
        let customer = self.client.create_customer(req).await?;
        self.refresh_all().await?;
        Ok(customer)
    }

    pub async fn update_customer(&mut self, id: i64, req: &CustomerUpdate) -> ClientResult<()> {
        self.client.update_customer(id, req).await?;
        self.refresh_all().await
    }

    /// Deletion is refused server-side while dues or jar-due remain;
    /// that refusal surfaces as a validation error.
    pub async fn delete_customer(&mut self, id: i64) -> ClientResult<()> {
        self.client.delete_customer(id).await?;
        self.refresh_all().await
    }

    pub async fn convert_walkin(&mut self, req: &ConvertWalkin) -> ClientResult<()> {
        self.client.convert_walkin(req).await?;
        self.refresh_all().await
    }

    pub async fn mark_customer_inactive(&mut self, id: i64) -> ClientResult<()> {
        self.client.mark_customer_inactive(id).await?;
        self.refresh_all().await
    }

    pub async fn refresh_activity_statuses(&mut self) -> ClientResult<()> {
        self.client.refresh_activity_statuses().await?;
        self.refresh_all().await
    }

    // ========== Sale commands ==========

    pub async fn record_sale(&mut self, req: &SaleCreate) -> ClientResult<()> {
        self.client.create_sale(req).await?;
        self.refresh_all().await
    }

    pub async fn update_sale(&mut self, id: i64, req: &SaleCreate) -> ClientResult<()> {
        self.client.update_sale(id, req).await?;
        self.refresh_all().await
    }

    pub async fn delete_sale(&mut self, id: i64) -> ClientResult<()> {
        self.client.delete_sale(id).await?;
        self.refresh_all().await
    }

    /// Read-through probe; does not touch the store.
    pub async fn total_due(&self, req: &TotalDueRequest) -> ClientResult<TotalDueResponse> {
        self.client.total_due(req).await
    }

    pub async fn pay_due(&mut self, req: &PayDueRequest) -> ClientResult<PayDueResponse> {
        let response = self.client.pay_due(req).await?;
        self.refresh_all().await?;
        Ok(response)
    }

    // ========== Jar commands ==========

    pub async fn return_jars(&mut self, req: &JarReturnRequest) -> ClientResult<JarReturnResponse> {
        let response = self.client.return_jars(req).await?;
        self.refresh_all().await?;
        Ok(response)
    }

    // ========== Expense commands ==========

    pub async fn add_expense(&mut self, req: &ExpenseCreate) -> ClientResult<()> {
        self.client.create_expense(req).await?;
        self.refresh_expenses().await
    }

    pub async fn update_expense(&mut self, id: i64, req: &ExpenseUpdate) -> ClientResult<()> {
        self.client.update_expense(id, req).await?;
        self.refresh_expenses().await
    }

    pub async fn delete_expense(&mut self, id: i64) -> ClientResult<()> {
        self.client.delete_expense(id).await?;
        self.refresh_expenses().await
    }

    // ========== Reminder commands ==========

    pub async fn add_reminder(&mut self, req: &ReminderCreate) -> ClientResult<()> {
        self.client.create_reminder(req).await?;
        self.refresh_reminders().await
    }

    pub async fn update_reminder(&mut self, id: i64, req: &ReminderCreate) -> ClientResult<()> {
        self.client.update_reminder(id, req).await?;
        self.refresh_reminders().await
    }

    pub async fn reschedule_reminder(
        &mut self,
        id: i64,
        req: &ReminderReschedule,
    ) -> ClientResult<()> {
        self.client.reschedule_reminder(id, req).await?;
        self.refresh_reminders().await
    }

    pub async fn mark_reminder(&mut self, id: i64, status: ReminderStatus) -> ClientResult<()> {
        self.client.mark_reminder_status(id, status).await?;
        self.refresh_reminders().await
    }

    pub async fn advance_reminder(&mut self, id: i64) -> ClientResult<()> {
        self.client.advance_reminder(id).await?;
        self.refresh_reminders().await
    }

    // ========== Dashboard ==========

    /// Read-through; the dashboard window is server-computed.
    pub async fn dashboard_stats(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ClientResult<DashboardStats> {
        self.client.dashboard_stats(start_date, end_date).await
    }
}
