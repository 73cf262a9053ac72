//! Typed endpoint methods
//!
//! One method per backend endpoint. Collection reads return bare
//! arrays; mutations whose bodies the UI relies on (pay-due, jar
//! return, customer create) are typed, the rest discard the body and
//! are followed by a refresh at the session layer.

use chrono::NaiveDate;
use shared::models::{
    ConvertWalkin, Customer, CustomerCreate, CustomerCreated, CustomerUpdate, DashboardStats,
    Expense, ExpenseCreate, ExpenseUpdate, JarReturnRequest, JarReturnResponse, JarTrack,
    PayDueRequest, PayDueResponse, Payment, Reminder, ReminderCreate, ReminderLists,
    ReminderReschedule, ReminderStatus, Sale, SaleCreate, TotalDueRequest, TotalDueResponse,
};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    // ========== Customers ==========

    pub async fn customers(&self) -> ClientResult<Vec<Customer>> {
        self.get("/customers").await
    }

    pub async fn create_customer(&self, req: &CustomerCreate) -> ClientResult<Customer> {
        let created: CustomerCreated = self.post("/customers", req).await?;
        Ok(created.customer)
    }

    pub async fn update_customer(&self, id: i64, req: &CustomerUpdate) -> ClientResult<()> {
        self.put_unit(&format!("/customers/{id}"), req).await
    }

    pub async fn delete_customer(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/customers/{id}")).await
    }

    /// Convert a walk-in name into a profiled customer. The backend
    /// re-homes the walk-in's sales and jar ledger onto the profile.
    pub async fn convert_walkin(&self, req: &ConvertWalkin) -> ClientResult<()> {
        self.post_unit("/customers/convert-walkin", req).await
    }

    pub async fn mark_customer_inactive(&self, id: i64) -> ClientResult<()> {
        self.post_empty(&format!("/customers/{id}/mark-inactive")).await
    }

    /// Trigger the backend's activity-status classifier over all
    /// customers.
    pub async fn refresh_activity_statuses(&self) -> ClientResult<()> {
        self.post_empty("/customers/update-activity-status").await
    }

    // ========== Sales ==========

    pub async fn sales(&self) -> ClientResult<Vec<Sale>> {
        self.get("/sales").await
    }

    pub async fn sales_history(&self, customer_id: i64) -> ClientResult<Vec<Sale>> {
        self.get(&format!("/sales/history/{customer_id}")).await
    }

    pub async fn create_sale(&self, req: &SaleCreate) -> ClientResult<()> {
        self.post_unit("/sales", req).await
    }

    pub async fn update_sale(&self, id: i64, req: &SaleCreate) -> ClientResult<()> {
        self.put_unit(&format!("/sales/{id}"), req).await
    }

    pub async fn delete_sale(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/sales/{id}")).await
    }

    /// Outstanding due for a customer identity (id or walk-in name).
    pub async fn total_due(&self, req: &TotalDueRequest) -> ClientResult<TotalDueResponse> {
        self.post("/sales/total-due", req).await
    }

    /// Settle dues oldest-first (FIFO, server-side).
    pub async fn pay_due(&self, req: &PayDueRequest) -> ClientResult<PayDueResponse> {
        self.post("/sales/paydue", req).await
    }

    // ========== Jar Tracking ==========

    pub async fn jar_tracking(&self) -> ClientResult<Vec<JarTrack>> {
        self.get("/jartracking").await
    }

    /// Return jars against the FIFO jar ledger.
    pub async fn return_jars(&self, req: &JarReturnRequest) -> ClientResult<JarReturnResponse> {
        self.post("/jartracking/return", req).await
    }

    // ========== Payments ==========

    pub async fn payments(&self) -> ClientResult<Vec<Payment>> {
        self.get("/payments").await
    }

    // ========== Expenses ==========

    pub async fn expenses(&self) -> ClientResult<Vec<Expense>> {
        self.get("/expenses").await
    }

    pub async fn create_expense(&self, req: &ExpenseCreate) -> ClientResult<()> {
        self.post_unit("/expenses", req).await
    }

    pub async fn update_expense(&self, id: i64, req: &ExpenseUpdate) -> ClientResult<()> {
        self.put_unit(&format!("/expenses/{id}"), req).await
    }

    pub async fn delete_expense(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/expenses/{id}")).await
    }

    // ========== Reminders ==========

    pub async fn reminders(&self) -> ClientResult<ReminderLists> {
        self.get("/reminders").await
    }

    pub async fn upcoming_reminders(&self) -> ClientResult<Vec<Reminder>> {
        self.get("/reminders/upcoming").await
    }

    pub async fn create_reminder(&self, req: &ReminderCreate) -> ClientResult<()> {
        self.post_unit("/reminders", req).await
    }

    pub async fn update_reminder(&self, id: i64, req: &ReminderCreate) -> ClientResult<()> {
        self.put_unit(&format!("/reminders/{id}"), req).await
    }

    pub async fn reschedule_reminder(&self, id: i64, req: &ReminderReschedule) -> ClientResult<()> {
        self.put_unit(&format!("/reminders/{id}"), req).await
    }

    /// Mark a reminder completed/skipped. The endpoint takes the
    /// status as a raw text/plain body.
    pub async fn mark_reminder_status(&self, id: i64, status: ReminderStatus) -> ClientResult<()> {
        self.post_text(&format!("/reminders/{id}/status"), status.as_str())
            .await
    }

    /// Advance a recurring reminder to its next scheduled date.
    pub async fn advance_reminder(&self, id: i64) -> ClientResult<()> {
        self.post_empty(&format!("/reminders/{id}/advance")).await
    }

    // ========== Dashboard ==========

    /// Aggregate counters for an inclusive local-date window.
    pub async fn dashboard_stats(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ClientResult<DashboardStats> {
        self.get_query(
            "/dashboard/stats",
            &[("start_date", start_date), ("end_date", end_date)],
        )
        .await
    }
}
