//! Construction Work Log Endpoints
//!
//! Three independent sub-resources (daily progress reports, inward stock,
//! site expenses) plus the opaque expense-report PDF export.

use serde::Serialize;

use super::{delete_empty, download_blob, get_json, post_json, put_json};
use crate::error::ApiError;
use crate::models::{DprEntry, ExpenseEntry, InwardEntry, ListPage};
use crate::query::PageQuery;

#[derive(Debug, Clone, Serialize)]
pub struct DprDraft {
    pub work_date: String,
    pub description: String,
    pub labour_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InwardDraft {
    pub received_on: String,
    pub material: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseDraft {
    pub expense_date: String,
    pub description: String,
    pub amount: f64,
}

pub async fn list_dpr(query: &PageQuery) -> Result<ListPage<DprEntry>, ApiError> {
    get_json(&format!("worklog/dpr?{}", query.query_string())).await
}

pub async fn create_dpr(draft: &DprDraft) -> Result<DprEntry, ApiError> {
    post_json("worklog/dpr", draft).await
}

pub async fn update_dpr(id: u32, draft: &DprDraft) -> Result<DprEntry, ApiError> {
    put_json(&format!("worklog/dpr/{}", id), draft).await
}

pub async fn delete_dpr(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("worklog/dpr/{}", id)).await
}

pub async fn list_inward(query: &PageQuery) -> Result<ListPage<InwardEntry>, ApiError> {
    get_json(&format!("worklog/inward?{}", query.query_string())).await
}

pub async fn create_inward(draft: &InwardDraft) -> Result<InwardEntry, ApiError> {
    post_json("worklog/inward", draft).await
}

pub async fn update_inward(id: u32, draft: &InwardDraft) -> Result<InwardEntry, ApiError> {
    put_json(&format!("worklog/inward/{}", id), draft).await
}

pub async fn delete_inward(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("worklog/inward/{}", id)).await
}

pub async fn list_expenses(query: &PageQuery) -> Result<ListPage<ExpenseEntry>, ApiError> {
    get_json(&format!("worklog/expenses?{}", query.query_string())).await
}

pub async fn create_expense(draft: &ExpenseDraft) -> Result<ExpenseEntry, ApiError> {
    post_json("worklog/expenses", draft).await
}

pub async fn update_expense(id: u32, draft: &ExpenseDraft) -> Result<ExpenseEntry, ApiError> {
    put_json(&format!("worklog/expenses/{}", id), draft).await
}

pub async fn delete_expense(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("worklog/expenses/{}", id)).await
}

/// Fetch the expense report PDF and hand it to the browser as a download.
pub async fn download_expense_report() -> Result<(), ApiError> {
    download_blob("worklog/expenses/report", "expense-report.pdf").await
}
