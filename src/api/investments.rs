//! Investment Endpoints

use serde::Serialize;

use super::{delete_empty, get_json, post_json, put_json};
use crate::error::ApiError;
use crate::models::{Investment, ListPage};
use crate::query::PageQuery;

#[derive(Debug, Clone, Serialize)]
pub struct InvestmentDraft {
    pub name: String,
    pub kind: String,
    pub amount: f64,
    pub invested_on: String,
}

pub async fn list_investments(query: &PageQuery) -> Result<ListPage<Investment>, ApiError> {
    get_json(&format!("investments?{}", query.query_string())).await
}

pub async fn create_investment(draft: &InvestmentDraft) -> Result<Investment, ApiError> {
    post_json("investments", draft).await
}

pub async fn update_investment(id: u32, draft: &InvestmentDraft) -> Result<Investment, ApiError> {
    put_json(&format!("investments/{}", id), draft).await
}

pub async fn delete_investment(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("investments/{}", id)).await
}
