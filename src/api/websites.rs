//! Website Bookmark Endpoints

use serde::Serialize;

use super::{delete_empty, get_json, post_json, put_json};
use crate::error::ApiError;
use crate::models::{ListPage, Website};
use crate::query::PageQuery;

#[derive(Debug, Clone, Serialize)]
pub struct WebsiteDraft {
    pub title: String,
    pub url: String,
    pub category: String,
}

pub async fn list_websites(query: &PageQuery) -> Result<ListPage<Website>, ApiError> {
    get_json(&format!("websites?{}", query.query_string())).await
}

pub async fn create_website(draft: &WebsiteDraft) -> Result<Website, ApiError> {
    post_json("websites", draft).await
}

pub async fn update_website(id: u32, draft: &WebsiteDraft) -> Result<Website, ApiError> {
    put_json(&format!("websites/{}", id), draft).await
}

pub async fn delete_website(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("websites/{}", id)).await
}
