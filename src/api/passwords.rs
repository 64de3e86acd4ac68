//! Password Endpoints

use serde::Serialize;

use super::{delete_empty, get_json, post_json, put_json};
use crate::error::ApiError;
use crate::models::{ListPage, PasswordEntry};
use crate::query::PageQuery;

#[derive(Debug, Clone, Serialize)]
pub struct PasswordDraft {
    pub site: String,
    pub username: String,
    pub password: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

pub async fn list_passwords(query: &PageQuery) -> Result<ListPage<PasswordEntry>, ApiError> {
    get_json(&format!("passwords?{}", query.query_string())).await
}

pub async fn create_password(draft: &PasswordDraft) -> Result<PasswordEntry, ApiError> {
    post_json("passwords", draft).await
}

pub async fn update_password(id: u32, draft: &PasswordDraft) -> Result<PasswordEntry, ApiError> {
    put_json(&format!("passwords/{}", id), draft).await
}

pub async fn delete_password(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("passwords/{}", id)).await
}
