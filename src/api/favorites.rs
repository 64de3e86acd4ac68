//! Favorite Endpoints

use serde::Serialize;

use super::{delete_empty, get_json, post_json, put_json};
use crate::error::ApiError;
use crate::models::{Favorite, ListPage};
use crate::query::PageQuery;

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteDraft {
    pub name: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

pub async fn list_favorites(query: &PageQuery) -> Result<ListPage<Favorite>, ApiError> {
    get_json(&format!("favorites?{}", query.query_string())).await
}

pub async fn create_favorite(draft: &FavoriteDraft) -> Result<Favorite, ApiError> {
    post_json("favorites", draft).await
}

pub async fn update_favorite(id: u32, draft: &FavoriteDraft) -> Result<Favorite, ApiError> {
    put_json(&format!("favorites/{}", id), draft).await
}

pub async fn delete_favorite(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("favorites/{}", id)).await
}
