//! Note Endpoints

use serde::Serialize;

use super::{delete_empty, get_json, post_json, put_json};
use crate::error::ApiError;
use crate::models::{ListPage, Note};
use crate::query::PageQuery;

/// `note_date` is already normalized to "D MMM YYYY" by validation.
#[derive(Debug, Clone, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub note_date: String,
}

pub async fn list_notes(query: &PageQuery) -> Result<ListPage<Note>, ApiError> {
    get_json(&format!("notes?{}", query.query_string())).await
}

pub async fn create_note(draft: &NoteDraft) -> Result<Note, ApiError> {
    post_json("notes", draft).await
}

pub async fn update_note(id: u32, draft: &NoteDraft) -> Result<Note, ApiError> {
    put_json(&format!("notes/{}", id), draft).await
}

pub async fn delete_note(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("notes/{}", id)).await
}
