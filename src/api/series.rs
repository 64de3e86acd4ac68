//! Series Endpoints
//!
//! CRUD on series plus reconciliation of the seasons sub-collection.

use serde::Serialize;

use super::{delete_empty, get_json, post_json, put_json};
use crate::error::ApiError;
use crate::models::{ListPage, Season, Series};
use crate::query::PageQuery;
use crate::reconcile::diff_children;

#[derive(Debug, Clone, Serialize)]
pub struct SeriesDraft {
    pub title: String,
    pub year: u16,
    pub category: String,
    pub status: String,
}

pub async fn list_series(query: &PageQuery) -> Result<ListPage<Series>, ApiError> {
    get_json(&format!("series?{}", query.query_string())).await
}

pub async fn get_series(id: u32) -> Result<Series, ApiError> {
    get_json(&format!("series/{}", id)).await
}

pub async fn create_series(draft: &SeriesDraft) -> Result<Series, ApiError> {
    post_json("series", draft).await
}

pub async fn update_series(id: u32, draft: &SeriesDraft) -> Result<Series, ApiError> {
    put_json(&format!("series/{}", id), draft).await
}

pub async fn delete_series(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("series/{}", id)).await
}

pub async fn save_seasons(
    series_id: u32,
    server: &[Season],
    local: &[Season],
) -> Result<(), ApiError> {
    let diff = diff_children(server, local);
    for season in &diff.create {
        let _: Season = post_json(&format!("series/{}/seasons", series_id), season).await?;
    }
    for season in &diff.update {
        if let Some(season_id) = season.id {
            let _: Season =
                put_json(&format!("series/{}/seasons/{}", series_id, season_id), season).await?;
        }
    }
    for season_id in &diff.delete {
        delete_empty(&format!("series/{}/seasons/{}", series_id, season_id)).await?;
    }
    Ok(())
}
