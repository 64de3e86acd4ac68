//! Movie Endpoints
//!
//! CRUD on movies plus reconciliation of the parts sub-collection.

use serde::Serialize;

use super::{delete_empty, get_json, post_json, put_json};
use crate::error::ApiError;
use crate::models::{ListPage, Movie, MoviePart};
use crate::query::PageQuery;
use crate::reconcile::diff_children;

#[derive(Debug, Clone, Serialize)]
pub struct MovieDraft {
    pub title: String,
    pub year: u16,
    pub category: String,
    pub watched: bool,
}

pub async fn list_movies(query: &PageQuery) -> Result<ListPage<Movie>, ApiError> {
    get_json(&format!("movies?{}", query.query_string())).await
}

pub async fn get_movie(id: u32) -> Result<Movie, ApiError> {
    get_json(&format!("movies/{}", id)).await
}

pub async fn create_movie(draft: &MovieDraft) -> Result<Movie, ApiError> {
    post_json("movies", draft).await
}

pub async fn update_movie(id: u32, draft: &MovieDraft) -> Result<Movie, ApiError> {
    put_json(&format!("movies/{}", id), draft).await
}

pub async fn delete_movie(id: u32) -> Result<(), ApiError> {
    delete_empty(&format!("movies/{}", id)).await
}

/// Diff the locally edited parts against the last-known server set and
/// issue the batches in create -> update -> delete order.
pub async fn save_movie_parts(
    movie_id: u32,
    server: &[MoviePart],
    local: &[MoviePart],
) -> Result<(), ApiError> {
    let diff = diff_children(server, local);
    for part in &diff.create {
        let _: MoviePart = post_json(&format!("movies/{}/parts", movie_id), part).await?;
    }
    for part in &diff.update {
        if let Some(part_id) = part.id {
            let _: MoviePart =
                put_json(&format!("movies/{}/parts/{}", movie_id, part_id), part).await?;
        }
    }
    for part_id in &diff.delete {
        delete_empty(&format!("movies/{}/parts/{}", movie_id, part_id)).await?;
    }
    Ok(())
}
