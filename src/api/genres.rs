use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, GenreDto};
use crate::api::validation::validate_uid;

pub async fn list_genres(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GenreDto>>, ApiError> {
    let genres = state.store().list_genres().await?;

    Ok(Json(genres.into_iter().map(GenreDto::from).collect()))
}

pub async fn get_genre(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<i32>,
) -> Result<Json<GenreDto>, ApiError> {
    validate_uid(uid)?;

    let genre = state
        .store()
        .get_genre(uid)
        .await?
        .ok_or_else(|| ApiError::genre_not_found(uid))?;

    Ok(Json(genre.into()))
}
